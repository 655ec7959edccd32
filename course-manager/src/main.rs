//! Drive one course editing session against the in-memory record store.
//!
//! The command opens the edit page for `--route`, waits for the mount loads,
//! applies `--set` edits in order and optionally submits. A JSON report of
//! the rendered page, submit outcome and final location goes to stdout; logs
//! go to stderr.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use course_manager::ManagerSettings;
use course_manager::domain::{Course, PageView, SubmitOutcome};
use course_manager::inbound::ManageCoursePage;
use course_manager::outbound::{InMemoryHistory, InMemoryRecordStore, TracingNotifier};
use ortho_config::OrthoConfig;
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `course-manager` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "course-manager",
    about = "Open the course edit page, apply edits and optionally save",
    version
)]
struct CliArgs {
    /// Page path: `/course` for a new course or `/course/<id>`.
    #[arg(long, value_name = "path", default_value = "/course")]
    route: String,
    /// Form edit as `field=value`. Repeatable; applied in order.
    #[arg(long = "set", value_name = "field=value", value_parser = parse_assignment)]
    set: Vec<(String, String)>,
    /// Submit the form after applying edits.
    #[arg(long)]
    submit: bool,
}

/// Machine-readable summary of the session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport {
    route: String,
    view: PageView,
    outcome: Option<OutcomeReport>,
    location: Option<String>,
    notifications: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum OutcomeReport {
    Invalid,
    Saved { course: Course },
    Failed { reason: String },
}

impl From<SubmitOutcome> for OutcomeReport {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Invalid => Self::Invalid,
            SubmitOutcome::Saved(course) => Self::Saved { course },
            SubmitOutcome::Failed(error) => Self::Failed {
                reason: error.to_string(),
            },
        }
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::parse();
    let settings = ManagerSettings::load_from_iter([OsString::from("course-manager")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let catalogue = settings
        .catalogue()
        .map_err(|error| io::Error::other(format!("load catalogue: {error}")))?;

    let store = Arc::new(InMemoryRecordStore::new(catalogue, settings.store_options()));
    let notifier = Arc::new(TracingNotifier::new());
    let history = Arc::new(InMemoryHistory::starting_at(args.route.as_str()));

    let mut page = ManageCoursePage::open(
        &args.route,
        Arc::clone(&store),
        Arc::clone(&notifier),
        Arc::clone(&history),
    )
    .map_err(io::Error::other)?;

    page.mount().settled().await;
    page.sync_with_store();

    for (name, value) in args.set {
        page.handle_change(&name, value).map_err(io::Error::other)?;
    }

    let outcome = if args.submit {
        Some(page.handle_save().await)
    } else {
        None
    };

    let report = SessionReport {
        route: args.route,
        view: page.render(),
        outcome: outcome.map(OutcomeReport::from),
        location: history.current(),
        notifications: notifier.delivered(),
    };
    write_report(&report)
}

fn write_report(report: &SessionReport) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, report).map_err(io::Error::other)?;
    writeln!(stdout)
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    Ok((name.to_owned(), value.to_owned()))
}
