//! Domain ports for the hexagonal boundary.
//!
//! The course page depends only on these traits; adapters under
//! `crate::outbound` implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod navigator;
mod notifier;
mod record_store;

#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::Navigator;
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{NoOpNotifier, Notifier};
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{FixtureRecordStore, RecordStore, RecordStoreError};
