//! Outbound adapters implementing the domain ports.
//!
//! - **memory_store**: in-memory record store standing in for the course API
//! - **catalogue**: seed data for the store (bundled fixture or a file)
//! - **notifications**: toast notifier backed by `tracing`
//! - **history**: in-memory navigation history
//!
//! Adapters translate between domain types and their backing mechanism and
//! contain no page behaviour.

pub mod catalogue;
pub mod history;
pub mod memory_store;
pub mod notifications;

pub use catalogue::{Catalogue, CatalogueError};
pub use history::InMemoryHistory;
pub use memory_store::{InMemoryRecordStore, StoreOptions};
pub use notifications::TracingNotifier;
