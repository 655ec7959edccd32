//! Inbound adapters that drive the domain.
//!
//! - **page**: binds a route, the record store and UI events to the course
//!   edit-page controller.

pub mod page;

pub use page::ManageCoursePage;
