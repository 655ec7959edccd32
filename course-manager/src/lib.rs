//! Course manager: edit courses held in a shared record store.
//!
//! The crate follows a hexagonal layout. [`domain`] holds records, validation
//! and the edit-page controller together with the ports it drives;
//! [`outbound`] provides adapters for those ports and [`inbound`] binds page
//! routes and form events to the controller.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::ManagerSettings;
