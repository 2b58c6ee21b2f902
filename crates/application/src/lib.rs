//! Holocron Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the remote catalog)
//! - The catalog store, which keeps the result page in step with the query
//! - Application-level error handling

pub mod debounce;
pub mod error;
pub mod ports;
pub mod sequencer;
pub mod store;
pub mod use_cases;

pub use debounce::Debouncer;
pub use error::{FetchError, FetchErrorKind, SyncError};
pub use ports::CatalogApi;
pub use sequencer::RequestSequencer;
pub use store::{CatalogStore, SyncResult};
pub use use_cases::{LoadHomeworld, LoadSpeciesOptions};
