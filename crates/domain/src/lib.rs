//! Holocron Domain - Core catalog types
//!
//! This crate defines the domain model for the Holocron character catalog.
//! All types here are pure Rust with no I/O dependencies.

pub mod details;
pub mod error;
pub mod favorites;
pub mod pagination;
pub mod palette;
pub mod query;
pub mod record;
pub mod result_page;
pub mod settings;
pub mod state;

pub use details::{CharacterDetails, Homeworld};
pub use error::{DomainError, DomainResult};
pub use favorites::FavoriteSet;
pub use pagination::{FIRST_PAGE, page_count, to_api_page, to_ui_selection};
pub use palette::{Hue, Palette, SpeciesKind};
pub use query::{DEFAULT_PAGE_SIZE, ListRequest, QueryState, resource_url};
pub use record::{Record, RecordId};
pub use result_page::{ListResponse, ResultPage};
pub use settings::{ClientSettings, DEFAULT_BASE_URL};
pub use state::{CatalogAction, CatalogState, LOAD_ERROR_MESSAGE, RequestToken, Transition};
