//! Use case implementations
//!
//! Use cases orchestrate domain logic and port interactions.

mod load_homeworld;
mod load_species_options;

pub use load_homeworld::LoadHomeworld;
pub use load_species_options::LoadSpeciesOptions;
