//! Details view of a single character.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};

/// Homeworld fields shown in the details view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homeworld {
    /// Planet name.
    pub name: Option<String>,
    /// Terrain description.
    pub terrain: Option<String>,
    /// Climate description.
    pub climate: Option<String>,
    /// Population, as reported.
    pub population: Option<String>,
}

impl Homeworld {
    /// Extracts the displayed fields from a planet record.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let field = |key: &str| record.str_field(key).map(str::to_string);
        Self {
            name: field("name"),
            terrain: field("terrain"),
            climate: field("climate"),
            population: field("population"),
        }
    }
}

/// The character selected for the details view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetails {
    /// The selected record.
    pub record: Record,
    /// Homeworld, once loaded. Stays `None` if the lookup failed.
    pub homeworld: Option<Homeworld>,
    /// True while the homeworld lookup is in flight.
    pub loading: bool,
}

impl CharacterDetails {
    /// Opens the details of `record`.
    ///
    /// Loading only when the record links a homeworld and has an identifier
    /// the lookup result can be matched against.
    #[must_use]
    pub fn open(record: Record) -> Self {
        let loading = record.homeworld_url().is_some() && record.id().is_some();
        Self {
            record,
            homeworld: None,
            loading,
        }
    }

    /// Identifier of the selected record.
    #[must_use]
    pub fn record_id(&self) -> Option<RecordId> {
        self.record.id()
    }
}
