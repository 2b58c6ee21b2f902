//! Catalog records returned by the remote API.
//!
//! A record is kept as an unstructured JSON object. Accessors cover the
//! fields the catalog displays; everything else is passed through untouched.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display format for record creation dates.
pub const CREATED_DATE_FORMAT: &str = "%d-%m-%Y";

/// Stable identifier of a record: its resource URL, or its name when the
/// record carries no URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from any string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One JSON object from a list or detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Converts a JSON value into a record if it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Returns a string field, treating empty strings as absent.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Returns the record's stable identifier.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        self.url().or_else(|| self.name()).map(RecordId::new)
    }

    /// Resource URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Gender.
    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.str_field("gender")
    }

    /// Birth year in the dataset's own notation (e.g. `19BBY`).
    #[must_use]
    pub fn birth_year(&self) -> Option<&str> {
        self.str_field("birth_year")
    }

    /// Height in centimetres, as reported.
    #[must_use]
    pub fn height(&self) -> Option<&str> {
        self.str_field("height")
    }

    /// Mass in kilograms, as reported.
    #[must_use]
    pub fn mass(&self) -> Option<&str> {
        self.str_field("mass")
    }

    /// URL of the record's homeworld resource.
    #[must_use]
    pub fn homeworld_url(&self) -> Option<&str> {
        self.str_field("homeworld")
    }

    /// URLs of the record's species resources.
    #[must_use]
    pub fn species_urls(&self) -> Vec<&str> {
        self.str_list("species")
    }

    /// Number of films the record appears in.
    #[must_use]
    pub fn film_count(&self) -> usize {
        self.0
            .get("films")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Creation timestamp, if present and well-formed.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        self.str_field("created")
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    /// Creation date formatted as `DD-MM-YYYY`.
    #[must_use]
    pub fn created_display(&self) -> Option<String> {
        self.created()
            .map(|dt| dt.format(CREATED_DATE_FORMAT).to_string())
    }

    fn str_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
