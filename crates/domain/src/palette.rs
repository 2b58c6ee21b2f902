//! Species-keyed card styling.
//!
//! Styling is a pure, total mapping from a finite set of species to a
//! palette descriptor. Unknown species fall back to the default palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Species with a dedicated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesKind {
    /// Human.
    Human,
    /// Droid.
    Droid,
    /// Wookiee.
    Wookiee,
    /// Rodian.
    Rodian,
    /// Hutt.
    Hutt,
    /// Yoda's species.
    YodasSpecies,
    /// Trandoshan.
    Trandoshan,
    /// Mon Calamari.
    MonCalamari,
    /// Twi'lek.
    Twilek,
    /// Any other or unknown species.
    #[default]
    Other,
}

impl SpeciesKind {
    /// Resolves a species by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Human" => Self::Human,
            "Droid" => Self::Droid,
            // the dataset spells it "Wookie"
            "Wookiee" | "Wookie" => Self::Wookiee,
            "Rodian" => Self::Rodian,
            "Hutt" => Self::Hutt,
            "Yoda's species" => Self::YodasSpecies,
            "Trandoshan" => Self::Trandoshan,
            "Mon Calamari" => Self::MonCalamari,
            "Twi'lek" => Self::Twilek,
            _ => Self::Other,
        }
    }

    /// Resolves a species by the numeric id in its resource URL
    /// (`.../species/3/`).
    #[must_use]
    pub fn from_species_url(url: &str) -> Self {
        let id = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<u32>().ok());
        match id {
            Some(1) => Self::Human,
            Some(2) => Self::Droid,
            Some(3) => Self::Wookiee,
            Some(4) => Self::Rodian,
            Some(5) => Self::Hutt,
            Some(6) => Self::YodasSpecies,
            Some(7) => Self::Trandoshan,
            Some(8) => Self::MonCalamari,
            Some(15) => Self::Twilek,
            _ => Self::Other,
        }
    }

    /// Resolves the species of a record from its first species link.
    #[must_use]
    pub fn for_record(record: &Record) -> Self {
        record
            .species_urls()
            .first()
            .map_or(Self::Other, |url| Self::from_species_url(url))
    }

    /// Returns the palette for this species.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Human => Palette::new(Hue::Blue, 500),
            Self::Droid => Palette::new(Hue::Gray, 500),
            Self::Wookiee => Palette::new(Hue::Amber, 600),
            Self::Rodian => Palette::new(Hue::Green, 500),
            Self::Hutt => Palette::new(Hue::Emerald, 500),
            Self::YodasSpecies => Palette::new(Hue::Green, 600),
            Self::Trandoshan => Palette::new(Hue::Yellow, 500),
            Self::MonCalamari => Palette::new(Hue::Cyan, 500),
            Self::Twilek => Palette::new(Hue::Purple, 500),
            Self::Other => Palette::DEFAULT,
        }
    }
}

/// Colour family of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    /// Blue.
    Blue,
    /// Gray.
    Gray,
    /// Amber.
    Amber,
    /// Green.
    Green,
    /// Emerald.
    Emerald,
    /// Yellow.
    Yellow,
    /// Cyan.
    Cyan,
    /// Purple.
    Purple,
    /// Indigo.
    Indigo,
}

impl Hue {
    /// Returns the hue name used in style tokens.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Gray => "gray",
            Self::Amber => "amber",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Indigo => "indigo",
        }
    }

    /// Returns the closest ANSI foreground colour code.
    #[must_use]
    pub const fn ansi_code(self) -> u8 {
        match self {
            Self::Blue => 34,
            Self::Gray => 90,
            Self::Amber => 33,
            Self::Green => 32,
            Self::Emerald => 92,
            Self::Yellow => 93,
            Self::Cyan => 36,
            Self::Purple => 35,
            Self::Indigo => 94,
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style descriptor for a character card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    /// Colour family.
    pub hue: Hue,
    /// Shade of the accent gradient.
    pub accent_shade: u16,
}

impl Palette {
    /// Palette for unknown species.
    pub const DEFAULT: Self = Self::new(Hue::Indigo, 500);

    /// Creates a palette.
    #[must_use]
    pub const fn new(hue: Hue, accent_shade: u16) -> Self {
        Self { hue, accent_shade }
    }

    /// Accent gradient token, e.g. `from-blue-500`.
    #[must_use]
    pub fn accent(&self) -> String {
        format!("from-{}-{}", self.hue, self.accent_shade)
    }

    /// Background token, e.g. `bg-blue-50`.
    #[must_use]
    pub fn background(&self) -> String {
        format!("bg-{}-50", self.hue)
    }

    /// Border token, e.g. `border-blue-200`.
    #[must_use]
    pub fn border(&self) -> String {
        format!("border-{}-200", self.hue)
    }

    /// Text token, e.g. `text-blue-700`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("text-{}-700", self.hue)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
