//! Grammatical categories for organizing pictograms.
//!
//! Categories serve two purposes: visual grouping on the board (each category
//! has a distinctive color) and sentence-structure prediction (the suggestion
//! engine routes between categories after every tile selection).

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of grammatical categories a pictogram can belong to.
///
/// The set is fixed and not user-extensible. `ALL` defines the iteration
/// order used whenever categories are listed in a selector; beyond that,
/// ordering between categories carries no meaning.
///
/// Unknown category strings arriving from external data fall back to
/// [`Category::Thing`] rather than failing, so a corrupt record never takes
/// down the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Subjects performing actions: "Yo", "Mama", "Amigo/a"
    Person,
    /// Verbs: "Quiero", "Comer", "Jugar"
    Action,
    /// Objects and nouns: "Helado", "Agua", "Pelota"
    Thing,
    /// Adjectives and states: "Hambre", "Feliz", "Cansado/a"
    Quality,
    /// Locations: "Casa", "Escuela", "Parque"
    Place,
    /// Temporal markers: "Ahora", "Despues", "Manana"
    Time,
}

impl Category {
    /// All categories in selector display order.
    pub const ALL: [Self; 6] = [
        Self::Person,
        Self::Action,
        Self::Thing,
        Self::Quality,
        Self::Place,
        Self::Time,
    ];

    /// Stable identifier used in stored data and CLI arguments.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Action => "action",
            Self::Thing => "thing",
            Self::Quality => "quality",
            Self::Place => "place",
            Self::Time => "time",
        }
    }

    /// Human-readable label shown in the UI.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Person => "Personas",
            Self::Action => "Acciones",
            Self::Thing => "Cosas",
            Self::Quality => "Cualidades",
            Self::Place => "Lugares",
            Self::Time => "Tiempo",
        }
    }

    /// Distinctive color for tiles and selector entries.
    #[must_use]
    pub const fn color(self) -> RgbColor {
        match self {
            Self::Person => RgbColor::new(0x4C, 0xAF, 0x50),  // green
            Self::Action => RgbColor::new(0x21, 0x96, 0xF3),  // blue
            Self::Thing => RgbColor::new(0xFF, 0xC1, 0x07),   // yellow
            Self::Quality => RgbColor::new(0xFF, 0x57, 0x22), // orange
            Self::Place => RgbColor::new(0x9C, 0x27, 0xB0),   // purple
            Self::Time => RgbColor::new(0x00, 0xBC, 0xD4),    // cyan
        }
    }

    /// Parses a category identifier, falling back to [`Category::Thing`]
    /// for anything unrecognized.
    ///
    /// Accepts both the lowercase ids used in stored data and the legacy
    /// uppercase names, so catalogs exported by older versions keep loading.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "person" | "persons" | "personas" => Self::Person,
            "action" | "actions" | "acciones" => Self::Action,
            "quality" | "qualities" | "cualidades" => Self::Quality,
            "place" | "places" | "lugares" => Self::Place,
            "time" | "tiempo" => Self::Time,
            // "thing" and everything unknown land here
            _ => Self::Thing,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.id().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
