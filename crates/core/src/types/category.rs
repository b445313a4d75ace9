//! Product category enumeration.
//!
//! The catalog carries exactly three categories; the display strings are
//! also the values persisted in the remote collection, so renaming a
//! variant label is a data migration, not a cosmetic change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CCTV")]
    Cctv,
    #[serde(rename = "Control de Acceso")]
    ControlDeAcceso,
    #[serde(rename = "Seguridad Electrónica")]
    SeguridadElectronica,
}

/// Error returned when a string is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories, in the order the shop presents them.
    pub const ALL: [Self; 3] = [Self::Cctv, Self::ControlDeAcceso, Self::SeguridadElectronica];

    /// Display / persistence label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cctv => "CCTV",
            Self::ControlDeAcceso => "Control de Acceso",
            Self::SeguridadElectronica => "Seguridad Electrónica",
        }
    }

    /// Parse a persisted or user-supplied category label.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] if the string matches no known label.
    pub fn parse(value: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
