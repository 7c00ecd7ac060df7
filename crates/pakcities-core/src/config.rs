// crates/pakcities-core/src/config.rs

use crate::error::{PakCitiesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which distances are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Short label used in messages and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = PakCitiesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            _ => Err(PakCitiesError::InvalidArgument(format!("Invalid unit: {s}"))),
        }
    }
}

/// Settings consulted by every query.
///
/// A [`crate::PakCities`] engine owns one of these; changes made through
/// [`crate::PakCities::config_mut`] apply to the next query call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configuration {
    distance_unit: DistanceUnit,
    case_sensitive: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    pub fn set_distance_unit(&mut self, unit: DistanceUnit) {
        self.distance_unit = unit;
    }

    /// Sets the unit from its name (`"km"`, `"miles"`, ...).
    ///
    /// Unknown names leave the current unit untouched and fail with
    /// [`PakCitiesError::InvalidConfiguration`].
    pub fn set_distance_unit_str(&mut self, unit: &str) -> Result<()> {
        let parsed = unit.parse::<DistanceUnit>().map_err(|_| {
            PakCitiesError::InvalidConfiguration(format!(
                "Invalid distance unit: {unit}. Must be km or miles"
            ))
        })?;
        self.distance_unit = parsed;
        Ok(())
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Restores the defaults: kilometers, case-insensitive matching.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Name comparison under the current case rule.
    pub(crate) fn names_match(&self, stored: &str, query: &str) -> bool {
        if self.case_sensitive {
            stored == query
        } else {
            stored.to_lowercase() == query.to_lowercase()
        }
    }

    /// Substring containment under the current case rule.
    pub(crate) fn name_contains(&self, stored: &str, query: &str) -> bool {
        if self.case_sensitive {
            stored.contains(query)
        } else {
            stored.to_lowercase().contains(&query.to_lowercase())
        }
    }
}
