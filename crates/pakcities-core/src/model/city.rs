// crates/pakcities-core/src/model/city.rs
use crate::config::DistanceUnit;
use crate::distance::haversine_distance;
use crate::error::Result;
use crate::raw::CityRaw;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A city in the dataset.
///
/// Identity is `(name, province)`, compared case-sensitively. Coordinates and
/// population take no part in equality or hashing, so two rows describing the
/// same place with different figures collapse to one key in a `HashSet`.
///
/// Coordinates are stored as given. They are range-checked only when a
/// distance or bounding-box query uses them.
#[derive(Clone, Debug, Serialize)]
pub struct City {
    name: String,
    province: String,
    latitude: f64,
    longitude: f64,
    population: u64,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        province: impl Into<String>,
        latitude: f64,
        longitude: f64,
        population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            province: province.into(),
            latitude,
            longitude,
            population,
        }
    }

    /// Builds a city from a raw row, coercing numeric text to numbers.
    pub fn from_raw(raw: CityRaw) -> Self {
        Self {
            latitude: raw.latitude.to_f64(),
            longitude: raw.longitude.to_f64(),
            population: raw.population.to_count(),
            name: raw.city,
            province: raw.province,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `(latitude, longitude)` in degrees.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// Great-circle distance to `other`.
    ///
    /// Fails with [`crate::PakCitiesError::InvalidCoordinates`] when either
    /// city carries out-of-range coordinates.
    pub fn distance_to(&self, other: &City, unit: DistanceUnit) -> Result<f64> {
        haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            unit,
        )
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.province == other.province
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.province.hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.province)
    }
}

impl From<CityRaw> for City {
    fn from(raw: CityRaw) -> Self {
        City::from_raw(raw)
    }
}
