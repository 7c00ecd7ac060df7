// crates/pakcities-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// A numeric field as it appears in a dataset file.
///
/// Upstream exports are not consistent: some rows carry JSON numbers, others
/// quote them. Both shapes are accepted here and coerced later by
/// [`crate::City::from_raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Float coercion. Text that does not parse becomes `0.0`.
    pub fn to_f64(&self) -> f64 {
        match self {
            RawNumber::Int(i) => *i as f64,
            RawNumber::Float(f) => *f,
            RawNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    /// Count coercion: fractions truncate, negatives and junk become `0`.
    pub fn to_count(&self) -> u64 {
        match self {
            RawNumber::Int(i) => (*i).max(0) as u64,
            RawNumber::Float(f) => truncate_count(*f),
            RawNumber::Text(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(i) => i.max(0) as u64,
                    Err(_) => s.parse::<f64>().map(truncate_count).unwrap_or(0),
                }
            }
        }
    }
}

fn truncate_count(f: f64) -> u64 {
    if f.is_finite() && f > 0.0 {
        f.trunc() as u64
    } else {
        0
    }
}

impl From<f64> for RawNumber {
    fn from(f: f64) -> Self {
        RawNumber::Float(f)
    }
}

impl From<i64> for RawNumber {
    fn from(i: i64) -> Self {
        RawNumber::Int(i)
    }
}

impl From<u64> for RawNumber {
    fn from(u: u64) -> Self {
        RawNumber::Int(i64::try_from(u).unwrap_or(i64::MAX))
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber::Text(s.to_owned())
    }
}

/// One city row as supplied by a [`crate::loader::DatasetSource`].
///
/// Mirrors the JSON shape:
/// `{"city": "Karachi", "province": "Sindh", "latitude": 24.86, "longitude": 67.01, "pop2025": 11624219}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRaw {
    pub city: String,
    pub province: String,
    pub latitude: RawNumber,
    pub longitude: RawNumber,
    #[serde(alias = "pop2025")]
    pub population: RawNumber,
}

impl CityRaw {
    pub fn new(
        city: impl Into<String>,
        province: impl Into<String>,
        latitude: impl Into<RawNumber>,
        longitude: impl Into<RawNumber>,
        population: impl Into<RawNumber>,
    ) -> Self {
        Self {
            city: city.into(),
            province: province.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            population: population.into(),
        }
    }
}

pub type CitiesRaw = Vec<CityRaw>;
