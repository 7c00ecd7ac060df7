// crates/pakcities-core/src/validators.rs

//! Guards for numeric inputs.
//!
//! Every query that takes coordinates or a result limit runs these before
//! touching the dataset, so a bad argument fails fast with a message naming
//! the offending value.

use crate::error::{PakCitiesError, Result};
use std::ops::RangeInclusive;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Checks a latitude/longitude pair, latitude first.
///
/// Both bounds are inclusive. `NaN` is never inside a range and is rejected.
///
/// ```
/// use pakcities_core::validators::validate_coordinates;
///
/// assert!(validate_coordinates(90.0, 180.0).is_ok());
/// assert!(validate_coordinates(91.0, 0.0).is_err());
/// ```
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(PakCitiesError::InvalidCoordinates(format!(
            "Latitude must be between -90 and 90, got {latitude}"
        )));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(PakCitiesError::InvalidCoordinates(format!(
            "Longitude must be between -180 and 180, got {longitude}"
        )));
    }
    Ok(())
}

/// Accepts only integers strictly greater than zero and hands the value back
/// as a `usize` ready for slicing.
///
/// `label` names the argument in the error message (e.g. `"limit"`).
pub fn validate_positive_limit(value: i64, label: &str) -> Result<usize> {
    if value > 0 {
        usize::try_from(value).map_err(|_| {
            PakCitiesError::InvalidArgument(format!("{label} is too large, got {value}"))
        })
    } else {
        Err(PakCitiesError::InvalidArgument(format!(
            "{label} must be a positive integer, got {value}"
        )))
    }
}
