// crates/pakcities-core/src/error.rs

use thiserror::Error;

/// Errors produced by the city dataset, its loaders and its query surface.
///
/// The first four variants are input contract violations raised before any
/// computation happens. The remaining ones come from loading a dataset.
#[derive(Debug, Error)]
pub enum PakCitiesError {
    /// Latitude or longitude outside the valid range.
    #[error("{0}")]
    InvalidCoordinates(String),

    /// An unrecognized value was assigned to the configuration.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// A non-positive limit or an unknown unit name.
    #[error("{0}")]
    InvalidArgument(String),

    /// A lookup that requires a match found none.
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid dataset: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PakCitiesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_message_names_the_city() {
        let err = PakCitiesError::CityNotFound("Atlantis".into());
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: PakCitiesError = io.into();
        assert!(matches!(err, PakCitiesError::Io(_)));
    }
}
