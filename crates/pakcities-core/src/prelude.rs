//! pakcities prelude: bring the engine, its types and traits into scope.

pub use crate::config::{Configuration, DistanceUnit};
pub use crate::engine::PakCities;
pub use crate::error::{PakCitiesError, Result};
pub use crate::loader::DatasetSource;
#[cfg(feature = "json")]
pub use crate::loader::{CachedJsonSource, JsonFileSource};
pub use crate::model::City;
pub use crate::raw::{CitiesRaw, CityRaw};
pub use crate::search::{
    BoundingBox, CityFilter, SortOrder, DEFAULT_NEAREST_LIMIT, DEFAULT_RANDOM_LIMIT,
    DEFAULT_TOP_LIMIT,
};
pub use crate::traits::{NameMatch, PopulationStats};
