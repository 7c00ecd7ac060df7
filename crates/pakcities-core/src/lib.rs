// crates/pakcities-core/src/lib.rs

//! # pakcities-core
//!
//! An in-memory, read-only dataset of Pakistani cities with lookups,
//! geographic queries and population statistics.
//!
//! ```
//! use pakcities_core::prelude::*;
//!
//! let db = PakCities::new(vec![
//!     CityRaw::new("Karachi", "Sindh", 24.8608, 67.0104, 11_624_219_i64),
//!     CityRaw::new("Hyderabad", "Sindh", 25.3792, 68.3683, 1_732_693_i64),
//!     CityRaw::new("Lahore", "Punjab", 31.558, 74.3507, 6_310_888_i64),
//! ]);
//!
//! assert_eq!(db.find("karachi")?.map(City::province), Some("Sindh"));
//! assert_eq!(db.provinces()?, ["Punjab", "Sindh"]);
//! assert_eq!(db.total_population()?, 19_667_800);
//! # Ok::<(), PakCitiesError>(())
//! ```

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod stats;
pub mod traits;
pub mod validators;
// Raw input shared by every dataset source
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::config::{Configuration, DistanceUnit};
pub use crate::distance::{convert_distance, haversine_distance};
pub use crate::engine::PakCities;
pub use crate::error::{PakCitiesError, Result};
pub use crate::loader::DatasetSource;
#[cfg(feature = "json")]
pub use crate::loader::{CachedJsonSource, JsonFileSource};
pub use crate::model::City;
pub use crate::raw::{CitiesRaw, CityRaw, RawNumber};
pub use crate::search::{BoundingBox, CityFilter, SortOrder};
pub use crate::traits::{NameMatch, PopulationStats};
