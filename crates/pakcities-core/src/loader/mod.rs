// crates/pakcities-core/src/loader/mod.rs

//! # Data Loader
//!
//! The query engine never reads files itself. It asks a [`DatasetSource`] for
//! an ordered list of raw rows and builds its city cache from them. This module
//! defines that seam and the sources shipped with the crate:
//!
//! - `Vec<CityRaw>`: rows already in memory.
//! - [`JsonFileSource`]: a JSON (or `.json.gz`) file, parsed on every load.
//! - [`CachedJsonSource`]: the JSON file plus a bincode cache written next to
//!   it, reused while it is newer than the JSON.

use crate::error::Result;
use crate::raw::CitiesRaw;
use std::path::PathBuf;

pub(crate) mod common_io;

#[cfg(feature = "json")]
pub mod builder;
#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use builder::CachedJsonSource;
#[cfg(feature = "json")]
pub use json::JsonFileSource;

/// Supplies the raw city rows, in dataset order.
///
/// Called once when the engine first needs its cities and again on every
/// [`crate::PakCities::reload`].
pub trait DatasetSource: Send + Sync {
    fn records(&self) -> Result<CitiesRaw>;
}

impl DatasetSource for CitiesRaw {
    fn records(&self) -> Result<CitiesRaw> {
        Ok(self.clone())
    }
}

impl<T: DatasetSource + ?Sized> DatasetSource for &T {
    fn records(&self) -> Result<CitiesRaw> {
        (**self).records()
    }
}

impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn records(&self) -> Result<CitiesRaw> {
        (**self).records()
    }
}

impl<T: DatasetSource + ?Sized> DatasetSource for std::sync::Arc<T> {
    fn records(&self) -> Result<CitiesRaw> {
        (**self).records()
    }
}

/// Directory holding the dataset bundled with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cities.json"
}

/// Full path of the bundled dataset.
pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}
