// crates/pakcities-core/src/engine.rs
use crate::config::Configuration;
use crate::error::Result;
use crate::loader::DatasetSource;
use crate::model::{convert, City};
use once_cell::sync::OnceCell;
use std::fmt;

/// The queryable city dataset.
///
/// Owns a [`DatasetSource`], the [`Configuration`] every query consults and
/// a lazily built cache of [`City`] values. The first call that needs the
/// cities triggers the load; later calls reuse it until [`PakCities::reload`].
///
/// The cache is a `OnceCell`, so threads sharing a `&PakCities` that race on
/// the first access still load once and all see the same cities.
/// Configuration changes and reloads need `&mut self` and are therefore
/// serialized against queries by the borrow checker.
///
/// ```
/// use pakcities_core::{CityRaw, PakCities};
///
/// let db = PakCities::new(vec![
///     CityRaw::new("Karachi", "Sindh", 24.8608, 67.0104, 11_624_219_i64),
///     CityRaw::new("Lahore", "Punjab", 31.558, 74.3507, 6_310_888_i64),
/// ]);
///
/// assert!(!db.is_loaded());
/// assert_eq!(db.count().unwrap(), 2);
/// assert!(db.is_loaded());
/// ```
pub struct PakCities {
    source: Box<dyn DatasetSource>,
    config: Configuration,
    cache: OnceCell<Vec<City>>,
}

impl PakCities {
    /// An engine with default configuration (kilometers, case-insensitive).
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self::with_config(source, Configuration::default())
    }

    pub fn with_config(source: impl DatasetSource + 'static, config: Configuration) -> Self {
        Self {
            source: Box::new(source),
            config,
            cache: OnceCell::new(),
        }
    }

    /// Engine over the dataset bundled with this crate, with a binary cache
    /// kept next to it.
    #[cfg(feature = "json")]
    pub fn bundled() -> Self {
        Self::new(crate::loader::CachedJsonSource::new(
            crate::loader::default_dataset_path(),
        ))
    }

    /// Engine over a JSON dataset file (`.json` or `.json.gz`).
    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(crate::loader::JsonFileSource::new(path))
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Applies several configuration changes at once.
    ///
    /// ```
    /// use pakcities_core::{CityRaw, DistanceUnit, PakCities};
    ///
    /// let mut db = PakCities::new(Vec::<CityRaw>::new());
    /// db.configure(|c| {
    ///     c.set_distance_unit_str("miles")?;
    ///     c.set_case_sensitive(true);
    ///     Ok(())
    /// })
    /// .unwrap();
    /// assert_eq!(db.config().distance_unit(), DistanceUnit::Miles);
    /// ```
    pub fn configure<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Configuration) -> Result<()>,
    {
        f(&mut self.config)
    }

    pub fn reset_configuration(&mut self) {
        self.config.reset();
    }

    /// All cities in load order, loading them on first use.
    pub fn cities(&self) -> Result<&[City]> {
        let cities = self.cache.get_or_try_init(|| self.load())?;
        Ok(cities.as_slice())
    }

    /// Whether the dataset has been loaded since construction or the last
    /// reload.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Drops the cached cities and loads them again from the source.
    ///
    /// If the source fails, the error is returned and the cache stays empty;
    /// the next query retries the load.
    pub fn reload(&mut self) -> Result<&[City]> {
        tracing::debug!("Discarding city cache");
        self.cache = OnceCell::new();
        self.cities()
    }

    fn load(&self) -> Result<Vec<City>> {
        let raw = self.source.records()?;
        let cities = convert::from_raw(raw);
        tracing::debug!(count = cities.len(), "Built city cache");
        Ok(cities)
    }
}

impl fmt::Debug for PakCities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PakCities")
            .field("config", &self.config)
            .field("loaded", &self.cache.get().map(Vec::len))
            .finish_non_exhaustive()
    }
}
