// crates/pakcities-core/src/search.rs

//! Lookups, filters, rankings and proximity queries over the dataset.
//!
//! Every query validates its arguments before the dataset is touched. Name
//! and province matching follow [`crate::Configuration::case_sensitive`].

use crate::distance::haversine_distance;
use crate::engine::PakCities;
use crate::error::{PakCitiesError, Result};
use crate::model::City;
use crate::traits::{NameMatch, PopulationStats, ProvinceGroups};
use crate::validators::{validate_coordinates, validate_positive_limit};
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result size used by [`PakCities::top_by_population`] callers that have no
/// preference.
pub const DEFAULT_TOP_LIMIT: i64 = 10;
/// Default neighbour count for [`PakCities::nearest_to`].
pub const DEFAULT_NEAREST_LIMIT: i64 = 5;
/// Default sample size for [`PakCities::random`].
pub const DEFAULT_RANDOM_LIMIT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Conditions for [`PakCities::filter`]. Unset fields are not applied;
/// population bounds are inclusive.
///
/// ```
/// use pakcities_core::CityFilter;
///
/// let filter = CityFilter::new()
///     .province("Punjab")
///     .min_population(1_000_000);
/// assert_eq!(filter.max_population, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityFilter {
    pub province: Option<String>,
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
}

impl CityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn min_population(mut self, min: u64) -> Self {
        self.min_population = Some(min);
        self
    }

    pub fn max_population(mut self, max: u64) -> Self {
        self.max_population = Some(max);
        self
    }
}

/// An inclusive latitude/longitude box, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Both corners must be valid coordinates.
    pub fn validate(&self) -> Result<()> {
        validate_coordinates(self.min_lat, self.min_lng)?;
        validate_coordinates(self.max_lat, self.max_lng)
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

/// Stable ascending sort, then the whole sequence reversed for `Descending`.
///
/// Reversing (rather than sorting descending) flips the order of ties: among
/// equal keys the later city comes first in a descending result.
fn sort_then_reverse<'a, F>(cities: &'a [City], order: SortOrder, mut compare: F) -> Vec<&'a City>
where
    F: FnMut(&City, &City) -> Ordering,
{
    let mut sorted: Vec<&City> = cities.iter().collect();
    sorted.sort_by(|a, b| compare(*a, *b));
    if order == SortOrder::Descending {
        sorted.reverse();
    }
    sorted
}

impl PakCities {
    /// Every city, in dataset order.
    pub fn all(&self) -> Result<&[City]> {
        self.cities()
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.cities()?.len())
    }

    /// First city whose name matches; `None` is not an error.
    pub fn find(&self, name: &str) -> Result<Option<&City>> {
        let config = self.config();
        Ok(self.cities()?.iter().find(|c| c.is_named(name, config)))
    }

    /// Like [`PakCities::find`], but absence is a
    /// [`PakCitiesError::CityNotFound`].
    pub fn find_or_fail(&self, name: &str) -> Result<&City> {
        self.find(name)?
            .ok_or_else(|| PakCitiesError::CityNotFound(name.to_string()))
    }

    /// Cities whose name contains `query`, in dataset order.
    pub fn search(&self, query: &str) -> Result<Vec<&City>> {
        let config = self.config();
        Ok(self
            .cities()?
            .iter()
            .filter(|c| c.name_contains(query, config))
            .collect())
    }

    /// Cities satisfying every condition set on `filter`.
    ///
    /// ```
    /// use pakcities_core::{CityFilter, CityRaw, PakCities};
    ///
    /// let db = PakCities::new(vec![
    ///     CityRaw::new("Lahore", "Punjab", 31.558, 74.3507, 6_310_888_i64),
    ///     CityRaw::new("Multan", "Punjab", 30.1978, 71.4711, 1_871_843_i64),
    ///     CityRaw::new("Karachi", "Sindh", 24.8608, 67.0104, 11_624_219_i64),
    /// ]);
    ///
    /// let big_punjab = db
    ///     .filter(&CityFilter::new().province("punjab").min_population(2_000_000))
    ///     .unwrap();
    /// assert_eq!(big_punjab.len(), 1);
    /// assert_eq!(big_punjab[0].name(), "Lahore");
    /// ```
    pub fn filter(&self, filter: &CityFilter) -> Result<Vec<&City>> {
        let config = self.config();
        Ok(self
            .cities()?
            .iter()
            .filter(|c| {
                filter
                    .province
                    .as_deref()
                    .map_or(true, |p| config.names_match(c.province(), p))
            })
            .filter(|c| filter.min_population.map_or(true, |min| c.population() >= min))
            .filter(|c| filter.max_population.map_or(true, |max| c.population() <= max))
            .collect())
    }

    pub fn by_province(&self, province: &str) -> Result<Vec<&City>> {
        self.filter(&CityFilter::new().province(province))
    }

    /// The `limit` most populous cities, largest first.
    ///
    /// Equal populations come out in reverse dataset order (see
    /// [`SortOrder::Descending`] in [`PakCities::by_population`]).
    pub fn top_by_population(&self, limit: i64) -> Result<Vec<&City>> {
        let limit = validate_positive_limit(limit, "limit")?;
        let mut ranked = self.by_population(SortOrder::Descending)?;
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// All cities ordered by name (plain lexicographic byte order).
    pub fn by_name(&self, order: SortOrder) -> Result<Vec<&City>> {
        Ok(sort_then_reverse(self.cities()?, order, |a, b| {
            a.name().cmp(b.name())
        }))
    }

    /// All cities ordered by population.
    ///
    /// Descending is the ascending order reversed, so cities with equal
    /// populations appear latest-first.
    pub fn by_population(&self, order: SortOrder) -> Result<Vec<&City>> {
        Ok(sort_then_reverse(self.cities()?, order, |a, b| {
            a.population().cmp(&b.population())
        }))
    }

    /// Up to `limit` distinct cities picked uniformly at random.
    pub fn random(&self, limit: i64) -> Result<Vec<&City>> {
        let limit = validate_positive_limit(limit, "limit")?;
        let mut rng = rand::thread_rng();
        Ok(self.cities()?.choose_multiple(&mut rng, limit).collect())
    }

    /// Distinct province names, sorted. Not affected by the case rule.
    pub fn provinces(&self) -> Result<Vec<&str>> {
        let unique: BTreeSet<&str> = self.cities()?.iter().map(City::province).collect();
        Ok(unique.into_iter().collect())
    }

    /// Cities keyed by their exact province name.
    pub fn grouped_by_province(&self) -> Result<ProvinceGroups<'_>> {
        Ok(self.cities()?.grouped_by_province())
    }

    /// The `limit` cities closest to `(lat, lon)`, nearest first.
    ///
    /// Equal distances keep dataset order.
    pub fn nearest_to(&self, lat: f64, lon: f64, limit: i64) -> Result<Vec<&City>> {
        Ok(self
            .nearest_with_distances(lat, lon, limit)?
            .into_iter()
            .map(|(city, _)| city)
            .collect())
    }

    /// [`PakCities::nearest_to`] with each city's distance, in the configured
    /// unit.
    pub fn nearest_with_distances(
        &self,
        lat: f64,
        lon: f64,
        limit: i64,
    ) -> Result<Vec<(&City, f64)>> {
        validate_coordinates(lat, lon)?;
        let limit = validate_positive_limit(limit, "limit")?;
        let unit = self.config().distance_unit();

        let mut ranked = self
            .cities()?
            .iter()
            .map(|city| {
                let d = haversine_distance(lat, lon, city.latitude(), city.longitude(), unit)?;
                Ok((city, d))
            })
            .collect::<Result<Vec<_>>>()?;

        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Cities inside `bounds`, in dataset order.
    pub fn within_bounds(&self, bounds: BoundingBox) -> Result<Vec<&City>> {
        bounds.validate()?;
        Ok(self
            .cities()?
            .iter()
            .filter(|c| bounds.contains(c.latitude(), c.longitude()))
            .collect())
    }

    /// Distance between two cities looked up by name, in the configured unit.
    pub fn distance_between(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.find_or_fail(a)?;
        let b = self.find_or_fail(b)?;
        a.distance_to(b, self.config().distance_unit())
    }

    /// Whether two named cities share a province.
    ///
    /// Names are resolved with the case rule; the province strings themselves
    /// are compared exactly.
    pub fn same_province(&self, a: &str, b: &str) -> Result<bool> {
        let a = self.find_or_fail(a)?;
        let b = self.find_or_fail(b)?;
        Ok(a.province() == b.province())
    }
}
