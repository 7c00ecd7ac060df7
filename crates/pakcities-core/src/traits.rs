// crates/pakcities-core/src/traits.rs
use crate::config::Configuration;
use crate::model::City;
use std::collections::HashMap;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// The case rule comes from the [`Configuration`] passed in: case-insensitive
/// lowercases both sides, case-sensitive compares bytes.
///
/// # Examples
/// ```rust
/// use pakcities_core::traits::NameMatch;
/// use pakcities_core::Configuration;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// let mut config = Configuration::default();
/// assert!(Place("Rawalpindi").is_named("RAWALPINDI", &config));
/// assert!(Place("Rawalpindi").name_contains("pindi", &config));
///
/// config.set_case_sensitive(true);
/// assert!(!Place("Rawalpindi").is_named("rawalpindi", &config));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Whole-name equality under the configured case rule.
    #[inline]
    fn is_named(&self, q: &str, config: &Configuration) -> bool {
        config.names_match(self.name_str(), q)
    }

    /// Substring match under the configured case rule.
    #[inline]
    fn name_contains(&self, q: &str, config: &Configuration) -> bool {
        config.name_contains(self.name_str(), q)
    }
}

impl NameMatch for City {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Cities grouped under their exact province name.
pub type ProvinceGroups<'a> = HashMap<&'a str, Vec<&'a City>>;

/// Aggregates over any slice of cities, owned or borrowed.
///
/// Implemented for `[City]` and `[&City]`, so the statistics work on the
/// whole dataset and on the result of a query alike:
///
/// ```rust
/// use pakcities_core::traits::PopulationStats;
/// use pakcities_core::City;
///
/// let cities = vec![
///     City::new("Karachi", "Sindh", 24.8608, 67.0104, 11_624_219),
///     City::new("Hyderabad", "Sindh", 25.3792, 68.3683, 1_732_693),
///     City::new("Lahore", "Punjab", 31.558, 74.3507, 6_310_888),
/// ];
/// let sindh: Vec<&City> = cities.iter().filter(|c| c.province() == "Sindh").collect();
///
/// assert_eq!(sindh.total_population(), 13_356_912);
/// assert_eq!(cities.largest_city().map(City::name), Some("Karachi"));
/// ```
pub trait PopulationStats {
    fn total_population(&self) -> u64;
    /// Mean population; `0.0` for an empty slice.
    fn average_population(&self) -> f64;
    /// Median population, `0.0` for an empty slice.
    ///
    /// Always an `f64`. For an odd count it is the middle population
    /// converted exactly, so it has no fractional part. For an even count it
    /// is the mean of the two middle values and may end in `.5`.
    fn median_population(&self) -> f64;
    fn grouped_by_province(&self) -> ProvinceGroups<'_>;
    fn population_by_province(&self) -> HashMap<&str, u64>;
    fn cities_count_by_province(&self) -> HashMap<&str, usize>;
    /// Most populous city. Ties go to the one listed first.
    fn largest_city(&self) -> Option<&City>;
    /// Least populous city. Ties go to the one listed first.
    fn smallest_city(&self) -> Option<&City>;
}

