// crates/pakcities-core/src/stats.rs
use crate::engine::PakCities;
use crate::error::Result;
use crate::model::City;
use crate::traits::{PopulationStats, ProvinceGroups};
use std::borrow::Borrow;
use std::collections::HashMap;

#[inline]
fn as_city<C: Borrow<City>>(c: &C) -> &City {
    c.borrow()
}

impl<C: Borrow<City>> PopulationStats for [C] {
    fn total_population(&self) -> u64 {
        self.iter().map(|c| as_city(c).population()).sum()
    }

    fn average_population(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.total_population() as f64 / self.len() as f64
    }

    fn median_population(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<u64> = self.iter().map(|c| as_city(c).population()).collect();
        sorted.sort_unstable();

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid] as f64
        } else {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        }
    }

    fn grouped_by_province(&self) -> ProvinceGroups<'_> {
        let mut groups: ProvinceGroups<'_> = HashMap::new();
        for city in self.iter().map(as_city) {
            groups.entry(city.province()).or_default().push(city);
        }
        groups
    }

    fn population_by_province(&self) -> HashMap<&str, u64> {
        self.grouped_by_province()
            .into_iter()
            .map(|(province, cities)| (province, cities.total_population()))
            .collect()
    }

    fn cities_count_by_province(&self) -> HashMap<&str, usize> {
        self.grouped_by_province()
            .into_iter()
            .map(|(province, cities)| (province, cities.len()))
            .collect()
    }

    fn largest_city(&self) -> Option<&City> {
        // `max_by_key` keeps the last maximum; ties must go to the first.
        self.iter()
            .map(as_city)
            .fold(None, |best: Option<&City>, city| match best {
                Some(b) if b.population() >= city.population() => Some(b),
                _ => Some(city),
            })
    }

    fn smallest_city(&self) -> Option<&City> {
        self.iter()
            .map(as_city)
            .fold(None, |best: Option<&City>, city| match best {
                Some(b) if b.population() <= city.population() => Some(b),
                _ => Some(city),
            })
    }
}

/// Statistics over the whole dataset.
///
/// Each call loads the dataset first if needed; that load is the only thing
/// that can fail.
impl PakCities {
    /// Sum of all populations; `0` for an empty dataset.
    pub fn total_population(&self) -> Result<u64> {
        Ok(self.cities()?.total_population())
    }

    pub fn average_population(&self) -> Result<f64> {
        Ok(self.cities()?.average_population())
    }

    /// See [`PopulationStats::median_population`]: whole for odd counts,
    /// possibly fractional for even ones.
    pub fn median_population(&self) -> Result<f64> {
        Ok(self.cities()?.median_population())
    }

    pub fn population_by_province(&self) -> Result<HashMap<&str, u64>> {
        Ok(self.cities()?.population_by_province())
    }

    pub fn cities_count_by_province(&self) -> Result<HashMap<&str, usize>> {
        Ok(self.cities()?.cities_count_by_province())
    }

    pub fn largest_city(&self) -> Result<Option<&City>> {
        Ok(self.cities()?.largest_city())
    }

    pub fn smallest_city(&self) -> Result<Option<&City>> {
        Ok(self.cities()?.smallest_city())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::CityRaw;

    fn city(name: &str, province: &str, population: u64) -> City {
        City::new(name, province, 30.0, 70.0, population)
    }

    fn engine(rows: &[(&str, &str, i64)]) -> PakCities {
        let raw: Vec<CityRaw> = rows
            .iter()
            .map(|(n, p, pop)| CityRaw::new(*n, *p, 30.0, 70.0, *pop))
            .collect();
        PakCities::new(raw)
    }

    #[test]
    fn empty_dataset_yields_zeroes() {
        let db = engine(&[]);
        assert_eq!(db.total_population().unwrap(), 0);
        assert_eq!(db.average_population().unwrap(), 0.0);
        assert_eq!(db.median_population().unwrap(), 0.0);
        assert!(db.largest_city().unwrap().is_none());
        assert!(db.smallest_city().unwrap().is_none());
        assert!(db.population_by_province().unwrap().is_empty());
    }

    #[test]
    fn median_of_odd_and_even_counts() {
        let odd = [city("a", "x", 3), city("b", "x", 1), city("c", "x", 2)];
        assert_eq!(odd.median_population(), 2.0);

        let even = [
            city("a", "x", 4),
            city("b", "x", 1),
            city("c", "x", 3),
            city("d", "x", 2),
        ];
        assert_eq!(even.median_population(), 2.5);
    }

    #[test]
    fn odd_median_is_the_exact_middle_population() {
        let db = engine(&[
            ("Karachi", "Sindh", 11_624_219),
            ("Lahore", "Punjab", 6_310_888),
            ("Multan", "Punjab", 1_871_843),
        ]);
        let median = db.median_population().unwrap();
        assert_eq!(median.fract(), 0.0);
        assert_eq!(median as u64, 6_310_888);
    }

    #[test]
    fn average_is_fractional() {
        let cities = [city("a", "x", 1), city("b", "x", 2)];
        assert_eq!(cities.average_population(), 1.5);
    }

    #[test]
    fn extremes_prefer_first_on_ties() {
        let cities = [
            city("Small A", "x", 10),
            city("Big A", "x", 100),
            city("Small B", "y", 10),
            city("Big B", "y", 100),
        ];
        assert_eq!(cities.largest_city().unwrap().name(), "Big A");
        assert_eq!(cities.smallest_city().unwrap().name(), "Small A");
    }

    #[test]
    fn province_aggregates_add_up() {
        let db = engine(&[
            ("Karachi", "Sindh", 11_624_219),
            ("Lahore", "Punjab", 6_310_888),
            ("Hyderabad", "Sindh", 1_732_693),
            ("Multan", "Punjab", 1_871_843),
            ("Quetta", "Balochistan", 1_565_546),
        ]);

        let by_pop = db.population_by_province().unwrap();
        let by_count = db.cities_count_by_province().unwrap();

        assert_eq!(by_pop["Sindh"], 13_356_912);
        assert_eq!(by_count["Punjab"], 2);
        assert_eq!(by_pop.values().sum::<u64>(), db.total_population().unwrap());
        assert_eq!(by_count.values().sum::<usize>(), db.count().unwrap());
    }

    #[test]
    fn grouping_uses_exact_province_names() {
        let cities = [city("a", "Sindh", 1), city("b", "sindh", 2)];
        let groups = cities.grouped_by_province();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Sindh"][0].name(), "a");
    }

    #[test]
    fn works_on_borrowed_subsets() {
        let cities = vec![city("a", "x", 5), city("b", "y", 7)];
        let subset: Vec<&City> = cities.iter().filter(|c| c.province() == "y").collect();
        assert_eq!(subset.total_population(), 7);
        assert_eq!(subset.largest_city().unwrap().name(), "b");
    }
}
