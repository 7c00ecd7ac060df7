// crates/pakcities-core/src/model/convert.rs
use crate::model::City;
use crate::raw::CitiesRaw;

/// **Standard Converter:** Raw rows -> cities, load order preserved.
///
/// Only coerces types; nothing is validated or deduplicated here.
pub fn from_raw(raw: CitiesRaw) -> Vec<City> {
    raw.into_iter().map(City::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::CityRaw;

    #[test]
    fn keeps_order_and_duplicates() {
        let cities = from_raw(vec![
            CityRaw::new("Lahore", "Punjab", 31.558, 74.3507, 6_310_888_i64),
            CityRaw::new("Karachi", "Sindh", 24.8608, 67.0104, 11_624_219_i64),
            CityRaw::new("Lahore", "Punjab", 31.558, 74.3507, 1_i64),
        ]);
        let names: Vec<&str> = cities.iter().map(City::name).collect();
        assert_eq!(names, ["Lahore", "Karachi", "Lahore"]);
    }
}
