//! End-to-end behaviour of the public API over an in-memory fixture.

use pakcities_core::prelude::*;
use pakcities_core::validators::validate_coordinates;
use pakcities_core::{haversine_distance, CityRaw};
use rstest::{fixture, rstest};

#[fixture]
fn db() -> PakCities {
    PakCities::new(vec![
        CityRaw::new("Karachi", "Sindh", 24.8608, 67.0104, 11_624_219_i64),
        CityRaw::new("Lahore", "Punjab", 31.558, 74.3507, 6_310_888_i64),
        CityRaw::new("Faisalabad", "Punjab", 31.418, 73.079, 2_506_595_i64),
        CityRaw::new("Hyderabad", "Sindh", 25.3792, 68.3683, 1_386_330_i64),
        CityRaw::new("Quetta", "Balochistan", 30.1798, 66.975, 733_675_i64),
        CityRaw::new("Peshawar", "Khyber Pakhtunkhwa", 34.008, 71.5785, 1_218_773_i64),
        CityRaw::new("Gilgit", "Gilgit-Baltistan", 35.9208, 74.3144, 56_701_i64),
    ])
}

#[rstest]
#[case(0.0, 0.0)]
#[case(90.0, 180.0)]
#[case(-90.0, -180.0)]
#[case(24.8608, 67.0104)]
fn distance_to_self_is_zero(#[case] lat: f64, #[case] lon: f64) {
    for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
        let d = haversine_distance(lat, lon, lat, lon, unit).unwrap();
        assert!(d.abs() < 0.1, "{d}");
    }
}

#[rstest]
fn distance_is_symmetric_for_every_pair(db: PakCities) {
    let names: Vec<String> = db.all().unwrap().iter().map(|c| c.name().to_string()).collect();
    for a in &names {
        for b in &names {
            let ab = db.distance_between(a, b).unwrap();
            let ba = db.distance_between(b, a).unwrap();
            assert!((ab - ba).abs() < 1e-9, "{a} <-> {b}");
        }
    }
}

#[rstest]
fn miles_are_scaled_kilometers(mut db: PakCities) {
    let km = db.distance_between("Karachi", "Lahore").unwrap();
    db.configure(|c| c.set_distance_unit_str("miles")).unwrap();
    let miles = db.distance_between("Karachi", "Lahore").unwrap();

    assert!(km > miles);
    assert!((miles - km * 0.621371).abs() < 1e-6);
}

#[rstest]
fn province_aggregates_sum_to_totals(db: PakCities) {
    let by_pop = db.population_by_province().unwrap();
    let by_count = db.cities_count_by_province().unwrap();

    assert_eq!(by_pop.values().sum::<u64>(), db.total_population().unwrap());
    assert_eq!(by_count.values().sum::<usize>(), db.count().unwrap());

    for (province, cities) in db.grouped_by_province().unwrap() {
        assert_eq!(by_pop[province], cities.total_population());
    }
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
#[case(100)]
fn top_by_population_is_bounded_and_descending(db: PakCities, #[case] n: i64) {
    let top = db.top_by_population(n).unwrap();
    assert_eq!(top.len(), (n as usize).min(db.count().unwrap()));
    assert!(top.windows(2).all(|w| w[0].population() >= w[1].population()));
}

#[rstest]
fn largest_city_heads_the_ranking(db: PakCities) {
    let largest = db.largest_city().unwrap();
    assert_eq!(largest.map(City::name), Some("Karachi"));
    assert_eq!(largest, db.top_by_population(1).unwrap().first().copied());
}

#[rstest]
fn nearest_to_own_coordinates_is_the_city(db: PakCities) {
    for city in db.all().unwrap() {
        let (lat, lon) = city.coordinates();
        let nearest = db.nearest_to(lat, lon, 1).unwrap();
        assert_eq!(nearest[0], city);
    }
}

#[rstest]
fn case_rule_applies_to_find(mut db: PakCities) {
    assert_eq!(db.find("karachi").unwrap(), db.find("KARACHI").unwrap());
    assert!(db.find("karachi").unwrap().is_some());

    db.config_mut().set_case_sensitive(true);
    assert!(db.find("karachi").unwrap().is_none());

    db.reset_configuration();
    assert!(db.find("karachi").unwrap().is_some());
}

#[rstest]
#[case(91.0, 0.0, false)]
#[case(0.0, 181.0, false)]
#[case(90.0, 180.0, true)]
#[case(-90.0, -180.0, true)]
fn coordinate_bounds_are_inclusive(#[case] lat: f64, #[case] lon: f64, #[case] ok: bool) {
    let result = validate_coordinates(lat, lon);
    if ok {
        assert!(result.is_ok());
    } else {
        assert!(matches!(result, Err(PakCitiesError::InvalidCoordinates(_))));
    }
}

#[test]
fn median_of_small_sets() {
    let three = PakCities::new(vec![
        CityRaw::new("a", "x", 0.0, 0.0, 1_i64),
        CityRaw::new("b", "x", 0.0, 0.0, 2_i64),
        CityRaw::new("c", "x", 0.0, 0.0, 3_i64),
    ]);
    assert_eq!(three.median_population().unwrap(), 2.0);

    let four = PakCities::new(vec![
        CityRaw::new("a", "x", 0.0, 0.0, 1_i64),
        CityRaw::new("b", "x", 0.0, 0.0, 2_i64),
        CityRaw::new("c", "x", 0.0, 0.0, 3_i64),
        CityRaw::new("d", "x", 0.0, 0.0, 4_i64),
    ]);
    assert_eq!(four.median_population().unwrap(), 2.5);
}

#[rstest]
fn non_positive_limits_are_rejected(db: PakCities) {
    assert!(matches!(
        db.top_by_population(0),
        Err(PakCitiesError::InvalidArgument(_))
    ));
    assert!(matches!(
        db.nearest_to(0.0, 0.0, -1),
        Err(PakCitiesError::InvalidArgument(_))
    ));
    assert!(matches!(db.random(0), Err(PakCitiesError::InvalidArgument(_))));
}

#[rstest]
fn karachi_to_lahore_is_about_a_thousand_km(db: PakCities) {
    let km = db.distance_between("Karachi", "Lahore").unwrap();
    assert!((850.0..=1150.0).contains(&km), "{km}");
}

#[rstest]
fn error_messages_name_the_offending_value(db: PakCities) {
    let err = db.find_or_fail("Atlantis").unwrap_err();
    assert_eq!(err.to_string(), "City not found: Atlantis");

    let err = db.nearest_to(91.0, 0.0, 1).unwrap_err();
    assert_eq!(err.to_string(), "Latitude must be between -90 and 90, got 91");

    let err = db.top_by_population(0).unwrap_err();
    assert_eq!(err.to_string(), "limit must be a positive integer, got 0");
}

#[rstest]
fn search_then_filter_by_province(db: PakCities) {
    let abad = db.search("abad").unwrap();
    assert!(!abad.is_empty());
    assert!(abad.iter().any(|c| c.province() == "Punjab"));

    let filtered = db
        .filter(&CityFilter::new().province("Punjab").min_population(3_000_000))
        .unwrap();
    assert_eq!(filtered.iter().map(|c| c.name()).collect::<Vec<_>>(), ["Lahore"]);
}

#[rstest]
fn nearest_inside_a_box_are_within_it(db: PakCities) {
    let karachi = db.find_or_fail("Karachi").unwrap();
    let (lat, lon) = karachi.coordinates();
    let bounds = BoundingBox::new(lat - 2.0, lat + 2.0, lon - 2.0, lon + 2.0);

    let inside = db.within_bounds(bounds).unwrap();
    let nearest = db.nearest_to(lat, lon, inside.len() as i64).unwrap();
    assert_eq!(nearest.len(), inside.len());
    assert!(nearest.iter().all(|c| inside.contains(c)));
}
