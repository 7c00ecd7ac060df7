//! Basic usage example for pakcities-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset
//! - Look up, search and filter cities
//! - Run distance and proximity queries
//! - Read population statistics

use pakcities_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== PakCities Basic Usage Example ===\n");

    println!("Loading city dataset...");
    let mut db = PakCities::bundled();
    println!("✓ {} cities loaded\n", db.count()?);

    // Example 1: Find a city by name
    println!("--- Example 1: Find a city ---");
    if let Some(city) = db.find("karachi")? {
        println!("Found: {city}");
        println!("Coordinates: {:?}", city.coordinates());
        println!("Population: {}", city.population());
    }
    println!();

    // Example 2: Substring search
    println!("--- Example 2: Cities containing 'abad' ---");
    for city in db.search("abad")? {
        println!("- {city}");
    }
    println!();

    // Example 3: Filter by province and population
    println!("--- Example 3: Punjab cities above one million ---");
    let filter = CityFilter::new().province("Punjab").min_population(1_000_000);
    for city in db.filter(&filter)? {
        println!("- {} ({})", city.name(), city.population());
    }
    println!();

    // Example 4: Rankings
    println!("--- Example 4: Top 5 by population ---");
    for (i, city) in db.top_by_population(5)?.iter().enumerate() {
        println!("{}. {} ({})", i + 1, city.name(), city.population());
    }
    println!();

    // Example 5: Distances, then the same in miles
    println!("--- Example 5: Karachi to Lahore ---");
    println!("{:.1} km", db.distance_between("Karachi", "Lahore")?);
    db.config_mut().set_distance_unit(DistanceUnit::Miles);
    println!("{:.1} miles", db.distance_between("Karachi", "Lahore")?);
    db.reset_configuration();
    println!();

    // Example 6: Nearest cities to Islamabad
    println!("--- Example 6: Nearest to (33.6989, 73.0369) ---");
    for (city, km) in db.nearest_with_distances(33.6989, 73.0369, 5)? {
        println!("- {city}: {km:.1} km");
    }
    println!();

    // Example 7: Statistics
    println!("--- Example 7: Statistics ---");
    println!("Total population: {}", db.total_population()?);
    println!("Median population: {:.0}", db.median_population()?);
    let mut provinces: Vec<_> = db.cities_count_by_province()?.into_iter().collect();
    provinces.sort();
    for (province, count) in provinces {
        println!("- {province}: {count} cities");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
