//! Error handling example for pakcities-rs
//!
//! Every query returns `Result`; this example walks through the failure modes.

use pakcities_rs::prelude::*;

fn main() {
    println!("=== PakCities Error Handling Example ===\n");

    let mut db = PakCities::bundled();

    // Example 1: Missing city
    println!("--- Example 1: Unknown city ---");
    match db.find_or_fail("Atlantis") {
        Ok(city) => println!("Unexpectedly found {city}"),
        Err(PakCitiesError::CityNotFound(name)) => println!("✓ No such city: {name}"),
        Err(e) => println!("✗ Other error: {e}"),
    }
    println!();

    // Example 2: Coordinates out of range
    println!("--- Example 2: Invalid coordinates ---");
    match db.nearest_to(91.0, 67.0, 3) {
        Ok(_) => println!("Unexpectedly succeeded"),
        Err(e) => println!("✓ Rejected: {e}"),
    }
    println!();

    // Example 3: Non-positive limit
    println!("--- Example 3: Invalid limit ---");
    if let Err(e) = db.top_by_population(0) {
        println!("✓ Rejected: {e}");
    }
    println!();

    // Example 4: Bad configuration leaves the old value in place
    println!("--- Example 4: Invalid distance unit ---");
    if let Err(e) = db.configure(|c| c.set_distance_unit_str("parsecs")) {
        println!("✓ Rejected: {e}");
    }
    println!("Unit still: {}", db.config().distance_unit());
    println!();

    // Example 5: Missing dataset file
    println!("--- Example 5: Missing dataset ---");
    let missing = PakCities::from_json_path("does/not/exist.json");
    match missing.count() {
        Ok(n) => println!("Loaded {n} cities?"),
        Err(e) => println!("✓ Load failed: {e}"),
    }

    println!("\n=== Example completed successfully ===");
}
