//! pakcities: command-line interface for pakcities-core
//!
//! Queries the bundled dataset of Pakistani cities (or any dataset file in the
//! same shape) from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Population statistics
//!   $ pakcities stats
//!
//! - Look up or search cities (case-insensitive unless --case-sensitive)
//!   $ pakcities find lahore
//!   $ pakcities search abad
//!
//! - Rankings and samples
//!   $ pakcities top --limit 5
//!   $ pakcities random -n 3
//!
//! - Geography
//!   $ pakcities nearest 33.69 73.03
//!   $ pakcities bounds 24 26 67 69
//!   $ pakcities distance Karachi Lahore --unit miles
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `data/cities.json` from `pakcities-core` and
//! caches a binary copy next to it for later runs. Use `--input <path>` to
//! read another `.json` or `.json.gz` file instead.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use pakcities_core::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let mut config = Configuration::default();
    config.set_distance_unit(args.unit);
    config.set_case_sensitive(args.case_sensitive);

    let db = match &args.input {
        Some(path) => PakCities::with_config(JsonFileSource::new(path), config),
        None => PakCities::with_config(
            CachedJsonSource::new(pakcities_core::loader::default_dataset_path()),
            config,
        ),
    };
    tracing::debug!(?config, input = ?args.input, "Engine ready");

    run(&db, args.command, args.json)
}

/// Default: warn. `--verbose` raises the crate's own logs to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,pakcities_core=debug,pakcities=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(db: &PakCities, command: Commands, as_json: bool) -> anyhow::Result<()> {
    let unit = db.config().distance_unit();

    match command {
        Commands::Stats => {
            let largest = db.largest_city()?;
            let smallest = db.smallest_city()?;
            let mut by_province: Vec<_> = db.population_by_province()?.into_iter().collect();
            by_province.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            let counts = db.cities_count_by_province()?;

            if as_json {
                let provinces: Vec<_> = by_province
                    .iter()
                    .map(|(p, pop)| json!({ "province": p, "population": pop, "cities": counts[p] }))
                    .collect();
                print_json(&json!({
                    "cities": db.count()?,
                    "total_population": db.total_population()?,
                    "average_population": db.average_population()?,
                    "median_population": db.median_population()?,
                    "largest_city": largest,
                    "smallest_city": smallest,
                    "provinces": provinces,
                }))?;
            } else {
                println!("Dataset statistics:");
                println!("  Cities: {}", db.count()?);
                println!("  Total population: {}", db.total_population()?);
                println!("  Average population: {:.1}", db.average_population()?);
                println!("  Median population: {:.1}", db.median_population()?);
                if let (Some(l), Some(s)) = (largest, smallest) {
                    println!("  Largest: {l} ({})", l.population());
                    println!("  Smallest: {s} ({})", s.population());
                }
                println!("By province:");
                for (province, population) in &by_province {
                    println!("  {province}: {population} in {} cities", counts[province]);
                }
            }
        }

        Commands::Find { name } => match db.find(&name)? {
            Some(city) if as_json => print_json(city)?,
            Some(city) => {
                println!("City: {}", city.name());
                println!("Province: {}", city.province());
                println!("Latitude: {}", city.latitude());
                println!("Longitude: {}", city.longitude());
                println!("Population: {}", city.population());
            }
            None => eprintln!("No city found for: {name}"),
        },

        Commands::Search { query } => print_cities(&db.search(&query)?, as_json)?,

        Commands::Province { name } => print_cities(&db.by_province(&name)?, as_json)?,

        Commands::Provinces => {
            let provinces = db.provinces()?;
            if as_json {
                print_json(&provinces)?;
            } else {
                for p in provinces {
                    println!("{p}");
                }
            }
        }

        Commands::Top { limit } => print_cities(&db.top_by_population(limit)?, as_json)?,

        Commands::Nearest { lat, lon, limit } => {
            let hits = db.nearest_with_distances(lat, lon, limit)?;
            if as_json {
                let rows: Vec<_> = hits
                    .iter()
                    .map(|(city, d)| json!({ "city": city, "distance": d, "unit": unit }))
                    .collect();
                print_json(&rows)?;
            } else {
                for (city, d) in hits {
                    println!("{city}: {d:.2} {unit}");
                }
            }
        }

        Commands::Bounds {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        } => {
            let bounds = BoundingBox::new(min_lat, max_lat, min_lng, max_lng);
            print_cities(&db.within_bounds(bounds)?, as_json)?;
        }

        Commands::Distance { from, to } => {
            let d = db
                .distance_between(&from, &to)
                .with_context(|| format!("Cannot measure {from} -> {to}"))?;
            if as_json {
                print_json(&json!({ "from": from, "to": to, "distance": d, "unit": unit }))?;
            } else {
                println!("{from} -> {to}: {d:.2} {unit}");
            }
        }

        Commands::Random { limit } => print_cities(&db.random(limit)?, as_json)?,
    }

    Ok(())
}

fn print_cities(cities: &[&City], as_json: bool) -> anyhow::Result<()> {
    if as_json {
        return print_json(&cities);
    }
    if cities.is_empty() {
        println!("No cities found");
    }
    for city in cities {
        println!("{city} (population {})", city.population());
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
