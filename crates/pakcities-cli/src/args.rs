use clap::{Parser, Subcommand};
use pakcities_core::search::{DEFAULT_NEAREST_LIMIT, DEFAULT_RANDOM_LIMIT, DEFAULT_TOP_LIMIT};
use pakcities_core::DistanceUnit;
use std::path::PathBuf;

/// CLI arguments for pakcities
#[derive(Debug, Parser)]
#[command(
    name = "pakcities",
    version,
    about = "CLI for querying the pakcities-core dataset of Pakistani cities"
)]
pub struct CliArgs {
    /// Path to a dataset file, .json or .json.gz (default: bundled cities.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Distance unit for distance and nearest queries (km or miles)
    #[arg(short = 'u', long = "unit", global = true, default_value = "km")]
    pub unit: DistanceUnit,

    /// Match city and province names case-sensitively
    #[arg(long = "case-sensitive", global = true)]
    pub case_sensitive: bool,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log loader activity to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show population statistics for the dataset
    Stats,

    /// Look up a city by exact name
    Find {
        /// City name (e.g. Karachi)
        name: String,
    },

    /// Search for cities whose name contains a substring
    Search {
        /// Substring to search for
        query: String,
    },

    /// List the cities of a province
    Province {
        /// Province name (e.g. Punjab)
        name: String,
    },

    /// List all provinces
    Provinces,

    /// Most populous cities
    Top {
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_LIMIT)]
        limit: i64,
    },

    /// Cities closest to a coordinate
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_NEAREST_LIMIT)]
        limit: i64,
    },

    /// Cities inside a latitude/longitude box
    Bounds {
        #[arg(allow_negative_numbers = true)]
        min_lat: f64,
        #[arg(allow_negative_numbers = true)]
        max_lat: f64,
        #[arg(allow_negative_numbers = true)]
        min_lng: f64,
        #[arg(allow_negative_numbers = true)]
        max_lng: f64,
    },

    /// Great-circle distance between two cities
    Distance { from: String, to: String },

    /// Random sample of cities
    Random {
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_RANDOM_LIMIT)]
        limit: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn global_options_apply_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["pakcities", "distance", "Karachi", "Lahore", "--unit", "miles"])
                .unwrap();
        assert_eq!(args.unit, DistanceUnit::Miles);
        assert!(matches!(args.command, Commands::Distance { ref from, .. } if from == "Karachi"));
    }

    #[test]
    fn nearest_accepts_negative_coordinates() {
        let args = CliArgs::try_parse_from(["pakcities", "nearest", "-33.5", "-70.6", "-n", "3"])
            .unwrap();
        match args.command {
            Commands::Nearest { lat, lon, limit } => {
                assert_eq!((lat, lon, limit), (-33.5, -70.6, 3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn defaults_are_applied() {
        let args = CliArgs::try_parse_from(["pakcities", "top"]).unwrap();
        assert_eq!(args.unit, DistanceUnit::Kilometers);
        assert!(!args.case_sensitive);
        assert!(matches!(args.command, Commands::Top { limit } if limit == DEFAULT_TOP_LIMIT));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert!(CliArgs::try_parse_from(["pakcities", "--unit", "parsecs", "stats"]).is_err());
    }
}
