// crates/pakcities-core/src/loader/builder.rs
use super::common_io;
use super::json::parse_json_file;
use super::DatasetSource;
use crate::error::Result;
use crate::model::CACHE_SUFFIX;
use crate::raw::{CitiesRaw, CityRaw, RawNumber};
use serde::{Deserialize, Serialize};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    fn active() -> Self {
        #[cfg(feature = "compact")]
        {
            CompressionMode::Gzip
        }
        #[cfg(not(feature = "compact"))]
        {
            CompressionMode::None
        }
    }
}

/// Row layout inside the binary cache.
///
/// Values are already coerced: bincode cannot carry the untagged
/// [`RawNumber`] shape, and coercion gives the same result a second time.
#[derive(Debug, Serialize, Deserialize)]
struct CachedRow {
    city: String,
    province: String,
    latitude: f64,
    longitude: f64,
    population: u64,
}

impl From<&CityRaw> for CachedRow {
    fn from(raw: &CityRaw) -> Self {
        Self {
            city: raw.city.clone(),
            province: raw.province.clone(),
            latitude: raw.latitude.to_f64(),
            longitude: raw.longitude.to_f64(),
            population: raw.population.to_count(),
        }
    }
}

impl From<CachedRow> for CityRaw {
    fn from(row: CachedRow) -> Self {
        CityRaw {
            city: row.city,
            province: row.province,
            latitude: RawNumber::Float(row.latitude),
            longitude: RawNumber::Float(row.longitude),
            population: RawNumber::from(row.population),
        }
    }
}

// -----------------------------------------------------------------------------
// SMART SOURCE (JSON + binary cache)
// -----------------------------------------------------------------------------

/// **Smart Load:** reuses a binary cache next to the JSON file while it is
/// fresh, otherwise parses the JSON and rewrites the cache.
///
/// A cache that cannot be written (read-only directory, full disk) is not an
/// error; the parsed rows are still returned.
#[derive(Debug, Clone)]
pub struct CachedJsonSource {
    json_path: PathBuf,
    cache_path: PathBuf,
}

impl CachedJsonSource {
    pub fn new(json_path: impl AsRef<Path>) -> Self {
        let json_path = json_path.as_ref().to_path_buf();
        let cache_path = common_io::get_cache_path(&json_path, CACHE_SUFFIX);
        Self {
            json_path,
            cache_path,
        }
    }

    /// Keep the cache somewhere other than next to the JSON file.
    pub fn with_cache_path(mut self, cache_path: impl AsRef<Path>) -> Self {
        self.cache_path = cache_path.as_ref().to_path_buf();
        self
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    fn is_cache_fresh(&self) -> bool {
        let cache_time = match fs::metadata(&self.cache_path).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        match fs::metadata(&self.json_path).and_then(|m| m.modified()) {
            Ok(json_time) => json_time <= cache_time,
            // Source vanished: the cache is all there is.
            Err(_) => true,
        }
    }
}

impl DatasetSource for CachedJsonSource {
    fn records(&self) -> Result<CitiesRaw> {
        // 1. Check Cache
        if self.is_cache_fresh() {
            if let Ok(rows) = read_cache(&self.cache_path, CompressionMode::active()) {
                tracing::info!(path = %self.cache_path.display(), rows = rows.len(), "Loaded city cache");
                return Ok(rows);
            }
        }

        // 2. Parse source
        let rows = parse_json_file(&self.json_path)?;

        // 3. Cache
        if write_cache(&self.cache_path, &rows, CompressionMode::active()).is_ok() {
            tracing::info!(path = %self.cache_path.display(), "Wrote city cache");
        }

        Ok(rows)
    }
}

// -----------------------------------------------------------------------------
// BINARY CACHE I/O
// -----------------------------------------------------------------------------

/// Serializes `rows` to `path` as bincode, gzip-wrapped when requested.
pub fn write_cache(path: &Path, rows: &[CityRaw], compression: CompressionMode) -> Result<()> {
    let cached: Vec<CachedRow> = rows.iter().map(CachedRow::from).collect();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::PakCitiesError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    bincode::serialize_into(&mut encoder, &cached)?;
    encoder.flush()?;
    Ok(())
}

/// Reads rows written by [`write_cache`].
pub fn read_cache(path: &Path, compression: CompressionMode) -> Result<CitiesRaw> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let decoder: Box<dyn Read> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzDecoder::new(reader))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::PakCitiesError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(reader),
    };

    let cached: Vec<CachedRow> = bincode::deserialize_from(decoder)?;
    Ok(cached.into_iter().map(CityRaw::from).collect())
}
