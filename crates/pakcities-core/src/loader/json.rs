// crates/pakcities-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'json' feature (see loader/mod.rs).
// ---------------------------------------------------------------------------

use super::common_io;
use super::DatasetSource;
use crate::error::Result;
use crate::raw::CitiesRaw;
use std::path::{Path, PathBuf};

/// Reads rows from a JSON array on disk (`.json` or `.json.gz`).
///
/// The file is parsed on every call, so a [`crate::PakCities::reload`] picks
/// up edits made since the last load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonFileSource {
    fn records(&self) -> Result<CitiesRaw> {
        parse_json_file(&self.path)
    }
}

pub(super) fn parse_json_file(path: &Path) -> Result<CitiesRaw> {
    let reader = common_io::open_stream(path)?;
    let raw: CitiesRaw = serde_json::from_reader(reader)?;
    tracing::info!(path = %path.display(), rows = raw.len(), "Parsed city dataset");
    Ok(raw)
}
