//! Persistence boundary for the chamber
//!
//! The engine never performs storage I/O. Callers that need the chamber to
//! outlive the process load and save it through a `ChamberStore`; the CLI
//! uses the JSON file implementation below.

use super::collection::Chamber;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Loads and saves a whole chamber
pub trait ChamberStore {
    /// Load the stored chamber, or an empty one if nothing is stored yet
    fn load(&self) -> Result<Chamber>;

    /// Replace the stored chamber
    fn save(&self, chamber: &Chamber) -> Result<()>;
}

/// Chamber stored as one pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChamberStore for JsonFileStore {
    fn load(&self) -> Result<Chamber> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No chamber file yet, starting empty");
            return Ok(Chamber::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Chamber::new());
        }
        let chamber: Chamber = serde_json::from_str(&content).map_err(|e| {
            Error::Storage(format!(
                "Failed to parse chamber file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            insights = chamber.len(),
            "Loaded chamber"
        );
        Ok(chamber)
    }

    fn save(&self, chamber: &Chamber) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write to a sibling file first so a crash never leaves half a chamber
        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(chamber)?;
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            insights = chamber.len(),
            "Saved chamber"
        );
        Ok(())
    }
}
