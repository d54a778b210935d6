//! AHA configuration management

use crate::agent::DEFAULT_TOP_INSIGHTS;
use crate::chamber::insight::DEFAULT_TITLE_WORDS;
use crate::chamber::DEFAULT_SIMILARITY_THRESHOLD;
use crate::drafts::{DEFAULT_ARTICLE_TOP_N, DEFAULT_PATH_STEPS};
use crate::error::{Error, Result};
use crate::meta::DEFAULT_EXAMPLE_CAP;
use crate::stats::DEFAULT_DENSITY_REFERENCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main AHA configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AhaConfig {
    /// Engine tuning
    #[serde(default)]
    pub engine: EngineConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AhaConfig {
    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: AhaConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()
    }
}

/// Engine tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum Jaccard similarity for reinforcing an existing insight
    pub similarity_threshold: f64,

    /// Words kept in a generated insight title
    pub title_max_words: usize,

    /// Unique/total token ratio that scores as full concept density
    pub density_reference: f64,

    /// Examples kept per concept in the concept index
    pub concept_example_cap: usize,

    /// Steps in a path draft
    pub path_max_steps: usize,

    /// Insights quoted in an article draft
    pub article_top_n: usize,

    /// Insights included in the agent payload
    pub top_insights: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            title_max_words: DEFAULT_TITLE_WORDS,
            density_reference: DEFAULT_DENSITY_REFERENCE,
            concept_example_cap: DEFAULT_EXAMPLE_CAP,
            path_max_steps: DEFAULT_PATH_STEPS,
            article_top_n: DEFAULT_ARTICLE_TOP_N,
            top_insights: DEFAULT_TOP_INSIGHTS,
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::Config(format!(
                "engine.similarity_threshold must be within 0..=1, got {}",
                self.similarity_threshold
            )));
        }
        if !(self.density_reference > 0.0 && self.density_reference <= 1.0) {
            return Err(Error::Config(format!(
                "engine.density_reference must be within (0, 1], got {}",
                self.density_reference
            )));
        }
        if self.title_max_words == 0 {
            return Err(Error::Config(
                "engine.title_max_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Chamber JSON file used by the CLI
    pub chamber_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let base = dirs_next::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aha");

        Self {
            chamber_path: base.join("chamber.json"),
        }
    }
}
