//! Configuration schema for compare-size
//!
//! Configuration is read from `compare-size.toml` in the project root.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the size cache, relative to the project root
pub const DEFAULT_CACHE_PATH: &str = "dist/.sizecache.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comparison settings
    pub compare: CompareConfig,
}

/// Artifacts, compressors and cache location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Artifact paths to measure, in display order
    pub files: Vec<String>,

    /// Compressor names applied to every artifact
    pub compressors: Vec<String>,

    /// Size cache file
    pub cache: PathBuf,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            files: vec![],
            compressors: vec!["gz".to_string()],
            cache: PathBuf::from(DEFAULT_CACHE_PATH),
        }
    }
}
