//! Configuration file handling
//!
//! A TOML file with optional `[wordle]`, `[content]` and `[tags]` sections.
//! Every field has a default, so an empty file is a valid configuration.

use crate::error::{Error, Result};
use crate::tags::{TagCategoryMap, TagTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

/// Default content export produced by the site's content pipeline
pub const DEFAULT_CONTENT_PATH: &str = ".velite/projects.json";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wordle: WordleSettings,

    #[serde(default)]
    pub content: ContentSettings,

    /// Replaces the built-in tag table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagTable>,
}

/// Word game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordleSettings {
    /// Word endpoint; the embedded list is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Word list file replacing the embedded answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<PathBuf>,
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for WordleSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            words: None,
        }
    }
}

/// Content collection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSettings {
    #[serde(default = "default_content_path")]
    pub path: PathBuf,
}

fn default_content_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_PATH)
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `./portfolio.toml` is
    /// read if present, otherwise defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or the file cannot
    /// be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(Error::ConfigNotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse one file
    ///
    /// # Errors
    ///
    /// Returns an I/O or TOML error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Tag map from `[tags]`, or the built-in table
    #[must_use]
    pub fn tag_map(&self) -> TagCategoryMap {
        self.tags
            .as_ref()
            .map_or_else(TagCategoryMap::default, TagCategoryMap::from_table)
    }
}
