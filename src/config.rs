//! Configuration file support.
//!
//! All keys are optional; anything missing falls back to the built-in
//! defaults. Command-line flags are applied on top by the binary.
//!
//! ```toml
//! start_url = "https://www.apple.com"
//! home_url = "adapta://home"
//! search_engine = "https://duckduckgo.com/?q="
//! dark = true
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{AdaptaError, Result};
use crate::navigation::location::DEFAULT_SEARCH_ENGINE;
use crate::navigation::{classify, SearchEngine, HOME_LOCATION};

/// Location the first history entry points at.
pub const DEFAULT_START_URL: &str = "https://www.apple.com";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seed entry of the history.
    pub start_url: String,
    /// Location the home button opens.
    pub home_url: String,
    /// Search query prefix.
    pub search_engine: String,
    /// Start in dark mode.
    pub dark: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            home_url: HOME_LOCATION.to_string(),
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            dark: false,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AdaptaError::config_read(path.to_path_buf(), e))?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Search engine described by this config.
    pub fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(self.search_engine.clone())
    }

    /// `start_url` run through the classifier, so the seed entry is always a
    /// full location. The home location is kept verbatim and a blank value
    /// falls back to [`DEFAULT_START_URL`].
    pub fn start_location(&self) -> String {
        if self.start_url.trim() == self.home_url {
            return self.home_url.clone();
        }
        classify(&self.start_url, &self.search_engine())
            .into_location()
            .unwrap_or_else(|| DEFAULT_START_URL.to_string())
    }
}
