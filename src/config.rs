//! Engine configuration
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GomokuError;

/// Default config file looked up by the binary.
pub const DEFAULT_CONFIG_PATH: &str = "gomoku_config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Internal search deadline in milliseconds
    pub time_limit_ms: u64,
    /// First iterative-deepening depth
    pub start_depth: u8,
    /// Optional depth cap
    pub max_depth: Option<u8>,
    /// Seed for the fallback move picker
    pub seed: Option<u64>,
    /// Caller-side absolute deadline in milliseconds
    pub outer_timeout_ms: u64,
    /// off, error, warn, info, debug or trace
    pub log_level: String,
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GomokuError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GomokuError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| GomokuError::Config(format!("{}: {e}", path.display())))
    }

    /// Load `path`, or the defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GomokuError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    #[inline]
    pub fn outer_timeout(&self) -> Duration {
        Duration::from_millis(self.outer_timeout_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 10_000,
            start_depth: 4,
            max_depth: None,
            seed: None,
            outer_timeout_ms: 25_000,
            log_level: "info".to_string(),
        }
    }
}
