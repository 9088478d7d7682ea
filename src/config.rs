//! Polling configuration.
//!
//! [`PollConfig`] carries the peripheral knobs of a driving loop: which
//! device node to open and how hard to poll it. The library itself takes
//! explicit paths everywhere; this type exists for the demo binaries and for
//! host applications that want a small TOML file instead of flags.
//!
//! ```toml
//! device = "/dev/input/js1"
//! interval_ms = 5
//! ```
//!
//! Missing keys fall back to their defaults, so an empty file is a valid
//! configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The well-known default device node.
pub const DEFAULT_DEVICE: &str = "/dev/input/js0";

/// Default poll throttle in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 10;

/// Settings for a polling loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Device node to open.
    pub device: PathBuf,
    /// How long a driving loop waits between polls when nothing is pending.
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl PollConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
