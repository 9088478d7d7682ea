//! Error taxonomy.
//!
//! JoyPoll distinguishes three failure classes so callers can tell bad
//! hardware/environment apart from bad usage:
//! - [`DeviceError::Open`] / [`DeviceError::Read`] — environmental; the device
//!   node could not be opened, or the descriptor reported a genuine I/O
//!   failure (not "no data yet").
//! - [`DeviceError::IndexOutOfRange`] — a caller asked for an axis/button
//!   outside the fixed capacities. Contract violation, never clamped.
//! - [`DeviceError::NotConnected`] — a polling call on a joystick whose
//!   handle was already closed.
//!
//! Soft conditions (no pending data, partial record, unknown event type,
//! out-of-range index arriving *from the device*) are not errors; they are
//! reported as `Ok(false)` / `Ok(None)` or silently ignored.

use crate::event::ChannelKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by device construction, polling, and state getters.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device node could not be opened. No resource is held afterwards.
    #[error("failed to open joystick device {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor reported a genuine I/O failure during a read or
    /// readiness check. The caller decides whether to retry or tear down.
    #[error("joystick read failed: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// An axis/button getter was called with an index outside the fixed
    /// capacity.
    #[error("{kind} index {index} out of range (capacity {capacity})")]
    IndexOutOfRange {
        kind: ChannelKind,
        index: usize,
        capacity: usize,
    },

    /// The joystick handle was closed before this call.
    #[error("joystick is not connected")]
    NotConnected,
}

/// Errors produced while loading a [`PollConfig`](crate::config::PollConfig)
/// from disk. Kept separate from [`DeviceError`] so callers can distinguish
/// "bad config file" from "bad hardware".
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
