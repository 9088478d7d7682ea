//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of a joystick
//! suitable for UI display, logging, and diagnostics. Backends populate what
//! they know; unknown fields remain `None`.
//!
//! # Conventions
//! - `name` is the driver-reported identity string when the kernel exposes
//!   one; backends fall back to `"Unknown"` for [`name`](crate::device::EventSource::name)
//!   but leave this field `None` so consumers can tell the two apart.
//! - `path` is the device node the handle was opened on, useful for
//!   diagnostics; it may change across reconnects and should be treated as
//!   identity-second.
//! - `axes` / `buttons` are the channel counts the driver advertises, which
//!   may exceed the fixed capacities this crate tracks; extra channels are
//!   readable here but their events are ignored.
//! - `driver_version` is the kernel driver version, formatted
//!   `major.minor.patch`.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single device.
///
/// All fields are optional; populate what is known on the current platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// Device node this handle was opened on.
    pub path: Option<String>,

    /// Identity string reported by the driver, if the query succeeded.
    pub name: Option<String>,

    /// Number of axes the driver advertises.
    pub axes: Option<u8>,

    /// Number of buttons the driver advertises.
    pub buttons: Option<u8>,

    /// Kernel driver version (`major.minor.patch`), if known.
    pub driver_version: Option<String>,
}
