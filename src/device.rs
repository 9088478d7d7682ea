//! The backend seam.
//!
//! [`EventSource`] is what a [`Joystick`](crate::joystick::Joystick) polls:
//! anything that can hand over raw event records one at a time without
//! blocking. The real implementation is the Linux `js` device node
//! ([`JsDevice`](crate::backends::linux::JsDevice)); the scriptable
//! [`VirtualDevice`](crate::backends::virtual_input::VirtualDevice) backs
//! demos and tests.

use crate::error::DeviceError;
use crate::metadata::DeviceMeta;
use crate::wire::RawEvent;

/// A non-blocking source of joystick event records.
pub trait EventSource {
    /// Try to read the next pending record.
    ///
    /// `Ok(None)` covers every soft condition — no data pending, end of
    /// stream, or a partial record — and is the expected steady-state result
    /// of polling. `Err` is reserved for genuine descriptor failures.
    fn try_read(&mut self) -> Result<Option<RawEvent>, DeviceError>;

    /// Wait up to `timeout_ms` for a record to become readable.
    ///
    /// A zero timeout is a pure readiness check.
    fn wait_readable(&self, timeout_ms: u16) -> Result<bool, DeviceError>;

    /// Human-readable device name (`"Unknown"` when the source has none).
    fn name(&self) -> &str;

    /// Metadata snapshot for display and diagnostics.
    fn metadata(&self) -> DeviceMeta;
}
