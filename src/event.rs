//! Events and channel descriptions.
//!
//! JoyPoll represents input changes as small deltas ([`InputKind`]) and
//! optionally timestamps them ([`InputEvent`]).
//!
//! ## Value conventions
//! - **Axes:** normalized to roughly `[-1.0, 1.0]` — the raw signed 16-bit
//!   value divided by `32767.0`. No clamping is applied, so the negative
//!   extreme lands slightly beyond `-1.0`.
//! - **Buttons:** boolean state expressed as press/release edges. The kernel
//!   reports nonzero for pressed.
//!
//! Deltas are *pull-based*: they are returned from
//! [`Joystick::next_event`](crate::joystick::Joystick::next_event) calls, not
//! delivered through callbacks. Raw and normalized values of every channel
//! remain readable at any time through the
//! [`JoystickState`](crate::state::JoystickState) getters.

use std::time::Instant;

/// Per-device input change (delta).
///
/// The `axis`/`button` indices are the device-local channel numbers carried
/// in the kernel's event records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
    /// A continuous channel changed. `value` is normalized (see module docs).
    AxisMoved { axis: u8, value: f32 },

    /// A button transitioned to (or was re-reported as) pressed.
    ButtonPressed { button: u8 },

    /// A button transitioned to (or was re-reported as) released.
    ButtonReleased { button: u8 },
}

/// Timestamped input event.
///
/// This is a lightweight wrapper over [`InputKind`] with a monotonic capture
/// timestamp. The kernel's own millisecond timestamp stays on the raw record
/// and is not interpreted here.
#[derive(Clone, Copy, Debug)]
pub struct InputEvent {
    /// Capture time (monotonic). Suitable for ordering / delta timing within a run.
    pub at: Instant,
    /// The actual input change.
    pub kind: InputKind,
}

/// Category of an input channel on a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Axis,
    Button,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Axis => f.write_str("axis"),
            ChannelKind::Button => f.write_str("button"),
        }
    }
}
