//! The polled joystick handle.
//!
//! [`Joystick`] owns one [`EventSource`](crate::device::EventSource) and the
//! accumulated [`JoystickState`](crate::state::JoystickState). The driving
//! loop is cooperative and single-threaded: callers repeatedly invoke
//! [`read_event`](Joystick::read_event) (or the draining
//! [`poll`](Joystick::poll)) and read values back through the getters. No
//! call blocks; callers that want to wait layer
//! [`wait_readable`](Joystick::wait_readable) or a short sleep around the
//! poll cycle.
//!
//! # Lifecycle
//! Two states: *open* (handle valid, decoding permitted) and *closed*
//! (terminal). A failed [`open`](Joystick::open) constructs nothing and holds
//! nothing. [`close`](Joystick::close) is idempotent and also runs implicitly
//! on drop; there is no way back from closed — construct a new value to
//! reconnect.

use crate::device::EventSource;
use crate::error::DeviceError;
use crate::event::InputEvent;
use crate::metadata::DeviceMeta;
use crate::state::JoystickState;
use std::time::Instant;

/// Safety valve: maximum number of records drained per [`Joystick::poll`] call.
///
/// Prevents a chattering device from starving the rest of the loop if it
/// produces data faster than the host consumes it.
pub const MAX_EVENTS_PER_TICK: usize = 32;

/// An open joystick plus the last-known value of every tracked channel.
pub struct Joystick {
    source: Option<Box<dyn EventSource>>,
    state: JoystickState,
    name: String,
    meta: DeviceMeta,
}

impl std::fmt::Debug for Joystick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Joystick")
            .field("connected", &self.source.is_some())
            .field("state", &self.state)
            .field("name", &self.name)
            .field("meta", &self.meta)
            .finish()
    }
}

impl Joystick {
    /// Open the device node at `path`.
    ///
    /// The node is opened read-only and non-blocking; all channel state
    /// starts zeroed. Fails with [`DeviceError::Open`] without holding any
    /// resource.
    #[cfg(all(feature = "js", target_os = "linux"))]
    #[cfg_attr(docsrs, doc(cfg(all(feature = "js", target_os = "linux"))))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DeviceError> {
        let dev = crate::backends::linux::JsDevice::open(path)?;
        Ok(Self::from_source(Box::new(dev)))
    }

    /// Open the well-known default node, `/dev/input/js0`.
    #[cfg(all(feature = "js", target_os = "linux"))]
    #[cfg_attr(docsrs, doc(cfg(all(feature = "js", target_os = "linux"))))]
    pub fn open_default() -> Result<Self, DeviceError> {
        Self::open(crate::config::DEFAULT_DEVICE)
    }

    /// Wrap an already-constructed event source.
    ///
    /// This is the platform-independent construction path, used with
    /// [`VirtualDevice`](crate::backends::virtual_input::VirtualDevice) in
    /// demos and tests.
    pub fn from_source(source: Box<dyn EventSource>) -> Self {
        let name = source.name().to_string();
        let meta = source.metadata();
        Self {
            source: Some(source),
            state: JoystickState::new(),
            name,
            meta,
        }
    }

    /// Consume at most one pending event record.
    ///
    /// Returns `Ok(true)` when a full record was read and dispatched — even
    /// one that decodes to nothing, like an unknown type or an out-of-range
    /// index. `Ok(false)` means no complete record was available, the
    /// expected steady-state result of non-blocking polling. Genuine
    /// descriptor failures surface as [`DeviceError::Read`].
    pub fn read_event(&mut self) -> Result<bool, DeviceError> {
        let record = self.source_mut()?.try_read()?;
        match record {
            Some(raw) => {
                self.state.apply(&raw);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Consume at most one pending record and return its decoded delta.
    ///
    /// Like [`read_event`](Joystick::read_event), but hands back the change
    /// for event-style consumers. `Ok(None)` covers both "nothing pending"
    /// and records that decode to nothing.
    pub fn next_event(&mut self) -> Result<Option<InputEvent>, DeviceError> {
        let record = self.source_mut()?.try_read()?;
        match record {
            Some(raw) => Ok(self.state.apply(&raw).map(|kind| InputEvent {
                at: Instant::now(),
                kind,
            })),
            None => Ok(None),
        }
    }

    /// Drain pending records, up to [`MAX_EVENTS_PER_TICK`].
    ///
    /// Returns how many records were consumed this tick.
    pub fn poll(&mut self) -> Result<usize, DeviceError> {
        let mut consumed = 0;
        while consumed < MAX_EVENTS_PER_TICK {
            if !self.read_event()? {
                break;
            }
            consumed += 1;
        }
        Ok(consumed)
    }

    /// Decoded deltas pending right now, drained in one call.
    ///
    /// Convenience over repeated [`next_event`](Joystick::next_event); capped
    /// at [`MAX_EVENTS_PER_TICK`] like [`poll`](Joystick::poll).
    pub fn drain_events(&mut self) -> Result<Vec<InputEvent>, DeviceError> {
        let mut events = Vec::new();
        while events.len() < MAX_EVENTS_PER_TICK {
            let record = self.source_mut()?.try_read()?;
            let Some(raw) = record else { break };
            if let Some(kind) = self.state.apply(&raw) {
                events.push(InputEvent {
                    at: Instant::now(),
                    kind,
                });
            }
        }
        Ok(events)
    }

    /// Wait up to `timeout_ms` for a record to become readable.
    ///
    /// A zero timeout is a pure readiness check.
    pub fn wait_readable(&self, timeout_ms: u16) -> Result<bool, DeviceError> {
        self.source()?.wait_readable(timeout_ms)
    }

    /// Normalized value of an axis; `0.0` if the axis never reported.
    pub fn axis(&self, index: usize) -> Result<f32, DeviceError> {
        self.state.axis(index)
    }

    /// Raw value of an axis; `0` if the axis never reported.
    pub fn raw_axis(&self, index: usize) -> Result<i16, DeviceError> {
        self.state.raw_axis(index)
    }

    /// Whether a button is currently pressed; `false` if it never reported.
    pub fn button(&self, index: usize) -> Result<bool, DeviceError> {
        self.state.button(index)
    }

    /// Borrow the accumulated state.
    pub fn state(&self) -> &JoystickState {
        &self.state
    }

    /// Owned copy of the accumulated state, valid after the live state moves on.
    pub fn snapshot(&self) -> JoystickState {
        self.state
    }

    /// Whether the device handle is currently open.
    pub fn is_connected(&self) -> bool {
        self.source.is_some()
    }

    /// Close the device handle. Idempotent; a second call is a no-op.
    ///
    /// Accumulated state, [`name`](Joystick::name) and
    /// [`metadata`](Joystick::metadata) stay readable afterwards; polling
    /// calls fail with [`DeviceError::NotConnected`].
    pub fn close(&mut self) {
        self.source = None;
    }

    /// Human-readable device name (`"Unknown"` when the driver has none).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metadata snapshot captured at construction.
    pub fn metadata(&self) -> DeviceMeta {
        self.meta.clone()
    }

    fn source(&self) -> Result<&dyn EventSource, DeviceError> {
        self.source.as_deref().ok_or(DeviceError::NotConnected)
    }

    fn source_mut(&mut self) -> Result<&mut (dyn EventSource + '_), DeviceError> {
        match self.source.as_deref_mut() {
            Some(source) => Ok(source),
            None => Err(DeviceError::NotConnected),
        }
    }
}
