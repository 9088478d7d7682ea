//! Scriptable in-memory event source.
//!
//! [`VirtualDevice`] queues synthetic event records and replays them through
//! the normal [`EventSource`](crate::device::EventSource) polling path. It
//! backs the `virtual_demo` example and the test suite, and works on every
//! platform — no device node required.

use crate::device::EventSource;
use crate::error::DeviceError;
use crate::metadata::DeviceMeta;
use crate::wire::RawEvent;
use std::collections::VecDeque;
use std::io;

/// An in-memory device fed by the caller.
#[derive(Default)]
pub struct VirtualDevice {
    name: String,
    queue: VecDeque<RawEvent>,
    fail_next: bool,
}

impl VirtualDevice {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Inject a raw event record into the queue.
    pub fn feed(&mut self, event: RawEvent) {
        self.queue.push_back(event);
    }

    /// Convenience method to queue an axis movement.
    pub fn set_axis(&mut self, axis: u8, value: i16) {
        self.feed(RawEvent::axis(axis, value));
    }

    pub fn press_button(&mut self, button: u8) {
        self.feed(RawEvent::button(button, true));
    }

    pub fn release_button(&mut self, button: u8) {
        self.feed(RawEvent::button(button, false));
    }

    /// Make the next `try_read` fail with an I/O error. Lets callers exercise
    /// their hard-failure paths without real hardware.
    pub fn fail_next_read(&mut self) {
        self.fail_next = true;
    }
}

impl EventSource for VirtualDevice {
    fn try_read(&mut self) -> Result<Option<RawEvent>, DeviceError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(DeviceError::Read {
                source: io::Error::new(io::ErrorKind::Other, "injected fault"),
            });
        }
        Ok(self.queue.pop_front())
    }

    fn wait_readable(&self, _timeout_ms: u16) -> Result<bool, DeviceError> {
        Ok(!self.queue.is_empty())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> DeviceMeta {
        DeviceMeta {
            name: Some(self.name.clone()),
            ..Default::default()
        }
    }
}
