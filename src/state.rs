//! Fixed-capacity joystick state.
//!
//! [`JoystickState`] is the accumulated last-known value of every tracked
//! channel: raw and normalized positions for up to [`MAX_AXES`] axes and
//! pressed flags for up to [`MAX_BUTTONS`] buttons. The capacities are
//! protocol constants, so storage is plain arrays with bounds-checked
//! accessors — events that target indices beyond capacity are dropped on the
//! floor, never grown into.
//!
//! The state is `Copy`; [`Joystick::snapshot`](crate::joystick::Joystick::snapshot)
//! hands out owned copies that stay valid however the live state moves on.

use crate::error::DeviceError;
use crate::event::{ChannelKind, InputKind};
use crate::wire::{RawEvent, RawKind};

/// Number of tracked axes.
pub const MAX_AXES: usize = 8;
/// Number of tracked buttons.
pub const MAX_BUTTONS: usize = 12;
/// Largest positive raw axis value; the normalization divisor.
pub const AXIS_MAX: i16 = 32767;

/// Scale a raw axis value to the conventional float range.
///
/// `32767` maps to exactly `1.0`; `-32768` lands slightly beyond `-1.0`.
/// No clamping.
#[inline]
pub fn normalize(raw: i16) -> f32 {
    raw as f32 / AXIS_MAX as f32
}

/// Last-known value of every tracked axis and button.
///
/// Zeroed at construction; entries mutate only through [`JoystickState::apply`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JoystickState {
    raw_axes: [i16; MAX_AXES],
    axes: [f32; MAX_AXES],
    buttons: [bool; MAX_BUTTONS],
}

impl JoystickState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decoded record into the state.
    ///
    /// Returns the resulting delta, or `None` when the record changed nothing:
    /// unknown event types and indices beyond capacity are ignored without
    /// error. Init-flagged records are applied exactly like live ones.
    pub fn apply(&mut self, ev: &RawEvent) -> Option<InputKind> {
        match ev.kind() {
            RawKind::Axis => {
                let idx = ev.number as usize;
                if idx >= MAX_AXES {
                    return None;
                }
                self.raw_axes[idx] = ev.value;
                self.axes[idx] = normalize(ev.value);
                Some(InputKind::AxisMoved {
                    axis: ev.number,
                    value: self.axes[idx],
                })
            }
            RawKind::Button => {
                let idx = ev.number as usize;
                if idx >= MAX_BUTTONS {
                    return None;
                }
                let pressed = ev.value != 0;
                self.buttons[idx] = pressed;
                Some(if pressed {
                    InputKind::ButtonPressed { button: ev.number }
                } else {
                    InputKind::ButtonReleased { button: ev.number }
                })
            }
            RawKind::Other(_) => None,
        }
    }

    /// Normalized value of an axis (`0.0` if never reported).
    pub fn axis(&self, index: usize) -> Result<f32, DeviceError> {
        self.axes
            .get(index)
            .copied()
            .ok_or_else(|| Self::bad_index(ChannelKind::Axis, index, MAX_AXES))
    }

    /// Raw value of an axis (`0` if never reported).
    pub fn raw_axis(&self, index: usize) -> Result<i16, DeviceError> {
        self.raw_axes
            .get(index)
            .copied()
            .ok_or_else(|| Self::bad_index(ChannelKind::Axis, index, MAX_AXES))
    }

    /// Whether a button is currently pressed (`false` if never reported).
    pub fn button(&self, index: usize) -> Result<bool, DeviceError> {
        self.buttons
            .get(index)
            .copied()
            .ok_or_else(|| Self::bad_index(ChannelKind::Button, index, MAX_BUTTONS))
    }

    fn bad_index(kind: ChannelKind, index: usize, capacity: usize) -> DeviceError {
        DeviceError::IndexOutOfRange {
            kind,
            index,
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::EVENT_INIT;

    #[test]
    fn normalization_endpoints() {
        assert_eq!(normalize(AXIS_MAX), 1.0);
        assert_eq!(normalize(0), 0.0);
        // The negative extreme overshoots -1.0; no clamping.
        let floor = normalize(i16::MIN);
        assert!(floor < -1.0);
        assert!((floor + 1.0).abs() < 1e-3);
    }

    #[test]
    fn axis_event_updates_raw_and_normalized() {
        let mut state = JoystickState::new();
        let delta = state.apply(&RawEvent::axis(3, 16000));
        assert!(matches!(
            delta,
            Some(InputKind::AxisMoved { axis: 3, value }) if (value - 0.488).abs() < 1e-3
        ));
        assert_eq!(state.raw_axis(3).unwrap(), 16000);
        assert!((state.axis(3).unwrap() - 0.488).abs() < 1e-3);
    }

    #[test]
    fn button_events_toggle() {
        let mut state = JoystickState::new();
        assert_eq!(
            state.apply(&RawEvent::button(0, true)),
            Some(InputKind::ButtonPressed { button: 0 })
        );
        assert!(state.button(0).unwrap());
        assert_eq!(
            state.apply(&RawEvent::button(0, false)),
            Some(InputKind::ButtonReleased { button: 0 })
        );
        assert!(!state.button(0).unwrap());
    }

    #[test]
    fn init_events_apply_like_live_ones() {
        let mut state = JoystickState::new();
        let mut ev = RawEvent::axis(1, AXIS_MAX);
        ev.ty |= EVENT_INIT;
        assert!(state.apply(&ev).is_some());
        assert_eq!(state.axis(1).unwrap(), 1.0);
    }

    #[test]
    fn out_of_capacity_events_are_ignored() {
        let mut state = JoystickState::new();
        assert_eq!(state.apply(&RawEvent::axis(9, 1000)), None);
        assert_eq!(state.apply(&RawEvent::button(12, true)), None);
        // Nothing stored anywhere.
        for i in 0..MAX_AXES {
            assert_eq!(state.raw_axis(i).unwrap(), 0);
        }
        for i in 0..MAX_BUTTONS {
            assert!(!state.button(i).unwrap());
        }
    }

    #[test]
    fn unknown_event_types_are_ignored() {
        let mut state = JoystickState::new();
        let ev = RawEvent {
            time: 0,
            value: 123,
            ty: 0x04,
            number: 0,
        };
        assert_eq!(state.apply(&ev), None);
        assert_eq!(state.raw_axis(0).unwrap(), 0);
    }

    #[test]
    fn getters_reject_out_of_range_indices() {
        let state = JoystickState::new();
        assert!(matches!(
            state.axis(MAX_AXES),
            Err(DeviceError::IndexOutOfRange {
                kind: ChannelKind::Axis,
                index: 8,
                capacity: 8,
            })
        ));
        assert!(state.raw_axis(100).is_err());
        assert!(matches!(
            state.button(MAX_BUTTONS),
            Err(DeviceError::IndexOutOfRange {
                kind: ChannelKind::Button,
                index: 12,
                capacity: 12,
            })
        ));
    }

    #[test]
    fn fresh_state_reads_zero() {
        let state = JoystickState::new();
        assert_eq!(state.axis(0).unwrap(), 0.0);
        assert_eq!(state.raw_axis(7).unwrap(), 0);
        assert!(!state.button(11).unwrap());
    }
}
