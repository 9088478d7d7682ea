//! Joystick (`js`) wire format.
//!
//! The kernel joystick interface delivers fixed-size 8-byte records,
//! little-endian:
//!
//! | bytes | field    | meaning                                    |
//! |-------|----------|--------------------------------------------|
//! | 0..4  | `time`   | event timestamp in milliseconds            |
//! | 4..6  | `value`  | signed axis position or button value       |
//! | 6     | `ty`     | `0x01` button, `0x02` axis, `0x80` init    |
//! | 7     | `number` | axis or button index the event targets     |
//!
//! The init bit marks a replay of current state at open time rather than a
//! live change; both carry the same payload and update state identically, so
//! decoding strips the bit before dispatch.

/// Size of one event record on the wire.
pub const EVENT_SIZE: usize = 8;

/// Event type tag: button press/release.
pub const EVENT_BUTTON: u8 = 0x01;
/// Event type tag: axis movement.
pub const EVENT_AXIS: u8 = 0x02;
/// Flag bit marking an initial-state (replay) event.
pub const EVENT_INIT: u8 = 0x80;

/// One event record, decoded field-wise but not yet interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawEvent {
    /// Device timestamp in milliseconds. Carried through, never interpreted.
    pub time: u32,
    /// Axis position in `[-32768, 32767]`, or button value (nonzero = pressed).
    pub value: i16,
    /// Type tag, init flag included. Prefer [`RawEvent::kind`].
    pub ty: u8,
    /// Index of the axis or button this event targets.
    pub number: u8,
}

/// Event type with the init flag stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawKind {
    Axis,
    Button,
    /// Anything else. Ignored by state updates.
    Other(u8),
}

impl RawEvent {
    /// Decode one record from its wire bytes.
    pub fn parse(buf: &[u8; EVENT_SIZE]) -> Self {
        Self {
            time: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            value: i16::from_le_bytes([buf[4], buf[5]]),
            ty: buf[6],
            number: buf[7],
        }
    }

    /// Event type with the init flag stripped; init events dispatch exactly
    /// like live ones.
    pub fn kind(&self) -> RawKind {
        match self.ty & !EVENT_INIT {
            EVENT_AXIS => RawKind::Axis,
            EVENT_BUTTON => RawKind::Button,
            other => RawKind::Other(other),
        }
    }

    /// Whether this record replays state captured at open time.
    pub fn is_init(&self) -> bool {
        self.ty & EVENT_INIT != 0
    }

    /// Helper for building synthetic axis records (virtual devices, tests).
    pub fn axis(number: u8, value: i16) -> Self {
        Self {
            time: 0,
            value,
            ty: EVENT_AXIS,
            number,
        }
    }

    /// Helper for building synthetic button records.
    pub fn button(number: u8, pressed: bool) -> Self {
        Self {
            time: 0,
            value: pressed as i16,
            ty: EVENT_BUTTON,
            number,
        }
    }
}
