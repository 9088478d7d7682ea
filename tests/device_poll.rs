//! End-to-end polling over a file standing in for a device node.
//!
//! A regular file feeds the same code path as a real `js` node: whole
//! records decode, the trailing partial record and EOF read as "nothing
//! pending", and state accumulates across reads.

#![cfg(all(target_os = "linux", feature = "js"))]

use joypoll::wire::{EVENT_AXIS, EVENT_BUTTON, EVENT_INIT, EVENT_SIZE};
use joypoll::{DeviceError, Joystick};
use std::io::Write;

fn record(time: u32, value: i16, ty: u8, number: u8) -> [u8; EVENT_SIZE] {
    let mut buf = [0u8; EVENT_SIZE];
    buf[0..4].copy_from_slice(&time.to_le_bytes());
    buf[4..6].copy_from_slice(&value.to_le_bytes());
    buf[6] = ty;
    buf[7] = number;
    buf
}

#[test]
fn polls_a_recorded_stream() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    // Replayed initial state, then live input, then junk the decoder ignores.
    tmp.write_all(&record(1, 32767, EVENT_AXIS | EVENT_INIT, 0))
        .unwrap();
    tmp.write_all(&record(2, 16000, EVENT_AXIS, 3)).unwrap();
    tmp.write_all(&record(3, 1, EVENT_BUTTON, 0)).unwrap();
    tmp.write_all(&record(4, 100, EVENT_AXIS, 9)).unwrap();
    tmp.write_all(&[0xff, 0xff, 0xff]).unwrap(); // torn tail
    tmp.flush().unwrap();

    let mut js = Joystick::open(tmp.path()).unwrap();
    assert!(js.is_connected());

    let mut consumed = 0;
    while js.read_event().unwrap() {
        consumed += 1;
    }
    assert_eq!(consumed, 4);

    assert_eq!(js.axis(0).unwrap(), 1.0);
    assert!((js.axis(3).unwrap() - 0.488).abs() < 1e-3);
    assert_eq!(js.raw_axis(3).unwrap(), 16000);
    assert!(js.button(0).unwrap());
    // The out-of-range record left every other axis untouched.
    for i in [1, 2, 4, 5, 6, 7] {
        assert_eq!(js.raw_axis(i).unwrap(), 0);
    }

    // Steady state after the stream runs dry.
    assert!(!js.read_event().unwrap());
    assert!(js.next_event().unwrap().is_none());
}

#[test]
fn poll_caps_one_tick() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    for i in 0..40u32 {
        tmp.write_all(&record(i, (i as i16) * 100, EVENT_AXIS, (i % 8) as u8))
            .unwrap();
    }
    tmp.flush().unwrap();

    let mut js = Joystick::open(tmp.path()).unwrap();
    assert_eq!(js.poll().unwrap(), joypoll::MAX_EVENTS_PER_TICK);
    assert_eq!(js.poll().unwrap(), 8);
    assert_eq!(js.poll().unwrap(), 0);
}

#[test]
fn open_failure_holds_nothing() {
    let err = Joystick::open("/nonexistent/js7").unwrap_err();
    assert!(matches!(err, DeviceError::Open { .. }));
    assert!(err.to_string().contains("/nonexistent/js7"));
}

#[test]
fn getters_report_contract_violations_distinctly() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    let js = Joystick::open(tmp.path()).unwrap();
    match js.axis(8) {
        Err(DeviceError::IndexOutOfRange { index: 8, capacity: 8, .. }) => {}
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
    match js.button(12) {
        Err(DeviceError::IndexOutOfRange { index: 12, capacity: 12, .. }) => {}
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}
