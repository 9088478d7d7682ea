#![cfg(target_os = "linux")]

//! Linux joystick (`js`) device backend.
//!
//! [`JsDevice`] wraps a `/dev/input/js*` node opened read-only and
//! non-blocking. It is responsible for:
//! - opening the node with `O_NONBLOCK` so polling never stalls the caller
//! - reading one fixed-size record per [`try_read`](JsDevice::try_read),
//!   treating short reads as "no complete event available"
//! - querying driver identity (name, channel counts, driver version) over
//!   the `js` ioctls, best-effort
//! - readiness checks through `poll(2)`
//!
//! This module does **not**:
//! - maintain accumulated axis/button state (that is
//!   [`Joystick`](crate::joystick::Joystick)'s job)
//! - enumerate devices or handle hot-plug; one handle, one node

use crate::device::EventSource;
use crate::error::DeviceError;
use crate::metadata::DeviceMeta;
use crate::wire::{RawEvent, EVENT_SIZE};
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::os::fd::AsFd;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;

/// `js` driver ioctls, from `linux/joystick.h`.
mod ioctl {
    use nix::{ioctl_read, ioctl_read_buf};

    const JS_MAGIC: u8 = b'j';

    ioctl_read!(get_version, JS_MAGIC, 0x01, u32);
    ioctl_read!(get_axes, JS_MAGIC, 0x11, u8);
    ioctl_read!(get_buttons, JS_MAGIC, 0x12, u8);
    ioctl_read_buf!(get_name, JS_MAGIC, 0x13, u8);
}

fn device_name(fd: RawFd) -> Option<String> {
    let mut buf = [0u8; 128];
    let len = unsafe { ioctl::get_name(fd, &mut buf) }.ok()?;
    if len <= 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..end]).into_owned())
}

fn axis_count(fd: RawFd) -> Option<u8> {
    let mut count = 0u8;
    unsafe { ioctl::get_axes(fd, &mut count) }.ok()?;
    Some(count)
}

fn button_count(fd: RawFd) -> Option<u8> {
    let mut count = 0u8;
    unsafe { ioctl::get_buttons(fd, &mut count) }.ok()?;
    Some(count)
}

fn driver_version(fd: RawFd) -> Option<String> {
    let mut version = 0u32;
    unsafe { ioctl::get_version(fd, &mut version) }.ok()?;
    Some(format!(
        "{}.{}.{}",
        version >> 16,
        (version >> 8) & 0xff,
        version & 0xff
    ))
}

/// An open joystick device node.
///
/// The handle is owned exclusively and closed exactly once when the value is
/// dropped. Identity queries run once at open; a node that rejects them
/// (e.g. a plain file standing in for a device during tests) still polls.
#[derive(Debug)]
pub struct JsDevice {
    file: File,
    display_name: String,
    meta: DeviceMeta,
}

impl JsDevice {
    /// Open the device node at `path` read-only and non-blocking.
    ///
    /// On failure returns [`DeviceError::Open`] and holds no resource.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|source| DeviceError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let fd = file.as_raw_fd();
        let name = device_name(fd);
        let meta = DeviceMeta {
            path: Some(path.display().to_string()),
            name: name.clone(),
            axes: axis_count(fd),
            buttons: button_count(fd),
            driver_version: driver_version(fd),
        };

        // NOTE: intentionally verbose for device bring-up.
        #[cfg(all(feature = "debug-log", debug_assertions))]
        eprintln!(
            "[JS/OPEN] path={path} name={name:?} axes={axes:?} buttons={buttons:?} driver={driver:?}",
            path = path.display(),
            name = meta.name,
            axes = meta.axes,
            buttons = meta.buttons,
            driver = meta.driver_version,
        );

        Ok(Self {
            file,
            display_name: name.unwrap_or_else(|| "Unknown".to_string()),
            meta,
        })
    }
}

impl EventSource for JsDevice {
    fn try_read(&mut self) -> Result<Option<RawEvent>, DeviceError> {
        let mut buf = [0u8; EVENT_SIZE];
        match self.file.read(&mut buf) {
            Ok(EVENT_SIZE) => Ok(Some(RawEvent::parse(&buf))),
            // EOF or a short read; either way no complete event is available.
            Ok(_) => Ok(None),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(source) => Err(DeviceError::Read { source }),
        }
    }

    fn wait_readable(&self, timeout_ms: u16) -> Result<bool, DeviceError> {
        let mut fds = [PollFd::new(self.file.as_fd(), PollFlags::POLLIN)];
        match poll(&mut fds, PollTimeout::from(timeout_ms)) {
            Ok(0) => Ok(false),
            Ok(_) => Ok(fds[0]
                .revents()
                .is_some_and(|r| r.intersects(PollFlags::POLLIN))),
            Err(nix::errno::Errno::EINTR) => Ok(false),
            Err(errno) => Err(DeviceError::Read {
                source: errno.into(),
            }),
        }
    }

    fn name(&self) -> &str {
        &self.display_name
    }

    fn metadata(&self) -> DeviceMeta {
        self.meta.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(value: i16, ty: u8, number: u8) -> [u8; EVENT_SIZE] {
        let mut buf = [0u8; EVENT_SIZE];
        buf[4..6].copy_from_slice(&value.to_le_bytes());
        buf[6] = ty;
        buf[7] = number;
        buf
    }

    #[test]
    fn open_missing_node_fails_cleanly() {
        let err = JsDevice::open("/nonexistent/js99").unwrap_err();
        match err {
            DeviceError::Open { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/js99"));
            }
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn reads_whole_records_then_none() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&record(16000, crate::wire::EVENT_AXIS, 3))
            .unwrap();
        tmp.write_all(&record(1, crate::wire::EVENT_BUTTON, 0))
            .unwrap();
        tmp.flush().unwrap();

        let mut dev = JsDevice::open(tmp.path()).unwrap();
        let first = dev.try_read().unwrap().unwrap();
        assert_eq!(first.value, 16000);
        assert_eq!(first.number, 3);
        let second = dev.try_read().unwrap().unwrap();
        assert_eq!(second.number, 0);
        // End of stream reads as the soft no-data condition.
        assert!(dev.try_read().unwrap().is_none());
    }

    #[test]
    fn partial_record_is_not_an_event() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&record(500, crate::wire::EVENT_AXIS, 0))
            .unwrap();
        tmp.write_all(&[0xde, 0xad, 0xbe]).unwrap();
        tmp.flush().unwrap();

        let mut dev = JsDevice::open(tmp.path()).unwrap();
        assert!(dev.try_read().unwrap().is_some());
        assert!(dev.try_read().unwrap().is_none());
    }

    #[test]
    fn descriptor_failure_surfaces_as_read_error() {
        // A directory opens read-only but refuses read(2).
        let dir = tempfile::tempdir().unwrap();
        let mut dev = JsDevice::open(dir.path()).unwrap();
        assert!(matches!(
            dev.try_read(),
            Err(DeviceError::Read { .. })
        ));
    }

    #[test]
    fn identity_queries_degrade_on_plain_files() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let dev = JsDevice::open(tmp.path()).unwrap();
        assert_eq!(dev.name(), "Unknown");
        let meta = dev.metadata();
        assert!(meta.name.is_none());
        assert!(meta.axes.is_none());
        assert!(meta.buttons.is_none());
        assert_eq!(meta.path.as_deref(), Some(tmp.path().to_str().unwrap()));
    }

    #[test]
    fn regular_files_always_poll_ready() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let dev = JsDevice::open(tmp.path()).unwrap();
        assert!(dev.wait_readable(0).unwrap());
    }
}
