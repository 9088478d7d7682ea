//! Input backends for `joypoll`.
//!
//! Implementations of [`EventSource`](crate::device::EventSource) for the
//! supported input sources.
//!
//! # Feature flags
//! - **`js`** — enables the Linux joystick (`js`) device backend (default).
//! - **`debug-log`** — extra stderr diagnostics during device bring-up
//!   (debug builds only).
//!
//! The virtual backend is always available; it backs the demos and the test
//! suite on every platform.
//!
//! Most users should not construct backends directly. Prefer the high-level
//! [`Joystick`](crate::joystick::Joystick) API: `Joystick::open()` for the
//! real device, `Joystick::from_source()` to wrap any backend.

#[cfg(all(feature = "js", target_os = "linux"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "js", target_os = "linux"))))]
pub mod linux;

pub mod virtual_input;
