//! JoyPoll — minimal polling reader for Linux joystick (`js`) devices.
//!
//! Opens one `/dev/input/js*` node non-blocking, decodes the kernel's binary
//! event stream, and exposes normalized axis and button state through a
//! polled API. Single-threaded by design: one cooperative loop calls
//! [`Joystick::read_event`] (or [`Joystick::poll`]) and reads values back —
//! no callbacks, no background threads.
//!
//! ```no_run
//! use joypoll::Joystick;
//!
//! fn main() -> Result<(), joypoll::DeviceError> {
//!     let mut js = Joystick::open_default()?;
//!     loop {
//!         while js.read_event()? {}
//!         println!("x={:+.2} y={:+.2} fire={}", js.axis(0)?, js.axis(1)?, js.button(0)?);
//!         std::thread::sleep(std::time::Duration::from_millis(10));
//!     }
//! }
//! ```

pub mod backends;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod joystick;
pub mod metadata;
pub mod state;
pub mod wire;

pub use config::*;
pub use device::*;
pub use error::*;
pub use event::*;
pub use joystick::*;
pub use metadata::*;
pub use state::*;
