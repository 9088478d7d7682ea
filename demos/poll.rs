//! Drive one joystick and print every decoded event.
//!
//! Pass a TOML config path to override the device node and poll throttle;
//! with no argument the defaults apply (`/dev/input/js0`, 10 ms). Exits when
//! button 0 is pressed, and exits nonzero when the device cannot be opened.

#[cfg(all(target_os = "linux", feature = "js"))]
fn main() {
    use joypoll::{InputKind, Joystick, PollConfig};

    let config = match std::env::args().nth(1) {
        Some(path) => PollConfig::load(&path).expect("load config"),
        None => PollConfig::default(),
    };

    let mut js = match Joystick::open(&config.device) {
        Ok(js) => js,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    println!("Joystick: {} opened successfully", js.name());

    let timeout = config.interval_ms.min(u64::from(u16::MAX)) as u16;
    loop {
        // Block briefly instead of busy-spinning while the stick is idle.
        js.wait_readable(timeout).expect("poll joystick");

        while let Some(event) = js.next_event().expect("read joystick event") {
            match event.kind {
                InputKind::AxisMoved { axis, value } => {
                    println!("axis {axis}: {value:.3}");
                }
                InputKind::ButtonPressed { button } => {
                    println!("button {button} pressed");
                    if button == 0 {
                        println!("button 0 pressed, exiting");
                        return;
                    }
                }
                InputKind::ButtonReleased { button } => {
                    println!("button {button} released");
                }
            }
        }
    }
}

#[cfg(not(all(target_os = "linux", feature = "js")))]
fn main() {
    eprintln!("the poll demo needs the Linux js backend (feature `js` on Linux)");
}
