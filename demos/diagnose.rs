//! Print what the driver reports about one joystick, then its initial state.

#[cfg(all(target_os = "linux", feature = "js"))]
fn main() {
    use joypoll::{Joystick, DEFAULT_DEVICE, MAX_AXES, MAX_BUTTONS};

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DEVICE.to_string());
    let mut js = Joystick::open(&path).expect("open joystick");

    let meta = js.metadata();
    println!(
        "path={} name={:?} axes={:?} buttons={:?} driver={:?}",
        path, meta.name, meta.axes, meta.buttons, meta.driver_version
    );

    // The driver replays current state as init events right after open.
    let replayed = js.poll().expect("drain initial state");
    println!("drained {replayed} event(s)");

    for i in 0..MAX_AXES {
        println!("axis {i}: {:+.3} (raw {})", js.axis(i).unwrap(), js.raw_axis(i).unwrap());
    }
    let pressed: Vec<usize> = (0..MAX_BUTTONS)
        .filter(|&i| js.button(i).unwrap())
        .collect();
    println!("pressed buttons: {pressed:?}");
}

#[cfg(not(all(target_os = "linux", feature = "js")))]
fn main() {
    eprintln!("the diagnose demo needs the Linux js backend (feature `js` on Linux)");
}
