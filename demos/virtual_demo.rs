//! Feed synthetic events through the normal polling path.

use joypoll::backends::virtual_input::VirtualDevice;
use joypoll::{InputKind, Joystick};

fn main() {
    // Create a virtual device and script some input
    let mut device = VirtualDevice::new("Demo Virtual Pad");
    device.set_axis(0, 24575); // ~0.75 normalized
    device.press_button(1);
    device.release_button(1);

    // Poll it through the same API the real device uses
    let mut js = Joystick::from_source(Box::new(device));
    while let Some(event) = js.next_event().expect("virtual reads do not fail") {
        match event.kind {
            InputKind::AxisMoved { axis, value } => {
                println!("(Virtual) Axis {axis} = {value:.2}");
            }
            InputKind::ButtonPressed { button } => {
                println!("(Virtual) Button {button} pressed");
            }
            InputKind::ButtonReleased { button } => {
                println!("(Virtual) Button {button} released");
            }
        }
    }

    println!(
        "final state: axis0={:.2} button1={}",
        js.axis(0).unwrap(),
        js.button(1).unwrap()
    );
}
