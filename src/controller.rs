extern crate sdl2;

use crate::events::ControllerEvent;
use sdl2::event::Event;
use sdl2::joystick::Joystick;
use sdl2::JoystickSubsystem;
use tracing::{debug, info, warn};

pub const AXIS_FULL_SCALE: f32 = 32767.0;

/// Map a raw axis reading to [-1.0, 1.0]. Readings whose magnitude does not
/// exceed `deadzone` snap to exactly zero.
pub fn normalize_axis(raw: i16, deadzone: i32) -> f32 {
    // Promote before abs so -32768 does not overflow
    let raw = raw as i32;
    if raw.abs() <= deadzone {
        return 0.0;
    }
    (raw as f32 / AXIS_FULL_SCALE).clamp(-1.0, 1.0)
}

/// Translate an SDL event into a tester event. Anything the tester does not
/// react to yields `None`.
pub fn translate_event(event: &Event) -> Option<ControllerEvent> {
    match *event {
        Event::Quit { .. } => Some(ControllerEvent::Quit),
        Event::JoyButtonDown { button_idx, .. } => Some(ControllerEvent::ButtonDown(button_idx)),
        Event::JoyButtonUp { button_idx, .. } => Some(ControllerEvent::ButtonUp(button_idx)),
        Event::JoyAxisMotion {
            axis_idx, value, ..
        } => Some(ControllerEvent::AxisMotion {
            axis: axis_idx,
            value,
        }),
        _ => None,
    }
}

/// Open the first joystick that SDL can open. No device is not an error: the
/// tester keeps running with all inputs idle.
pub fn open_first_joystick(subsystem: &JoystickSubsystem) -> Option<Joystick> {
    let available = match subsystem.num_joysticks() {
        Ok(n) => n,
        Err(e) => {
            warn!("can't enumerate joysticks: {}", e);
            return None;
        }
    };

    info!("{} joysticks available", available);

    let joystick = (0..available).find_map(|id| {
        debug!("Attempting to open joystick {}", id);
        match subsystem.open(id) {
            Ok(j) => {
                info!(
                    "Opened \"{}\" ({} buttons, {} axes)",
                    j.name(),
                    j.num_buttons(),
                    j.num_axes()
                );
                Some(j)
            }
            Err(e) => {
                debug!("failed to open joystick {}: {}", id, e);
                None
            }
        }
    });

    if joystick.is_none() {
        warn!("No joystick found, inputs will stay idle");
    }
    joystick
}
