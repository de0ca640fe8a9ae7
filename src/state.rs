use crate::config::ControllerConfig;
use crate::controller::normalize_axis;
use crate::events::ControllerEvent;
use crate::layout::{default_buttons, ButtonState, VirtualButton};
use tracing::{info, trace};

pub const AXIS_LEFT_X: u8 = 0;
pub const AXIS_LEFT_Y: u8 = 1;
pub const AXIS_RIGHT_X: u8 = 2;
pub const AXIS_RIGHT_Y: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub buttons: Vec<VirtualButton>,
    pub left_stick: StickPosition,
    pub right_stick: StickPosition,
    pub left_click: ButtonState,
    pub right_click: ButtonState,
    deadzone: i32,
    left_stick_button: u8,
    right_stick_button: u8,
}

impl InputState {
    pub fn new(config: &ControllerConfig) -> Self {
        Self::with_buttons(config, default_buttons())
    }

    pub fn with_buttons(config: &ControllerConfig, buttons: Vec<VirtualButton>) -> Self {
        Self {
            buttons,
            left_stick: StickPosition::default(),
            right_stick: StickPosition::default(),
            left_click: ButtonState::Idle,
            right_click: ButtonState::Idle,
            deadzone: config.deadzone,
            left_stick_button: config.left_stick_button,
            right_stick_button: config.right_stick_button,
        }
    }

    /// Apply a single event. Returns `Stopped` for a quit request; the exit
    /// chord is checked separately by [`InputState::exit_requested`].
    pub fn apply(&mut self, event: ControllerEvent) -> LoopState {
        trace!(?event, "input event");
        match event {
            ControllerEvent::Quit => return LoopState::Stopped,
            ControllerEvent::ButtonDown(id) => self.set_button(id, true),
            ControllerEvent::ButtonUp(id) => self.set_button(id, false),
            ControllerEvent::AxisMotion { axis, value } => {
                let norm = normalize_axis(value, self.deadzone);
                match axis {
                    AXIS_LEFT_X => self.left_stick.x = norm,
                    AXIS_LEFT_Y => self.left_stick.y = norm,
                    AXIS_RIGHT_X => self.right_stick.x = norm,
                    AXIS_RIGHT_Y => self.right_stick.y = norm,
                    _ => {}
                }
            }
        }
        LoopState::Running
    }

    fn set_button(&mut self, id: u8, is_down: bool) {
        let state = ButtonState::from_press(is_down);
        for button in self.buttons.iter_mut().filter(|b| b.button_id == id) {
            button.state = state;
        }
        if id == self.left_stick_button {
            self.left_click = state;
        }
        if id == self.right_stick_button {
            self.right_click = state;
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.left_click == ButtonState::Pressed && self.right_click == ButtonState::Pressed
    }

    /// Drain one poll pass worth of events. Every event in the pass is
    /// applied; the pass ends `Stopped` if any event asked to quit or the exit
    /// chord was held after any event.
    pub fn drain<I>(&mut self, events: I) -> LoopState
    where
        I: IntoIterator<Item = ControllerEvent>,
    {
        let mut next = LoopState::Running;
        for event in events {
            if self.apply(event) == LoopState::Stopped {
                info!("Window closed");
                next = LoopState::Stopped;
            }
            if self.exit_requested() && next == LoopState::Running {
                info!("Exit chord held");
                next = LoopState::Stopped;
            }
        }
        next
    }
}
