/// Input as seen by the tester, independent of the SDL event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    ButtonDown(u8),
    ButtonUp(u8),
    AxisMotion { axis: u8, value: i16 },
    Quit,
}
