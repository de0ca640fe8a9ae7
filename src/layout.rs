//! Fixed on-screen layout: the virtual button table, stick geometry and palette.

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

pub const BACKGROUND: Color = Color::RGB(20, 22, 26);
pub const TEXT: Color = Color::RGB(255, 255, 255);
pub const BUTTON_IDLE: Color = Color::RGB(60, 60, 60);
pub const STICK_IDLE: Color = Color::RGB(40, 40, 40);
pub const PRESSED: Color = Color::RGB(0, 255, 255);
pub const WAS_CLICKED: Color = Color::RGB(0, 0, 128);
pub const STICK_RING: Color = Color::RGB(80, 80, 80);

pub const STICK_RADIUS: i32 = 40;
pub const STICK_DOT_RADIUS: i32 = 12;
/// Pixels the dot travels per unit of normalized axis deflection.
pub const STICK_SENSITIVITY: f32 = 28.0;
pub const STICK_LABEL_OFFSET: i32 = 55;
pub const LEFT_STICK_ANCHOR: (i32, i32) = (200, 380);
pub const RIGHT_STICK_ANCHOR: (i32, i32) = (440, 380);

pub const EXIT_HINT: &str = "Press L3 + R3 to exit...";
pub const EXIT_HINT_MARGIN: i32 = 30;

/// Press history of a single input. Once released it stays `WasClicked`
/// until pressed again; it never returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Pressed,
    WasClicked,
}

impl ButtonState {
    pub fn from_press(is_down: bool) -> Self {
        if is_down {
            ButtonState::Pressed
        } else {
            ButtonState::WasClicked
        }
    }

    pub fn button_color(self) -> Color {
        match self {
            ButtonState::Idle => BUTTON_IDLE,
            ButtonState::Pressed => PRESSED,
            ButtonState::WasClicked => WAS_CLICKED,
        }
    }

    pub fn stick_color(self) -> Color {
        match self {
            ButtonState::Idle => STICK_IDLE,
            ButtonState::Pressed => PRESSED,
            ButtonState::WasClicked => WAS_CLICKED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualButton {
    pub rect: Rect,
    pub button_id: u8,
    pub label: &'static str,
    pub state: ButtonState,
}

impl VirtualButton {
    pub fn new(x: i32, y: i32, w: u32, h: u32, button_id: u8, label: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            button_id,
            label,
            state: ButtonState::Idle,
        }
    }

    pub fn label_anchor(&self) -> Point {
        Point::new(
            self.rect.x() + self.rect.width() as i32 / 2,
            self.rect.y() + self.rect.height() as i32 / 2,
        )
    }
}

/// The face, shoulder, menu and d-pad buttons, in draw order.
pub fn default_buttons() -> Vec<VirtualButton> {
    vec![
        VirtualButton::new(500, 240, 45, 45, 0, "A"),
        VirtualButton::new(555, 185, 45, 45, 1, "B"),
        VirtualButton::new(50, 30, 80, 40, 4, "L1"),
        VirtualButton::new(140, 30, 80, 40, 6, "L2"),
        VirtualButton::new(420, 30, 80, 40, 7, "R2"),
        VirtualButton::new(510, 30, 80, 40, 5, "R1"),
        VirtualButton::new(210, 220, 60, 25, 12, "SEL"),
        VirtualButton::new(295, 215, 50, 35, 16, "FN"),
        VirtualButton::new(370, 220, 60, 25, 13, "STR"),
        VirtualButton::new(500, 130, 45, 45, 2, "X"),
        VirtualButton::new(445, 185, 45, 45, 3, "Y"),
        VirtualButton::new(100, 130, 40, 40, 8, "U"),
        VirtualButton::new(100, 230, 40, 40, 9, "D"),
        VirtualButton::new(50, 180, 40, 40, 10, "L"),
        VirtualButton::new(150, 180, 40, 40, 11, "R"),
    ]
}
