use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Runtime knobs for the tester. The defaults describe a typical SDL joystick
/// mapping; stick-click indices in particular vary between controllers.
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub font_path: PathBuf,
    pub font_point_size: u16,
    /// Raw axis magnitude at or below which a stick reads as centered.
    pub deadzone: i32,
    pub left_stick_button: u8,
    pub right_stick_button: u8,
    pub frame_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            window_title: "GPTest".to_string(),
            window_width: 640,
            window_height: 480,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_point_size: 18,
            deadzone: 8000,
            left_stick_button: 14,
            right_stick_button: 15,
            frame_delay: Duration::from_millis(16),
        }
    }
}
