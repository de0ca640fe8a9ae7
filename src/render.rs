use crate::layout::{
    ButtonState, BACKGROUND, EXIT_HINT, EXIT_HINT_MARGIN, LEFT_STICK_ANCHOR, RIGHT_STICK_ANCHOR,
    STICK_DOT_RADIUS, STICK_LABEL_OFFSET, STICK_RADIUS, STICK_RING, STICK_SENSITIVITY, TEXT,
};
use crate::state::{InputState, StickPosition};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

pub trait Surface {
    fn clear(&mut self, color: Color) -> Result<(), String>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;
    fn draw_points(&mut self, points: &[Point], color: Color) -> Result<(), String>;
    /// Draw `text` at `anchor`; when `centered` the anchor is the middle of the
    /// rendered text instead of its top-left corner.
    fn draw_text(&mut self, text: &str, anchor: Point, color: Color, centered: bool) -> Result<(), String>;
    fn present(&mut self);
}

/// Points of a filled disk: every offset inside the 2r bounding square with
/// dx² + dy² <= r².
pub fn disk_points(center: Point, radius: i32) -> Vec<Point> {
    let mut points = Vec::new();
    for w in 0..radius * 2 {
        for h in 0..radius * 2 {
            let dx = radius - w;
            let dy = radius - h;
            if dx * dx + dy * dy <= radius * radius {
                points.push(Point::new(center.x() + dx, center.y() + dy));
            }
        }
    }
    points
}

pub fn stick_dot_center(anchor: (i32, i32), stick: StickPosition) -> Point {
    Point::new(
        (anchor.0 as f32 + stick.x * STICK_SENSITIVITY) as i32,
        (anchor.1 as f32 + stick.y * STICK_SENSITIVITY) as i32,
    )
}

fn draw_stick<S: Surface>(
    surface: &mut S,
    anchor: (i32, i32),
    stick: StickPosition,
    click: ButtonState,
    label: &str,
) -> Result<(), String> {
    let center = Point::new(anchor.0, anchor.1);
    surface.draw_points(&disk_points(center, STICK_RADIUS), STICK_RING)?;
    surface.draw_points(
        &disk_points(stick_dot_center(anchor, stick), STICK_DOT_RADIUS),
        click.stick_color(),
    )?;
    surface.draw_text(
        label,
        Point::new(anchor.0, anchor.1 - STICK_LABEL_OFFSET),
        TEXT,
        true,
    )
}

pub fn render_frame<S: Surface>(
    surface: &mut S,
    state: &InputState,
    width: u32,
    height: u32,
) -> Result<(), String> {
    surface.clear(BACKGROUND)?;

    for button in &state.buttons {
        surface.fill_rect(button.rect, button.state.button_color())?;
        surface.draw_text(button.label, button.label_anchor(), TEXT, true)?;
    }

    draw_stick(surface, LEFT_STICK_ANCHOR, state.left_stick, state.left_click, "L3")?;
    draw_stick(surface, RIGHT_STICK_ANCHOR, state.right_stick, state.right_click, "R3")?;

    surface.draw_text(
        EXIT_HINT,
        Point::new(width as i32 / 2, height as i32 - EXIT_HINT_MARGIN),
        TEXT,
        true,
    )?;

    surface.present();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use crate::events::ControllerEvent;
    use crate::layout::{BUTTON_IDLE, PRESSED, STICK_IDLE, WAS_CLICKED};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Clear(Color),
        Rect(Rect, Color),
        Points(Vec<Point>, Color),
        Text(String, Point, bool),
        Present,
    }

    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, color: Color) -> Result<(), String> {
            self.calls.push(Call::Clear(color));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
            self.calls.push(Call::Rect(rect, color));
            Ok(())
        }

        fn draw_points(&mut self, points: &[Point], color: Color) -> Result<(), String> {
            self.calls.push(Call::Points(points.to_vec(), color));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, anchor: Point, _color: Color, centered: bool) -> Result<(), String> {
            self.calls.push(Call::Text(text.to_string(), anchor, centered));
            Ok(())
        }

        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    fn frame(state: &InputState) -> Vec<Call> {
        let mut recorder = Recorder::default();
        render_frame(&mut recorder, state, 640, 480).unwrap();
        recorder.calls
    }

    fn rect_color(calls: &[Call], rect: Rect) -> Color {
        calls
            .iter()
            .find_map(|c| match c {
                Call::Rect(r, color) if *r == rect => Some(*color),
                _ => None,
            })
            .unwrap()
    }

    fn point_sets(calls: &[Call]) -> Vec<(Vec<Point>, Color)> {
        calls
            .iter()
            .filter_map(|c| match c {
                Call::Points(p, color) => Some((p.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn disk_includes_center_and_respects_radius() {
        let points = disk_points(Point::new(10, 10), 3);
        assert!(points.contains(&Point::new(10, 10)));
        assert!(points.contains(&Point::new(13, 10)));
        assert!(points.contains(&Point::new(10, 13)));
        assert!(points
            .iter()
            .all(|p| (p.x() - 10).pow(2) + (p.y() - 10).pow(2) <= 9));
        // the scan never reaches offset -r
        assert!(!points.contains(&Point::new(7, 10)));
    }

    #[test]
    fn zero_radius_disk_is_empty() {
        assert!(disk_points(Point::new(0, 0), 0).is_empty());
    }

    #[test]
    fn frame_order_is_clear_buttons_sticks_hint_present() {
        let state = InputState::new(&ControllerConfig::default());
        let calls = frame(&state);
        assert_eq!(calls.first(), Some(&Call::Clear(BACKGROUND)));
        assert_eq!(calls.last(), Some(&Call::Present));
        assert_eq!(
            calls[calls.len() - 2],
            Call::Text(EXIT_HINT.to_string(), Point::new(320, 450), true)
        );
        let rects = calls.iter().filter(|c| matches!(c, Call::Rect(..))).count();
        assert_eq!(rects, 15);
    }

    #[test]
    fn idle_frame_uses_idle_colors() {
        let state = InputState::new(&ControllerConfig::default());
        let calls = frame(&state);
        for call in &calls {
            if let Call::Rect(_, color) = call {
                assert_eq!(*color, BUTTON_IDLE);
            }
        }
        let sets = point_sets(&calls);
        assert_eq!(sets.len(), 4);
        assert_eq!(sets[0].1, STICK_RING);
        assert_eq!(sets[1].1, STICK_IDLE);
        assert_eq!(sets[2].1, STICK_RING);
        assert_eq!(sets[3].1, STICK_IDLE);
    }

    #[test]
    fn pressed_and_released_button_colors() {
        let mut state = InputState::new(&ControllerConfig::default());
        let a_rect = Rect::new(500, 240, 45, 45);

        state.apply(ControllerEvent::ButtonDown(0));
        assert_eq!(rect_color(&frame(&state), a_rect), PRESSED);

        state.apply(ControllerEvent::ButtonUp(0));
        assert_eq!(rect_color(&frame(&state), a_rect), WAS_CLICKED);
    }

    #[test]
    fn labels_are_centered_on_buttons_and_sticks() {
        let state = InputState::new(&ControllerConfig::default());
        let calls = frame(&state);
        assert!(calls.contains(&Call::Text("A".into(), Point::new(522, 262), true)));
        assert!(calls.contains(&Call::Text("L3".into(), Point::new(200, 325), true)));
        assert!(calls.contains(&Call::Text("R3".into(), Point::new(440, 325), true)));
    }

    #[test]
    fn stick_dot_follows_deflection() {
        let mut state = InputState::new(&ControllerConfig::default());
        state.apply(ControllerEvent::AxisMotion { axis: 0, value: 32767 });
        state.apply(ControllerEvent::AxisMotion { axis: 3, value: -32767 });
        state.apply(ControllerEvent::ButtonDown(15));

        let sets = point_sets(&frame(&state));
        assert_eq!(sets[1].0, disk_points(Point::new(228, 380), STICK_DOT_RADIUS));
        assert_eq!(sets[3].0, disk_points(Point::new(440, 352), STICK_DOT_RADIUS));
        assert_eq!(sets[3].1, PRESSED);
    }

    #[test]
    fn dot_position_is_truncated_to_pixels() {
        let stick = StickPosition { x: 0.5, y: -0.51 };
        // 0.5 * 28 = 14, -0.51 * 28 = -14.28
        assert_eq!(stick_dot_center((200, 380), stick), Point::new(214, 365));
    }
}
