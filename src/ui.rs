use crate::render::Surface;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

/// SDL canvas with an optional font. Without a font every text call is a
/// no-op.
pub struct SdlSurface<'ttf> {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    font: Option<Font<'ttf, 'static>>,
}

/// The font to draw `text` with, or `None` when there is nothing to draw.
fn font_for_text<'a, F>(font: Option<&'a F>, text: &str) -> Option<&'a F> {
    font.filter(|_| !text.is_empty())
}

/// Target rect for a `w`×`h` glyph surface. Centering shifts by half the
/// size, truncated.
fn text_dst(anchor: Point, w: u32, h: u32, centered: bool) -> Rect {
    if centered {
        Rect::new(anchor.x() - w as i32 / 2, anchor.y() - h as i32 / 2, w, h)
    } else {
        Rect::new(anchor.x(), anchor.y(), w, h)
    }
}

impl<'ttf> SdlSurface<'ttf> {
    pub fn new(canvas: Canvas<Window>, font: Option<Font<'ttf, 'static>>) -> Self {
        let texture_creator = canvas.texture_creator();
        Self {
            canvas,
            texture_creator,
            font,
        }
    }
}

impl Surface for SdlSurface<'_> {
    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn draw_points(&mut self, points: &[Point], color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_points(points)
    }

    fn draw_text(&mut self, text: &str, anchor: Point, color: Color, centered: bool) -> Result<(), String> {
        let Some(font) = font_for_text(self.font.as_ref(), text) else {
            return Ok(());
        };

        // Rendered fresh each call; the surface and texture drop at the end of
        // this scope.
        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| e.to_string())?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        let dst = text_dst(anchor, surface.width(), surface.height(), centered);
        self.canvas.copy(&texture, None, dst)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
