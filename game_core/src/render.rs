//! Drawing surface abstraction
//!
//! The games only describe what to draw; a backend decides how pixels (or
//! terminal cells) get produced.

use glam::Vec2;

use crate::geometry::Aabb;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(190, 190, 190);
    pub const DARK_GRAY: Color = Color::rgb(90, 90, 90);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite `self` over an opaque `background`
    pub fn over(self, background: Color) -> Color {
        let a = self.a as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a)) / 255) as u8;
        Color::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

/// How a circle is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Fill,
    Outline(f32),
}

/// Draw primitives exposed by a rendering backend
pub trait Surface {
    /// Logical size of the drawable area
    fn size(&self) -> Vec2;

    fn fill(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Aabb, color: Color);

    fn circle(&mut self, center: Vec2, radius: f32, color: Color, stroke: Stroke);

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Blit `text` with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, color: Color);

    /// Extent `text` would occupy when drawn
    fn text_size(&self, text: &str) -> Vec2;

    /// Flip the finished frame to the screen
    fn present(&mut self) -> anyhow::Result<()>;
}

/// Draw `text` centered on `center`
pub fn draw_text_centered(surface: &mut dyn Surface, text: &str, center: Vec2, color: Color) {
    let size = surface.text_size(text);
    surface.text(text, center - size * 0.5, color);
}

/// Draw a block of lines centered on the surface, each line centered horizontally
pub fn draw_centered_lines(surface: &mut dyn Surface, lines: &[&str], color: Color) {
    let screen = surface.size();
    let heights: Vec<Vec2> = lines.iter().map(|line| surface.text_size(line)).collect();
    let total_height: f32 = heights.iter().map(|size| size.y).sum();

    let mut y = screen.y / 2.0 - total_height / 2.0;
    for (line, size) in lines.iter().zip(heights) {
        let x = screen.x / 2.0 - size.x / 2.0;
        surface.text(line, Vec2::new(x, y), color);
        y += size.y;
    }
}
