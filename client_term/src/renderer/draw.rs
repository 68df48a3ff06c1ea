//! Rasterizes game draw calls into terminal cells

use game_core::{Aabb, Color, Stroke};
use glam::Vec2;

use super::fb::{Cell, FrameBuffer, Rgb};
use crate::camera::Camera;

/// Draw target in logical screen coordinates, backed by a cell framebuffer
pub struct Canvas {
    camera: Camera,
    fb: FrameBuffer,
}

impl Canvas {
    pub fn new(camera: Camera) -> Self {
        Self {
            fb: FrameBuffer::new(camera.cols, camera.rows),
            camera,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.camera = Camera::new(self.camera.world, cols, rows);
        self.fb.resize(self.camera.cols, self.camera.rows);
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn fill(&mut self, color: Color) {
        let bg = Rgb::from(color);
        self.fb.clear(Cell { ch: ' ', fg: bg, bg });
    }

    pub fn fill_rect(&mut self, rect: Aabb, color: Color) {
        for row in self.camera.row_span(rect.min.y, rect.max.y) {
            for col in self.camera.col_span(rect.min.x, rect.max.x) {
                self.blend(col, row, color);
            }
        }
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color, stroke: Stroke) {
        match stroke {
            Stroke::Fill => {
                let rows = self.camera.row_span(center.y - radius, center.y + radius);
                let cols = self.camera.col_span(center.x - radius, center.x + radius);
                for row in rows {
                    for col in cols.clone() {
                        if self.camera.cell_center(col, row).distance(center) <= radius {
                            self.blend(col, row, color);
                        }
                    }
                }
                // Small balls still get a cell
                self.plot(center, color);
            }
            Stroke::Outline(_) => {
                let step = self.step_len();
                let segments = ((std::f32::consts::TAU * radius / step).ceil() as usize).max(8);
                let mut last = None;
                for i in 0..segments {
                    let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
                    let point = center + Vec2::new(angle.cos(), angle.sin()) * radius;
                    let cell = self.camera.world_to_cell(point);
                    if cell != last {
                        self.plot(point, color);
                        last = cell;
                    }
                }
            }
        }
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let steps = (from.distance(to) / self.step_len()).ceil().max(1.0) as usize;
        let mut last = None;
        for i in 0..=steps {
            let point = from.lerp(to, i as f32 / steps as f32);
            let cell = self.camera.world_to_cell(point);
            if cell != last {
                self.plot(point, color);
                last = cell;
            }
        }
    }

    pub fn text(&mut self, text: &str, pos: Vec2, color: Color) {
        let cell = self.camera.cell_size();
        let row = (pos.y / cell.y).round();
        if row < 0.0 || row >= self.camera.rows as f32 {
            return;
        }
        let start = (pos.x / cell.x).round();
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as f32;
            if col < 0.0 {
                continue;
            }
            if col >= self.camera.cols as f32 {
                break;
            }
            let (col, row) = (col as u16, row as u16);
            let bg = self.fb.get(col, row).map(|c| c.bg).unwrap_or_default();
            let fg = color.over(bg.into());
            self.fb.put_char(col, row, ch, fg.into());
        }
    }

    /// One cell per character, one row high
    pub fn text_size(&self, text: &str) -> Vec2 {
        let cell = self.camera.cell_size();
        Vec2::new(text.chars().count() as f32 * cell.x, cell.y)
    }

    fn step_len(&self) -> f32 {
        let cell = self.camera.cell_size();
        cell.x.min(cell.y) * 0.5
    }

    fn plot(&mut self, point: Vec2, color: Color) {
        if let Some((col, row)) = self.camera.world_to_cell(point) {
            self.blend(col, row, color);
        }
    }

    fn blend(&mut self, col: u16, row: u16, color: Color) {
        let bg = self.fb.get(col, row).map(|c| c.bg).unwrap_or_default();
        self.fb.paint(col, row, color.over(bg.into()).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(Camera::new(Vec2::new(720.0, 480.0), 80, 24))
    }

    fn bg(canvas: &Canvas, col: u16, row: u16) -> Rgb {
        canvas.framebuffer().get(col, row).unwrap().bg
    }

    #[test]
    fn fill_rect_paints_covered_cells() {
        let mut canvas = canvas();
        canvas.fill(Color::GRAY);
        canvas.fill_rect(
            Aabb::new(Vec2::new(0.0, 190.0), Vec2::new(10.0, 290.0)),
            Color::BLACK,
        );
        assert_eq!(bg(&canvas, 0, 10), Rgb::new(0, 0, 0));
        assert_eq!(bg(&canvas, 1, 14), Rgb::new(0, 0, 0));
        assert_eq!(bg(&canvas, 2, 10), Rgb::from(Color::GRAY));
        assert_eq!(bg(&canvas, 0, 8), Rgb::from(Color::GRAY));
    }

    #[test]
    fn small_circle_covers_its_center_cell() {
        let mut canvas = canvas();
        canvas.fill(Color::GRAY);
        canvas.circle(Vec2::new(360.0, 240.0), 2.0, Color::RED, Stroke::Fill);
        assert_eq!(bg(&canvas, 40, 12), Rgb::new(255, 0, 0));
    }

    #[test]
    fn line_reaches_both_ends() {
        let mut canvas = canvas();
        canvas.fill(Color::GRAY);
        canvas.line(Vec2::new(1.0, 1.0), Vec2::new(719.0, 479.0), Color::WHITE);
        assert_eq!(bg(&canvas, 0, 0), Rgb::new(255, 255, 255));
        assert_eq!(bg(&canvas, 79, 23), Rgb::new(255, 255, 255));
    }

    #[test]
    fn text_blends_alpha_over_background() {
        let mut canvas = canvas();
        canvas.fill(Color::BLACK);
        canvas.text("hi", Vec2::new(0.0, 0.0), Color::WHITE.with_alpha(0));
        let cell = canvas.framebuffer().get(0, 0).unwrap();
        assert_eq!(cell.ch, 'h');
        assert_eq!(cell.fg, Rgb::new(0, 0, 0));
        assert_eq!(canvas.framebuffer().get(1, 0).unwrap().ch, 'i');
    }

    #[test]
    fn text_size_matches_cells() {
        let canvas = canvas();
        assert_eq!(canvas.text_size("abc"), Vec2::new(27.0, 20.0));
    }
}
