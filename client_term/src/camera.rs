//! Orthographic mapping between the game's logical screen and terminal cells

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub world: Vec2, // Logical screen size in pixels
    pub cols: u16,
    pub rows: u16,
}

impl Camera {
    pub fn new(world: Vec2, cols: u16, rows: u16) -> Self {
        Self {
            world,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Logical pixels covered by one cell
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.world.x / self.cols as f32, self.world.y / self.rows as f32)
    }

    /// Cell containing a world point, or `None` if it is off screen
    pub fn world_to_cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        let cell = self.cell_size();
        let col = (pos.x / cell.x).floor();
        let row = (pos.y / cell.y).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// World point at the center of a cell
    pub fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        let cell = self.cell_size();
        Vec2::new((col as f32 + 0.5) * cell.x, (row as f32 + 0.5) * cell.y)
    }

    /// Half-open column range covering `[min_x, max_x]`, clamped to the screen
    pub fn col_span(&self, min_x: f32, max_x: f32) -> std::ops::Range<u16> {
        let cell = self.cell_size().x;
        span(min_x / cell, max_x / cell, self.cols)
    }

    /// Half-open row range covering `[min_y, max_y]`, clamped to the screen
    pub fn row_span(&self, min_y: f32, max_y: f32) -> std::ops::Range<u16> {
        let cell = self.cell_size().y;
        span(min_y / cell, max_y / cell, self.rows)
    }
}

fn span(from: f32, to: f32, limit: u16) -> std::ops::Range<u16> {
    let start = from.floor().clamp(0.0, limit as f32) as u16;
    let end = to.ceil().clamp(0.0, limit as f32) as u16;
    start..end.max(start)
}
