//! Framebuffer of colored character cells

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<game_core::Color> for Rgb {
    fn from(color: game_core::Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<Rgb> for game_core::Color {
    fn from(rgb: Rgb) -> Self {
        game_core::Color::rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// A single terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// 2D framebuffer of styled character cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Paint the cell background, dropping any glyph
    pub fn paint(&mut self, x: u16, y: u16, bg: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch: ' ', fg: bg, bg };
        }
    }

    /// Write a glyph, keeping the cell background
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i].ch = ch;
            self.cells[i].fg = fg;
        }
    }
}
