//! Crossterm-backed platform: surface, input and frame clock in one value

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use game_core::{Aabb, Color, FrameClock, Input, InputEvent, Key, Stroke, Surface};
use glam::Vec2;

use crate::camera::Camera;
use crate::clock::PacedClock;
use crate::input::{map_key, should_quit, HeldKeys};
use crate::renderer::{Canvas, TerminalRenderer};

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    canvas: Canvas,
    held: HeldKeys,
    clock: PacedClock,
}

impl TerminalPlatform {
    /// Map `world` onto the current terminal size
    pub fn new(world: Vec2) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        log::info!("Terminal {}x{} cells for a {}x{} screen", cols, rows, world.x, world.y);
        Ok(Self {
            renderer: TerminalRenderer::new(),
            canvas: Canvas::new(Camera::new(world, cols, rows)),
            held: HeldKeys::default(),
            clock: PacedClock::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.held = HeldKeys::new(self.renderer.key_releases());
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn translate(&mut self, event: Event, out: &mut Vec<InputEvent>) {
        match event {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press => {
                    if should_quit(key) {
                        out.push(InputEvent::Quit);
                        return;
                    }
                    let mapped = map_key(key.code);
                    if mapped != Key::Other {
                        self.held.press(mapped, Instant::now());
                        out.push(InputEvent::KeyDown(mapped));
                    }
                }
                KeyEventKind::Repeat => self.held.press(map_key(key.code), Instant::now()),
                KeyEventKind::Release => self.held.release(map_key(key.code)),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let pos = self.canvas.camera().cell_center(mouse.column, mouse.row);
                out.push(InputEvent::PointerDown(pos));
            }
            Event::Resize(cols, rows) => {
                log::debug!("Resized to {}x{}", cols, rows);
                self.canvas.resize(cols, rows);
                self.renderer.invalidate();
            }
            Event::FocusLost => self.held.clear(),
            _ => {}
        }
    }
}

impl Surface for TerminalPlatform {
    fn size(&self) -> Vec2 {
        self.canvas.camera().world
    }

    fn fill(&mut self, color: Color) {
        self.canvas.fill(color);
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.canvas.fill_rect(rect, color);
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color, stroke: Stroke) {
        self.canvas.circle(center, radius, color, stroke);
    }

    // Cells are the thinnest stroke a terminal has
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, _width: f32) {
        self.canvas.line(from, to, color);
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.canvas.text(text, pos, color);
    }

    fn text_size(&self, text: &str) -> Vec2 {
        self.canvas.text_size(text)
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.draw_swap(self.canvas.framebuffer_mut())
    }
}

impl Input for TerminalPlatform {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.translate(event, &mut events);
        }
        Ok(events)
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.is_held(key, Instant::now())
    }
}

impl FrameClock for TerminalPlatform {
    fn tick(&mut self, fps: u32) -> f32 {
        self.clock.tick(fps)
    }

    fn now(&self) -> f32 {
        self.clock.now()
    }
}
