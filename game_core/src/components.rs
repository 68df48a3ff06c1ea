use glam::Vec2;
use rand::Rng;
use serde::Deserialize;

use crate::config::PongConfig;
use crate::geometry::Aabb;
use crate::input::Key;

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the x axis pointing towards this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Paddle component - a player's bat, pinned to one side of the screen
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed by side
    pub y: f32, // Top edge, clamped to [0, max_y]
    pub width: f32,
    pub height: f32,
    pub max_y: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &PongConfig) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_start_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            max_y: config.paddle_max_y(),
        }
    }

    /// Shift vertically by `delta`, staying inside the play-field
    pub fn shift(&mut self, delta: f32) {
        self.y = (self.y + delta).clamp(0.0, self.max_y);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }
}

/// Keys driving one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleControls {
    pub up: Key,
    pub down: Key,
}

impl PaddleControls {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                up: Key::W,
                down: Key::S,
            },
            Side::Right => Self {
                up: Key::Up,
                down: Key::Down,
            },
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Launch the ball horizontally towards `toward` with a random vertical spread.
    /// `spread` is clamped to `[0, 1]`; non-finite spreads serve straight.
    pub fn start(&mut self, speed: f32, toward: Side, spread: f32, rng: &mut crate::GameRng) {
        let spread = if spread.is_finite() { spread.clamp(0.0, 1.0) } else { 0.0 };
        let u: f32 = if spread > 0.0 {
            rng.0.gen_range(-spread..=spread)
        } else {
            0.0
        };
        self.vel = Vec2::new(toward.sign() * speed, speed * u);
    }

    /// Euler step
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Square hit-box centered on the ball, side = 2 * radius
    pub fn hit_box(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}
