use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::components::Side;
use crate::params::Params;

/// Pong configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_spread: f32,
    pub speed_initial: f32,
    pub speed_step: f32,
    pub fade_duration: f32,
    pub first_serve: Side,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_spread: Params::BALL_SPREAD,
            speed_initial: Params::SPEED_INITIAL,
            speed_step: Params::SPEED_STEP,
            fade_duration: Params::FADE_DURATION,
            first_serve: Side::Left,
        }
    }
}

impl PongConfig {
    /// Get X position (left edge) for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.screen_width - self.paddle_width,
        }
    }

    /// Y position (top edge) that centers a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Lowest valid top edge for a paddle
    pub fn paddle_max_y(&self) -> f32 {
        (self.screen_height - self.paddle_height).max(0.0)
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

/// Tic-Tac-Toe configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub screen_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            screen_size: Params::GRID_SCREEN,
        }
    }
}

impl GridConfig {
    /// Side length of one cell in pixels
    pub fn cell_size(&self) -> f32 {
        self.screen_size / Params::GRID_CELLS as f32
    }
}

/// Game configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pong: PongConfig,
    pub grid: GridConfig,
    pub target_fps: Option<u32>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fps(&self) -> u32 {
        self.target_fps.unwrap_or(Params::TARGET_FPS).max(1)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let pong = &self.pong;
        for (name, value) in [
            ("pong.screen_width", pong.screen_width),
            ("pong.screen_height", pong.screen_height),
            ("pong.paddle_width", pong.paddle_width),
            ("pong.paddle_height", pong.paddle_height),
            ("pong.ball_radius", pong.ball_radius),
            ("pong.speed_initial", pong.speed_initial),
            ("pong.speed_step", pong.speed_step),
            ("pong.fade_duration", pong.fade_duration),
            ("grid.screen_size", self.grid.screen_size),
        ] {
            ensure!(value.is_finite() && value > 0.0, "{name} must be positive, got {value}");
        }
        ensure!(
            (0.0..=1.0).contains(&pong.ball_spread),
            "pong.ball_spread must be within [0, 1], got {}",
            pong.ball_spread
        );
        Ok(())
    }
}
