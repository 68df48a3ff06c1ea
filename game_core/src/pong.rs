//! Pong match controller
//!
//! Owns the entity world and drives the serve/pause/settings state machine.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Ball, Paddle, Side};
use crate::config::PongConfig;
use crate::fade::TimedFadeText;
use crate::fsm::{MatchAction, MatchFsm, MatchState};
use crate::geometry::Aabb;
use crate::input::{Input, InputEvent, Key};
use crate::render::{draw_centered_lines, draw_text_centered, Color, Stroke, Surface};
use crate::resources::{Events, GameRng, MatchSetup, Score};
use crate::runner::Game;
use crate::{create_ball, create_paddle, step};

const RESET_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 40.0);

/// A two-paddle match that runs until the process quits
pub struct PongMatch {
    config: PongConfig,
    world: World,
    left: Entity,
    right: Entity,
    ball: Entity,
    fsm: MatchFsm,
    setup: MatchSetup,
    score: Score,
    events: Events,
    rng: GameRng,
    fade: Option<TimedFadeText>,
}

impl PongMatch {
    pub fn new(config: PongConfig, rng: GameRng) -> Self {
        let setup = MatchSetup::from_config(&config);
        let mut world = World::new();
        let (left, right, ball) = spawn_entities(&mut world, &config);
        Self {
            config,
            world,
            left,
            right,
            ball,
            fsm: MatchFsm::new(),
            setup,
            score: Score::new(),
            events: Events::new(),
            rng,
            fade: None,
        }
    }

    /// Re-initialise paddles, ball and state from the current setup. Score survives.
    pub fn reset(&mut self) {
        self.reset_with(self.setup);
    }

    pub fn reset_with(&mut self, setup: MatchSetup) {
        self.world.clear();
        let (left, right, ball) = spawn_entities(&mut self.world, &self.config);
        self.left = left;
        self.right = right;
        self.ball = ball;
        self.setup = setup;
        self.fsm.transition(MatchAction::Reset);
        self.events.clear();
        self.fade = None;
    }

    /// Zero both counters and start over
    pub fn reset_score(&mut self) {
        log::info!("Score reset (was {}:{})", self.score.left, self.score.right);
        self.score.reset();
        self.reset();
    }

    pub fn serve(&mut self) {
        if !self.fsm.transition(MatchAction::Serve).success {
            return;
        }
        let (speed, toward) = (self.setup.speed, self.setup.latest_winner);
        let spread = self.config.ball_spread;
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.start(speed, toward, spread, &mut self.rng);
        }
        log::info!("Serve towards {} at speed {}", toward.name(), speed);
    }

    pub fn toggle_pause(&mut self) {
        let result = self.fsm.transition(MatchAction::TogglePause);
        if result.success {
            log::debug!("{:?} -> {:?}", result.from_state, result.to_state);
        }
    }

    pub fn toggle_settings(&mut self) {
        let result = self.fsm.transition(MatchAction::ToggleSettings);
        if result.success {
            log::debug!("Settings open: {}", self.fsm.settings_open());
        }
    }

    /// Change the shared speed by `delta`, rescaling the ball's `vx` to match
    pub fn change_speed(&mut self, delta: f32, now: f32) {
        let old = self.setup.speed;
        let new = old + delta;
        if new <= 0.0 {
            log::debug!("Ignoring speed change to {}", new);
            return;
        }

        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.vel.x *= new / old;
        }
        self.setup.speed = new;
        log::info!("Speed {} -> {}", old, new);

        if !self.fsm.settings_open() {
            self.fade = Some(TimedFadeText::with_duration(
                format!("Speed: {:.0}", new),
                Color::BLACK,
                now,
                self.config.fade_duration,
            ));
        }
    }

    /// Pointer press; only meaningful while paused
    pub fn click(&mut self, pos: Vec2) {
        if !self.fsm.is_paused() {
            return;
        }
        if self.fsm.settings_open() && self.reset_button().contains(pos) {
            self.reset_score();
        } else {
            self.toggle_settings();
        }
    }

    /// Clickable "Reset score" control on the settings panel
    pub fn reset_button(&self) -> Aabb {
        let center = self.config.center() + Vec2::new(0.0, 60.0);
        Aabb::from_center_size(center, RESET_BUTTON_SIZE)
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn speed(&self) -> f32 {
        self.setup.speed
    }

    pub fn latest_winner(&self) -> Side {
        self.setup.latest_winner
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn fade(&self) -> Option<&TimedFadeText> {
        self.fade.as_ref()
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.config.center(), Vec2::ZERO, self.config.ball_radius))
    }

    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, &self.config))
    }

    fn render_overlay(&self, surface: &mut dyn Surface, now: f32) {
        match self.fsm.state() {
            MatchState::NotServed => {
                let pos = Vec2::new(self.config.screen_width / 2.0, self.config.screen_height - 40.0);
                draw_text_centered(surface, "Press SPACE to serve", pos, Color::DARK_GRAY);
            }
            MatchState::InPlay => {}
            MatchState::Paused {
                settings_open: false,
            } => {
                draw_centered_lines(
                    surface,
                    &["Paused", "P: resume", "O or click: settings", "+/-: speed"],
                    Color::BLACK,
                );
            }
            MatchState::Paused {
                settings_open: true,
            } => {
                let speed = format!("Speed: {:.0}", self.setup.speed);
                draw_centered_lines(
                    surface,
                    &["Settings", speed.as_str(), "+/-: change speed"],
                    Color::BLACK,
                );
                let button = self.reset_button();
                surface.fill_rect(button, Color::DARK_GRAY);
                draw_text_centered(surface, "Reset score", button.center(), Color::WHITE);
            }
        }

        if let Some(fade) = &self.fade {
            if fade.should_render(now) {
                let pos = Vec2::new(self.config.screen_width / 2.0, 60.0);
                draw_text_centered(surface, &fade.text, pos, fade.color_at(now));
            }
        }
    }
}

impl Game for PongMatch {
    fn handle_event(&mut self, event: &InputEvent, now: f32) {
        match *event {
            InputEvent::KeyDown(Key::Space) => self.serve(),
            InputEvent::KeyDown(Key::P | Key::Escape) => self.toggle_pause(),
            InputEvent::KeyDown(Key::O) => self.toggle_settings(),
            InputEvent::KeyDown(Key::Plus) => self.change_speed(self.config.speed_step, now),
            InputEvent::KeyDown(Key::Minus) => self.change_speed(-self.config.speed_step, now),
            InputEvent::PointerDown(pos) => self.click(pos),
            InputEvent::KeyDown(_) | InputEvent::Quit => {}
        }
    }

    fn update(&mut self, input: &dyn Input, dt: f32, now: f32) {
        if self.fade.as_ref().is_some_and(|fade| !fade.should_render(now)) {
            self.fade = None;
        }

        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            input,
            dt,
            &self.config,
            &mut self.setup,
            &mut self.score,
            &mut self.events,
        );

        if self.events.ball_hit_paddle {
            log::debug!("Ball hit a paddle");
        }
        if self.events.ball_hit_wall {
            log::debug!("Ball hit a wall");
        }

        if let Some(scorer) = self.events.scorer() {
            log::info!(
                "{} scores ({}:{})",
                scorer.name(),
                self.score.left,
                self.score.right
            );
            let events = self.events.clone();
            self.reset();
            self.events = events;
        }
    }

    fn render(&self, surface: &mut dyn Surface, now: f32) {
        surface.fill(Color::GRAY);

        for side in [Side::Left, Side::Right] {
            surface.fill_rect(self.paddle(side).bounds(), Color::BLACK);
        }
        let ball = self.ball();
        surface.circle(ball.pos, ball.radius, Color::RED, Stroke::Fill);

        let score = format!("{}   {}", self.score.left, self.score.right);
        let pos = Vec2::new(self.config.screen_width / 2.0, 20.0);
        draw_text_centered(surface, &score, pos, Color::BLACK);

        self.render_overlay(surface, now);
    }
}

fn spawn_entities(world: &mut World, config: &PongConfig) -> (Entity, Entity, Entity) {
    let left = create_paddle(world, Side::Left, config);
    let right = create_paddle(world, Side::Right, config);
    let ball = create_ball(world, config.center(), Vec2::ZERO, config.ball_radius);
    (left, right, ball)
}
