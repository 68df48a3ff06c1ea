pub mod components;
pub mod config;
pub mod fade;
pub mod fsm;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod params;
pub mod pong;
pub mod render;
pub mod resources;
pub mod runner;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fade::*;
pub use fsm::*;
pub use geometry::*;
pub use grid::*;
pub use input::*;
pub use params::*;
pub use pong::*;
pub use render::*;
pub use resources::*;
pub use runner::*;

use hecs::World;
use systems::*;

/// Advance one in-play Pong frame
///
/// Variable step: `dt` is the measured wall-clock frame time.
pub fn step(
    world: &mut World,
    input: &dyn Input,
    dt: f32,
    config: &PongConfig,
    setup: &mut MatchSetup,
    score: &mut Score,
    events: &mut Events,
) {
    events.clear();

    // 1. Move paddles from held keys
    move_paddles(world, input, setup.speed * dt);

    // 2. Move ball
    move_ball(world, dt);

    // 3. Check collisions (ball vs paddles, walls)
    check_collisions(world, config, events);

    // 4. Check scoring (ball exited court)
    check_scoring(world, config, score, setup, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &PongConfig) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleControls::for_side(side)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
