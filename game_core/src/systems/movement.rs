use crate::{Ball, Input, Paddle, PaddleControls};
use hecs::World;

/// Apply paddle movement from held keys
///
/// Up and down are read independently; holding both applies both deltas.
pub fn move_paddles(world: &mut World, input: &dyn Input, distance: f32) {
    for (_entity, (paddle, controls)) in world.query_mut::<(&mut Paddle, &PaddleControls)>() {
        if input.is_held(controls.up) {
            paddle.shift(-distance);
        }
        if input.is_held(controls.down) {
            paddle.shift(distance);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance(dt);
    }
}
