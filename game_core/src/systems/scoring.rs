use crate::{Ball, Events, MatchSetup, PongConfig, Score, Side};
use hecs::World;

/// Check if the ball left the court through either goal line
///
/// Records the scorer as `latest_winner`; the caller resets the match.
pub fn check_scoring(
    world: &World,
    config: &PongConfig,
    score: &mut Score,
    setup: &mut MatchSetup,
    events: &mut Events,
) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > config.screen_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        setup.latest_winner = scorer;
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
    }
}
