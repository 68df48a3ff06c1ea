use crate::{Aabb, Ball, Events, Paddle, PongConfig};
use hecs::World;

/// Check ball collisions with paddles and walls
///
/// Paddle contact flips `vx`, then wall contact flips `vy`. Both can happen
/// in the same frame. The ball is not pushed out of the paddle or wall.
pub fn check_collisions(world: &mut World, config: &PongConfig, events: &mut Events) {
    // Collect paddle boxes first so the ball can be borrowed mutably
    let paddles: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.bounds())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit_box = ball.hit_box();

        if paddles.iter().any(|paddle| hit_box.intersects(paddle)) {
            ball.bounce_x();
            events.ball_hit_paddle = true;
        }

        if hit_box.min.y <= 0.0 || hit_box.max.y >= config.screen_height {
            ball.bounce_y();
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn setup_world() -> (World, PongConfig, Events) {
        let world = World::new();
        let config = PongConfig::default();
        let events = Events::new();
        (world, config, events)
    }

    fn ball_vel(world: &World) -> Vec2 {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.vel)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(360.0, 9.0), Vec2::new(300.0, -40.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(300.0, 40.0));
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(360.0, 470.0), Vec2::new(300.0, 40.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(300.0, -40.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        create_ball(&mut world, Vec2::new(15.0, 240.0), Vec2::new(-300.0, 20.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(300.0, 20.0));
        assert!(events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, Vec2::new(705.0, 200.0), Vec2::new(300.0, 0.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(-300.0, 0.0));
    }

    #[test]
    fn test_ball_above_paddle_does_not_bounce() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        // Paddle spans y in [190, 290]; hit-box bottom is 170
        create_ball(&mut world, Vec2::new(15.0, 160.0), Vec2::new(-300.0, 0.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(-300.0, 0.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_corner_hit_bounces_both_axes() {
        let (mut world, config, mut events) = setup_world();
        let paddle = create_paddle(&mut world, Side::Left, &config);
        world.get::<&mut Paddle>(paddle).unwrap().y = 0.0;
        create_ball(&mut world, Vec2::new(15.0, 5.0), Vec2::new(-300.0, -60.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(300.0, 60.0));
        assert!(events.ball_hit_paddle && events.ball_hit_wall);
    }

    #[test]
    fn test_ball_in_open_court_is_untouched() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, config.center(), Vec2::new(300.0, 90.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_vel(&world), Vec2::new(300.0, 90.0));
        assert!(!events.ball_hit_paddle && !events.ball_hit_wall);
    }
}
