use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// What survives a match reset: the current speed and who scored last
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSetup {
    pub speed: f32,
    pub latest_winner: Side,
}

impl MatchSetup {
    pub fn new(speed: f32, latest_winner: Side) -> Self {
        Self {
            speed,
            latest_winner,
        }
    }

    pub fn from_config(config: &crate::PongConfig) -> Self {
        Self::new(config.speed_initial, config.first_serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment_right();
        score.increment(Side::Right);
        assert_eq!(score.right, 2);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 4, right: 9 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.scorer(), None);
    }

    #[test]
    fn test_events_scorer() {
        let mut events = Events::new();
        events.right_scored = true;
        assert_eq!(events.scorer(), Some(Side::Right));
    }
}
