use std::time::{Duration, Instant};

use game_core::FrameClock;

/// Sleeps out the rest of each frame and reports the real elapsed time
pub struct PacedClock {
    start: Instant,
    last_tick: Instant,
}

impl PacedClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }
}

impl Default for PacedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for PacedClock {
    fn tick(&mut self, fps: u32) -> f32 {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        if let Some(remaining) = frame.checked_sub(self.last_tick.elapsed()) {
            std::thread::sleep(remaining);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        dt
    }

    fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_waits_at_least_one_frame() {
        let mut clock = PacedClock::new();
        let dt = clock.tick(100);
        assert!(dt >= 0.0099, "dt was {dt}");
        assert!(clock.now() >= dt);
    }
}
