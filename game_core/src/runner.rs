//! Single-threaded frame loop shared by both games
//!
//! Each frame: drain events, let the game react, advance the simulation,
//! draw, present, then block until the next tick.

use anyhow::Result;

use crate::input::{Input, InputEvent};
use crate::render::Surface;

/// Frame pacing clock
pub trait FrameClock {
    /// Block until the next frame at `fps`, returning real seconds since the previous tick
    fn tick(&mut self, fps: u32) -> f32;

    /// Monotonic seconds, used for overlay timestamps
    fn now(&self) -> f32;
}

/// The contract both games fulfill
pub trait Game {
    /// React to one discrete event
    fn handle_event(&mut self, event: &InputEvent, now: f32);

    /// Advance the simulation by `dt` seconds
    fn update(&mut self, input: &dyn Input, dt: f32, now: f32);

    /// Draw the current state. Read-only.
    fn render(&self, surface: &mut dyn Surface, now: f32);
}

/// Run `game` until the platform reports `Quit`
pub fn run<G, P>(game: &mut G, platform: &mut P, fps: u32) -> Result<()>
where
    G: Game,
    P: Surface + Input + FrameClock,
{
    let mut running = true;
    let mut dt = 0.0;
    let mut frames: u64 = 0;

    while running {
        let now = platform.now();

        for event in platform.poll_events()? {
            if event == InputEvent::Quit {
                log::info!("Quit requested after {} frames", frames);
                running = false;
                continue;
            }
            game.handle_event(&event, now);
        }

        game.update(&*platform, dt, now);
        game.render(&mut *platform, now);
        platform.present()?;

        dt = platform.tick(fps);
        frames += 1;
    }

    Ok(())
}
