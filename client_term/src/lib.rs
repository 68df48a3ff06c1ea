pub mod camera;
pub mod cli;
pub mod clock;
pub mod input;
pub mod platform;
pub mod renderer;

use anyhow::{Context, Result};
use game_core::Game;
use glam::Vec2;

use platform::TerminalPlatform;

/// Take over the terminal, run `game` until quit, then restore the terminal
pub fn play<G: Game>(game: &mut G, world: Vec2, fps: u32) -> Result<()> {
    let mut platform = TerminalPlatform::new(world)?;
    platform.enter()?;

    let result = game_core::run(game, &mut platform, fps);

    // Always try to restore terminal state.
    let restored = platform.exit().context("restoring terminal");
    combine_exit(result, restored)
}

/// A run error takes precedence; a restore failure after a clean run is reported
fn combine_exit(run: Result<()>, restored: Result<()>) -> Result<()> {
    match (run, restored) {
        (Err(err), Err(exit_err)) => {
            log::warn!("{:#}", exit_err);
            Err(err)
        }
        (run, restored) => run.and(restored),
    }
}
