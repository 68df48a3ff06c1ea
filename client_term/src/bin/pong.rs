//! Two-player Pong in the terminal.
//!
//! Left paddle: W/S. Right paddle: Up/Down. Space serves, P pauses,
//! O opens settings, +/- change speed, q quits.

use anyhow::Result;
use clap::Parser;
use glam::Vec2;

use client_term::cli::{init_logging, Args};
use game_core::PongMatch;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = args.config()?;

    let world = Vec2::new(config.pong.screen_width, config.pong.screen_height);
    let mut game = PongMatch::new(config.pong.clone(), args.rng());
    log::info!("Starting pong at {} fps", config.fps());

    client_term::play(&mut game, world, config.fps())?;

    let score = game.score();
    println!("Final score {} - {}", score.left, score.right);
    Ok(())
}
