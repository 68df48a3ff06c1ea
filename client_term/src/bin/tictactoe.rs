//! Two-player Tic-Tac-Toe in the terminal. Click a cell to place a mark,
//! R restarts a finished game, q quits.

use anyhow::Result;
use clap::Parser;
use glam::Vec2;

use client_term::cli::{init_logging, Args};
use game_core::TicTacToe;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = args.config()?;

    let size = config.grid.screen_size;
    let mut game = TicTacToe::new(config.grid.clone());
    log::info!("Starting tic-tac-toe at {} fps", config.fps());

    client_term::play(&mut game, Vec2::splat(size), config.fps())
}
