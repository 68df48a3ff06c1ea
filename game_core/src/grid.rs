//! Tic-Tac-Toe: turn-based marking on a 3x3 grid
//!
//! Same frame-loop shape as Pong, but state only changes on clicks and the
//! restart key.

use glam::Vec2;

use crate::config::GridConfig;
use crate::input::{Input, InputEvent, Key};
use crate::params::Params;
use crate::render::{draw_centered_lines, Color, Stroke, Surface};
use crate::runner::Game;

const N: usize = Params::GRID_CELLS;

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Signed value used for line sums
    pub fn value(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    pub fn next(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// 3x3 board, indexed `[row][col]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Player>; N]; N],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from signed values (1 = X, -1 = O, anything else = empty)
    pub fn from_values(values: [[i8; N]; N]) -> Self {
        let mut grid = Self::new();
        for (row, cells) in values.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                grid.cells[row][col] = match value {
                    1 => Some(Player::X),
                    -1 => Some(Player::O),
                    _ => None,
                };
            }
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Mark an empty cell. Returns false if occupied or out of range.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if cell.is_none() => {
                *cell = Some(player);
                true
            }
            _ => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    fn value(&self, row: usize, col: usize) -> i8 {
        self.cells[row][col].map_or(0, Player::value)
    }

    /// Sums of every row, column and both diagonals
    fn line_sums(&self) -> impl Iterator<Item = i8> + '_ {
        let rows = (0..N).map(move |r| (0..N).map(|c| self.value(r, c)).sum::<i8>());
        let cols = (0..N).map(move |c| (0..N).map(|r| self.value(r, c)).sum::<i8>());
        let diag = (0..N).map(|i| self.value(i, i)).sum::<i8>();
        let anti = (0..N).map(|i| self.value(i, N - 1 - i)).sum::<i8>();
        rows.chain(cols).chain([diag, anti])
    }

    /// Three in a row for `player`: some line sums to 3 * value
    pub fn check_win(&self, player: Player) -> bool {
        let target = player.value() * N as i8;
        self.line_sums().any(|sum| sum == target)
    }

    pub fn check_any_win(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|player| self.check_win(*player))
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|player| (row, col, player)))
        })
    }
}

/// Whether moves are still accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStatus {
    Active,
    Won(Player),
    Tie,
}

impl GridStatus {
    pub fn is_finished(self) -> bool {
        self != GridStatus::Active
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Finished,
    OutOfBounds,
    Occupied,
    Placed { next: Player },
    Won(Player),
    Tie,
}

/// Tic-Tac-Toe controller
pub struct TicTacToe {
    config: GridConfig,
    grid: Grid,
    active_player: Player,
    status: GridStatus,
}

impl TicTacToe {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            grid: Grid::new(),
            active_player: Player::X,
            status: GridStatus::Active,
        }
    }

    /// Start a fresh game; X moves first
    pub fn restart(&mut self) {
        self.grid = Grid::new();
        self.active_player = Player::X;
        self.status = GridStatus::Active;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn status(&self) -> GridStatus {
        self.status
    }

    /// Map a pointer position to `(row, col)`; positions off the board map to nothing
    pub fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        let size = self.config.screen_size;
        if !(pos.x >= 0.0 && pos.y >= 0.0 && pos.x < size && pos.y < size) {
            return None;
        }
        let cell = self.config.cell_size();
        let col = ((pos.x / cell) as usize).min(N - 1);
        let row = ((pos.y / cell) as usize).min(N - 1);
        Some((row, col))
    }

    pub fn handle_click(&mut self, pos: Vec2) -> ClickOutcome {
        if self.status.is_finished() {
            return ClickOutcome::Finished;
        }
        let Some((row, col)) = self.cell_at(pos) else {
            log::debug!("Click at ({}, {}) is off the board", pos.x, pos.y);
            return ClickOutcome::OutOfBounds;
        };

        let player = self.active_player;
        if !self.grid.place(row, col, player) {
            log::info!("Cell ({}, {}) already occupied, nothing done", col, row);
            return ClickOutcome::Occupied;
        }
        log::info!("{} marks ({}, {})", player.name(), col, row);

        if let Some(winner) = self.grid.check_any_win() {
            log::info!("{} wins", winner.name());
            self.status = GridStatus::Won(winner);
            ClickOutcome::Won(winner)
        } else if self.grid.is_full() {
            log::info!("Tie");
            self.status = GridStatus::Tie;
            ClickOutcome::Tie
        } else {
            self.active_player = player.next();
            ClickOutcome::Placed {
                next: self.active_player,
            }
        }
    }

    fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        let cell = self.config.cell_size();
        Vec2::new((col as f32 + 0.5) * cell, (row as f32 + 0.5) * cell)
    }
}

impl Game for TicTacToe {
    fn handle_event(&mut self, event: &InputEvent, _now: f32) {
        match *event {
            InputEvent::PointerDown(pos) => {
                self.handle_click(pos);
            }
            InputEvent::KeyDown(Key::R) if self.status.is_finished() => {
                log::info!("Restart");
                self.restart();
            }
            _ => {}
        }
    }

    fn update(&mut self, _input: &dyn Input, _dt: f32, _now: f32) {}

    fn render(&self, surface: &mut dyn Surface, _now: f32) {
        surface.fill(Color::GRAY);

        let size = self.config.screen_size;
        let cell = self.config.cell_size();
        for i in 1..N {
            let at = i as f32 * cell;
            surface.line(Vec2::new(at, 0.0), Vec2::new(at, size), Color::BLACK, 2.0);
            surface.line(Vec2::new(0.0, at), Vec2::new(size, at), Color::BLACK, 2.0);
        }

        let reach = cell * 0.35;
        for (row, col, player) in self.grid.cells() {
            let center = self.cell_center(row, col);
            match player {
                Player::X => {
                    surface.line(
                        center - Vec2::splat(reach),
                        center + Vec2::splat(reach),
                        Color::WHITE,
                        2.0,
                    );
                    surface.line(
                        center + Vec2::new(-reach, reach),
                        center + Vec2::new(reach, -reach),
                        Color::WHITE,
                        2.0,
                    );
                }
                Player::O => surface.circle(center, reach, Color::WHITE, Stroke::Outline(2.0)),
            }
        }

        let result = match self.status {
            GridStatus::Active => return,
            GridStatus::Won(winner) => format!("{} wins!", winner.name()),
            GridStatus::Tie => "Tie!".to_string(),
        };
        draw_centered_lines(surface, &[result.as_str(), "Press R to restart"], Color::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(game: &TicTacToe, row: usize, col: usize) -> Vec2 {
        game.cell_center(row, col)
    }

    #[test]
    fn test_top_row_win_for_x() {
        let grid = Grid::from_values([[1, 1, 1], [0, -1, 0], [0, 0, -1]]);
        assert_eq!(grid.check_any_win(), Some(Player::X));
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let column = Grid::from_values([[-1, 1, 0], [-1, 1, 0], [-1, 0, 1]]);
        assert_eq!(column.check_any_win(), Some(Player::O));

        let anti = Grid::from_values([[1, 1, -1], [0, -1, 0], [-1, 1, 0]]);
        assert_eq!(anti.check_any_win(), Some(Player::O));

        let diag = Grid::from_values([[1, -1, 0], [-1, 1, 0], [0, 0, 1]]);
        assert_eq!(diag.check_any_win(), Some(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let grid = Grid::from_values([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]);
        assert_eq!(grid.check_any_win(), None);
        assert!(grid.is_full());
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = Grid::from_values([[1, 1, -1], [0, 0, 0], [0, 0, 0]]);
        assert_eq!(grid.check_any_win(), None);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_player_next_alternates() {
        assert_eq!(Player::X.next(), Player::O);
        assert_eq!(Player::O.next(), Player::X);
        assert_eq!(Player::X.next().next(), Player::X);
    }

    #[test]
    fn test_cell_mapping() {
        let game = TicTacToe::new(GridConfig::default());
        assert_eq!(game.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(game.cell_at(Vec2::new(239.9, 240.0)), Some((1, 0)));
        assert_eq!(game.cell_at(Vec2::new(719.0, 500.0)), Some((2, 2)));
    }

    #[test]
    fn test_clicks_off_the_board_are_rejected() {
        let mut game = TicTacToe::new(GridConfig::default());
        for pos in [
            Vec2::new(-1.0, 10.0),
            Vec2::new(10.0, -0.5),
            Vec2::new(720.0, 10.0),
            Vec2::new(10.0, 900.0),
            Vec2::new(f32::NAN, 10.0),
        ] {
            assert_eq!(game.handle_click(pos), ClickOutcome::OutOfBounds);
        }
        assert_eq!(*game.grid(), Grid::new());
        assert_eq!(game.active_player(), Player::X);
    }

    #[test]
    fn test_click_places_and_swaps() {
        let mut game = TicTacToe::new(GridConfig::default());
        let pos = center_of(&game, 1, 2);
        assert_eq!(game.handle_click(pos), ClickOutcome::Placed { next: Player::O });
        assert_eq!(game.grid().get(1, 2), Some(Player::X));
        assert_eq!(game.active_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_changes_nothing() {
        let mut game = TicTacToe::new(GridConfig::default());
        let pos = center_of(&game, 0, 0);
        game.handle_click(pos);
        let before = *game.grid();

        assert_eq!(game.handle_click(pos), ClickOutcome::Occupied);
        assert_eq!(*game.grid(), before);
        assert_eq!(game.active_player(), Player::O);
    }

    #[test]
    fn test_win_blocks_moves_until_restart() {
        let mut game = TicTacToe::new(GridConfig::default());
        // X: (0,0) (0,1) (0,2); O: (1,0) (1,1)
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.handle_click(center_of(&game, row, col));
        }
        assert_eq!(game.handle_click(center_of(&game, 0, 2)), ClickOutcome::Won(Player::X));
        assert_eq!(game.status(), GridStatus::Won(Player::X));
        assert_eq!(game.active_player(), Player::X, "no swap after a win");

        assert_eq!(game.handle_click(center_of(&game, 2, 2)), ClickOutcome::Finished);
        assert_eq!(game.grid().get(2, 2), None);

        game.handle_event(&InputEvent::KeyDown(Key::R), 0.0);
        assert_eq!(game.status(), GridStatus::Active);
        assert_eq!(*game.grid(), Grid::new());
        assert_eq!(game.active_player(), Player::X);
    }

    #[test]
    fn test_restart_key_ignored_while_active() {
        let mut game = TicTacToe::new(GridConfig::default());
        game.handle_click(center_of(&game, 0, 0));
        game.handle_event(&InputEvent::KeyDown(Key::R), 0.0);
        assert_eq!(game.grid().get(0, 0), Some(Player::X));
    }

    #[test]
    fn test_tie_finishes_game() {
        let mut game = TicTacToe::new(GridConfig::default());
        // X O X / X O O / O X X
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut last = ClickOutcome::Finished;
        for (row, col) in moves {
            last = game.handle_click(center_of(&game, row, col));
        }
        assert_eq!(last, ClickOutcome::Tie);
        assert_eq!(game.status(), GridStatus::Tie);
    }
}
