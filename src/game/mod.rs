//! Core Gomoku game logic: board representation, player types, win detection
//! and the turn controller that drives them.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{find_winning_run, has_winning_run, Direction, WinningRun};
