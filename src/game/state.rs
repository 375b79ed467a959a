use tracing::debug;

use super::win::{find_winning_run, WinningRun};
use super::{Board, Player};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
    Aborted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    winning_run: Option<WinningRun>,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state
    pub fn new(config: GameConfig, first_player: Player) -> Result<Self, ConfigError> {
        Ok(GameState {
            board: Board::new(config)?,
            current_player: first_player,
            outcome: GameOutcome::InProgress,
            winning_run: None,
            moves_played: 0,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The run that ended the game, if it was won
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning_run.as_ref()
    }

    /// Place a stone for the current player, then check for a win before
    /// handing the turn over. A rejected move leaves the state unchanged.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.place(row, col, player)?;
        self.moves_played += 1;
        debug!(player = player.name(), row, col, moves = self.moves_played, "stone placed");

        if let Some(run) = find_winning_run(&self.board, player, self.board.win_length()) {
            self.winning_run = Some(run);
            self.outcome = GameOutcome::Win(player);
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        } else {
            self.current_player = player.other();
        }

        Ok(self.outcome)
    }

    /// Abandon the game. Has no effect once the game is over.
    pub fn quit(&mut self) {
        if !self.is_terminal() {
            debug!(moves = self.moves_played, "game aborted");
            self.outcome = GameOutcome::Aborted;
        }
    }
}
