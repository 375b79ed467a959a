use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::board_view::GameView;
use super::input::{parse_command, Command};
use crate::game::{GameOutcome, GameState};

const PROMPT: &str = "Input a row then column separated by a comma (q to quit): ";

/// Line-oriented game session over any reader/writer pair.
pub struct Console<R, W> {
    game_state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game_state: GameState, input: R, output: W) -> Self {
        Console {
            game_state,
            input,
            output,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main loop. Returns once the game is won, drawn or abandoned.
    /// End of input counts as quitting.
    pub fn run(&mut self) -> io::Result<GameOutcome> {
        self.render()?;

        while !self.game_state.is_terminal() {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                self.game_state.quit();
                writeln!(self.output)?;
                break;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => self.game_state.quit(),
                Ok(Command::Place { row, col }) => self.play(row, col)?,
                Err(err) => {
                    debug!(input = line.trim(), %err, "rejected input");
                    self.retry(&err)?;
                    self.render()?;
                }
            }
        }

        info!(outcome = ?self.game_state.outcome(), moves = self.game_state.moves_played(), "game finished");
        Ok(self.game_state.outcome())
    }

    fn play(&mut self, row: usize, col: usize) -> io::Result<()> {
        match self.game_state.apply_move(row, col) {
            Ok(GameOutcome::Win(player)) => {
                self.render()?;
                writeln!(self.output, "{} wins!", player.name())?;
            }
            Ok(GameOutcome::Draw) => {
                self.render()?;
                writeln!(self.output, "It's a draw!")?;
            }
            Ok(_) => self.render()?,
            Err(err) => {
                debug!(row, col, %err, "rejected move");
                self.retry(&err)?;
                self.render()?;
            }
        }
        Ok(())
    }

    fn retry(&mut self, err: &dyn std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{err}\nTry again.")
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", GameView(&self.game_state))
    }
}
