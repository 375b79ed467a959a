use std::fmt;

use crate::game::{Board, Cell, GameState, WinningRun};

const EMPTY: &str = " - ";

/// Stones in the winning run are bracketed, e.g. `[●]`.
fn cell_symbol(cell: Cell, in_run: bool) -> String {
    match cell {
        Cell::Empty => EMPTY.to_string(),
        Cell::Occupied(player) if in_run => format!("[{}]", player.glyph()),
        Cell::Occupied(player) => format!(" {} ", player.glyph()),
    }
}

/// Rows are labelled down the left edge, columns along the bottom, both 1-based.
fn write_board(
    f: &mut fmt::Formatter<'_>,
    board: &Board,
    run: Option<&WinningRun>,
) -> fmt::Result {
    for (i, row) in board.rows().enumerate() {
        write!(f, "{:>3}|", i + 1)?;
        for (j, &cell) in row.iter().enumerate() {
            let in_run = run.is_some_and(|run| run.contains(i + 1, j + 1));
            f.write_str(&cell_symbol(cell, in_run))?;
        }
        writeln!(f)?;
    }

    writeln!(f, "    {}", "___".repeat(board.size()))?;
    write!(f, "    ")?;
    for col in 1..=board.size() {
        write!(f, "{:>3}", col)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, self, None)
    }
}

/// Board plus a status line naming whose turn it is. Once the game is won
/// the winning stones are marked.
pub struct GameView<'a>(pub &'a GameState);

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f)?;
        write_board(f, state.board(), state.winning_run())?;
        writeln!(f)?;
        write!(f, "Current player: {}", state.current_player().glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Player;

    #[test]
    fn test_render_small_board() {
        let mut board = Board::new(GameConfig::new(3, 3)).unwrap();
        board.place(1, 2, Player::Black).unwrap();
        board.place(3, 3, Player::White).unwrap();

        let expected = [
            "  1| -  ●  - ",
            "  2| -  -  - ",
            "  3| -  -  ○ ",
            "    _________",
            "      1  2  3",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_render_two_digit_labels() {
        let board = Board::new(GameConfig::default()).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines[14].starts_with(" 15|"));
        assert!(lines[16].ends_with(" 14 15"));
    }

    #[test]
    fn test_game_view_status_line() {
        let mut state = GameState::new(GameConfig::new(5, 3), Player::Black).unwrap();
        state.apply_move(1, 1).unwrap();
        let text = GameView(&state).to_string();
        assert!(text.starts_with('\n'));
        assert!(text.ends_with("Current player: ○"));
        assert!(text.contains("  1| ●  -  -  -  - "));
    }

    #[test]
    fn test_game_view_marks_winning_run() {
        let mut state = GameState::new(GameConfig::new(4, 3), Player::Black).unwrap();
        for (row, col) in [(1, 3), (1, 1), (2, 2), (4, 4), (3, 1)] {
            state.apply_move(row, col).unwrap();
        }
        assert_eq!(state.outcome(), crate::game::GameOutcome::Win(Player::Black));

        let expected = [
            "",
            "  1| ○  - [●] - ",
            "  2| - [●] -  - ",
            "  3|[●] -  -  - ",
            "  4| -  -  -  ○ ",
            "    ____________",
            "      1  2  3  4",
            "Current player: ●",
        ]
        .join("\n");
        assert_eq!(GameView(&state).to_string(), expected);

        // Plain board rendering never marks stones
        assert!(!state.board().to_string().contains('['));
    }
}
