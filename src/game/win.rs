//! Win detection: scans every in-bounds window of `win_length` cells along
//! the four forward directions.

use super::{Board, Cell, Player};

/// Line direction, as a `(row, col)` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right (→)
    Horizontal,
    /// Top to bottom (↓)
    Vertical,
    /// Top-left to bottom-right (↘)
    DiagonalDown,
    /// Top-right to bottom-left (↙), the same lines as ↗
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// A run of `length` identical stones, starting at the 1-based `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningRun {
    pub player: Player,
    pub start: (usize, usize),
    pub direction: Direction,
    pub length: usize,
}

impl WinningRun {
    /// 1-based coordinates of every stone in the run
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.step();
        let (row, col) = self.start;
        (0..self.length as isize)
            .map(|i| ((row as isize + dr * i) as usize, (col as isize + dc * i) as usize))
            .collect()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().contains(&(row, col))
    }
}

/// Check whether `player` has `win_length` stones in a row anywhere.
pub fn has_winning_run(board: &Board, player: Player, win_length: usize) -> bool {
    find_winning_run(board, player, win_length).is_some()
}

/// Find the first window of `win_length` stones owned by `player`.
///
/// Runs longer than `win_length` count: they contain a matching window.
pub fn find_winning_run(board: &Board, player: Player, win_length: usize) -> Option<WinningRun> {
    let size = board.size();
    if win_length == 0 || win_length > size {
        return None;
    }
    let target = Cell::Occupied(player);

    for direction in Direction::ALL {
        for row in 0..size {
            for col in 0..size {
                if window_matches(board, row, col, direction, win_length, target) {
                    return Some(WinningRun {
                        player,
                        start: (row + 1, col + 1),
                        direction,
                        length: win_length,
                    });
                }
            }
        }
    }

    None
}

/// Zero-based start. False if the window leaves the board.
fn window_matches(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    len: usize,
    target: Cell,
) -> bool {
    let size = board.size() as isize;
    let (dr, dc) = direction.step();
    let last = len as isize - 1;
    let end_row = row as isize + dr * last;
    let end_col = col as isize + dc * last;
    if end_row < 0 || end_row >= size || end_col < 0 || end_col >= size {
        return false;
    }

    (0..len as isize).all(|i| {
        let r = (row as isize + dr * i) as usize;
        let c = (col as isize + dc * i) as usize;
        board.get(r, c) == target
    })
}
