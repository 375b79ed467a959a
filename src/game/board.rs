use super::Player;
use crate::config::GameConfig;
use crate::error::{ConfigError, PlacementError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Square grid of stones. Coordinates are 1-based: `1 <= row, col <= size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.board_size;
        Ok(Board {
            config,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.config.board_size
    }

    /// Number of stones in a row needed to win
    pub fn win_length(&self) -> usize {
        self.config.win_length
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, PlacementError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Put a stone on an empty cell. Turns are not switched here.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), PlacementError> {
        let idx = self.index(row, col)?;
        if let Cell::Occupied(by) = self.cells[idx] {
            return Err(PlacementError::Occupied { row, col, by });
        }
        self.cells[idx] = player.to_cell();
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size())
    }

    /// Unchecked read for scanners that already know `(row, col)` is on the
    /// board. Zero-based.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size() + col]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, PlacementError> {
        let size = self.size();
        if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
            return Err(PlacementError::OutOfBounds { row, col, size });
        }
        Ok((row - 1) * size + (col - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_BOARD_SIZE;

    fn board(size: usize, win: usize) -> Board {
        Board::new(GameConfig::new(size, win)).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board(15, 5);
        assert_eq!(board.size(), 15);
        assert_eq!(board.win_length(), 5);
        assert_eq!(board.config(), GameConfig::new(15, 5));
        for row in 1..=15 {
            for col in 1..=15 {
                assert_eq!(board.cell_at(row, col), Ok(Cell::Empty));
            }
        }
        assert!(board.rows().flatten().all(|&cell| cell == Cell::Empty));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Board::new(GameConfig::new(0, 5)),
            Err(ConfigError::InvalidBoardSize(0))
        ));
    }

    #[test]
    fn test_huge_board_size_rejected() {
        for size in [MAX_BOARD_SIZE + 1, usize::MAX / 2, usize::MAX] {
            assert!(matches!(
                Board::new(GameConfig::new(size, 5)),
                Err(ConfigError::BoardTooLarge { .. })
            ));
        }
    }

    #[test]
    fn test_zero_win_length_rejected() {
        assert!(matches!(
            Board::new(GameConfig::new(15, 0)),
            Err(ConfigError::InvalidWinLength(0))
        ));
    }

    #[test]
    fn test_win_length_larger_than_board_is_allowed() {
        let board = board(3, 5);
        assert_eq!(board.size(), 3);
    }

    #[test]
    fn test_place_piece() {
        let mut board = board(15, 5);
        board.place(3, 4, Player::Black).unwrap();
        assert_eq!(board.cell_at(3, 4), Ok(Cell::Occupied(Player::Black)));

        // Every other cell is untouched
        for row in 1..=15 {
            for col in 1..=15 {
                if (row, col) != (3, 4) {
                    assert_eq!(board.cell_at(row, col), Ok(Cell::Empty));
                }
            }
        }
    }

    #[test]
    fn test_place_on_occupied_cell() {
        let mut board = board(15, 5);
        board.place(7, 7, Player::Black).unwrap();
        let before = board.clone();

        for player in [Player::Black, Player::White] {
            assert_eq!(
                board.place(7, 7, player),
                Err(PlacementError::Occupied {
                    row: 7,
                    col: 7,
                    by: Player::Black
                })
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_bounds() {
        for size in [1, 2, 9, 15, 19] {
            let mut board = board(size, 1);
            let before = board.clone();
            for (row, col) in [(0, 1), (1, 0), (size + 1, 1), (1, size + 1), (0, 0)] {
                assert_eq!(
                    board.place(row, col, Player::White),
                    Err(PlacementError::OutOfBounds { row, col, size })
                );
            }
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = board(15, 5);
        assert_eq!(
            board.cell_at(16, 1),
            Err(PlacementError::OutOfBounds {
                row: 16,
                col: 1,
                size: 15
            })
        );
    }

    #[test]
    fn test_corners_are_addressable() {
        let mut board = board(15, 5);
        for (row, col) in [(1, 1), (1, 15), (15, 1), (15, 15)] {
            board.place(row, col, Player::White).unwrap();
        }
        assert_eq!(board.cell_at(15, 1), Ok(Cell::Occupied(Player::White)));
        assert_eq!(board.get(14, 14), Cell::Occupied(Player::White));
    }

    #[test]
    fn test_full_board() {
        let mut board = board(3, 3);
        for row in 1..=3 {
            for col in 1..=3 {
                assert!(!board.is_full());
                board.place(row, col, Player::Black).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_rows_iterates_top_down() {
        let mut board = board(4, 2);
        board.place(2, 3, Player::White).unwrap();
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1][2], Cell::Occupied(Player::White));
    }
}
