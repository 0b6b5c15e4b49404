use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use super::types::{BOARD_SIZE, Mark, Position};

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A 3x3 snapshot. Being `Copy`, every caller hands the engine its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Unchecked write used by the search for place-and-undo.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    /// Checked placement for callers outside the search. Never overwrites a mark.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), EngineError> {
        if !pos.is_on_board() {
            return Err(EngineError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if !mark.is_player() {
            return Err(EngineError::EmptyMark);
        }
        if self.cells[pos.row][pos.col] != Mark::Empty {
            return Err(EngineError::InvalidMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Mark::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn to_notation(&self) -> String {
        self.cells.iter().flatten().map(Mark::to_char).collect()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Row-major `X`/`O`/`.` notation, e.g. `"X.O/.X./..O"`. Row separators are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|&c| c != '/').collect();
        if cells.len() != CELL_COUNT {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} cells, got {} in '{}'",
                CELL_COUNT,
                cells.len(),
                s
            )));
        }

        let mut board = Board::new();
        for (i, &c) in cells.iter().enumerate() {
            let mark = Mark::from_char(c).ok_or_else(|| {
                EngineError::InvalidBoard(format!(
                    "unexpected character '{}' at cell {} in '{}'",
                    c, i, s
                ))
            })?;
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = mark;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.to_notation(), ".........");
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let moves = board.available_moves();
        assert_eq!(
            moves,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO_/X../..O".parse().unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Some(Mark::X));
        assert_eq!(board.get(Position::new(0, 1)), Some(Mark::O));
        assert_eq!(board.get(Position::new(2, 2)), Some(Mark::O));
        assert_eq!(board.to_string(), "XO.\nX..\n..O");
    }

    #[test]
    fn test_parse_rejects_malformed_notation() {
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XO.X..Z..".parse::<Board>(),
            Err(EngineError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(Position::new(1, 1), Mark::X).unwrap();
        let result = board.place(Position::new(1, 1), Mark::O);
        assert_eq!(result, Err(EngineError::InvalidMove { row: 1, col: 1 }));
        assert_eq!(board.get(Position::new(1, 1)), Some(Mark::X));
    }

    #[test]
    fn test_place_rejects_out_of_bounds_and_empty_mark() {
        let mut board = Board::new();
        assert_eq!(
            board.place(Position::new(3, 0), Mark::X),
            Err(EngineError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(Position::new(0, 0), Mark::Empty),
            Err(EngineError::EmptyMark)
        );
        assert_eq!(board.get(Position::new(3, 0)), None);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }
}
