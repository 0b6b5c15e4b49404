use thiserror::Error;

use crate::games::tictactoe::Mark;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid move: cell ({row}, {col}) is already marked")]
    InvalidMove { row: usize, col: usize },

    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("unknown difficulty '{0}' (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),

    #[error("a player mark must be X or O")]
    EmptyMark,

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("invalid board notation: {0}")]
    InvalidBoard(String),
}
