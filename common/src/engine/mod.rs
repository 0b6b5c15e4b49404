pub mod session;
pub mod tictactoe;

pub use session::{GameObserver, TicTacToeSession};
pub use tictactoe::TicTacToeEngine;
