mod tictactoe_session;

use crate::games::tictactoe::{Board, Mark, Outcome, Position};

pub use tictactoe_session::TicTacToeSession;

/// Hook for the presentation shell. Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_move(&mut self, _mark: Mark, _pos: Position, _board: &Board) {}

    fn on_game_over(&mut self, _outcome: Outcome) {}
}

impl GameObserver for () {}
