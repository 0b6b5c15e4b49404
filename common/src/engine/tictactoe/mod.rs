//! The three calls a presentation shell needs: a verdict, a computer move and a fresh board.
//!
//! The engine keeps no board between calls. The shell owns the board and passes a copy
//! every time, so "reset" is simply building a new [`Board`].

use crate::error::EngineError;
use crate::games::SessionRng;
use crate::games::tictactoe::{BotInput, Board, Difficulty, Mark, Outcome, Position, calculate_move, outcome};

pub struct TicTacToeEngine {
    computer_mark: Mark,
    human_mark: Mark,
    rng: SessionRng,
}

impl TicTacToeEngine {
    pub fn new(computer_mark: Mark, rng: SessionRng) -> Result<Self, EngineError> {
        let human_mark = computer_mark.opponent().ok_or(EngineError::EmptyMark)?;
        Ok(Self {
            computer_mark,
            human_mark,
            rng,
        })
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn new_board(&self) -> Board {
        Board::new()
    }

    /// Computer wins take precedence over human wins, then draw, then in progress.
    pub fn outcome(&self, board: &Board) -> Outcome {
        outcome(board, self.computer_mark, self.human_mark)
    }

    /// Only meaningful while `outcome` is `InProgress`; a full board gives `NoLegalMove`.
    pub fn choose_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<Position, EngineError> {
        let input = BotInput::new(*board, self.computer_mark)?;
        calculate_move(difficulty, input, &mut self.rng).ok_or(EngineError::NoLegalMove)
    }
}
