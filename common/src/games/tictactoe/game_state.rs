use crate::error::EngineError;
use super::board::Board;
use super::rules::{check_win_with_line, outcome};
use super::types::{FirstPlayer, GameStatus, Mark, Outcome, Position, WinningLine};

/// Shell-side state of one game: the board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    computer_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first_player: FirstPlayer) -> Self {
        Self {
            board: Board::new(),
            human_mark: first_player.human_mark(),
            computer_mark: first_player.computer_mark(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.computer_mark
    }

    pub fn outcome(&self) -> Outcome {
        outcome(&self.board, self.computer_mark, self.human_mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<(), EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }

        if !mark.is_player() {
            return Err(EngineError::EmptyMark);
        }

        if mark != self.current_mark {
            return Err(EngineError::NotYourTurn(mark));
        }

        self.board.place(pos, mark)?;
        self.last_move = Some(pos);
        self.move_count += 1;

        self.status = GameStatus::from(self.outcome());

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_count = 0;
    }
}
