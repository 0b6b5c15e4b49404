use common::games::SessionRng;
use common::games::tictactoe::{Board, Difficulty, Mark, Outcome, Position};
use common::{EngineError, TicTacToeEngine, log};

#[derive(Debug, PartialEq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub computer_move: Option<Position>,
    pub board_after: Board,
}

/// Verdict for `board` and, while the game is open, the computer's reply.
pub fn evaluate_board(
    board: Board,
    computer_mark: Mark,
    difficulty: Difficulty,
    rng: SessionRng,
) -> Result<Evaluation, EngineError> {
    let mut engine = TicTacToeEngine::new(computer_mark, rng)?;
    let outcome = engine.outcome(&board);
    if outcome.is_over() {
        return Ok(Evaluation {
            outcome,
            computer_move: None,
            board_after: board,
        });
    }

    let pos = engine.choose_move(&board, difficulty)?;
    let mut board_after = board;
    board_after.place(pos, computer_mark)?;
    log!("Evaluated {} for {}: {} plays {}", board.to_notation(), difficulty, computer_mark, pos);

    Ok(Evaluation {
        outcome: engine.outcome(&board_after),
        computer_move: Some(pos),
        board_after,
    })
}

pub fn print_evaluation(evaluation: &Evaluation) {
    match evaluation.computer_move {
        Some(pos) => {
            println!("move: {} {}", pos.row, pos.col);
            println!("{}", evaluation.board_after);
            println!("outcome: {}", evaluation.outcome);
        }
        None => println!("outcome: {}", evaluation.outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_finished_board_has_no_move() {
        let evaluation =
            evaluate_board(board("XXX/OO./..."), Mark::O, Difficulty::Hard, SessionRng::new(1))
                .unwrap();
        assert_eq!(evaluation.outcome, Outcome::Win(Mark::X));
        assert_eq!(evaluation.computer_move, None);
    }

    #[test]
    fn test_open_board_gets_a_reply() {
        let evaluation =
            evaluate_board(board("XX./.O./..."), Mark::O, Difficulty::Hard, SessionRng::new(1))
                .unwrap();
        assert_eq!(evaluation.computer_move, Some(Position::new(0, 2)));
        assert_eq!(evaluation.board_after.to_notation(), "XXO.O....");
        assert_eq!(evaluation.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_last_cell_reply_ends_in_draw() {
        let evaluation =
            evaluate_board(board("XOX/XOO/OX."), Mark::X, Difficulty::Easy, SessionRng::new(1))
                .unwrap();
        assert_eq!(evaluation.computer_move, Some(Position::new(2, 2)));
        assert_eq!(evaluation.outcome, Outcome::Draw);
    }

    #[test]
    fn test_empty_computer_mark_is_rejected() {
        let result = evaluate_board(Board::new(), Mark::Empty, Difficulty::Hard, SessionRng::new(1));
        assert_eq!(result, Err(EngineError::EmptyMark));
    }
}
