use crate::error::EngineError;
use crate::games::SessionRng;
use super::board::Board;
use super::difficulty::Difficulty;
use super::game_state::TicTacToeGameState;
use super::rules::has_won;
use super::types::{Mark, Position};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const NEUTRAL_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Result<Self, EngineError> {
        let opponent_mark = bot_mark.opponent().ok_or(EngineError::EmptyMark)?;
        Ok(Self {
            board,
            bot_mark,
            opponent_mark,
        })
    }

    /// Input for whoever is to move in `state`.
    pub fn from_game_state(state: &TicTacToeGameState) -> Result<Self, EngineError> {
        Self::new(*state.board(), state.current_mark())
    }
}

/// Picks the bot's move. `None` only when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium | Difficulty::Hard => {
            calculate_minimax_move(&input, difficulty.depth_limit())
        }
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.available_moves();
    rng.pick(&available_moves)
}

/// Tries every empty cell row-major and keeps the first one with the strictly best score.
pub fn calculate_minimax_move(input: &BotInput, depth_limit: Option<usize>) -> Option<Position> {
    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in input.board.available_moves() {
        board.set(pos, input.bot_mark);
        let score = minimax(
            &mut board,
            0,
            false,
            depth_limit,
            input.bot_mark,
            input.opponent_mark,
        );
        board.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    depth_limit: Option<usize>,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if has_won(board, bot_mark) {
        return WIN_SCORE;
    }
    if has_won(board, opponent_mark) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return NEUTRAL_SCORE;
    }
    // Cut-off positions score as a draw.
    if depth_limit.is_some_and(|limit| depth >= limit) {
        return NEUTRAL_SCORE;
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            board.set(pos, bot_mark);
            let eval = minimax(board, depth + 1, false, depth_limit, bot_mark, opponent_mark);
            board.set(pos, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            board.set(pos, opponent_mark);
            let eval = minimax(board, depth + 1, true, depth_limit, bot_mark, opponent_mark);
            board.set(pos, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
