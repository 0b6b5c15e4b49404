mod board;
mod bot_controller;
mod difficulty;
mod game_state;
mod rules;
mod settings;
mod types;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use difficulty::Difficulty;
pub use game_state::TicTacToeGameState;
pub use rules::{check_win, check_win_with_line, has_won, is_draw, outcome};
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, FirstPlayer, GameStatus, Mark, Outcome, Position, WinningLine};
