use common::games::SessionRng;
use common::games::tictactoe::{
    BotInput, Board, Difficulty, Mark, Outcome, Position, TicTacToeSessionSettings, calculate_move,
};
use common::{EngineError, GameObserver, TicTacToeSession, log};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub computer_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    fn record(&mut self, outcome: Outcome, computer_mark: Mark) {
        match outcome {
            Outcome::Win(mark) if mark == computer_mark => self.computer_wins += 1,
            Outcome::Win(_) => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.computer_wins + self.opponent_wins + self.draws
    }
}

struct BoardPrinter {
    enabled: bool,
}

impl GameObserver for BoardPrinter {
    fn on_move(&mut self, mark: Mark, pos: Position, board: &Board) {
        if self.enabled {
            println!("{} -> {}\n{}\n", mark, pos, board);
        }
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        if self.enabled {
            println!("result: {}\n", outcome);
        }
    }
}

/// Plays `games` games of the configured computer against a simulated human
/// that picks its moves with `opponent_difficulty`.
pub fn run_self_play(
    settings: TicTacToeSessionSettings,
    opponent_difficulty: Difficulty,
    games: u32,
    seed: u64,
    print_boards: bool,
) -> Result<MatchSummary, EngineError> {
    let mut session = TicTacToeSession::with_observer(
        settings,
        SessionRng::new(seed),
        BoardPrinter {
            enabled: print_boards,
        },
    );
    let mut opponent_rng = SessionRng::new(seed.wrapping_add(1));
    let computer_mark = settings.computer_mark();
    let opponent_mark = settings.human_mark();
    let mut summary = MatchSummary::default();

    for game in 0..games {
        if game > 0 {
            session.reset()?;
        } else {
            session.start()?;
        }

        while !session.outcome().is_over() {
            let input = BotInput::new(*session.game_state().board(), opponent_mark)?;
            let pos = calculate_move(opponent_difficulty, input, &mut opponent_rng)
                .ok_or(EngineError::NoLegalMove)?;
            session.play_human_move(pos)?;
        }

        summary.record(session.outcome(), computer_mark);
    }

    log!(
        "Self-play finished: {} games, computer {} / opponent {} / draws {}",
        summary.games(),
        summary.computer_wins,
        summary.opponent_wins,
        summary.draws
    );
    Ok(summary)
}

pub fn print_summary(summary: &MatchSummary) {
    println!("games: {}", summary.games());
    println!("computer wins: {}", summary.computer_wins);
    println!("opponent wins: {}", summary.opponent_wins);
    println!("draws: {}", summary.draws);
}
