use crate::error::EngineError;
use crate::games::SessionRng;
use crate::games::tictactoe::{
    BotInput, Difficulty, Outcome, Position, TicTacToeGameState, TicTacToeSessionSettings,
    calculate_move,
};
use crate::log;
use super::GameObserver;

/// Drives one human-vs-computer game: human move, verdict, computer reply, verdict.
pub struct TicTacToeSession<O: GameObserver = ()> {
    settings: TicTacToeSessionSettings,
    game_state: TicTacToeGameState,
    rng: SessionRng,
    observer: O,
}

impl TicTacToeSession<()> {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        Self::with_observer(settings, rng, ())
    }
}

impl<O: GameObserver> TicTacToeSession<O> {
    pub fn with_observer(settings: TicTacToeSessionSettings, rng: SessionRng, observer: O) -> Self {
        log!(
            "New session: difficulty {}, computer plays {}, seed {}",
            settings.difficulty,
            settings.computer_mark(),
            rng.seed()
        );
        Self {
            game_state: TicTacToeGameState::new(settings.first_player),
            settings,
            rng,
            observer,
        }
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn outcome(&self) -> Outcome {
        self.game_state.outcome()
    }

    /// Lets the computer open when it plays first. No-op otherwise.
    pub fn start(&mut self) -> Result<Outcome, EngineError> {
        if self.game_state.is_computer_turn() {
            self.play_computer_move()?;
        }
        Ok(self.outcome())
    }

    pub fn play_human_move(&mut self, pos: Position) -> Result<Outcome, EngineError> {
        let human_mark = self.game_state.human_mark();
        self.game_state.place_mark(human_mark, pos)?;
        self.observer.on_move(human_mark, pos, self.game_state.board());

        let verdict = self.outcome();
        if verdict.is_over() {
            self.finish(verdict);
            return Ok(verdict);
        }

        self.play_computer_move()?;
        Ok(self.outcome())
    }

    pub fn play_computer_move(&mut self) -> Result<Position, EngineError> {
        if self.outcome().is_over() {
            return Err(EngineError::GameOver);
        }

        let input = BotInput::from_game_state(&self.game_state)?;
        let pos = calculate_move(self.settings.difficulty, input, &mut self.rng)
            .ok_or(EngineError::NoLegalMove)?;

        let computer_mark = self.game_state.computer_mark();
        self.game_state.place_mark(computer_mark, pos)?;
        log!("Computer ({}) plays {} on {}", computer_mark, pos, self.settings.difficulty);
        self.observer.on_move(computer_mark, pos, self.game_state.board());

        let verdict = self.outcome();
        if verdict.is_over() {
            self.finish(verdict);
        }
        Ok(pos)
    }

    /// Fresh board with the same settings; the computer opens again if it plays first.
    pub fn reset(&mut self) -> Result<Outcome, EngineError> {
        self.game_state.reset();
        log!("Session reset");
        self.start()
    }

    fn finish(&mut self, verdict: Outcome) {
        log!("Game over after {} moves: {}", self.game_state.move_count(), verdict);
        self.observer.on_game_over(verdict);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, FirstPlayer, Mark};

    #[derive(Default)]
    struct RecordingObserver {
        moves: Vec<(Mark, Position)>,
        outcomes: Vec<Outcome>,
    }

    impl GameObserver for RecordingObserver {
        fn on_move(&mut self, mark: Mark, pos: Position, _board: &Board) {
            self.moves.push((mark, pos));
        }

        fn on_game_over(&mut self, outcome: Outcome) {
            self.outcomes.push(outcome);
        }
    }

    fn session(difficulty: Difficulty, first_player: FirstPlayer) -> TicTacToeSession {
        TicTacToeSession::new(
            TicTacToeSessionSettings::new(difficulty, first_player),
            SessionRng::new(5),
        )
    }

    #[test]
    fn test_human_move_gets_a_reply() {
        let mut session = session(Difficulty::Hard, FirstPlayer::Human);
        assert_eq!(session.start(), Ok(Outcome::InProgress));
        assert_eq!(session.game_state().move_count(), 0);

        let verdict = session.play_human_move(Position::new(0, 0)).unwrap();
        assert_eq!(verdict, Outcome::InProgress);
        assert_eq!(session.game_state().move_count(), 2);
        assert_eq!(session.game_state().last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_computer_opens_when_first() {
        let mut session = session(Difficulty::Hard, FirstPlayer::Computer);
        session.start().unwrap();
        assert_eq!(session.game_state().board().to_notation(), "X........");
        assert_eq!(session.game_state().human_mark(), Mark::O);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut session = session(Difficulty::Medium, FirstPlayer::Human);
        session.play_human_move(Position::new(0, 0)).unwrap();
        let result = session.play_human_move(Position::new(0, 0));
        assert_eq!(result, Err(EngineError::InvalidMove { row: 0, col: 0 }));
        assert_eq!(session.game_state().move_count(), 2);
    }

    #[test]
    fn test_top_row_attack_against_hard_never_wins() {
        let mut session = TicTacToeSession::with_observer(
            TicTacToeSessionSettings::new(Difficulty::Hard, FirstPlayer::Human),
            SessionRng::new(3),
            RecordingObserver::default(),
        );
        let scripted = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];

        for pos in scripted {
            if session.outcome().is_over() {
                break;
            }
            if session.game_state().board().is_empty_at(pos) {
                session.play_human_move(pos).unwrap();
            }
        }
        while !session.outcome().is_over() {
            let pos = session.game_state().board().available_moves()[0];
            session.play_human_move(pos).unwrap();
        }

        let verdict = session.outcome();
        assert!(
            verdict == Outcome::Draw || verdict == Outcome::Win(Mark::O),
            "{}",
            verdict
        );
        assert_eq!(session.observer().outcomes, vec![verdict]);
        assert_eq!(session.observer().moves[0], (Mark::X, Position::new(0, 0)));
        assert_eq!(session.observer().moves[1], (Mark::O, Position::new(1, 1)));
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut session = session(Difficulty::Medium, FirstPlayer::Human);
        for pos in [Position::new(0, 0), Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)] {
            session.play_human_move(pos).unwrap();
        }
        assert_eq!(session.outcome(), Outcome::Win(Mark::X));
        assert_eq!(
            session.play_human_move(Position::new(2, 2)),
            Err(EngineError::GameOver)
        );
        assert_eq!(session.play_computer_move(), Err(EngineError::GameOver));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut session = session(Difficulty::Easy, FirstPlayer::Computer);
        session.start().unwrap();
        session.play_human_move(session.game_state().board().available_moves()[0]).unwrap();
        assert_eq!(session.reset(), Ok(Outcome::InProgress));
        assert_eq!(session.game_state().move_count(), 1);
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_easy_games_always_finish() {
        let mut session = session(Difficulty::Easy, FirstPlayer::Human);
        for _ in 0..20 {
            while !session.outcome().is_over() {
                let pos = session.game_state().board().available_moves()[0];
                session.play_human_move(pos).unwrap();
            }
            assert!(session.game_state().move_count() <= 9);
            session.reset().unwrap();
        }
    }
}
