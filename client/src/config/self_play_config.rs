use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

const MAX_SELF_PLAY_GAMES: u32 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SelfPlayConfig {
    pub games: u32,
    /// Strength of the simulated human opponent.
    pub opponent_difficulty: Difficulty,
    #[serde(default)]
    pub print_boards: bool,
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("self_play.games must be greater than 0".to_string());
        }
        if self.games > MAX_SELF_PLAY_GAMES {
            return Err(format!(
                "self_play.games must not exceed {}",
                MAX_SELF_PLAY_GAMES
            ));
        }
        Ok(())
    }
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            opponent_difficulty: Difficulty::Easy,
            print_boards: false,
        }
    }
}
