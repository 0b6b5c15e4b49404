use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::types::{FirstPlayer, Mark};

/// Fixed for a whole session; changing difficulty means starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    pub first_player: FirstPlayer,
}

impl TicTacToeSessionSettings {
    pub fn new(difficulty: Difficulty, first_player: FirstPlayer) -> Self {
        Self {
            difficulty,
            first_player,
        }
    }

    pub fn computer_mark(&self) -> Mark {
        self.first_player.computer_mark()
    }

    pub fn human_mark(&self) -> Mark {
        self.first_player.human_mark()
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            first_player: FirstPlayer::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_matches_classic_setup() {
        let settings = TicTacToeSessionSettings::default();
        assert_eq!(settings.human_mark(), Mark::X);
        assert_eq!(settings.computer_mark(), Mark::O);
        assert_eq!(settings.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_settings_yaml_round_trip() {
        let settings = TicTacToeSessionSettings::new(Difficulty::Medium, FirstPlayer::Computer);
        let serializer = YamlConfigSerializer::new();
        let content = serializer.serialize(&settings).unwrap();
        let loaded: TicTacToeSessionSettings = serializer.deserialize(&content).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_unknown_difficulty_fails_at_load() {
        let content = "difficulty: Expert\nfirst_player: Human\n";
        let serializer = YamlConfigSerializer::new();
        let result: Result<TicTacToeSessionSettings, String> = serializer.deserialize(content);
        assert!(result.is_err());
    }
}
