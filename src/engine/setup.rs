//! Game configuration: who plays each side and how strong the computer is.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::board::{Alliance, Minimax, MoveStrategy, RandomStrategy};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerType {
    #[default]
    Human,
    Computer,
}

/// Strength of the computer player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Random moves
    #[default]
    Trivial,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Trivial,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Minimax depth for this level; `None` for random play
    #[must_use]
    pub const fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Trivial => None,
            Difficulty::Easy => Some(4),
            Difficulty::Medium => Some(6),
            Difficulty::Hard => Some(10),
        }
    }

    /// A fresh strategy playing at this level
    #[must_use]
    pub fn strategy(self) -> Box<dyn MoveStrategy> {
        match self.search_depth() {
            Some(depth) => Box::new(Minimax::new(depth)),
            None => Box::new(RandomStrategy::new()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Trivial => "trivial",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

/// Player types for both sides plus the computer's strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSetup {
    pub white: PlayerType,
    pub black: PlayerType,
    pub difficulty: Difficulty,
}

impl GameSetup {
    #[must_use]
    pub const fn new(white: PlayerType, black: PlayerType, difficulty: Difficulty) -> Self {
        GameSetup {
            white,
            black,
            difficulty,
        }
    }

    #[must_use]
    pub const fn player_type(&self, alliance: Alliance) -> PlayerType {
        match alliance {
            Alliance::White => self.white,
            Alliance::Black => self.black,
        }
    }

    /// Returns true if the computer plays `alliance`
    #[must_use]
    pub fn is_ai_player(&self, alliance: Alliance) -> bool {
        self.player_type(alliance) == PlayerType::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup_is_two_humans() {
        let setup = GameSetup::default();
        assert!(!setup.is_ai_player(Alliance::White));
        assert!(!setup.is_ai_player(Alliance::Black));
        assert_eq!(setup.difficulty, Difficulty::Trivial);
    }

    #[test]
    fn test_is_ai_player() {
        let setup = GameSetup::new(PlayerType::Human, PlayerType::Computer, Difficulty::Easy);
        assert!(!setup.is_ai_player(Alliance::White));
        assert!(setup.is_ai_player(Alliance::Black));
    }

    #[test]
    fn test_difficulty_strategies() {
        assert_eq!(Difficulty::Trivial.strategy().name(), "Random");
        assert_eq!(Difficulty::Easy.strategy().name(), "Minimax");
        assert_eq!(Difficulty::Easy.search_depth(), Some(4));
        assert_eq!(Difficulty::Medium.search_depth(), Some(6));
        assert_eq!(Difficulty::Hard.search_depth(), Some(10));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "grandmaster".parse::<Difficulty>(),
            Err(EngineError::UnknownDifficulty(_))
        ));
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
    }
}
