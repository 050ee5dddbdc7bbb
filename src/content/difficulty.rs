//! The closed difficulty scale shared by microlessons and exercises.

use serde::{Deserialize, Serialize};

/// Difficulty of a microlesson or exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns all difficulty levels, easiest first.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Returns the lowercase wire form of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for level in Difficulty::all() {
            let json = serde_json::to_string(&level).expect("difficulty should serialize");
            let parsed: Difficulty =
                serde_json::from_str(&json).expect("difficulty should deserialize");
            assert_eq!(level, parsed);
        }
    }

    #[test]
    fn test_difficulty_wire_form_is_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_difficulty_rejects_unknown_level() {
        let parsed = serde_json::from_str::<Difficulty>("\"expert\"");
        assert!(parsed.is_err());
    }
}
