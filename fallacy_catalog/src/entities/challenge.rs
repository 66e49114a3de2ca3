//! Daily challenge definitions.

use serde::{Deserialize, Serialize};

use super::ChallengeId;
use crate::taxonomy::{ChallengeCategory, Difficulty};

/// A real-world exercise for practicing fallacy detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: ChallengeCategory,
}

impl DailyChallenge {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        category: ChallengeCategory,
    ) -> Self {
        Self {
            id: ChallengeId(id),
            title: title.into(),
            description: description.into(),
            difficulty,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_serialized_shape() {
        let challenge = DailyChallenge::new(
            1,
            "Social Media Fallacy Hunt",
            "Find three examples of logical fallacies in social media posts.",
            Difficulty::Easy,
            ChallengeCategory::RealWorld,
        );
        let value = serde_json::to_value(&challenge).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["category"], "real-world");
    }
}
