//! Classification tags used across the catalog: fallacy categories, challenge
//! difficulty, and challenge categories.

use serde::{Deserialize, Serialize};

/// Broad families of fallacies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallacyCategory {
    /// Flaws in content or context rather than logical form.
    Informal,
    /// Flaws in the structure of the argument itself.
    Formal,
}

impl FallacyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallacyCategory::Informal => "informal",
            FallacyCategory::Formal => "formal",
        }
    }
}

impl std::fmt::Display for FallacyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How demanding a daily challenge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
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

/// What kind of exercise a daily challenge asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeCategory {
    /// Spotting fallacies in the wild (social media, news).
    RealWorld,
    /// Close reading of a debate or argument.
    Analysis,
    /// Writing fallacious arguments and repairing them.
    Creative,
}

impl ChallengeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeCategory::RealWorld => "real-world",
            ChallengeCategory::Analysis => "analysis",
            ChallengeCategory::Creative => "creative",
        }
    }
}

impl std::fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_serialized_names_match_display() {
        let json = serde_json::to_string(&ChallengeCategory::RealWorld).unwrap();
        assert_eq!(json, "\"real-world\"");
        assert_eq!(ChallengeCategory::RealWorld.to_string(), "real-world");

        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");

        let category: FallacyCategory = serde_json::from_str("\"informal\"").unwrap();
        assert_eq!(category, FallacyCategory::Informal);
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result: Result<Difficulty, _> = serde_json::from_str("\"extreme\"");
        assert!(result.is_err());
    }
}
