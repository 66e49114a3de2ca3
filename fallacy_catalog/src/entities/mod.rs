//! Record definitions for the catalog's four collections.

mod badge;
mod challenge;
mod fallacy;
mod quiz;

pub use badge::*;
pub use challenge::*;
pub use fallacy::*;
pub use quiz::*;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Get the raw numeric id.
            pub fn get(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a fallacy, unique among fallacies.
    FallacyId
);
record_id!(
    /// Identifier of a quiz question, unique among quiz questions.
    QuestionId
);
record_id!(
    /// Identifier of a daily challenge, unique among challenges.
    ChallengeId
);
record_id!(
    /// Identifier of a badge, unique among badges.
    BadgeId
);

/// The collections making up a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Fallacies,
    QuizQuestions,
    DailyChallenges,
    Badges,
}

impl Collection {
    /// Key of the collection in a content document.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Fallacies => "logical_fallacies",
            Collection::QuizQuestions => "quiz_questions",
            Collection::DailyChallenges => "daily_challenges",
            Collection::Badges => "badges",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
