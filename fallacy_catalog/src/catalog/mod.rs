//! The catalog - the central structure holding all trainer content.
//!
//! Content is authored as a TOML document with four top-level tables
//! (`logical_fallacies`, `quiz_questions`, `daily_challenges`, `badges`).
//! The built-in document is compiled into the crate and parsed once on first use;
//! JSON documents with the same shape are accepted as well.

mod summary;
mod validate;

pub use summary::*;

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entities::{
    Badge, BadgeId, ChallengeId, DailyChallenge, Fallacy, FallacyId, QuestionId, QuizQuestion,
};
use crate::error::CatalogError;
use crate::taxonomy::{Difficulty, FallacyCategory};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

/// All trainer content. Collections keep their authoring order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "logical_fallacies", default)]
    pub fallacies: Vec<Fallacy>,

    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,

    #[serde(default)]
    pub daily_challenges: Vec<DailyChallenge>,

    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into this crate.
    ///
    /// Parsed and validated on the first call; later calls return the cached instance.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        BUILTIN.get_or_try_init(|| Catalog::from_toml_str(BUILTIN_CATALOG))
    }

    /// Parse and validate a TOML content document.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(source)?;
        catalog.checked()
    }

    /// Parse and validate a JSON content document.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        catalog.checked()
    }

    /// Load a content document from disk. The format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loading catalog");
        parse(&source)
    }

    /// Serialize as a TOML content document.
    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string(self)?)
    }

    /// Serialize as a pretty-printed JSON content document.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn checked(self) -> Result<Self, CatalogError> {
        self.validate()?;
        for id in self.unresolved_answers() {
            let answer = self
                .question(id)
                .and_then(QuizQuestion::correct_option)
                .unwrap_or_default();
            warn!(question = %id, answer, "Quiz answer does not name a catalog fallacy");
        }
        debug!(
            fallacies = self.fallacies.len(),
            quiz_questions = self.quiz_questions.len(),
            daily_challenges = self.daily_challenges.len(),
            badges = self.badges.len(),
            "Catalog loaded"
        );
        Ok(self)
    }

    /// Count the records in each collection.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            fallacies: self.fallacies.len(),
            quiz_questions: self.quiz_questions.len(),
            daily_challenges: self.daily_challenges.len(),
            badges: self.badges.len(),
        }
    }

    /// Get fallacy by ID.
    pub fn fallacy(&self, id: FallacyId) -> Option<&Fallacy> {
        self.fallacies.iter().find(|f| f.id == id)
    }

    /// Get fallacy by name, ignoring case and surrounding whitespace.
    pub fn fallacy_by_name(&self, name: &str) -> Option<&Fallacy> {
        let name = name.trim().to_lowercase();
        self.fallacies.iter().find(|f| f.name.to_lowercase() == name)
    }

    /// Get quiz question by ID.
    pub fn question(&self, id: QuestionId) -> Option<&QuizQuestion> {
        self.quiz_questions.iter().find(|q| q.id == id)
    }

    /// Get daily challenge by ID.
    pub fn challenge(&self, id: ChallengeId) -> Option<&DailyChallenge> {
        self.daily_challenges.iter().find(|c| c.id == id)
    }

    /// Get badge by ID.
    pub fn badge(&self, id: BadgeId) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == id)
    }

    /// Fallacies whose name, definition, or keywords contain `term`, ignoring case.
    ///
    /// A blank term matches everything.
    pub fn search_fallacies(&self, term: &str) -> Vec<&Fallacy> {
        let term = term.trim().to_lowercase();
        self.fallacies
            .iter()
            .filter(|f| term.is_empty() || f.matches_lowercase(&term))
            .collect()
    }

    /// Fallacies in a category.
    pub fn fallacies_in(&self, category: FallacyCategory) -> Vec<&Fallacy> {
        self.fallacies
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Daily challenges of a given difficulty.
    pub fn challenges_by_difficulty(&self, difficulty: Difficulty) -> Vec<&DailyChallenge> {
        self.daily_challenges
            .iter()
            .filter(|c| c.difficulty == difficulty)
            .collect()
    }

    /// The challenge of the day. Rotates through the challenges by day of year
    /// (January 1st is day 1).
    pub fn challenge_for(&self, date: NaiveDate) -> Option<&DailyChallenge> {
        if self.daily_challenges.is_empty() {
            return None;
        }
        let index = date.ordinal() as usize % self.daily_challenges.len();
        self.daily_challenges.get(index)
    }

    /// Sum of the points of every badge.
    pub fn total_badge_points(&self) -> u64 {
        self.badges.iter().map(|b| u64::from(b.points)).sum()
    }

    /// The fallacy named by a question's correct option.
    pub fn answer_fallacy(&self, question: &QuizQuestion) -> Option<&Fallacy> {
        question
            .correct_option()
            .and_then(|answer| self.fallacy_by_name(answer))
    }
}
