//! Collection counts and their printed report.

use serde::{Deserialize, Serialize};

/// First line of the printed summary.
pub const SUMMARY_HEADLINE: &str = "Logical Fallacy Application Data Structure Complete!";

/// Number of records in each collection of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub fallacies: usize,
    pub quiz_questions: usize,
    pub daily_challenges: usize,
    pub badges: usize,
}

impl CatalogSummary {
    /// Total number of records across all collections.
    pub fn total(&self) -> usize {
        self.fallacies + self.quiz_questions + self.daily_challenges + self.badges
    }
}

/// Renders the five report lines without a trailing newline.
impl std::fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{SUMMARY_HEADLINE}")?;
        writeln!(f, "Total Fallacies: {}", self.fallacies)?;
        writeln!(f, "Total Quiz Questions: {}", self.quiz_questions)?;
        writeln!(f, "Total Daily Challenges: {}", self.daily_challenges)?;
        write!(f, "Total Badges: {}", self.badges)
    }
}
