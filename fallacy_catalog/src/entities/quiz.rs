//! Quiz question definitions.

use serde::{Deserialize, Serialize};

use super::QuestionId;

/// Number of answer options every quiz question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question asking which fallacy a passage commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct: usize,
    pub explanation: String,
}

impl QuizQuestion {
    /// Create a question. `correct` indexes into `options`.
    pub fn new<I, S>(
        id: u32,
        question: impl Into<String>,
        options: I,
        correct: usize,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: QuestionId(id),
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
            explanation: String::new(),
        }
    }

    /// Set the explanation shown after answering.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Text of the correct option, or `None` if `correct` is out of range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }

    /// Whether the answer index points inside `options`.
    pub fn has_valid_answer(&self) -> bool {
        self.correct < self.options.len()
    }
}
