//! Errors raised while loading or validating a catalog.

use std::path::PathBuf;

use crate::entities::{BadgeId, Collection, QuestionId};

/// Errors that can occur while reading, parsing, or validating catalog content.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading a content file failed.
    #[error("failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content file with an extension other than `toml` or `json`.
    #[error("unsupported catalog format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Two records in one collection share an id.
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: Collection, id: u32 },

    /// A quiz question without exactly four options.
    #[error("quiz question {question} has {count} options, expected 4")]
    WrongOptionCount { question: QuestionId, count: usize },

    /// A quiz answer index outside the option list.
    #[error("quiz question {question} marks option {correct} correct but has only {options} options")]
    AnswerOutOfRange {
        question: QuestionId,
        correct: usize,
        options: usize,
    },

    /// A badge worth zero points.
    #[error("badge {badge} must be worth a positive number of points")]
    NonPositivePoints { badge: BadgeId },

    /// A required text field is blank.
    #[error("{collection} record {id} has an empty {field}")]
    EmptyField {
        collection: Collection,
        id: u32,
        field: &'static str,
    },
}
