//! Fallacy definitions.

use serde::{Deserialize, Serialize};

use super::FallacyId;
use crate::taxonomy::FallacyCategory;

/// A named pattern of flawed reasoning with illustrative examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallacy {
    pub id: FallacyId,
    pub name: String,
    /// One-sentence definition shown in listings.
    pub definition: String,
    /// Longer explanation for the learn view.
    pub description: String,
    pub examples: Vec<String>,
    /// Words that tend to signal this fallacy; also used for search.
    pub keywords: Vec<String>,
    pub category: FallacyCategory,
}

impl Fallacy {
    /// Create a fallacy with the given name and definition.
    pub fn new(id: u32, name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: FallacyId(id),
            name: name.into(),
            definition: definition.into(),
            description: String::new(),
            examples: Vec::new(),
            keywords: Vec::new(),
            category: FallacyCategory::Informal,
        }
    }

    /// Set the long description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Add keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: FallacyCategory) -> Self {
        self.category = category;
        self
    }

    /// Case-insensitive match of `term` against the name, definition, or any keyword.
    ///
    /// `term` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.definition.to_lowercase().contains(term)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(term))
    }

    /// Case-insensitive match of `term` against the name, definition, or any keyword.
    pub fn matches(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    /// Slug of the name, e.g. `"Straw Man"` -> `"straw-man"`.
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straw_man() -> Fallacy {
        Fallacy::new(1, "Straw Man", "Distorting an opponent's argument")
            .with_example("So you want to waste money?")
            .with_keywords(["misrepresent", "Caricature"])
    }

    #[test]
    fn test_fallacy_builder() {
        let fallacy = straw_man()
            .with_description("Rebutting a misconstrued version of the argument.")
            .with_category(FallacyCategory::Informal);
        assert_eq!(fallacy.id, FallacyId(1));
        assert_eq!(
            fallacy.description,
            "Rebutting a misconstrued version of the argument."
        );
        assert_eq!(fallacy.examples.len(), 1);
        assert_eq!(fallacy.keywords, vec!["misrepresent", "Caricature"]);
        assert!(straw_man().description.is_empty());
    }

    #[test]
    fn test_matches_name_definition_and_keywords() {
        let fallacy = straw_man();
        assert!(fallacy.matches("straw"));
        assert!(fallacy.matches("OPPONENT"));
        assert!(fallacy.matches("caricat"));
        assert!(!fallacy.matches("popular"));
    }

    #[test]
    fn test_examples_are_not_searched() {
        let fallacy = straw_man();
        assert!(!fallacy.matches("waste money"));
    }

    #[test]
    fn test_slug() {
        assert_eq!(straw_man().slug(), "straw-man");
        let fallacy = Fallacy::new(4, "False  Dilemma", "");
        assert_eq!(fallacy.slug(), "false-dilemma");
    }
}
