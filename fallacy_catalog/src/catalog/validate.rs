//! Consistency checks run on every catalog after parsing.

use std::collections::HashSet;

use super::Catalog;
use crate::entities::{Collection, QuestionId, OPTIONS_PER_QUESTION};
use crate::error::CatalogError;

impl Catalog {
    /// Check the catalog's invariants, returning the first violation.
    ///
    /// Collections are checked in document order: fallacies, quiz questions,
    /// daily challenges, badges.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique(Collection::Fallacies, self.fallacies.iter().map(|f| f.id.get()))?;
        for fallacy in &self.fallacies {
            ensure_present(Collection::Fallacies, fallacy.id.get(), "name", &fallacy.name)?;
            ensure_present(
                Collection::Fallacies,
                fallacy.id.get(),
                "definition",
                &fallacy.definition,
            )?;
        }

        ensure_unique(
            Collection::QuizQuestions,
            self.quiz_questions.iter().map(|q| q.id.get()),
        )?;
        for question in &self.quiz_questions {
            ensure_present(
                Collection::QuizQuestions,
                question.id.get(),
                "question",
                &question.question,
            )?;
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(CatalogError::WrongOptionCount {
                    question: question.id,
                    count: question.options.len(),
                });
            }
            if !question.has_valid_answer() {
                return Err(CatalogError::AnswerOutOfRange {
                    question: question.id,
                    correct: question.correct,
                    options: question.options.len(),
                });
            }
        }

        ensure_unique(
            Collection::DailyChallenges,
            self.daily_challenges.iter().map(|c| c.id.get()),
        )?;
        for challenge in &self.daily_challenges {
            ensure_present(
                Collection::DailyChallenges,
                challenge.id.get(),
                "title",
                &challenge.title,
            )?;
        }

        ensure_unique(Collection::Badges, self.badges.iter().map(|b| b.id.get()))?;
        for badge in &self.badges {
            ensure_present(Collection::Badges, badge.id.get(), "name", &badge.name)?;
            if badge.points == 0 {
                return Err(CatalogError::NonPositivePoints { badge: badge.id });
            }
        }

        Ok(())
    }

    /// Quiz questions whose correct option does not name a fallacy in this catalog.
    ///
    /// These are not errors: a quiz may ask about fallacies the learn view does
    /// not cover. Loading logs a warning for each one.
    pub fn unresolved_answers(&self) -> Vec<QuestionId> {
        self.quiz_questions
            .iter()
            .filter(|question| self.answer_fallacy(question).is_none())
            .map(|question| question.id)
            .collect()
    }
}

fn ensure_unique(
    collection: Collection,
    ids: impl IntoIterator<Item = u32>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn ensure_present(
    collection: Collection,
    id: u32,
    field: &'static str,
    value: &str,
) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            collection,
            id,
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Badge, Fallacy, QuizQuestion};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap().clone()
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(catalog().validate().is_ok());
        assert!(Catalog::new().validate().is_ok());
    }

    #[test]
    fn test_duplicate_fallacy_id() {
        let mut catalog = catalog();
        catalog.fallacies.push(Fallacy::new(3, "Tu Quoque", "Deflecting with hypocrisy"));

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId {
                collection: Collection::Fallacies,
                id: 3
            }
        ));
    }

    #[test]
    fn test_ids_only_unique_per_collection() {
        // Fallacy 1, question 1, challenge 1, and badge 1 coexist in the builtin data.
        let catalog = catalog();
        assert_eq!(catalog.fallacies[0].id.get(), 1);
        assert_eq!(catalog.badges[0].id.get(), 1);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_wrong_option_count() {
        let mut catalog = catalog();
        catalog.quiz_questions[2].options.pop();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::WrongOptionCount { question, count: 3 } if question == QuestionId(3)
        ));
    }

    #[test]
    fn test_answer_out_of_range() {
        let mut catalog = catalog();
        catalog.quiz_questions[0].correct = 4;

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::AnswerOutOfRange {
                correct: 4,
                options: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_point_badge() {
        let mut catalog = catalog();
        catalog.badges.push(Badge::new(6, "Participant", "Open the app", "🙂", 0));

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::NonPositivePoints { badge } if badge.get() == 6));
    }

    #[test]
    fn test_blank_field() {
        let mut catalog = catalog();
        catalog.daily_challenges[1].title = "   ".to_string();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyField {
                collection: Collection::DailyChallenges,
                id: 2,
                field: "title"
            }
        ));
    }

    #[test]
    fn test_unresolved_answers() {
        let mut catalog = catalog();
        assert!(catalog.unresolved_answers().is_empty());

        catalog.quiz_questions.push(QuizQuestion::new(
            6,
            "Which fallacy is this? 'You did it too.'",
            ["Tu Quoque", "Straw Man", "Bandwagon", "Red Herring"],
            0,
        ));
        assert_eq!(catalog.unresolved_answers(), vec![QuestionId(6)]);
        // Unresolved answers are warnings, not validation failures.
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_unresolved_answer_loads_and_query_is_repeatable() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[quiz_questions]]
            id = 1
            question = "Which fallacy is this? 'You did it too.'"
            options = ["Tu Quoque", "Straw Man", "Bandwagon", "Red Herring"]
            correct = 0
            explanation = "It deflects criticism by pointing at the critic."
            "#,
        )
        .unwrap();

        let first = catalog.unresolved_answers();
        assert_eq!(first, vec![QuestionId(1)]);
        assert_eq!(catalog.unresolved_answers(), first);
    }
}
