//! Question bank loading.
//!
//! A bank file is a JSON array of `{ "question", "choices", "answer" }`
//! objects. The whole bank is rejected if any entry fails validation, so a
//! malformed question never surfaces mid-game.

use std::path::Path;

use trivia_core::model::{Question, QuestionDraft};

use crate::error::BankError;

/// A validated, non-empty master question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate every draft and build the bank.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::Invalid` naming the first malformed question.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        if drafts.is_empty() {
            return Err(BankError::Empty);
        }
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::Invalid { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON, otherwise as `from_drafts`.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        Self::from_drafts(drafts)
    }

    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read, otherwise as
    /// `from_json_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The questions that ship with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let drafts = builtin_drafts();
        Self {
            questions: drafts
                .into_iter()
                .filter_map(|draft| draft.validate().ok())
                .collect(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new(
            "A whole generation of Americans refers to this famous person as 'Ole Blue Eyes'. \
             To whom are they referring?",
            ["Robert Redford", "Chris Pine", "Frank Sinatra", "Bradley Cooper"],
            "Frank Sinatra",
        ),
        QuestionDraft::new(
            "The Sex in the City Series is based on a real-life person's experiences in New \
             York City. Name the real-life person.",
            [
                "Carrie Bradshaw",
                "Candace Bushnell",
                "Miranda Priestley",
                "Sarah Jessica Parker",
            ],
            "Candace Bushnell",
        ),
        QuestionDraft::new(
            "Cinco de Mayo was first celebrated in the United States as a show of solidarity \
             with which country against French rule?",
            ["Bolivia", "Portugal", "Spain", "Mexico"],
            "Mexico",
        ),
        QuestionDraft::new(
            "In 2008, several financial institutions faced a financial crisis, forcing the U.S. \
             government to take measures to prevent their collapse. What phrase is used to \
             denote the importance of those institutions?",
            [
                "The Wolf of Wall Street",
                "Too Big to Fail",
                "The Big Chill",
                "A Lion in Winter",
            ],
            "Too Big to Fail",
        ),
        QuestionDraft::new(
            "In today's lexicon, acronyms have replaced words in everyday language and \
             messaging. What does the acronym »idk« mean?",
            [
                "It's darn kind",
                "Invention done kind",
                "Internet diction kills",
                "I don't know",
            ],
            "I don't know",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::QuestionError;

    #[test]
    fn builtin_bank_is_fully_valid() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), builtin_drafts().len());
        assert!(bank.questions().iter().all(|q| q.is_correct(q.correct_choice())));
    }

    #[test]
    fn json_bank_loads() {
        let json = r#"[
            {"question": "Capital of France?", "choices": ["Paris", "Lyon"], "answer": "Paris"},
            {"question": "2 + 2?", "choices": ["4"], "answer": "4"}
        ]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[1].choices(), ["4".to_string()]);
    }

    #[test]
    fn one_bad_question_rejects_the_bank() {
        let json = r#"[
            {"question": "ok", "choices": ["a", "b"], "answer": "a"},
            {"question": "bad", "choices": ["a", "b"], "answer": "c"}
        ]"#;
        let err = QuestionBank::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            BankError::Invalid {
                index: 1,
                source: QuestionError::AnswerNotInChoices { .. }
            }
        ));
    }

    #[test]
    fn empty_and_malformed_banks_are_errors() {
        assert!(matches!(
            QuestionBank::from_json_str("[]").unwrap_err(),
            BankError::Empty
        ));
        assert!(matches!(
            QuestionBank::from_json_str(r#"[{"question": "no answer"}]"#).unwrap_err(),
            BankError::Parse(_)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuestionBank::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, BankError::Io(_)));
    }
}
