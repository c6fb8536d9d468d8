use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question has no choices")]
    NoChoices,

    #[error("choice {index} is empty")]
    EmptyChoice { index: usize },

    #[error("choice \"{choice}\" appears more than once")]
    DuplicateChoice { choice: String },

    #[error("correct answer \"{answer}\" is not one of the choices")]
    AnswerNotInChoices { answer: String },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Authoring form of a question, as written in a question bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub prompt: String,
    pub choices: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_choice: String,
}

impl QuestionDraft {
    pub fn new(
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        correct_choice: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_choice: correct_choice.into(),
        }
    }

    /// Check the draft and turn it into an immutable `Question`.
    ///
    /// Choice text is kept verbatim; answers are later matched by exact
    /// string equality, so no trimming or case folding happens here.
    /// A single choice is accepted.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or a choice is blank, a choice is
    /// repeated, or the correct answer is not among the choices.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }

        let mut seen = HashSet::with_capacity(self.choices.len());
        for (index, choice) in self.choices.iter().enumerate() {
            if choice.trim().is_empty() {
                return Err(QuestionError::EmptyChoice { index });
            }
            if !seen.insert(choice.as_str()) {
                return Err(QuestionError::DuplicateChoice {
                    choice: choice.clone(),
                });
            }
        }

        if !seen.contains(self.correct_choice.as_str()) {
            return Err(QuestionError::AnswerNotInChoices {
                answer: self.correct_choice,
            });
        }

        Ok(Question {
            prompt: self.prompt,
            choices: self.choices,
            correct_choice: self.correct_choice,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// `choices` keeps the authored order; display order is a shuffled copy
/// produced by the question supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct_choice: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.correct_choice
    }

    /// Exact comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_choice == choice
    }

    #[must_use]
    pub fn to_draft(&self) -> QuestionDraft {
        QuestionDraft {
            prompt: self.prompt.clone(),
            choices: self.choices.clone(),
            correct_choice: self.correct_choice.clone(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new(
            "Which country uses the dinar?",
            ["Greece", "Hungary", "Serbia", "Finland"],
            "Serbia",
        )
    }

    #[test]
    fn valid_draft_keeps_authored_order() {
        let question = draft().validate().unwrap();
        assert_eq!(question.prompt(), "Which country uses the dinar?");
        assert_eq!(question.choices()[0], "Greece");
        assert_eq!(question.correct_choice(), "Serbia");
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let mut d = draft();
        d.prompt = "  ".into();
        assert_eq!(d.validate().unwrap_err(), QuestionError::EmptyPrompt);
    }

    #[test]
    fn answer_must_be_a_choice() {
        let mut d = draft();
        d.correct_choice = "Croatia".into();
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::AnswerNotInChoices { .. }
        ));
    }

    #[test]
    fn duplicate_choices_are_rejected() {
        let d = QuestionDraft::new("Q", ["A", "B", "A"], "A");
        assert_eq!(
            d.validate().unwrap_err(),
            QuestionError::DuplicateChoice { choice: "A".into() }
        );
    }

    #[test]
    fn empty_choice_list_and_blank_choice_are_rejected() {
        let none = QuestionDraft::new("Q", Vec::<String>::new(), "A");
        assert_eq!(none.validate().unwrap_err(), QuestionError::NoChoices);

        let blank = QuestionDraft::new("Q", ["A", " "], "A");
        assert_eq!(
            blank.validate().unwrap_err(),
            QuestionError::EmptyChoice { index: 1 }
        );
    }

    #[test]
    fn single_choice_question_is_allowed() {
        let question = QuestionDraft::new("Only one?", ["Yes"], "Yes")
            .validate()
            .unwrap();
        assert_eq!(question.choices().len(), 1);
    }

    #[test]
    fn comparison_is_exact() {
        let question = draft().validate().unwrap();
        assert!(question.is_correct("Serbia"));
        assert!(!question.is_correct("serbia"));
        assert!(!question.is_correct("Serbia "));
    }

    #[test]
    fn draft_reads_bank_json_shape() {
        let json = r#"{"question":"2+2?","choices":["3","4"],"answer":"4"}"#;
        let d: QuestionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.prompt, "2+2?");
        assert_eq!(d.correct_choice, "4");
        assert_eq!(d.validate().unwrap().choices().len(), 2);
    }
}
