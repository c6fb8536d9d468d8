use chrono::{DateTime, Utc};
use services::{FeedbackKind, GameSession, RenderRequest, ViewRenderer};
use trivia_core::model::{Outcome, Question, Score};

use crate::views::ViewError;

/// Everything the game page needs to draw, as last requested by the
/// controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Idle,
    Question {
        prompt: String,
        choices: Vec<String>,
        seconds_left: Option<u32>,
    },
    Feedback {
        kind: FeedbackKind,
        correct_answer: String,
    },
    Summary {
        correct: u32,
        incorrect: u32,
    },
}

impl ViewRenderer for Screen {
    fn render(&mut self, request: RenderRequest) {
        match request {
            RenderRequest::Question { prompt, choices } => {
                *self = Screen::Question {
                    prompt,
                    choices,
                    seconds_left: None,
                };
            }
            RenderRequest::Countdown(seconds) => {
                if let Screen::Question { seconds_left, .. } = self {
                    *seconds_left = Some(seconds);
                }
            }
            RenderRequest::Feedback {
                kind,
                correct_answer,
            } => {
                *self = Screen::Feedback {
                    kind,
                    correct_answer,
                };
            }
            RenderRequest::Summary { correct, incorrect } => {
                *self = Screen::Summary { correct, incorrect };
            }
        }
    }
}

/// Pairs the game controller with the screen it renders into.
pub struct GameVm {
    session: GameSession,
    screen: Screen,
}

impl GameVm {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            screen: Screen::Idle,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.session.score()
    }

    /// # Errors
    ///
    /// Returns `ViewError::EmptyGame` when there is nothing to play.
    pub fn start(&mut self, questions: &[Question], now: DateTime<Utc>) -> Result<(), ViewError> {
        self.session
            .start(questions, now, &mut self.screen)
            .map_err(ViewError::from_session)
    }

    /// # Errors
    ///
    /// Returns `ViewError` if the game was never started.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<(), ViewError> {
        self.session
            .restart(now, &mut self.screen)
            .map_err(ViewError::from_session)
    }

    pub fn select(&mut self, choice: &str, now: DateTime<Utc>) -> Option<Outcome> {
        self.session.select(choice, now, &mut self.screen)
    }

    pub fn tick(&mut self, now: DateTime<Utc>) {
        let _ = self.session.tick(now, &mut self.screen);
    }

    /// "Question 2 of 5" while playing, empty otherwise.
    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.session.progress();
        if progress.is_over || progress.total == 0 {
            return String::new();
        }
        format!("Question {} of {}", progress.served, progress.total)
    }
}
