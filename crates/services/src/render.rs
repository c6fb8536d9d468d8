//! Render requests emitted by the game controller.
//!
//! The controller never draws anything. Front-ends implement `ViewRenderer`
//! and turn each request into visible output; calls are synchronous and
//! nothing is returned to the controller.

use trivia_core::model::Outcome;

/// Which feedback screen to show after a question ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
    TimedOut,
}

impl From<Outcome> for FeedbackKind {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => FeedbackKind::Correct,
            Outcome::Incorrect => FeedbackKind::Incorrect,
            Outcome::TimedOut => FeedbackKind::TimedOut,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    Question {
        prompt: String,
        choices: Vec<String>,
    },
    Countdown(u32),
    Feedback {
        kind: FeedbackKind,
        correct_answer: String,
    },
    Summary {
        correct: u32,
        incorrect: u32,
    },
}

pub trait ViewRenderer {
    fn render(&mut self, request: RenderRequest);
}

/// Records every request; handy for tests and headless runs.
impl ViewRenderer for Vec<RenderRequest> {
    fn render(&mut self, request: RenderRequest) {
        self.push(request);
    }
}

impl<R: ViewRenderer + ?Sized> ViewRenderer for &mut R {
    fn render(&mut self, request: RenderRequest) {
        (**self).render(request);
    }
}
