use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question duration must be at least 1 second")]
    InvalidQuestionSeconds,

    #[error("feedback duration must be at least 1 second")]
    InvalidFeedbackSeconds,
}

/// Timing for the two phases of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    question_secs: u32,
    feedback_secs: u32,
}

impl GameSettings {
    pub const DEFAULT_QUESTION_SECS: u32 = 15;
    pub const DEFAULT_FEEDBACK_SECS: u32 = 10;

    /// # Errors
    ///
    /// Returns `SettingsError` if either duration is zero.
    pub fn new(question_secs: u32, feedback_secs: u32) -> Result<Self, SettingsError> {
        if question_secs == 0 {
            return Err(SettingsError::InvalidQuestionSeconds);
        }
        if feedback_secs == 0 {
            return Err(SettingsError::InvalidFeedbackSeconds);
        }
        Ok(Self {
            question_secs,
            feedback_secs,
        })
    }

    /// Seconds the player has to answer.
    #[must_use]
    pub fn question_secs(&self) -> u32 {
        self.question_secs
    }

    /// Seconds the outcome stays on screen before the game moves on.
    #[must_use]
    pub fn feedback_secs(&self) -> u32 {
        self.feedback_secs
    }

    #[must_use]
    pub fn question_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.question_secs))
    }

    #[must_use]
    pub fn feedback_duration(&self) -> Duration {
        Duration::seconds(i64::from(self.feedback_secs))
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            question_secs: Self::DEFAULT_QUESTION_SECS,
            feedback_secs: Self::DEFAULT_FEEDBACK_SECS,
        }
    }
}
