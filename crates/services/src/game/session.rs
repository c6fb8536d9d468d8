use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, trace};

use trivia_core::model::{GameSettings, Outcome, Question, Score};

use super::progress::GameProgress;
use super::supply::{QuestionSupply, ServedQuestion};
use super::timer::{Countdown, CountdownTick, TimerKind, TimerSlot};
use crate::error::SessionError;
use crate::render::{RenderRequest, ViewRenderer};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where the game is in its round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Idle,
    QuestionActive,
    Feedback,
    GameOver,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Single-player game controller.
///
/// Drives `QuestionActive → Feedback → (QuestionActive | GameOver)` and owns
/// the only countdown. Every event takes the current instant from the caller
/// (the services layer clock) and a renderer to report to; the session itself
/// never sleeps or reads the system time.
pub struct GameSession {
    settings: GameSettings,
    supply: QuestionSupply,
    phase: GamePhase,
    current: Option<ServedQuestion>,
    score: Score,
    timer: TimerSlot,
    total: usize,
    last_outcome: Option<Outcome>,
}

impl GameSession {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_supply(settings, QuestionSupply::new())
    }

    /// Build a session around a prepared supply (e.g. a seeded one in tests).
    #[must_use]
    pub fn with_supply(settings: GameSettings, supply: QuestionSupply) -> Self {
        Self {
            settings,
            supply,
            phase: GamePhase::Idle,
            current: None,
            score: Score::new(),
            timer: TimerSlot::new(),
            total: 0,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&ServedQuestion> {
        self.current.as_ref()
    }

    /// Choices of the in-flight question in display order.
    #[must_use]
    pub fn current_choices(&self) -> &[String] {
        self.current.as_ref().map_or(&[], ServedQuestion::choices)
    }

    /// Rounded seconds left on the running countdown, if any.
    #[must_use]
    pub fn seconds_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.timer.seconds_left(now)
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        let remaining = self.supply.remaining();
        GameProgress {
            total: self.total,
            served: self.total.saturating_sub(remaining),
            remaining,
            is_over: self.phase == GamePhase::GameOver,
        }
    }

    /// Start a fresh game from `questions`.
    ///
    /// The first list ever passed becomes the master list used by `restart`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn start(
        &mut self,
        questions: &[Question],
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        self.reset_round_state();
        self.supply.load(questions);
        self.supply.new_round(questions);
        info!(questions = questions.len(), "game started");
        self.begin_game(now, renderer)
    }

    /// Throw away the current game and replay the master list, reshuffled,
    /// with the score back at zero.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` if no game was ever started.
    pub fn restart(
        &mut self,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) -> Result<(), SessionError> {
        if !self.supply.has_master() {
            return Err(SessionError::NotStarted);
        }
        self.reset_round_state();
        self.supply.new_round_from_master();
        info!(questions = self.supply.remaining(), "game restarted");
        self.begin_game(now, renderer)
    }

    /// Player picked `choice` for the current question.
    ///
    /// Ignored (returns `None`) outside `QuestionActive`. Otherwise the
    /// question timer is cancelled before anything else changes, so a
    /// pending timeout can no longer fire for this question.
    pub fn select(
        &mut self,
        choice: &str,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) -> Option<Outcome> {
        if self.phase != GamePhase::QuestionActive {
            debug!(phase = ?self.phase, "ignoring selection outside question phase");
            return None;
        }
        self.timer.cancel();

        let current = self.current.as_ref()?;
        let outcome = if current.question().is_correct(choice) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.finish_question(outcome, now, renderer);
        Some(outcome)
    }

    /// Same as `select`, addressing the choice by its display position.
    pub fn select_index(
        &mut self,
        index: usize,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) -> Option<Outcome> {
        let choice = self.current_choices().get(index)?.clone();
        self.select(&choice, now, renderer)
    }

    /// Advance time. Reports countdown changes and handles timer expiry.
    ///
    /// Returns the outcome when this tick timed out the current question.
    pub fn tick(
        &mut self,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) -> Option<Outcome> {
        match self.timer.poll(now) {
            CountdownTick::Idle | CountdownTick::Pending => None,
            CountdownTick::Display(seconds) => {
                trace!(seconds, "countdown");
                renderer.render(RenderRequest::Countdown(seconds));
                None
            }
            CountdownTick::Expired(TimerKind::Question) => {
                if self.phase != GamePhase::QuestionActive {
                    return None;
                }
                self.finish_question(Outcome::TimedOut, now, renderer);
                Some(Outcome::TimedOut)
            }
            CountdownTick::Expired(TimerKind::Feedback) => {
                if self.phase == GamePhase::Feedback {
                    self.advance(now, renderer);
                }
                None
            }
        }
    }

    fn reset_round_state(&mut self) {
        self.timer.cancel();
        self.phase = GamePhase::Idle;
        self.current = None;
        self.last_outcome = None;
    }

    fn begin_game(
        &mut self,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) -> Result<(), SessionError> {
        self.score.reset();
        self.total = self.supply.remaining();
        let served = self.supply.next()?;
        self.show_question(served, now, renderer);
        Ok(())
    }

    fn show_question(
        &mut self,
        served: ServedQuestion,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) {
        renderer.render(RenderRequest::Question {
            prompt: served.prompt().to_string(),
            choices: served.choices().to_vec(),
        });
        self.current = Some(served);
        self.phase = GamePhase::QuestionActive;
        debug!(remaining = self.supply.remaining(), "question active");

        self.timer.replace(Countdown::new(
            TimerKind::Question,
            now,
            self.settings.question_duration(),
        ));
        // Shows the full duration straight away.
        let _ = self.tick(now, renderer);
    }

    fn finish_question(
        &mut self,
        outcome: Outcome,
        now: DateTime<Utc>,
        renderer: &mut impl ViewRenderer,
    ) {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        let correct_answer = current.correct_choice().to_string();

        self.score.record(outcome);
        self.last_outcome = Some(outcome);
        debug!(
            ?outcome,
            correct = self.score.correct(),
            incorrect = self.score.incorrect(),
            "question finished"
        );

        renderer.render(RenderRequest::Feedback {
            kind: outcome.into(),
            correct_answer,
        });
        self.phase = GamePhase::Feedback;
        self.timer.replace(Countdown::new(
            TimerKind::Feedback,
            now,
            self.settings.feedback_duration(),
        ));
    }

    fn advance(&mut self, now: DateTime<Utc>, renderer: &mut impl ViewRenderer) {
        if self.supply.is_empty() {
            self.enter_game_over(renderer);
            return;
        }
        match self.supply.next() {
            Ok(served) => self.show_question(served, now, renderer),
            Err(_) => self.enter_game_over(renderer),
        }
    }

    fn enter_game_over(&mut self, renderer: &mut impl ViewRenderer) {
        self.timer.cancel();
        self.phase = GamePhase::GameOver;
        self.current = None;
        info!(
            correct = self.score.correct(),
            incorrect = self.score.incorrect(),
            "game over"
        );
        renderer.render(RenderRequest::Summary {
            correct: self.score.correct(),
            incorrect: self.score.incorrect(),
        });
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("total", &self.total)
            .field("supply", &self.supply)
            .field("timer", &self.timer.kind())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
