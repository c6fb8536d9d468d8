use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;

use trivia_core::model::Question;

use super::shuffle::shuffle;
use crate::error::SupplyError;

/// A question as it is put in front of the player: the canonical question
/// plus its own shuffled copy of the choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedQuestion {
    question: Question,
    choices: Vec<String>,
}

impl ServedQuestion {
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.question.prompt()
    }

    /// Choices in display order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        self.question.correct_choice()
    }
}

/// Holds the master question list and the shuffled play queue for the
/// current game.
pub struct QuestionSupply {
    master: Vec<Question>,
    queue: VecDeque<Question>,
    rng: StdRng,
}

impl QuestionSupply {
    /// Supply seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Supply with a reproducible shuffle order.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            master: Vec::new(),
            queue: VecDeque::new(),
            rng,
        }
    }

    /// Store the master list. Only the first non-empty list is kept, so a
    /// restart always replays the same set.
    pub fn load(&mut self, questions: &[Question]) {
        if self.master.is_empty() {
            self.master = questions.to_vec();
        }
    }

    /// Replace the play queue with a shuffled copy of `questions`.
    pub fn new_round(&mut self, questions: &[Question]) {
        let mut round = questions.to_vec();
        shuffle(&mut round, &mut self.rng);
        self.queue = round.into();
    }

    /// Replace the play queue with a reshuffled copy of the master list.
    pub fn new_round_from_master(&mut self) {
        let mut round = self.master.clone();
        shuffle(&mut round, &mut self.rng);
        self.queue = round.into();
    }

    /// Take the front of the play queue with its choices freshly shuffled.
    ///
    /// # Errors
    ///
    /// Returns `SupplyError::EmptyQueue` when no questions remain.
    pub fn next(&mut self) -> Result<ServedQuestion, SupplyError> {
        let question = self.queue.pop_front().ok_or(SupplyError::EmptyQueue)?;
        let mut choices = question.choices().to_vec();
        shuffle(&mut choices, &mut self.rng);
        Ok(ServedQuestion { question, choices })
    }

    #[must_use]
    pub fn master(&self) -> &[Question] {
        &self.master
    }

    #[must_use]
    pub fn has_master(&self) -> bool {
        !self.master.is_empty()
    }

    /// Number of questions left in the play queue.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for QuestionSupply {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QuestionSupply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionSupply")
            .field("master_len", &self.master.len())
            .field("remaining", &self.queue.len())
            .finish_non_exhaustive()
    }
}
