/// How a single question ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Incorrect,
    TimedOut,
}

impl Outcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Running tally for one game.
///
/// Counters only grow; the only way back to zero is `reset`, which the
/// controller calls on a fresh start or restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: u32,
    incorrect: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome. Timeouts count as incorrect.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct = self.correct.saturating_add(1),
            Outcome::Incorrect | Outcome::TimedOut => {
                self.incorrect = self.incorrect.saturating_add(1);
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_count_as_incorrect() {
        let mut score = Score::new();
        score.record(Outcome::Correct);
        score.record(Outcome::Incorrect);
        score.record(Outcome::TimedOut);

        assert_eq!(score.correct(), 1);
        assert_eq!(score.incorrect(), 2);
        assert_eq!(score.answered(), 3);

        score.reset();
        assert_eq!(score, Score::default());
    }
}
