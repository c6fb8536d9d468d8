use services::FeedbackKind;

/// Countdown values at or below this are drawn in the warning style.
pub const DANGER_SECONDS: u32 = 10;

/// Headline and body text for a feedback card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackCopy {
    pub headline: &'static str,
    pub detail: &'static str,
    pub show_answer: bool,
}

#[must_use]
pub fn feedback_copy(kind: FeedbackKind) -> FeedbackCopy {
    match kind {
        FeedbackKind::Correct => FeedbackCopy {
            headline: "Congratulations!",
            detail: "You chose the correct answer!",
            show_answer: false,
        },
        FeedbackKind::Incorrect => FeedbackCopy {
            headline: "Oh-oh!",
            detail: "That was not the correct answer.",
            show_answer: true,
        },
        FeedbackKind::TimedOut => FeedbackCopy {
            headline: "Time's up!",
            detail: "You ran out of time on this one.",
            show_answer: true,
        },
    }
}

#[must_use]
pub fn countdown_label(seconds: Option<u32>) -> String {
    seconds.map_or_else(String::new, |s| s.to_string())
}

#[must_use]
pub const fn is_danger(seconds: Option<u32>) -> bool {
    matches!(seconds, Some(s) if s <= DANGER_SECONDS)
}

/// The two score lines shown on the game-over card.
#[must_use]
pub fn summary_lines(correct: u32, incorrect: u32) -> [String; 2] {
    [
        format!("{correct} Questions answered correctly."),
        format!("{incorrect} Questions answered incorrectly."),
    ]
}
