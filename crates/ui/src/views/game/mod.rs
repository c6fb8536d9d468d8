mod cards;
mod view;

pub(crate) use cards::{FeedbackCard, QuestionCard, SummaryCard};
pub use view::GameView;
