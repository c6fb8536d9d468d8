mod question;
mod score;
mod settings;

pub use question::{Question, QuestionDraft, QuestionError};
pub use score::{Outcome, Score};
pub use settings::{GameSettings, SettingsError};
