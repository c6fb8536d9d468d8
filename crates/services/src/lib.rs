#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod game;
pub mod render;

pub use trivia_core::Clock;

pub use bank::QuestionBank;
pub use error::{BankError, SessionError, SupplyError};
pub use game::{
    GamePhase, GameProgress, GameRunner, GameSession, PlayerInput, QuestionSupply,
    ServedQuestion, TICK_INTERVAL,
};
pub use render::{FeedbackKind, RenderRequest, ViewRenderer};
