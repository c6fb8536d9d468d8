mod progress;
mod runner;
mod session;
mod shuffle;
mod supply;
mod timer;

// Public API of the game subsystem.
pub use progress::GameProgress;
pub use runner::{GameRunner, PlayerInput, TICK_INTERVAL};
pub use session::{GamePhase, GameSession};
pub use shuffle::shuffle;
pub use supply::{QuestionSupply, ServedQuestion};
pub use timer::{Countdown, CountdownTick, TimerKind, TimerSlot};
