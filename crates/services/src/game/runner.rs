use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use trivia_core::model::{Question, Score};

use super::session::GameSession;
use crate::Clock;
use crate::error::SessionError;
use crate::render::ViewRenderer;

/// How often the runner polls the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Events a front-end can feed into a running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Answer with the given choice text.
    Select(String),
    /// Answer with the choice at this display position.
    SelectIndex(usize),
    Restart,
}

/// Drives a `GameSession` from a timer and an input channel on one task.
///
/// All session mutation happens inside `run`, so ticks and player input are
/// strictly serialized without any locking.
pub struct GameRunner<R> {
    session: GameSession,
    renderer: R,
    clock: Clock,
    tick_every: Duration,
}

impl<R: ViewRenderer> GameRunner<R> {
    #[must_use]
    pub fn new(session: GameSession, renderer: R, clock: Clock) -> Self {
        Self {
            session,
            renderer,
            clock,
            tick_every: TICK_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_tick_interval(mut self, every: Duration) -> Self {
        self.tick_every = every;
        self
    }

    /// Start a game and keep it going until `inputs` closes.
    ///
    /// Returns the final score and the renderer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the game cannot start or restart.
    pub async fn run(
        mut self,
        questions: &[Question],
        mut inputs: mpsc::UnboundedReceiver<PlayerInput>,
    ) -> Result<(Score, R), SessionError> {
        self.session
            .start(questions, self.clock.now(), &mut self.renderer)?;

        let mut ticker = interval(self.tick_every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the start already rendered.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.session.tick(self.clock.now(), &mut self.renderer);
                }
                input = inputs.recv() => {
                    let Some(input) = input else {
                        debug!("input closed, stopping game runner");
                        break;
                    };
                    self.handle(input)?;
                }
            }
        }

        Ok((self.session.score(), self.renderer))
    }

    fn handle(&mut self, input: PlayerInput) -> Result<(), SessionError> {
        let now = self.clock.now();
        match input {
            PlayerInput::Select(choice) => {
                self.session.select(&choice, now, &mut self.renderer);
            }
            PlayerInput::SelectIndex(index) => {
                if self
                    .session
                    .select_index(index, now, &mut self.renderer)
                    .is_none()
                {
                    warn!(index, "selection ignored");
                }
            }
            PlayerInput::Restart => self.session.restart(now, &mut self.renderer)?,
        }
        Ok(())
    }
}
