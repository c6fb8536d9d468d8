use std::sync::Arc;

use services::{Clock, GameSession, QuestionBank};
use trivia_core::model::GameSettings;

use crate::views::ViewError;
use crate::vm::GameVm;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn settings(&self) -> GameSettings;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBank>,
    settings: GameSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            settings: app.settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Build a view-model and start the first game on it.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyGame` if the bank has no questions.
    pub fn start_game(&self) -> Result<GameVm, ViewError> {
        let mut vm = GameVm::new(GameSession::new(self.settings));
        vm.start(self.question_bank.questions(), self.clock.now())?;
        Ok(vm)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
