use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyGame,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_session(err: SessionError) -> Self {
        match err {
            SessionError::Empty => Self::EmptyGame,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyGame => "There are no questions to play.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
