use crate::services::practicum::PracticumError;
use crate::services::review::ReviewError;

/// Wrapper applied to every cycle failure before it is sent to the chat.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Anything that can go wrong between fetching and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CycleError {
    #[error(transparent)]
    Practicum(#[from] PracticumError),
    #[error(transparent)]
    Review(#[from] ReviewError),
}

impl CycleError {
    /// Message reported to the chat for this failure.
    pub fn to_message(&self) -> String {
        format!("{}: {}", FAILURE_PREFIX, self)
    }
}

/// What a single cycle ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API returned no submissions; nothing to say.
    NoUpdates,
    /// The candidate message equals the last delivered one.
    Unchanged,
    Delivered(String),
    DeliveryFailed(String),
}

/// In-memory state carried between cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix seconds) of the next fetch window.
    pub cursor: i64,
    /// Last message the chat is known to have received.
    pub last_message: String,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: String::new(),
        }
    }
}
