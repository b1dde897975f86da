use alloc::boxed::Box;

use crate::{GuessError, GuessOutcome};

/// Emitted by the engine after every operation that changed its state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    NewGame,
    /// Only the feedback changed.
    GuessRejected(GuessError),
    GuessAccepted(GuessOutcome),
}

impl GameEvent {
    /// Whether this event ended the current game.
    pub const fn is_game_over(self) -> bool {
        match self {
            Self::GuessAccepted(outcome) => outcome.is_finished(),
            Self::NewGame | Self::GuessRejected(_) => false,
        }
    }
}

pub type Listener = Box<dyn FnMut(&GameEvent)>;
