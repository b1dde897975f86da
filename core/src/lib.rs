#![no_std]

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

pub use clock::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use feedback::*;
pub use generator::*;
pub use history::*;
pub use types::*;

mod clock;
mod engine;
mod error;
mod event;
mod feedback;
mod generator;
mod history;
pub mod rules;
mod types;

/// Result of a guess the engine accepted, i.e. one that consumed an attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Wrong guess with attempts left.
    Hint {
        direction: Direction,
        proximity: Option<Proximity>,
    },
    Won {
        attempts: Attempts,
    },
    /// Wrong guess that used up the last attempt.
    Lost {
        target: Value,
        attempts: Attempts,
    },
}

impl GuessOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }

    pub const fn feedback_kind(self) -> FeedbackKind {
        use GuessOutcome::*;
        match self {
            Hint { .. } => FeedbackKind::Hint,
            Won { .. } => FeedbackKind::Success,
            Lost { .. } => FeedbackKind::Error,
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GuessOutcome::*;
        match *self {
            Hint {
                direction,
                proximity,
            } => {
                f.write_str(direction.message())?;
                if let Some(proximity) = proximity {
                    write!(f, " {}", proximity.message())?;
                }
                Ok(())
            }
            Won { attempts } => write!(
                f,
                "🎉 CONGRATULATIONS! You guessed it in {} attempt(s)!",
                attempts
            ),
            Lost { target, .. } => write!(f, "💀 GAME OVER! The number was {}.", target),
        }
    }
}
