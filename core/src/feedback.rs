use alloc::format;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::rules::{MAX_TARGET, MIN_TARGET};
use crate::{GuessError, GuessOutcome};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    Hint,
    Success,
    Error,
}

impl FeedbackKind {
    /// Lower-case name, handy as a CSS class.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hint => "hint",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The most recent message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn welcome() -> Self {
        Self {
            kind: FeedbackKind::Hint,
            text: format!(
                "I'm thinking of a number between {} and {}. Can you guess it?",
                MIN_TARGET, MAX_TARGET
            ),
        }
    }
}

impl From<GuessOutcome> for Feedback {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            kind: outcome.feedback_kind(),
            text: outcome.to_string(),
        }
    }
}

impl From<GuessError> for Feedback {
    fn from(err: GuessError) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: err.to_string(),
        }
    }
}
