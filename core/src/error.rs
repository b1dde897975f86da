use thiserror::Error;

use crate::Value;
use crate::rules::{MAX_TARGET, MIN_TARGET};

/// Reasons a guess is rejected. The messages are shown to the player as-is.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a valid number between {} and {}!", MIN_TARGET, MAX_TARGET)]
    InvalidInput,
    #[error("You already guessed that number! Try something different.")]
    DuplicateGuess(Value),
    #[error("Game already ended, start a new game to keep guessing")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GuessError>;
