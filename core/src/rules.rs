//! Fixed game rules.

use core::ops::RangeInclusive;

use crate::{Attempts, Value};

pub const MIN_TARGET: Value = 1;
pub const MAX_TARGET: Value = 100;

/// Inclusive range the secret number is drawn from and guesses must fall in.
pub const TARGET_RANGE: RangeInclusive<Value> = MIN_TARGET..=MAX_TARGET;

pub const MAX_ATTEMPTS: Attempts = 10;

/// Proximity qualifiers are added to hints starting with this attempt.
pub const PROXIMITY_AFTER_ATTEMPTS: Attempts = 3;

/// Distances up to this are "warm".
pub const WARM_DISTANCE: Value = 10;

/// Distances up to this (and above [`WARM_DISTANCE`]) are "closer".
pub const CLOSER_DISTANCE: Value = 25;

pub const fn in_range(value: Value) -> bool {
    value >= MIN_TARGET && value <= MAX_TARGET
}
