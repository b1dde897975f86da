use core::ops::RangeInclusive;

use crate::Value;
pub use random::*;

mod random;

/// Picks the secret number for each new game.
pub trait TargetSource {
    /// Must return a value inside `range`.
    fn pick(&mut self, range: RangeInclusive<Value>) -> Value;
}

impl<F> TargetSource for F
where
    F: FnMut(RangeInclusive<Value>) -> Value,
{
    fn pick(&mut self, range: RangeInclusive<Value>) -> Value {
        self(range)
    }
}
