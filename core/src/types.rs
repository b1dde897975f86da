use serde::{Deserialize, Serialize};

use crate::rules;

/// A guessable number, also used for the secret target.
pub type Value = u8;

/// Count type for attempts.
pub type Attempts = u8;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Which side of the target a wrong guess landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    TooLow,
    TooHigh,
}

impl Direction {
    pub const fn of(guess: Value, target: Value) -> Option<Self> {
        if guess < target {
            Some(Self::TooLow)
        } else if guess > target {
            Some(Self::TooHigh)
        } else {
            None
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::TooLow => "Too low! Try a higher number.",
            Self::TooHigh => "Too high! Try a lower number.",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proximity {
    Warm,
    Closer,
    Far,
}

impl Proximity {
    pub const fn from_distance(distance: Value) -> Self {
        if distance <= rules::WARM_DISTANCE {
            Self::Warm
        } else if distance <= rules::CLOSER_DISTANCE {
            Self::Closer
        } else {
            Self::Far
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Warm => "You're getting warm!",
            Self::Closer => "You're getting closer!",
            Self::Far => "You're still quite far off.",
        }
    }
}

/// How a guess compared to the target at the time it was judged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessHint {
    Low,
    High,
    Correct,
}

impl From<Direction> for GuessHint {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::TooLow => Self::Low,
            Direction::TooHigh => Self::High,
        }
    }
}

/// One accepted guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub value: Value,
    pub hint: GuessHint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_thresholds_are_inclusive() {
        assert_eq!(Proximity::from_distance(1), Proximity::Warm);
        assert_eq!(Proximity::from_distance(10), Proximity::Warm);
        assert_eq!(Proximity::from_distance(11), Proximity::Closer);
        assert_eq!(Proximity::from_distance(25), Proximity::Closer);
        assert_eq!(Proximity::from_distance(26), Proximity::Far);
        assert_eq!(Proximity::from_distance(99), Proximity::Far);
    }

    #[test]
    fn direction_is_relative_to_target() {
        assert_eq!(Direction::of(25, 50), Some(Direction::TooLow));
        assert_eq!(Direction::of(75, 50), Some(Direction::TooHigh));
        assert_eq!(Direction::of(50, 50), None);
    }
}
