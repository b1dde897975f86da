use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::rules::{self, MAX_ATTEMPTS, PROXIMITY_AFTER_ATTEMPTS, TARGET_RANGE};
use crate::*;

/// Reads the leading integer of raw player input the way a browser's
/// `parseInt` does: surrounding whitespace and anything after the digits are
/// ignored, so `"12.5"` is a guess of 12. The number must fall inside the
/// playable range.
pub fn parse_guess(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    // every negative number is below the range
    if digits == 0 || negative {
        return Err(GuessError::InvalidInput);
    }

    let magnitude = rest[..digits].bytes().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    });
    Value::try_from(magnitude)
        .ok()
        .filter(|&value| rules::in_range(value))
        .ok_or(GuessError::InvalidInput)
}

/// Owns the state of the current game and the record of finished ones.
pub struct GameEngine<T, C> {
    targets: T,
    clock: C,
    target: Value,
    attempts_used: Attempts,
    guesses: Vec<Guess>,
    status: GameStatus,
    feedback: Feedback,
    history: Vec<HistoryRecord>,
    listeners: Vec<Listener>,
}

impl<T: TargetSource, C: Clock> GameEngine<T, C> {
    /// Creates the engine with its first game already started.
    pub fn new(mut targets: T, clock: C) -> Self {
        let target = draw_target(&mut targets);
        Self {
            targets,
            clock,
            target,
            attempts_used: 0,
            guesses: Vec::new(),
            status: GameStatus::Playing,
            feedback: Feedback::welcome(),
            history: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Abandons the current game, if any, and starts a fresh one.
    pub fn start_new_game(&mut self) {
        if self.status.is_playing() && self.attempts_used > 0 {
            log::debug!(
                "abandoning game after {} attempt(s), not recorded",
                self.attempts_used
            );
        }

        self.target = draw_target(&mut self.targets);
        self.attempts_used = 0;
        self.guesses.clear();
        self.status = GameStatus::Playing;
        self.feedback = Feedback::welcome();

        log::debug!("new game started");
        self.notify(GameEvent::NewGame);
    }

    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome> {
        if let Err(err) = self.check_playing() {
            log::trace!("guess {:?} ignored: {}", raw, err);
            return Err(err);
        }

        match self.judge(raw) {
            Ok(outcome) => {
                self.feedback = Feedback::from(outcome);
                self.notify(GameEvent::GuessAccepted(outcome));
                Ok(outcome)
            }
            Err(err) => {
                log::trace!("guess {:?} rejected: {:?}", raw, err);
                self.feedback = Feedback::from(err);
                self.notify(GameEvent::GuessRejected(err));
                Err(err)
            }
        }
    }

    fn judge(&mut self, raw: &str) -> Result<GuessOutcome> {
        let value = parse_guess(raw)?;
        if self.has_guessed(value) {
            return Err(GuessError::DuplicateGuess(value));
        }

        self.attempts_used += 1;
        let attempts = self.attempts_used;
        log::debug!("attempt {}/{}: {}", attempts, MAX_ATTEMPTS, value);

        let outcome = match Direction::of(value, self.target) {
            None => {
                self.guesses.push(Guess {
                    value,
                    hint: GuessHint::Correct,
                });
                self.end_game(true);
                GuessOutcome::Won { attempts }
            }
            Some(direction) => {
                self.guesses.push(Guess {
                    value,
                    hint: direction.into(),
                });

                if attempts >= MAX_ATTEMPTS {
                    self.end_game(false);
                    GuessOutcome::Lost {
                        target: self.target,
                        attempts,
                    }
                } else {
                    let proximity = (attempts >= PROXIMITY_AFTER_ATTEMPTS)
                        .then(|| Proximity::from_distance(value.abs_diff(self.target)));
                    GuessOutcome::Hint {
                        direction,
                        proximity,
                    }
                }
            }
        };

        Ok(outcome)
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        self.history.push(HistoryRecord {
            target: self.target,
            attempts: self.attempts_used,
            won,
            finished_at: self.clock.now(),
        });
        log::info!(
            "game {} after {} attempt(s), target was {}",
            if won { "won" } else { "lost" },
            self.attempts_used,
            self.target
        );
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_playing() {
            Ok(())
        } else {
            Err(GuessError::AlreadyEnded)
        }
    }

    fn notify(&mut self, event: GameEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl<T, C> GameEngine<T, C> {
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn attempts_used(&self) -> Attempts {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> Attempts {
        MAX_ATTEMPTS
    }

    pub fn attempts_remaining(&self) -> Attempts {
        MAX_ATTEMPTS - self.attempts_used
    }

    /// Fraction of the attempt budget spent, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        f32::from(self.attempts_used) / f32::from(MAX_ATTEMPTS)
    }

    /// Accepted guesses of the current game, in submission order.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn guessed_values(&self) -> impl Iterator<Item = Value> + '_ {
        self.guesses.iter().map(|guess| guess.value)
    }

    pub fn has_guessed(&self, value: Value) -> bool {
        self.guesses.iter().any(|guess| guess.value == value)
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Finished games, oldest first.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// The secret number, only once the game is over.
    pub fn revealed_target(&self) -> Option<Value> {
        self.status.is_finished().then_some(self.target)
    }
}

impl<T, C> fmt::Debug for GameEngine<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("attempts_used", &self.attempts_used)
            .field("guesses", &self.guesses)
            .field("status", &self.status)
            .field("feedback", &self.feedback)
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn draw_target<T: TargetSource>(targets: &mut T) -> Value {
    let target = targets.pick(TARGET_RANGE);
    if !TARGET_RANGE.contains(&target) {
        log::warn!("target source returned {} outside of range, clamping", target);
    }
    let target = target.clamp(rules::MIN_TARGET, rules::MAX_TARGET);
    log::trace!("target: {}", target);
    target
}
