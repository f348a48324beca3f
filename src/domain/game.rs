//! Number-guessing game rules
//!
//! A [`Game`] holds one hidden target drawn at construction time and compares
//! guesses against it until one matches.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use rand::random_range;
use tracing::debug;

use crate::domain::{DomainError, DomainResult};

/// Default lower bound of the hidden target.
pub const DEFAULT_MIN: i64 = 1;
/// Default upper bound of the hidden target.
pub const DEFAULT_MAX: i64 = 100;

/// Closed range the hidden target is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    min: i64,
    max: i64,
}

impl GuessRange {
    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.as_inclusive().contains(&value)
    }

    /// Draw a value uniformly from the range.
    pub fn sample(&self) -> i64 {
        random_range(self.as_inclusive())
    }

    fn as_inclusive(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next line of input
    AwaitingInput,
    /// A parsed guess is being compared against the target
    Evaluating,
    /// Terminal: the target was guessed
    Won,
}

/// Outcome of comparing one guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooSmall,
    TooBig,
    Win,
}

impl Feedback {
    pub fn is_win(&self) -> bool {
        matches!(self, Feedback::Win)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Feedback::TooSmall => write!(f, "Too small!"),
            Feedback::TooBig => write!(f, "Too big!"),
            Feedback::Win => write!(f, "You win!"),
        }
    }
}

#[derive(Debug)]
pub struct Game {
    target: i64,
    state: GameState,
    attempts: u32,
}

impl Game {
    /// Create a game with a known target.
    pub fn new(target: i64) -> Self {
        Self {
            target,
            state: GameState::AwaitingInput,
            attempts: 0,
        }
    }

    /// Create a game whose target is drawn uniformly from `range`.
    pub fn with_range(range: GuessRange) -> Self {
        let target = range.sample();
        debug!("with_range: drew target from {}", range);
        Self::new(target)
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of guesses that parsed and were compared.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Interpret one line of input as a guess.
    ///
    /// Surrounding whitespace is ignored; anything that is not a signed integer
    /// yields `None`.
    pub fn parse_guess(line: &str) -> Option<i64> {
        line.trim().parse().ok()
    }

    /// Compare a guess against the target and advance the state machine.
    pub fn submit(&mut self, guess: i64) -> DomainResult<Feedback> {
        if self.state == GameState::Won {
            return Err(DomainError::GameOver);
        }
        self.state = GameState::Evaluating;
        self.attempts += 1;

        let feedback = match guess.cmp(&self.target) {
            Ordering::Less => Feedback::TooSmall,
            Ordering::Greater => Feedback::TooBig,
            Ordering::Equal => Feedback::Win,
        };

        self.state = if feedback.is_win() {
            GameState::Won
        } else {
            GameState::AwaitingInput
        };
        Ok(feedback)
    }
}
