//! Usage errors. Every one of these is a broken precondition on the caller's
//! side; nothing in the crate retries or recovers from them.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HogError {
    #[error("must roll at least once")]
    NoRolls,
    #[error("cannot roll more than {max} dice (asked for {num_rolls})", max = crate::MAX_ROLLS)]
    TooManyRolls { num_rolls: u32 },
    #[error("the game should be over (opponent score {opponent_score})")]
    GameOver { opponent_score: u32 },
    #[error("cannot average over zero samples")]
    NoSamples,
}

pub type Result<T> = std::result::Result<T, HogError>;
