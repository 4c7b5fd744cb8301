//! Strategies: pure maps from (own score, opponent score) to a roll count.
//!
//! Anything with the signature `Fn(u32, u32) -> u32` is a [`Strategy`]. The
//! named strategies are plain records whose fields hold their tuning knobs;
//! the free functions take the same knobs explicitly, so the defaults below
//! flow through delegation (`final` → `swap` → `bacon`) without positional
//! optionals.

use crate::mechanics::rules::{diff_to_next_multiple_of_seven, is_multiple_of_seven};
use crate::mechanics::turn::max_digit;

pub trait Strategy {
    /// Number of dice to roll this turn, in `0..=10`.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F: Fn(u32, u32) -> u32> Strategy for F {
    #[inline]
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}

/// Free bacon points without the game-over check; strategies may be asked
/// at any score, the turn engine enforces the precondition.
#[inline]
fn bacon_points(opponent_score: u32) -> u32 {
    max_digit(opponent_score) + 1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlwaysRoll(pub u32);

impl Strategy for AlwaysRoll {
    #[inline]
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// A strategy that always rolls `n` dice.
pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

/// Knobs shared by the bacon and swap strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaconParams {
    /// Take free bacon when it is worth at least this much.
    pub margin: u32,
    /// Dice to roll otherwise.
    pub num_rolls: u32,
}
impl Default for BaconParams {
    fn default() -> Self {
        Self { margin: 8, num_rolls: 5 }
    }
}

/// Roll 0 if free bacon gives at least `margin` points, else `num_rolls`.
pub fn bacon_strategy(_score: u32, opponent_score: u32, p: BaconParams) -> u32 {
    if bacon_points(opponent_score) >= p.margin { 0 } else { p.num_rolls }
}

/// Roll 0 when free bacon lands on half the opponent's score (the swap hands
/// us theirs), roll `num_rolls` when it lands on double (the swap would hand
/// ours away), and play [`bacon_strategy`] otherwise.
pub fn swap_strategy(score: u32, opponent_score: u32, p: BaconParams) -> u32 {
    // widened so any pair of u32 scores compares without overflow
    let candidate = score as u64 + bacon_points(opponent_score) as u64;
    let opponent_score_wide = opponent_score as u64;
    if candidate * 2 == opponent_score_wide {
        0
    } else if candidate == opponent_score_wide * 2 {
        p.num_rolls
    } else {
        bacon_strategy(score, opponent_score, p)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalParams {
    pub margin: u32,
}
impl Default for FinalParams {
    fn default() -> Self {
        Self { margin: 8 }
    }
}

/// Dice to roll when no sevens trick applies: press when behind or early,
/// ease off near the goal.
#[inline]
fn cautious_num_rolls(score: u32, opponent_score: u32) -> u32 {
    if score <= opponent_score || score < 25 {
        6
    } else if score > 85 {
        4
    } else {
        5
    }
}

/// [`swap_strategy`] with the roll count tuned toward pushing the opponent onto
/// four-sided dice.
pub fn final_strategy(score: u32, opponent_score: u32, p: FinalParams) -> u32 {
    let mod7 = |total: u64| (total % 7) as u32;
    let d = diff_to_next_multiple_of_seven(mod7(score as u64 + opponent_score as u64));
    let fb = bacon_points(opponent_score);
    let swap = |num_rolls| swap_strategy(score, opponent_score, BaconParams { margin: p.margin, num_rolls });

    // free bacon alone puts the sum on a multiple of 7
    if d == fb {
        return 0;
    }
    match d {
        7 => swap(3),
        8 => swap(4),
        9 => swap(5),
        _ if is_multiple_of_seven(mod7(score as u64 + opponent_score as u64 + 2 * p.margin as u64)) => {
            swap(3)
        }
        _ => swap(cautious_num_rolls(score, opponent_score)),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaconStrategy(pub BaconParams);

impl Strategy for BaconStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        bacon_strategy(score, opponent_score, self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapStrategy(pub BaconParams);

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        swap_strategy(score, opponent_score, self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalStrategy(pub FinalParams);

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        final_strategy(score, opponent_score, self.0)
    }
}
