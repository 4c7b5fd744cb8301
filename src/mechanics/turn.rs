//! Turn mechanics: rolling, pig out, free bacon.
use crate::error::{HogError, Result};
use crate::mechanics::dice::Dice;
use crate::{GOAL_SCORE, MAX_ROLLS};

/// Roll `dice` exactly `num_rolls` times: the sum, or 1 if any roll was a 1 (pig out).
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &D) -> Result<u32> {
    if num_rolls == 0 {
        return Err(HogError::NoRolls);
    }
    let mut sum = 0;
    let mut pig_out = false;
    // every die is rolled even after a 1 shows up
    for _ in 0..num_rolls {
        match dice.roll() {
            1 => pig_out = true,
            outcome => sum += outcome,
        }
    }
    Ok(if pig_out { 1 } else { sum })
}

/// Largest decimal digit of `n`.
#[inline]
pub(crate) fn max_digit(mut n: u32) -> u32 {
    let mut max = n % 10;
    while n >= 10 {
        n /= 10;
        max = max.max(n % 10);
    }
    max
}

/// Free bacon: one more than the opponent's largest digit.
pub fn free_bacon_score(opponent_score: u32) -> Result<u32> {
    if opponent_score >= GOAL_SCORE {
        return Err(HogError::GameOver { opponent_score });
    }
    Ok(max_digit(opponent_score) + 1)
}

/// Score one turn. Zero rolls takes free bacon and leaves `dice` untouched.
pub fn take_turn<D: Dice + ?Sized>(num_rolls: u32, opponent_score: u32, dice: &D) -> Result<u32> {
    if num_rolls > MAX_ROLLS {
        return Err(HogError::TooManyRolls { num_rolls });
    }
    if opponent_score >= GOAL_SCORE {
        return Err(HogError::GameOver { opponent_score });
    }
    if num_rolls == 0 {
        return free_bacon_score(opponent_score);
    }
    roll_dice(num_rolls, dice)
}
