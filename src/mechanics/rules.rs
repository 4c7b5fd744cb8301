//! Score-pair rules: Hog wild dice selection, the swap rule, sevens arithmetic.
use crate::mechanics::dice::Sides;

#[inline]
pub fn is_multiple_of_seven(n: u32) -> bool {
    n % 7 == 0
}

/// Hog wild: four-sided dice when the score sum is a multiple of 7.
#[inline]
pub fn select_dice(score: u32, opponent_score: u32) -> Sides {
    if is_multiple_of_seven(score + opponent_score) {
        Sides::Four
    } else {
        Sides::Six
    }
}

/// True if one score is exactly twice the other. A zero score never qualifies.
#[inline]
pub fn is_double_score(a: u32, b: u32) -> bool {
    if a == 0 || b == 0 {
        return false;
    }
    a == 2 * b || b == 2 * a
}

/// Smallest `d >= 0` such that `n + d` is a multiple of 7.
#[inline]
pub fn diff_to_next_multiple_of_seven(n: u32) -> u32 {
    (7 - n % 7) % 7
}
