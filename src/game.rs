//! The game loop: two strategies alternate turns until one player reaches the goal.

use log::{debug, trace};

use crate::GOAL_SCORE;
use crate::error::Result;
use crate::mechanics::dice::DiceTable;
use crate::mechanics::rules::{is_double_score, select_dice};
use crate::mechanics::turn::take_turn;
use crate::strategies::Strategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Zero = 0,
    One = 1,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Player> for f64 {
    fn from(p: Player) -> f64 {
        p.index() as f64
    }
}

/// The other player, for a player numbered 0 or 1.
#[inline]
pub fn other(who: Player) -> Player {
    who.other()
}

/// Play to [`GOAL_SCORE`]. Returns `(player 0 score, player 1 score)`.
pub fn play(strategy0: &dyn Strategy, strategy1: &dyn Strategy, dice: &DiceTable) -> Result<(u32, u32)> {
    play_to(strategy0, strategy1, GOAL_SCORE, dice)
}

/// Play until either score reaches `goal`. Player 0 moves first.
pub fn play_to(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    goal: u32,
    dice: &DiceTable,
) -> Result<(u32, u32)> {
    let strategies = [strategy0, strategy1];
    let mut scores = [0u32; 2];
    let mut who = Player::Zero;
    let mut turn = 0usize;

    while scores[0] < goal && scores[1] < goal {
        let (me, them) = (who.index(), who.other().index());
        let sides = select_dice(scores[me], scores[them]);
        let num_rolls = strategies[me].num_rolls(scores[me], scores[them]);
        let delta = take_turn(num_rolls, scores[them], dice.get(sides))?;
        scores[me] += delta;

        let swapped = is_double_score(scores[0], scores[1]);
        if swapped {
            scores.swap(0, 1);
        }
        trace!(
            "turn {turn}: player {me} rolled {num_rolls} ({sides:?}) for {delta}, scores {scores:?}{}",
            if swapped { " after swap" } else { "" }
        );

        who = who.other();
        turn += 1;
    }

    debug!("game over after {turn} turns: {} - {}", scores[0], scores[1]);
    Ok((scores[0], scores[1]))
}
