/*!
`hog` — the dice game of Hog and a Monte-Carlo harness for its strategies.

What it does
- Scores single turns under the fixed rules: pig out, free bacon, Hog wild.
- Plays full games between two strategies, applying the swap rule after
  every turn, until one player reaches [`GOAL_SCORE`].
- Averages turn scores and game winners over many independent trials to
  compare roll counts and strategies.

How to use (call surface only)
- Pick a dice source: [`DiceTable::seeded`] for reproducible fair dice,
  [`DiceTable::from_os_rng`] otherwise, or [`TestDice`] to replay a fixed
  sequence. Anything `Fn() -> u32` is also a [`Dice`].
- A strategy is anything `Fn(u32, u32) -> u32` (own score, opponent score →
  dice to roll), or one of the named records in [`strategies`].
- Call `play(&s0, &s1, &dice) -> Result<(u32, u32)>` for one game,
  `average_win_rate(..)` to compare strategies, or
  `run_experiments(&ExperimentConfig::default())` for the standard report.

What it does NOT do
- No configurable rules: dice sides and special cases are constants, and
  only the goal of `play_to` can move off [`GOAL_SCORE`].
- No global RNG. All randomness flows through the dice you pass in.
- No printing. Progress goes through `log`; the `hog` binary renders reports.
*/

pub mod error;
pub mod experiments;
pub mod game;
pub mod mechanics;
pub mod strategies;

/// Score that ends the game.
pub const GOAL_SCORE: u32 = 100;

/// Most dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

pub use error::{HogError, Result};
pub use experiments::{
    ExperimentConfig, ExperimentReport, RollSweep, WinRateParams, average_win_rate, averaged,
    make_averaged, max_scoring_num_rolls, run_experiments, winner,
};
pub use game::{Player, other, play, play_to};
pub use mechanics::{Dice, DiceTable, FairDice, Sides, TestDice};
pub use strategies::{Strategy, always_roll};
