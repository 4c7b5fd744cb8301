//! # Experiments
//!
//! Monte-Carlo evaluation of turn choices and whole strategies. Every number
//! here is an average over independent trials: the harness calls a function
//! repeatedly with the same arguments and takes the arithmetic mean, so any
//! randomness must come from the dice passed in.
//!
//! - [`make_averaged`] turns a fallible sampler into an averaging one.
//! - [`max_scoring_num_rolls`] sweeps 1..=10 dice and picks the best mean turn.
//! - [`average_win_rate`] plays a strategy against a baseline from both seats.
//! - [`run_experiments`] bundles the standard report the CLI prints.
//!
//! Progress is logged at `info`; nothing here prints.

use std::fmt;

use log::info;

use crate::MAX_ROLLS;
use crate::error::{HogError, Result};
use crate::game::{Player, play};
use crate::mechanics::dice::{Dice, DiceTable, Sides};
use crate::mechanics::turn::roll_dice;
use crate::strategies::{
    AlwaysRoll, BaconStrategy, FinalStrategy, Strategy, SwapStrategy, always_roll,
};

/// Trials per average unless configured otherwise.
pub const NUM_SAMPLES: usize = 1000;

/// The strategy every win rate is measured against.
pub const BASELINE: AlwaysRoll = AlwaysRoll(5);

/// Wrap `f` so each call runs it `num_samples` times with the same arguments
/// and returns the mean. The first failing sample aborts the call.
pub fn make_averaged<A, R, F>(mut f: F, num_samples: usize) -> impl FnMut(A) -> Result<f64>
where
    A: Clone,
    R: Into<f64>,
    F: FnMut(A) -> Result<R>,
{
    move |args: A| {
        if num_samples == 0 {
            return Err(HogError::NoSamples);
        }
        let mut total = 0.0;
        for _ in 0..num_samples {
            total += f(args.clone())?.into();
        }
        Ok(total / num_samples as f64)
    }
}

/// [`make_averaged`] over the default [`NUM_SAMPLES`] trials.
pub fn averaged<A, R, F>(f: F) -> impl FnMut(A) -> Result<f64>
where
    A: Clone,
    R: Into<f64>,
    F: FnMut(A) -> Result<R>,
{
    make_averaged(f, NUM_SAMPLES)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollAverage {
    pub num_rolls: u32,
    pub average: f64,
}

/// Mean turn score for every roll count, plus the winner of the sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct RollSweep {
    pub averages: Vec<RollAverage>,
    pub best: u32,
}

/// The roll count in `1..=10` with the highest average turn score on `dice`.
/// Ties keep the earlier (smaller) count.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(dice: &D, num_samples: usize) -> Result<RollSweep> {
    let mut averaged_roll_dice = make_averaged(|num_rolls| roll_dice(num_rolls, dice), num_samples);
    let mut averages = Vec::with_capacity(MAX_ROLLS as usize);
    let mut best: Option<RollAverage> = None;

    for num_rolls in 1..=MAX_ROLLS {
        let average = averaged_roll_dice(num_rolls)?;
        info!("{num_rolls} dice scores {average} on average");
        let current = RollAverage { num_rolls, average };
        if best.is_none_or(|b| average > b.average) {
            best = Some(current);
        }
        averages.push(current);
    }

    Ok(RollSweep {
        averages,
        best: best.map_or(1, |b| b.num_rolls),
    })
}

/// [`Player::Zero`] if player 0 finishes strictly ahead, [`Player::One`] otherwise.
pub fn winner(strategy0: &dyn Strategy, strategy1: &dyn Strategy, dice: &DiceTable) -> Result<Player> {
    let (score0, score1) = play(strategy0, strategy1, dice)?;
    Ok(if score0 > score1 { Player::Zero } else { Player::One })
}

/// Opponent and trial count for [`average_win_rate`].
#[derive(Clone, Copy)]
pub struct WinRateParams<'a> {
    /// Defaults to [`BASELINE`], always rolling 5.
    pub baseline: &'a dyn Strategy,
    /// Games per seat; defaults to [`NUM_SAMPLES`].
    pub num_samples: usize,
}
impl Default for WinRateParams<'static> {
    fn default() -> Self {
        Self { baseline: &BASELINE, num_samples: NUM_SAMPLES }
    }
}

/// Win rate of `strategy` against `p.baseline`, averaged over both seats.
pub fn average_win_rate(strategy: &dyn Strategy, dice: &DiceTable, p: WinRateParams<'_>) -> Result<f64> {
    let mut averaged_winner = make_averaged(
        |(s0, s1): (&dyn Strategy, &dyn Strategy)| winner(s0, s1, dice),
        p.num_samples,
    );
    let as_player_0 = 1.0 - averaged_winner((strategy, p.baseline))?;
    let as_player_1 = averaged_winner((p.baseline, strategy))?;
    Ok((as_player_0 + as_player_1) / 2.0)
}

#[derive(Clone, Copy, Debug)]
pub struct ExperimentConfig {
    pub num_samples: usize,
    /// Fixed seed for reproducible reports; `None` seeds from the OS.
    pub seed: Option<u64>,
}
impl Default for ExperimentConfig {
    fn default() -> Self {
        Self { num_samples: NUM_SAMPLES, seed: None }
    }
}

impl ExperimentConfig {
    pub fn dice(&self) -> DiceTable {
        match self.seed {
            Some(seed) => DiceTable::seeded(seed),
            None => DiceTable::from_os_rng(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WinRate {
    pub name: &'static str,
    pub rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentReport {
    pub six_sided: RollSweep,
    pub four_sided: RollSweep,
    pub win_rates: Vec<WinRate>,
}

/// Roll-count sweeps for both dice, then every named strategy against [`BASELINE`].
pub fn run_experiments(cfg: &ExperimentConfig) -> Result<ExperimentReport> {
    let dice = cfg.dice();

    let six_sided = max_scoring_num_rolls(dice.get(Sides::Six), cfg.num_samples)?;
    info!("max scoring num rolls for six-sided dice: {}", six_sided.best);
    let four_sided = max_scoring_num_rolls(dice.get(Sides::Four), cfg.num_samples)?;
    info!("max scoring num rolls for four-sided dice: {}", four_sided.best);

    let contenders: [(&'static str, &dyn Strategy); 4] = [
        ("always_roll(8)", &always_roll(8)),
        ("bacon_strategy", &BaconStrategy::default()),
        ("swap_strategy", &SwapStrategy::default()),
        ("final_strategy", &FinalStrategy::default()),
    ];
    let mut win_rates = Vec::with_capacity(contenders.len());
    for (name, strategy) in contenders {
        let params = WinRateParams { num_samples: cfg.num_samples, ..WinRateParams::default() };
        let rate = average_win_rate(strategy, &dice, params)?;
        info!("{name} win rate: {rate}");
        win_rates.push(WinRate { name, rate });
    }

    Ok(ExperimentReport { six_sided, four_sided, win_rates })
}

impl fmt::Display for RollSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.averages {
            writeln!(f, "{} dice scores {:.3} on average", a.num_rolls, a.average)?;
        }
        Ok(())
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.six_sided)?;
        writeln!(f, "Max scoring num rolls for six-sided dice: {}", self.six_sided.best)?;
        write!(f, "{}", self.four_sided)?;
        writeln!(f, "Max scoring num rolls for four-sided dice: {}", self.four_sided.best)?;
        for w in &self.win_rates {
            writeln!(f, "{} win rate: {:.4}", w.name, w.rate)?;
        }
        Ok(())
    }
}
