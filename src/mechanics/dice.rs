/// Dice sources: fair WyRand-backed dice and deterministic replay dice.
/// Note: fair dice keep `bevy_prng::WyRand` in `Rc<RefCell<>>` so a source
/// rolls through `&self` and both dice of a table can share one stream.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A zero-argument source of die outcomes.
pub trait Dice {
    fn roll(&self) -> u32;
}

impl<F: Fn() -> u32> Dice for F {
    #[inline]
    fn roll(&self) -> u32 {
        self()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sides {
    Four = 4,
    Six = 6,
}

/// Uniform die over `1..=sides`.
#[derive(Clone)]
pub struct FairDice {
    sides: Sides,
    rng: Rc<RefCell<WyRand>>,
}

impl FairDice {
    pub fn new(sides: Sides, rng: Rc<RefCell<WyRand>>) -> Self {
        Self { sides, rng }
    }

    pub fn seeded(sides: Sides, seed: u64) -> Self {
        Self::new(sides, Rc::new(RefCell::new(WyRand::from_seed(seed.to_le_bytes()))))
    }

    pub fn sides(&self) -> Sides {
        self.sides
    }
}

impl Dice for FairDice {
    #[inline]
    fn roll(&self) -> u32 {
        let x = self.rng.borrow_mut().next_u32() as u64;
        // widening multiply maps x onto [0, sides) without a modulo
        ((x * self.sides as u64) >> 32) as u32 + 1
    }
}

/// Replays a fixed sequence of outcomes, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct TestDice {
    outcomes: Vec<u32>,
    pos: Cell<usize>,
}

impl TestDice {
    /// Panics on an empty sequence.
    pub fn new(outcomes: impl Into<Vec<u32>>) -> Self {
        let outcomes = outcomes.into();
        assert!(!outcomes.is_empty(), "test dice need at least one outcome");
        Self { outcomes, pos: Cell::new(0) }
    }

    /// Total number of rolls served so far.
    pub fn rolls(&self) -> usize {
        self.pos.get()
    }
}

impl Dice for TestDice {
    fn roll(&self) -> u32 {
        let i = self.pos.get();
        self.pos.set(i + 1);
        self.outcomes[i % self.outcomes.len()]
    }
}

/// The four- and six-sided dice a game draws from.
pub struct DiceTable {
    pub four_sided: Box<dyn Dice>,
    pub six_sided: Box<dyn Dice>,
}

impl DiceTable {
    pub fn new(four_sided: impl Dice + 'static, six_sided: impl Dice + 'static) -> Self {
        Self { four_sided: Box::new(four_sided), six_sided: Box::new(six_sided) }
    }

    /// Fair dice sharing one WyRand stream.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(WyRand::from_seed(seed.to_le_bytes()))
    }

    /// Fair dice seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::from_rng(WyRand::from_os_rng())
    }

    fn from_rng(rng: WyRand) -> Self {
        let rng = Rc::new(RefCell::new(rng));
        Self::new(
            FairDice::new(Sides::Four, Rc::clone(&rng)),
            FairDice::new(Sides::Six, rng),
        )
    }

    /// Same source behind both dice, for replaying a fixed sequence through a whole game.
    pub fn replay(dice: Rc<TestDice>) -> Self {
        let four = Rc::clone(&dice);
        Self::new(move || four.roll(), move || dice.roll())
    }

    pub fn get(&self, sides: Sides) -> &dyn Dice {
        match sides {
            Sides::Four => self.four_sided.as_ref(),
            Sides::Six => self.six_sided.as_ref(),
        }
    }
}
