//! Dice rolling for generation and combat.
//!
//! `Dice` owns its random generator so one instance can serve a whole play
//! session. Every roll advances the generator, hence `&mut self`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Dice<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> Dice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Roll `quantity` dice with `faces` sides and sum them.
    /// `roll(6, 1)` is a single d6, `roll(6, 3)` gives 3..=18. Totals past
    /// `u32::MAX` saturate.
    pub fn roll(&mut self, faces: u32, quantity: u32) -> u32 {
        if faces == 0 {
            return 0;
        }
        (0..quantity).fold(0u32, |total, _| {
            total.saturating_add(self.rng.gen_range(1..=faces))
        })
    }

    /// True when a d100 comes up below `percent`
    pub fn chance(&mut self, percent: u32) -> bool {
        self.roll(100, 1) < percent
    }
}

impl Dice<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
