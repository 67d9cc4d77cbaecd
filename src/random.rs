use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::prelude::SV;

/// [Randomizer] is the single source of randomness of the emulator:
/// satellite pool sampling, fix subset sampling and satellite
/// elevation/azimuth/SNR draws all go through it. Tests provide
/// scripted implementations to obtain deterministic sentences.
pub trait Randomizer: Send {
    /// Returns a uniformly distributed integer in `min..=max`
    fn range(&mut self, min: u32, max: u32) -> u32;

    /// Returns `amount` distinct items of `population`, in random order.
    fn sample(&mut self, population: &[SV], amount: usize) -> Vec<SV>;
}

/// [ThreadRandomizer] is the default [Randomizer], built on top of [SmallRng].
pub struct ThreadRandomizer {
    rng: SmallRng,
}

impl Default for ThreadRandomizer {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl ThreadRandomizer {
    /// Builds a reproducible [ThreadRandomizer]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Randomizer for ThreadRandomizer {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    fn sample(&mut self, population: &[SV], amount: usize) -> Vec<SV> {
        population
            .choose_multiple(&mut self.rng, amount)
            .copied()
            .collect()
    }
}
