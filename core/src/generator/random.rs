use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform target source backed by a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct RandomTargets {
    rng: SmallRng,
}

impl RandomTargets {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for RandomTargets {
    fn pick(&mut self, range: RangeInclusive<Value>) -> Value {
        self.rng.random_range(range)
    }
}
