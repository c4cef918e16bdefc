use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SAMPLE_COUNT: usize = 20;

/// Picks up to `count` distinct words from a candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSampler {
    count: usize,
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}

impl RandomSampler {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Small pools come back whole and in order; larger ones yield a
    /// uniformly random `count`-sized selection.
    pub fn sample<'a, R: Rng + ?Sized>(&self, pool: &[&'a str], rng: &mut R) -> Vec<&'a str> {
        let distinct: Vec<&str> = pool.iter().copied().unique().collect();
        if distinct.len() < self.count {
            return distinct;
        }

        distinct.choose_multiple(rng, self.count).copied().collect()
    }
}
