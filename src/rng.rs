// src/rng.rs
//! Random Number Generation for Path Simulation
//!
//! Two kinds of source feed the integrators:
//!
//! 1. **Process-wide source**: the thread-local entropy-seeded generator from
//!    `rand`. Used by [`crate::mc::mc_engine::simulate`] when no seed is given.
//! 2. **Per-path streams**: one `StdRng` per sample path, seeded from a base
//!    seed and the path index. A path's noise depends only on `(seed, path)`,
//!    so parallel runs give the same result for any thread count.
//!
//! # Stream Seeding
//!
//! The base seed and path index are combined with a splitmix64 finalizer:
//! ```text
//! z = base_seed + golden_gamma * (path_id + 1)
//! z = (z ⊕ (z >> 30)) * 0xbf58476d1ce4e5b9
//! z = (z ⊕ (z >> 27)) * 0x94d049bb133111eb
//! seed = z ⊕ (z >> 31)
//! ```
//! so neighbouring base seeds do not produce shifted copies of each other's
//! streams.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

fn splitmix64(base_seed: u64, path_id: u64) -> u64 {
    let mut z = base_seed.wrapping_add(GOLDEN_GAMMA.wrapping_mul(path_id.wrapping_add(1)));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9u64);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111ebu64);
    z ^ (z >> 31)
}

/// RNG factory for reproducible parallel simulations
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Independent generator for one sample path
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(splitmix64(self.base_seed, path_id))
    }
}

/// The shared, entropy-seeded source for unseeded runs
pub fn process_rng() -> ThreadRng {
    rand::thread_rng()
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Overwrite `out` with i.i.d. N(0,1) draws (one Noise Draw)
pub fn fill_normal<'a, R, I>(rng: &mut R, out: I)
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a mut f64>,
{
    for w in out {
        *w = get_normal_draw(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_factory_reproducibility() {
        let factory = RngFactory::new(42);

        let mut rng1 = factory.create_std_rng(0);
        let mut rng2 = factory.create_std_rng(0);

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_factory_different_paths() {
        let factory = RngFactory::new(42);

        let mut rng1 = factory.create_std_rng(0);
        let mut rng2 = factory.create_std_rng(1);

        let vals1: Vec<u64> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_adjacent_seeds_do_not_alias() {
        // seed 42 / path 1 must not replay seed 43 / path 0
        let mut a = RngFactory::new(42).create_std_rng(1);
        let mut b = RngFactory::new(43).create_std_rng(0);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_fill_normal_distribution() {
        let mut rng = seed_rng_from_u64(7);
        let mut samples = vec![0.0; 20_000];
        fill_normal(&mut rng, samples.iter_mut());

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.05,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_fill_normal_draws_fresh_values() {
        let mut rng = seed_rng_from_u64(11);
        let mut noise = [0.0; 4];
        fill_normal(&mut rng, noise.iter_mut());
        let first = noise;
        fill_normal(&mut rng, noise.iter_mut());
        assert_ne!(first, noise);
    }
}
