// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) √Δt Z_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `Z_n ~ N(0, 1)` are independent standard normal draws
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//!
//! `√Δt` is taken as an argument. The step size is fixed for a whole run, so
//! callers compute it once instead of once per element.

use crate::models::model::SdeModel;
use crate::rng;
use ndarray::{Array1, Zip};
use rand::Rng;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single step for one path with a supplied standard normal draw `z`
    #[inline]
    pub fn step<M: SdeModel + ?Sized>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        sqrt_dt: f64,
        z: f64,
    ) {
        let drift = model.drift(*x, t);
        let diffusion = model.diffusion(*x, t);
        *x = *x + drift * dt + diffusion * sqrt_dt * z;
    }

    /// Single step for one path, drawing `z` from `rng`
    pub fn step_rng<M: SdeModel + ?Sized, R: Rng + ?Sized>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        sqrt_dt: f64,
        rng: &mut R,
    ) {
        let z = rng::get_normal_draw(rng);
        Self::step(model, x, t, dt, sqrt_dt, z);
    }

    /// One step for every path of a batch
    ///
    /// `noise[p]` drives `states[p]`; the two arrays must have equal length.
    pub fn step_batch<M: SdeModel + ?Sized>(
        model: &M,
        states: &mut Array1<f64>,
        t: f64,
        dt: f64,
        sqrt_dt: f64,
        noise: &Array1<f64>,
    ) {
        Zip::from(states)
            .and(noise)
            .for_each(|x, &z| Self::step(model, x, t, dt, sqrt_dt, z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trig_drift::TrigDrift;
    use ndarray::array;

    #[test]
    fn test_single_step_without_noise() {
        // X0 = 0, h = 1: X1 = 0 + cos(0) * 1
        let model = TrigDrift::new(1.0, 0.0, 0.0);
        let mut x = 0.0;
        EulerMaruyama::step(&model, &mut x, 0.0, 1.0, 1.0, 0.0);
        assert_eq!(x, 1.0);
    }

    #[test]
    fn test_noise_term_scaling() {
        // zero drift at x = π/2 when c2 = 0
        let model = TrigDrift::new(1.0, 0.0, 0.5);
        let dt: f64 = 0.25;
        let mut x = std::f64::consts::FRAC_PI_2;
        EulerMaruyama::step(&model, &mut x, 0.0, dt, dt.sqrt(), 2.0);
        approx::assert_abs_diff_eq!(x, std::f64::consts::FRAC_PI_2 + 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_batch_matches_elementwise() {
        let model = TrigDrift::new(0.8, -0.3, 0.4);
        let dt: f64 = 0.1;
        let sqrt_dt = dt.sqrt();
        let mut states = array![0.0, 1.0, -2.0, 5.5];
        let noise = array![0.3, -1.2, 0.0, 2.1];

        let expected: Vec<f64> = states
            .iter()
            .zip(noise.iter())
            .map(|(&x, &z)| {
                let mut y = x;
                EulerMaruyama::step(&model, &mut y, 0.0, dt, sqrt_dt, z);
                y
            })
            .collect();

        EulerMaruyama::step_batch(&model, &mut states, 0.0, dt, sqrt_dt, &noise);
        assert_eq!(states.to_vec(), expected);
    }

    #[test]
    fn test_step_rng_is_reproducible() {
        let model = TrigDrift::new(1.0, 0.0, 0.5);
        let dt: f64 = 0.5;
        let mut a = 100.0;
        let mut b = 100.0;
        let mut rng_a = rng::seed_rng_from_u64(3);
        let mut rng_b = rng::seed_rng_from_u64(3);
        EulerMaruyama::step_rng(&model, &mut a, 0.0, dt, dt.sqrt(), &mut rng_a);
        EulerMaruyama::step_rng(&model, &mut b, 0.0, dt, dt.sqrt(), &mut rng_b);
        assert_eq!(a, b);
        assert_ne!(a, 100.0 + (100.0f64).cos() * dt);
    }
}
