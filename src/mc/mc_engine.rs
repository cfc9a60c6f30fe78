// src/mc/mc_engine.rs
use crate::error::{validation::*, SdeError, SdeResult};
use crate::mc::observable::observable_batch;
use crate::models::trig_drift::TrigDrift;
use crate::rng::{self, RngFactory};
use crate::solvers::euler_maruyama::EulerMaruyama;
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Immutable parameter record of one simulation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Drift coefficient on the cosine term
    pub c1: f64,
    /// Drift coefficient on the sine term
    pub c2: f64,
    /// Diffusion coefficient (σ ≥ 0)
    pub sigma: f64,
    /// Final time (T > 0)
    pub t: f64,
    /// Number of time steps (N ≥ 1)
    pub steps: usize,
    /// Number of independent sample paths (M ≥ 1)
    pub paths: usize,
    /// Initial state shared by every path
    pub x0: f64,
}

impl SimParams {
    pub fn new(c1: f64, c2: f64, sigma: f64, t: f64, steps: usize, paths: usize, x0: f64) -> Self {
        SimParams {
            c1,
            c2,
            sigma,
            t,
            steps,
            paths,
            x0,
        }
    }

    /// Validate the parameter record
    ///
    /// Coefficients and the initial state are not checked for finiteness:
    /// non-finite values flow through the run and show up in the output.
    pub fn validate(&self) -> SdeResult<()> {
        validate_steps(self.steps)?;
        validate_paths(self.paths)?;
        validate_positive("t", self.t)?;
        validate_finite("t", self.t)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_finite("sigma", self.sigma)?;
        Ok(())
    }

    /// Fixed step size h = T / N
    pub fn step_size(&self) -> f64 {
        self.t / self.steps as f64
    }

    pub fn model(&self) -> TrigDrift {
        TrigDrift::new(self.c1, self.c2, self.sigma)
    }
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            c1: 1.0,
            c2: 0.0,
            sigma: 0.5,
            t: 10.0,
            steps: 2,
            paths: 10,
            x0: 100.0,
        }
    }
}

/// Path Integrator
///
/// # Algorithm
///
/// ```text
/// h = T / N,  X_p = X0 for every path p
/// repeat N times:
///     W_p ~ N(0,1) i.i.d.                       (one Noise Draw of M values)
///     X_p = X_p + (c1 cos X_p - c2 sin X_p) h + σ √h W_p
/// ```
///
/// The whole batch advances in lock-step; each step's noise is drawn as one
/// block of M normals from `rng`.
///
/// # Errors
///
/// `SdeError::InvalidParameter` before any draw if the parameters are invalid.
pub fn integrate_paths<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> SdeResult<Array1<f64>> {
    params.validate()?;
    let model = params.model();
    let h = params.step_size();
    let sqrt_h = h.sqrt();

    let mut states = Array1::from_elem(params.paths, params.x0);
    let mut noise = Array1::<f64>::zeros(params.paths);

    for i in 0..params.steps {
        let t_i = i as f64 * h;
        rng::fill_normal(rng, noise.iter_mut());
        EulerMaruyama::step_batch(&model, &mut states, t_i, h, sqrt_h, &noise);
    }

    Ok(states)
}

/// Parallel Path Integrator
///
/// Paths are independent, so each one is integrated start to finish on a
/// rayon worker with its own stream from [`RngFactory`]. Path `p` sees the
/// same noise for a given `seed` whatever the thread count, and the per-step
/// update is the one used by [`integrate_paths`].
pub fn integrate_paths_par(params: &SimParams, seed: u64) -> SdeResult<Array1<f64>> {
    params.validate()?;
    let model = params.model();
    let h = params.step_size();
    let sqrt_h = h.sqrt();
    let factory = RngFactory::new(seed);

    let finals: Vec<f64> = (0..params.paths)
        .into_par_iter()
        .map(|p| {
            let mut rng = factory.create_std_rng(p as u64);
            let mut x = params.x0;
            for i in 0..params.steps {
                EulerMaruyama::step_rng(&model, &mut x, i as f64 * h, h, sqrt_h, &mut rng);
            }
            x
        })
        .collect();

    Ok(Array1::from(finals))
}

/// Monte Carlo Estimator: arithmetic mean of an Observable Batch
///
/// # Errors
///
/// `SdeError::InvalidParameter` if `paths` is zero or differs from the batch
/// length.
pub fn monte_carlo_mean(observables: ArrayView1<f64>, paths: usize) -> SdeResult<f64> {
    validate_paths(paths)?;
    if observables.len() != paths {
        return Err(SdeError::InvalidParameter {
            parameter: "paths".to_string(),
            value: paths as f64,
            constraint: format!("must equal observable batch length ({})", observables.len()),
        });
    }
    Ok(observables.sum() / paths as f64)
}

fn finish(params: &SimParams, states: Array1<f64>) -> SdeResult<(Array1<f64>, f64)> {
    let observables = observable_batch(&states, params.c1, params.c2);
    let estimate = monte_carlo_mean(observables.view(), params.paths)?;
    if !estimate.is_finite() {
        warn!(
            estimate,
            paths = params.paths,
            "non-finite Monte Carlo estimate; terminal states contain NaN or infinite values"
        );
    }
    Ok((states, estimate))
}

/// Full pipeline with a caller supplied random source
///
/// Returns `(final_states, estimate)`.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    params: &SimParams,
    rng: &mut R,
) -> SdeResult<(Array1<f64>, f64)> {
    params.validate()?;
    debug!(
        ?params,
        h = params.step_size(),
        mode = "serial",
        "starting Euler-Maruyama run"
    );
    let states = integrate_paths(params, rng)?;
    finish(params, states)
}

/// Full pipeline on the rayon pool with per-path seeded streams
pub fn simulate_par(params: &SimParams, seed: u64) -> SdeResult<(Array1<f64>, f64)> {
    params.validate()?;
    debug!(
        ?params,
        h = params.step_size(),
        seed,
        threads = rayon::current_num_threads(),
        mode = "parallel",
        "starting Euler-Maruyama run"
    );
    let states = integrate_paths_par(params, seed)?;
    finish(params, states)
}

/// Simulate `dX = (c1 cos X - c2 sin X) dt + σ dW` on `[0, T]` with `N` steps
/// and `M` paths from `X0`, and estimate `E[c1 sin X_T + c2 cos X_T]`.
///
/// Draws from the process-wide random source. Returns the terminal State
/// Batch and the estimate.
///
/// ```rust
/// use trig_sde::mc::mc_engine::simulate;
///
/// let (final_states, estimate) = simulate(1.0, 0.0, 0.5, 10.0, 2, 10, 100.0)
///     .expect("Valid parameters");
/// assert_eq!(final_states.len(), 10);
/// assert!(estimate.abs() <= 1.0);
/// ```
pub fn simulate(
    c1: f64,
    c2: f64,
    sigma: f64,
    t: f64,
    steps: usize,
    paths: usize,
    x0: f64,
) -> SdeResult<(Array1<f64>, f64)> {
    let params = SimParams::new(c1, c2, sigma, t, steps, paths, x0);
    simulate_with_rng(&params, &mut rng::process_rng())
}
