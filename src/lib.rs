//! # trig-sde: Euler-Maruyama Monte Carlo for a Trigonometric-Drift SDE
//!
//! Integrates
//! ```text
//! dX_t = (c1 cos X_t - c2 sin X_t) dt + σ dW_t,    X_0 = x0
//! ```
//! on `[0, T]` with `N` Euler-Maruyama steps over `M` independent sample
//! paths, then estimates `E[c1 sin X_T + c2 cos X_T]` by the sample mean.
//!
//! ## Key Features
//!
//! - **Batch integrator**: the whole State Batch advances in lock-step, one
//!   block of `M` normal draws per step
//! - **Parallel integrator**: per-path seeded streams on Rayon, reproducible
//!   for any thread count
//! - **Closed-form check**: exact solution of the σ = 0 flow for validation
//!
//! ## Quick Start
//!
//! ```rust
//! use trig_sde::mc::mc_engine::{simulate, simulate_par, SimParams};
//!
//! // Reference run: c1 = 1, c2 = 0, σ = 0.5, T = 10, N = 2, M = 10, X0 = 100
//! let (final_states, estimate) =
//!     simulate(1.0, 0.0, 0.5, 10.0, 2, 10, 100.0).expect("Valid parameters");
//! println!("{:?}\n{}", final_states, estimate);
//!
//! // Reproducible parallel run
//! let params = SimParams { paths: 10_000, steps: 100, ..Default::default() };
//! let (_, estimate) = simulate_par(&params, 42).expect("Valid parameters");
//! assert!(estimate.abs() <= 1.0);
//! ```

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod solvers;
pub mod mc;
pub mod analytics;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use mc::mc_engine::{simulate, SimParams};
