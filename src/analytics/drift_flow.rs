// src/analytics/drift_flow.rs
//! Noiseless (σ = 0) limit of the trigonometric-drift SDE
//!
//! # Closed Form
//!
//! With `R = √(c1² + c2²)` and `φ = atan2(c2, c1)` the drift is
//! `c1 cos x - c2 sin x = R cos(x + φ)`. In `y = x + φ` the ODE
//! `dy/dt = R cos y` separates into `sec y dy = R dt`, giving
//! ```text
//! y(t) = gd(R t + gd⁻¹(y0)),   gd(u) = atan(sinh u),   gd⁻¹(y) = asinh(tan y)
//! ```
//! for `y0 ∈ (-π/2, π/2)`. On the other half of the circle the same formula
//! runs backwards in time around `y0 - π`. Every trajectory that does not
//! start on the unstable point settles at `y = π/2 (mod 2π)`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn gd(u: f64) -> f64 {
    u.sinh().atan()
}

fn gd_inv(y: f64) -> f64 {
    y.tan().asinh()
}

/// Exact solution of `dx/dt = c1 cos x - c2 sin x` at time `t` from `x0`
pub fn exact_flow(c1: f64, c2: f64, x0: f64, t: f64) -> f64 {
    let r = c1.hypot(c2);
    if r == 0.0 {
        return x0;
    }
    let phi = c2.atan2(c1);

    let y0 = x0 + phi;
    let turns = (y0 / TAU).round();
    let y = y0 - turns * TAU;

    let y_t = if y.abs() == FRAC_PI_2 {
        y
    } else if y.abs() < FRAC_PI_2 {
        gd(r * t + gd_inv(y))
    } else if y > 0.0 {
        gd(-r * t + gd_inv(y - PI)) + PI
    } else {
        gd(-r * t + gd_inv(y + PI)) - PI
    };

    y_t + turns * TAU - phi
}

/// Explicit Euler recursion of the noiseless flow with `steps` steps on `[0, t]`
///
/// Evaluates each step in the same order as the Euler-Maruyama update, so a
/// σ = 0 simulation reproduces it exactly.
pub fn deterministic_euler(c1: f64, c2: f64, t: f64, steps: usize, x0: f64) -> f64 {
    let h = t / steps as f64;
    let mut x = x0;
    for _ in 0..steps {
        let drift = c1 * x.cos() - c2 * x.sin();
        x = x + drift * h;
    }
    x
}
