// src/models/trig_drift.rs
//! Trigonometric-drift diffusion
//!
//! ```text
//! dX_t = (c1 cos X_t - c2 sin X_t) dt + σ dW_t
//! ```
//!
//! The drift is the derivative of the observable `f(x) = c1 sin x + c2 cos x`,
//! so the noiseless flow climbs `f` towards its maxima at
//! `x = π/2 - atan2(c2, c1) + 2kπ`. The diffusion is additive (constant σ).

use super::model::SdeModel;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigDrift {
    pub c1: f64,
    pub c2: f64,
    pub sigma: f64,
}

impl TrigDrift {
    pub fn new(c1: f64, c2: f64, sigma: f64) -> Self {
        TrigDrift { c1, c2, sigma }
    }

    /// Quantity whose terminal expectation is estimated: `c1 sin x + c2 cos x`
    pub fn observable(&self, x: f64) -> f64 {
        self.c1 * x.sin() + self.c2 * x.cos()
    }
}

impl SdeModel for TrigDrift {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.c1 * x.cos() - self.c2 * x.sin()
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }
}
