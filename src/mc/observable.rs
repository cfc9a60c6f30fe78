// src/mc/observable.rs
//! Observable Transform
//!
//! Maps each terminal state to `c1 sin x + c2 cos x`. Non-finite states map to
//! non-finite observables; nothing is clamped.

use crate::models::trig_drift::TrigDrift;
use ndarray::Array1;

/// Element-wise `c1 sin x + c2 cos x` over a State Batch
pub fn observable_batch(states: &Array1<f64>, c1: f64, c2: f64) -> Array1<f64> {
    let model = TrigDrift::new(c1, c2, 0.0);
    states.mapv(|x| model.observable(x))
}
