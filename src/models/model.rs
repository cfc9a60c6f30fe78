// src/models/model.rs
/// Coefficients of a scalar Itô SDE `dX = a(X, t) dt + b(X, t) dW`
pub trait SdeModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;
}
