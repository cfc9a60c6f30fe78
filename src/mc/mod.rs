pub mod mc_engine;
pub mod observable;
