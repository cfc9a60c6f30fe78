pub mod drift_flow;
