pub mod model;
pub mod trig_drift;
