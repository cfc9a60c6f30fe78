// src/math_utils.rs
use std::time::{Duration, Instant};

/// Wall-clock stopwatch for demos and benchmarks
pub struct Timer {
    start_time: Instant,
}

impl Timer {
    pub fn start() -> Timer {
        Timer {
            start_time: Instant::now(),
        }
    }

    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    /// Path-steps advanced per second for a run of `paths` × `steps`
    pub fn path_steps_per_sec(&self, paths: usize, steps: usize) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (paths as f64 * steps as f64) / secs
        } else {
            f64::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_is_monotonic() {
        let mut timer = Timer::start();
        let first = timer.elapsed_ms();
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed_ms() >= first);
        timer.restart();
        assert!(timer.path_steps_per_sec(10, 10) > 0.0);
    }
}
