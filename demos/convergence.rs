// demos/convergence.rs
//! Spread of the Monte Carlo estimate across repeated runs as M grows.
//! The standard deviation should fall roughly like 1/√M.

use trig_sde::math_utils::Timer;
use trig_sde::mc::mc_engine::{simulate_par, SimParams};
use tracing_subscriber::EnvFilter;

const REPEATS: u64 = 20;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let base = SimParams {
        sigma: 0.5,
        steps: 200,
        ..SimParams::default()
    };

    println!("{:>10} {:>14} {:>14} {:>14} {:>10}", "M", "mean", "std dev", "std*sqrt(M)", "ms");
    for &paths in &[10usize, 100, 1_000, 10_000, 100_000] {
        let params = SimParams { paths, ..base };
        let timer = Timer::start();

        let mut estimates = Vec::with_capacity(REPEATS as usize);
        for k in 0..REPEATS {
            match simulate_par(&params, 17 * paths as u64 + k) {
                Ok((_, estimate)) => estimates.push(estimate),
                Err(e) => {
                    eprintln!("Simulation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        let n = estimates.len() as f64;
        let mean = estimates.iter().sum::<f64>() / n;
        let var = estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let std = var.sqrt();
        println!(
            "{:>10} {:>14.6} {:>14.6e} {:>14.6} {:>10.1}",
            paths,
            mean,
            std,
            std * (paths as f64).sqrt(),
            timer.elapsed_ms()
        );
    }
}
