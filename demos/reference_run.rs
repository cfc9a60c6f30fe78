// demos/reference_run.rs
//! Reference run: c1 = 1, c2 = 0, σ = 0.5, T = 10, N = 2, M = 10, X0 = 100.
//! Prints the terminal State Batch and the Monte Carlo estimate of E[sin X_T].
//!
//! Pass `--seed <u64>` for a reproducible parallel run instead of the
//! process-wide random source.

use trig_sde::mc::mc_engine::{simulate_par, simulate_with_rng, SimParams};
use trig_sde::rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok());

    let params = SimParams::default();
    println!("Euler-Maruyama / Monte Carlo reference run");
    println!("==========================================");
    println!(
        "c1 = {}, c2 = {}, sigma = {}, T = {}, N = {}, M = {}, X0 = {}",
        params.c1, params.c2, params.sigma, params.t, params.steps, params.paths, params.x0
    );

    let result = match seed {
        Some(seed) => simulate_par(&params, seed),
        None => simulate_with_rng(&params, &mut rng::process_rng()),
    };

    match result {
        Ok((final_states, estimate)) => {
            println!("\nFinal states X_T:");
            println!("{}", final_states);
            println!("\nEstimate of E[c1 sin X_T + c2 cos X_T]: {}", estimate);
        }
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}
