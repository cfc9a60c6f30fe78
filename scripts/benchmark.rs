// scripts/benchmark.rs
use std::env;
use std::fs::File;
use std::io::Write;
use trig_sde::math_utils::Timer;
use trig_sde::mc::mc_engine::{simulate_par, simulate_with_rng, SimParams};
use trig_sde::rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rayon_threads: usize,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rayon_threads: rayon::current_num_threads(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    mode: &'static str,
    paths: usize,
    steps: usize,
    time_ms: f64,
    path_steps_per_sec: f64,
    estimate: f64,
}

fn run_benchmarks(steps: usize) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &paths in &[10_000usize, 100_000, 1_000_000] {
        info!(paths, steps, "benchmarking");
        let params = SimParams {
            paths,
            steps,
            ..SimParams::default()
        };

        let timer = Timer::start();
        let serial = simulate_with_rng(&params, &mut rng::seed_rng_from_u64(42));
        let serial_ms = timer.elapsed_ms();
        let serial_rate = timer.path_steps_per_sec(paths, steps);

        let timer = Timer::start();
        let parallel = simulate_par(&params, 42);
        let parallel_ms = timer.elapsed_ms();
        let parallel_rate = timer.path_steps_per_sec(paths, steps);

        match (serial, parallel) {
            (Ok((_, serial_est)), Ok((_, parallel_est))) => {
                results.push(BenchmarkResult {
                    mode: "serial",
                    paths,
                    steps,
                    time_ms: serial_ms,
                    path_steps_per_sec: serial_rate,
                    estimate: serial_est,
                });
                results.push(BenchmarkResult {
                    mode: "parallel",
                    paths,
                    steps,
                    time_ms: parallel_ms,
                    path_steps_per_sec: parallel_rate,
                    estimate: parallel_est,
                });
            }
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Benchmark run failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    results
}

fn print_report(info: &SystemInfo, results: &[BenchmarkResult]) {
    println!("trig-sde benchmark");
    println!("Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!(
        "OS: {} | CPU cores: {} | Rayon threads: {} | RUSTFLAGS: {}",
        info.os, info.cpu_cores, info.rayon_threads, info.rustc_flags
    );
    println!();
    println!(
        "{:<10} {:>10} {:>8} {:>12} {:>18} {:>12}",
        "mode", "paths", "steps", "time (ms)", "path-steps/s", "estimate"
    );
    for r in results {
        println!(
            "{:<10} {:>10} {:>8} {:>12.2} {:>18.0} {:>12.6}",
            r.mode, r.paths, r.steps, r.time_ms, r.path_steps_per_sec, r.estimate
        );
    }
}

fn write_csv(results: &[BenchmarkResult]) -> std::io::Result<String> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_{}.csv", timestamp);
    let mut file = File::create(&filename)?;
    writeln!(file, "mode,paths,steps,time_ms,path_steps_per_sec,estimate")?;
    for r in results {
        writeln!(
            file,
            "{},{},{},{:.3},{:.0},{:.8}",
            r.mode, r.paths, r.steps, r.time_ms, r.path_steps_per_sec, r.estimate
        )?;
    }
    Ok(filename)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let steps = args
        .iter()
        .position(|a| a == "--steps")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);
    let csv = args.iter().any(|a| a == "--csv");

    let info = SystemInfo::gather();
    let results = run_benchmarks(steps);
    print_report(&info, &results);

    if csv {
        match write_csv(&results) {
            Ok(filename) => println!("\nResults written to {}", filename),
            Err(e) => eprintln!("Could not write CSV: {}", e),
        }
    }
}
