// tests/solver_convergence_test.rs
use trig_sde::analytics::drift_flow::{deterministic_euler, exact_flow};
use trig_sde::mc::mc_engine::{simulate_par, SimParams};
use trig_sde::models::model::SdeModel;
use trig_sde::models::trig_drift::TrigDrift;
use trig_sde::rng;
use trig_sde::solvers::euler_maruyama::EulerMaruyama;

#[test]
fn test_noiseless_euler_first_order_convergence() {
    let (c1, c2, x0, t_end) = (1.0, 0.5, 0.3, 2.0);
    let exact = exact_flow(c1, c2, x0, t_end);

    let mut errors = Vec::new();
    for &steps in &[100usize, 200, 400, 800] {
        let approx = deterministic_euler(c1, c2, t_end, steps, x0);
        errors.push((approx - exact).abs());
    }

    for i in 0..(errors.len() - 1) {
        let ratio = errors[i] / errors[i + 1];
        assert!(
            ratio > 1.7 && ratio < 2.3,
            "halving h should halve the error, got ratio {} at level {}",
            ratio,
            i
        );
    }
}

#[test]
fn test_small_noise_mean_tracks_exact_flow() {
    let params = SimParams {
        c1: 1.0,
        c2: 0.0,
        sigma: 1e-3,
        t: 1.0,
        steps: 1_000,
        paths: 2_000,
        x0: 0.0,
    };
    let (states, _) = simulate_par(&params, 42).expect("Valid configuration");
    let mean = states.sum() / params.paths as f64;
    let exact = exact_flow(params.c1, params.c2, params.x0, params.t);

    assert!(
        (mean - exact).abs() < 5e-3,
        "mean terminal state {} too far from exact flow {}",
        mean,
        exact
    );
}

#[test]
fn test_euler_maruyama_weak_convergence_towards_attractor() {
    // Long horizon: the noiseless attractor is π/2 and small noise keeps
    // E[sin X_T] close to 1.
    let model = TrigDrift::new(1.0, 0.0, 0.05);
    let t_end = 20.0;
    let steps = 400;
    let dt = t_end / steps as f64;
    let sqrt_dt = dt.sqrt();
    let num_paths = 5_000;

    let mut sum_obs = 0.0;
    for i in 0..num_paths {
        let mut rng = rng::seed_rng_from_u64(42 + i as u64);
        let mut x = 0.1;
        let mut t = 0.0;
        for _ in 0..steps {
            EulerMaruyama::step_rng(&model, &mut x, t, dt, sqrt_dt, &mut rng);
            t += dt;
        }
        sum_obs += model.observable(x);
    }
    let mean_obs = sum_obs / num_paths as f64;
    assert!(mean_obs > 0.99, "E[sin X_T] = {} should be near 1", mean_obs);
    assert!(mean_obs <= 1.0);
    assert_eq!(model.diffusion(0.0, 0.0), 0.05);
}
