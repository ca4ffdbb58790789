// demos/ou_demo.rs
use exact_sde::math_utils::Timer;
use exact_sde::{ou_path, OuProcess, Outputs, SdeOptions};

fn main() {
    println!("Running exact-sde Ornstein-Uhlenbeck demo\n");

    let theta = 4.0;
    let mu = 0.0;
    let sigma = 0.25;
    let seed = 1234;
    let paths = 10_000;

    // Uniform grid over [0, 1], all paths started at 1.0. Each column of
    // the trajectory is an independent dimension, so one call generates
    // the whole ensemble.
    let times: Vec<f64> = (0..=100).map(|i| i as f64 * 0.01).collect();
    let y0 = vec![1.0; paths];

    let mut timer = Timer::new();
    timer.start();
    let sol = ou_path(
        theta,
        mu,
        sigma,
        &times,
        &y0,
        SdeOptions {
            seed: Some(seed),
            outputs: Outputs::PATH | Outputs::INCREMENTS,
            ..Default::default()
        },
    )
    .expect("Valid configuration");
    let elapsed = timer.elapsed_ms();

    println!("--- Ensemble at t = 1 ---");
    let last = sol.y.row(sol.y.nrows() - 1);
    let sample_mean = last.sum() / paths as f64;
    let sample_var =
        last.iter().map(|x| (x - sample_mean).powi(2)).sum::<f64>() / paths as f64;

    let process = OuProcess::new(theta, mu, sigma).expect("Valid parameters");
    let exact_mean = process.mean(1.0, 1.0);
    let exact_var = process.variance(1.0);

    println!("Sample mean: {:.6}", sample_mean);
    println!("Exact mean:  {:.6}", exact_mean);
    println!("Absolute error (mean): {:.6}", (sample_mean - exact_mean).abs());
    println!("Sample variance: {:.6}", sample_var);
    println!("Exact variance:  {:.6}", exact_var);
    println!(
        "Absolute error (variance): {:.6}\n",
        (sample_var - exact_var).abs()
    );

    println!("--- Stationary distribution ---");
    println!(
        "Stationary mean: {:.6}",
        process.stationary_mean().expect("theta > 0")
    );
    println!(
        "Stationary variance: {:.6}",
        process.stationary_variance().expect("theta > 0")
    );
    println!(
        "P(Y_1 <= 0 | Y_0 = 1): {:.6}\n",
        process.transition_cdf(0.0, 1.0, 1.0)
    );

    println!("--- Wiener increments ---");
    let w = sol.w.expect("increments requested");
    println!("First row is identically zero: {}", w.row(0).iter().all(|&v| v == 0.0));

    let total = (times.len() * paths) as f64;
    println!("\nGenerated {} states in {:.2} ms", total, elapsed);
    println!("Throughput: {:.2} states/sec", total / (elapsed / 1000.0));
}
