// tests/ou_generator_test.rs
use exact_sde::{ou_path, Coeff, Outputs, RandFn, SdeError, SdeOptions};
use ndarray::Array2;

fn uniform_grid(steps: usize, dt: f64) -> Vec<f64> {
    (0..=steps).map(|i| i as f64 * dt).collect()
}

fn panicking_source() -> RandFn {
    Box::new(|_, _| panic!("random source must not be invoked"))
}

#[test]
fn test_zero_diffusion_is_deterministic_and_never_draws() {
    let times = uniform_grid(50, 0.02);
    let theta = 4.0;
    let mu = 0.5;
    let y0 = [-1.0, 0.0, 2.0];

    // A source that panics if called proves the degenerate branch skips
    // the random source entirely.
    let opts = SdeOptions {
        rand_fn: Some(panicking_source()),
        outputs: Outputs::PATH | Outputs::INCREMENTS,
        ..Default::default()
    };

    let sol = ou_path(theta, mu, 0.0, &times, &y0, opts).expect("Valid configuration");

    for (i, &t) in times.iter().enumerate() {
        let e = (-theta * t).exp();
        for (j, &x0) in y0.iter().enumerate() {
            let expected = x0 * e - mu * (e - 1.0);
            assert!(
                (sol.y[[i, j]] - expected).abs() < 1e-14,
                "deterministic formula mismatch at ({}, {}): {} vs {}",
                i,
                j,
                sol.y[[i, j]],
                expected
            );
        }
    }

    let w = sol.w.expect("increments were requested");
    assert!(w.iter().all(|&v| v == 0.0), "W must be all zeros when sigma = 0");
}

#[test]
fn test_all_shape_combinations_are_float_identical() {
    let times = uniform_grid(20, 0.05);
    let y0 = [-1.0, 0.5, 2.0];
    let seed = 99;

    let run = |theta: Coeff, mu: Coeff, sigma: Coeff| -> Array2<f64> {
        ou_path(
            theta,
            mu,
            sigma,
            &times,
            &y0,
            SdeOptions {
                seed: Some(seed),
                ..Default::default()
            },
        )
        .expect("Valid configuration")
        .y
    };

    let (th, m, sg) = (0.8, 0.3, 0.25);
    let scalar = |v: f64| Coeff::from(v);
    let vector = |v: f64| Coeff::from(vec![v; y0.len()]);

    let base = run(scalar(th), scalar(m), scalar(sg));
    // every scalar/vector combination of (theta, mu, sigma)
    for bits in 1..8u8 {
        let theta = if bits & 1 != 0 { vector(th) } else { scalar(th) };
        let mu = if bits & 2 != 0 { vector(m) } else { scalar(m) };
        let sigma = if bits & 4 != 0 { vector(sg) } else { scalar(sg) };

        let y = run(theta, mu, sigma);
        assert_eq!(
            y, base,
            "shape combination {:03b} changed the numerics",
            bits
        );
    }
}

#[test]
fn test_theta_zero_reduces_to_additive_random_walk() {
    let times = uniform_grid(40, 0.025);
    let sigma = 0.5;
    let y0 = [1.0, -2.0];

    let sol = ou_path(
        0.0,
        7.0, // the drift-mean term vanishes when theta = 0
        sigma,
        &times,
        &y0,
        SdeOptions {
            seed: Some(5),
            outputs: Outputs::PATH | Outputs::INCREMENTS,
            ..Default::default()
        },
    )
    .expect("Valid configuration");

    let w = sol.w.expect("increments were requested");
    for i in 0..times.len() {
        for (j, &x0) in y0.iter().enumerate() {
            let expected = x0 + sigma * w[[i, j]];
            assert!(
                (sol.y[[i, j]] - expected).abs() < 1e-12,
                "Y != y0 + sigma*W at ({}, {})",
                i,
                j
            );
        }
    }
}

#[test]
fn test_theta_to_zero_continuity() {
    let times = uniform_grid(20, 0.05);
    let y0 = [1.0];

    let run = |theta: f64| {
        ou_path(
            theta,
            0.3,
            0.5,
            &times,
            &y0,
            SdeOptions {
                seed: Some(11),
                ..Default::default()
            },
        )
        .expect("Valid configuration")
        .y
    };

    // small enough to approach the limit, large enough that the variance
    // increment differences stay well above the floating-point quantum
    let at_zero = run(0.0);
    let near_zero = run(1e-9);
    for (a, b) in at_zero.iter().zip(near_zero.iter()) {
        assert!(
            (a - b).abs() < 1e-5,
            "theta -> 0 limit is discontinuous: {} vs {}",
            a,
            b
        );
    }
}

#[test]
fn test_increments_first_row_zero_and_variance_accumulates() {
    // each column is an iid copy, so column spread estimates the variance
    let paths = 2_000;
    let times = [0.0, 0.25, 0.5, 0.75, 1.0];
    let y0 = vec![0.0; paths];

    let sol = ou_path(
        1.0,
        0.0,
        1.0,
        &times,
        &y0,
        SdeOptions {
            seed: Some(21),
            outputs: Outputs::PATH | Outputs::INCREMENTS,
            ..Default::default()
        },
    )
    .expect("Valid configuration");

    let w = sol.w.expect("increments were requested");
    assert!(
        w.row(0).iter().all(|&v| v == 0.0),
        "first row of W must be exactly zero"
    );

    let row_var = |i: usize| {
        let row = w.row(i);
        let mean = row.sum() / paths as f64;
        row.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / paths as f64
    };

    let (v1, v2, v4) = (row_var(1), row_var(2), row_var(4));
    println!("accumulated variances: {} {} {}", v1, v2, v4);
    assert!(v1 > 0.0);
    assert!(v2 > v1, "variance must accumulate along the grid");
    assert!(v4 > v2, "variance must accumulate along the grid");
}

#[test]
fn test_descending_time_grid_stays_finite() {
    let times: Vec<f64> = (0..=50).map(|i| 1.0 - i as f64 * 0.02).collect();
    let y0 = [0.5, -0.5];

    let sol = ou_path(
        vec![2.0, 0.0], // mixed mean-reverting and Brownian dimensions
        0.1,
        0.3,
        &times,
        &y0,
        SdeOptions {
            seed: Some(33),
            outputs: Outputs::PATH | Outputs::INCREMENTS,
            ..Default::default()
        },
    )
    .expect("Valid configuration");

    assert!(
        sol.y.iter().all(|v| v.is_finite()),
        "reversed time must not produce negative variance (NaN in Y)"
    );
    let w = sol.w.expect("increments were requested");
    assert!(w.iter().all(|v| v.is_finite()));
    assert!(w.row(0).iter().all(|&v| v == 0.0));
}

#[test]
fn test_descending_grid_variance_accumulates_along_grid_order() {
    // variance accumulates with distance travelled along the grid, in
    // either time direction
    let paths = 2_000;
    let times = [1.0, 0.75, 0.5, 0.25, 0.0];
    let y0 = vec![0.0; paths];

    let sol = ou_path(
        1.0,
        0.0,
        1.0,
        &times,
        &y0,
        SdeOptions {
            seed: Some(57),
            outputs: Outputs::PATH | Outputs::INCREMENTS,
            ..Default::default()
        },
    )
    .expect("Valid configuration");

    let w = sol.w.expect("increments were requested");
    assert!(w.row(0).iter().all(|&v| v == 0.0));

    let row_var = |i: usize| {
        let row = w.row(i);
        let mean = row.sum() / paths as f64;
        row.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / paths as f64
    };

    let (v1, v2, v4) = (row_var(1), row_var(2), row_var(4));
    println!("accumulated variances (descending grid): {} {} {}", v1, v2, v4);
    assert!(v1 > 0.0);
    assert!(v2 > v1, "variance must accumulate along a descending grid");
    assert!(v4 > v2, "variance must accumulate along a descending grid");
}

#[test]
fn test_wrong_length_theta_fails_before_any_draw() {
    let opts = SdeOptions {
        rand_fn: Some(panicking_source()),
        ..Default::default()
    };

    // length 3 against a 2-dimensional initial condition
    let err = ou_path(
        vec![1.0, 2.0, 3.0],
        0.0,
        0.5,
        &[0.0, 0.5, 1.0],
        &[0.0, 1.0],
        opts,
    )
    .unwrap_err();
    assert!(matches!(err, SdeError::InvalidParameterShape { .. }));
}

#[test]
fn test_negative_sigma_rejected() {
    let err = ou_path(
        1.0,
        0.0,
        vec![0.5, -0.5],
        &[0.0, 1.0],
        &[0.0, 0.0],
        SdeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SdeError::NegativeParameter { .. }));
}

#[test]
fn test_seed_reproducibility() {
    // theta=4, mu=0, sigma=0.25 over [0, 1], ten paths started on a line
    let times = uniform_grid(100, 0.01);
    let y0: Vec<f64> = (0..10).map(|i| -1.0 + i as f64 * (2.0 / 9.0)).collect();

    let run = |seed: u64| {
        ou_path(
            4.0,
            0.0,
            0.25,
            &times,
            &y0,
            SdeOptions {
                seed: Some(seed),
                ..Default::default()
            },
        )
        .expect("Valid configuration")
        .y
    };

    assert_eq!(run(42), run(42), "same seed must reproduce the trajectory");
    assert_ne!(run(42), run(43), "different seeds must differ");
}

#[test]
fn test_unit_draws_collapse_to_cumulative_sum() {
    // theta=0, mu=0, sigma=1, unit steps, all-ones draws => Y = [0, 1, 2]
    let opts = SdeOptions {
        rand_fn: Some(Box::new(|rows, cols| Ok(Array2::ones((rows, cols))))),
        ..Default::default()
    };

    let sol = ou_path(0.0, 0.0, 1.0, &[0.0, 1.0, 2.0], &[0.0], opts)
        .expect("Valid configuration");

    assert_eq!(sol.y[[0, 0]], 0.0);
    assert_eq!(sol.y[[1, 0]], 1.0);
    assert_eq!(sol.y[[2, 0]], 2.0);
}

#[test]
fn test_custom_source_wrong_shape_reported() {
    let opts = SdeOptions {
        rand_fn: Some(Box::new(|rows, _| Ok(Array2::zeros((rows, 7))))),
        ..Default::default()
    };

    let err = ou_path(1.0, 0.0, 0.5, &[0.0, 0.5, 1.0], &[0.0, 0.0], opts).unwrap_err();
    assert!(matches!(err, SdeError::RandomSourceShapeMismatch { .. }));
}

#[test]
fn test_custom_source_failure_reported() {
    let opts = SdeOptions {
        rand_fn: Some(Box::new(|_, _| {
            Err(SdeError::RandomSourceFailure {
                reason: "draw stream exhausted".to_string(),
            })
        })),
        ..Default::default()
    };

    let err = ou_path(1.0, 0.0, 0.5, &[0.0, 1.0], &[0.0], opts).unwrap_err();
    assert!(matches!(err, SdeError::RandomSourceFailure { .. }));
}

#[test]
fn test_increments_only_returned_when_requested() {
    let times = uniform_grid(10, 0.1);

    let without = ou_path(1.0, 0.0, 0.5, &times, &[0.0], SdeOptions {
        seed: Some(3),
        ..Default::default()
    })
    .expect("Valid configuration");
    assert!(without.w.is_none());

    let with = ou_path(1.0, 0.0, 0.5, &times, &[0.0], SdeOptions {
        seed: Some(3),
        outputs: Outputs::PATH | Outputs::INCREMENTS,
        ..Default::default()
    })
    .expect("Valid configuration");
    assert!(with.w.is_some());
    // the increment request must not change the trajectory itself
    assert_eq!(with.y, without.y);
}

#[test]
fn test_trajectory_matches_moments_statistically() {
    let paths = 20_000;
    let (theta, mu, sigma) = (4.0, 0.5, 0.25);
    let times = uniform_grid(20, 0.05);
    let y0 = vec![-1.0; paths];

    let sol = ou_path(
        theta,
        mu,
        sigma,
        &times,
        &y0,
        SdeOptions {
            seed: Some(77),
            ..Default::default()
        },
    )
    .expect("Valid configuration");

    let process = exact_sde::OuProcess::new(theta, mu, sigma).expect("Valid parameters");
    let last = sol.y.row(sol.y.nrows() - 1);
    let sample_mean = last.sum() / paths as f64;
    let sample_var =
        last.iter().map(|x| (x - sample_mean).powi(2)).sum::<f64>() / paths as f64;

    let exact_mean = process.mean(-1.0, 1.0);
    let exact_var = process.variance(1.0);
    println!(
        "mean {} vs {}, var {} vs {}",
        sample_mean, exact_mean, sample_var, exact_var
    );

    // ~5 standard errors of slack at 20k samples
    assert!((sample_mean - exact_mean).abs() < 5.0 * (exact_var / paths as f64).sqrt());
    assert!((sample_var - exact_var).abs() < 0.1 * exact_var);
}
