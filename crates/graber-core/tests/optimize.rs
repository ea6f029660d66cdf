//! End-to-end behavior of the GRABER loop.

use std::convert::Infallible;

use approx::assert_abs_diff_eq;
use graber_core::{Graber, GraberConfig, Optimizer, StepScheduler, parameter_shift};
use proptest::prelude::*;

fn coupled(x: &[f64]) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, v)| (i as f64 + 1.0) * v.sin())
        .sum::<f64>()
        + x.windows(2).map(|w| 0.3 * w[0].cos() * w[1].cos()).sum::<f64>()
}

#[test]
fn test_quadratic_improves_on_start() {
    let optimizer = Graber::new(
        GraberConfig::default()
            .with_momentum(0.0)
            .with_maxiter(1000)
            .with_tol(Some(1e-6)),
    )
    .unwrap();

    let result = optimizer.minimize(|x| x[0] * x[0], vec![5.0]).unwrap();

    assert!(result.optimal_value <= 25.0);
    assert!(result.optimal_params[0].abs() < 5.0);
    assert_abs_diff_eq!(
        result.optimal_value,
        result.optimal_params[0] * result.optimal_params[0],
        epsilon = 1e-12
    );
}

#[test]
fn test_sine_reaches_minimum() {
    let optimizer = Graber::new(GraberConfig::default()).unwrap();
    let result = optimizer.minimize(|x| x[0].sin(), vec![0.3]).unwrap();

    assert!(result.converged);
    assert!(result.num_iterations < 1000);
    assert_abs_diff_eq!(result.optimal_value, -1.0, epsilon = 1e-4);
}

#[test]
fn test_two_parameter_landscape() {
    let optimizer = Graber::new(GraberConfig::default().with_initial_eta(0.5)).unwrap();
    let result = optimizer
        .minimize(|x| x[0].sin() + (x[1] - 0.2).cos(), vec![0.1, 0.1])
        .unwrap();

    assert_abs_diff_eq!(result.optimal_value, -2.0, epsilon = 1e-4);
}

#[test]
fn test_step_length_schedule() {
    let schedule = StepScheduler::new(0.4, 5.0);
    assert_eq!(schedule.step_length(5), 0.4);
    assert_eq!(schedule.step_length(6), 1.0);
    assert_abs_diff_eq!(schedule.step_length(15), 0.1, epsilon = 1e-15);
}

#[test]
fn test_parameter_shift_matches_cosine() {
    let mut objective = |x: &[f64]| Ok::<_, Infallible>(x[0].sin());
    let d = parameter_shift(0, &[0.0], &mut objective).unwrap();
    assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
}

#[test]
fn test_gradient_and_bounds_are_ignored() {
    let optimizer = Graber::new(GraberConfig::default().with_maxiter(20)).unwrap();
    let gradient: &dyn Fn(&[f64]) -> Vec<f64> = &|_| vec![1e6];
    let bounds = [(Some(0.0), Some(0.1))];

    let plain = optimizer
        .optimize(
            1,
            |x: &[f64]| Ok::<_, Infallible>(x[0].cos()),
            None,
            None,
            Some(&[1.0][..]),
        )
        .unwrap();
    let with_extras = optimizer
        .optimize(
            1,
            |x: &[f64]| Ok::<_, Infallible>(x[0].cos()),
            Some(gradient),
            Some(&bounds[..]),
            Some(&[1.0][..]),
        )
        .unwrap();

    assert_eq!(plain, with_extras);
}

#[test]
fn test_optimizer_is_reusable() {
    let optimizer = Graber::new(GraberConfig::default()).unwrap();
    let first = optimizer.minimize(coupled, vec![0.4, -0.2, 1.0]).unwrap();
    let second = optimizer.minimize(coupled, vec![0.4, -0.2, 1.0]).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_evaluation_count(
        start in prop::collection::vec(-3.0f64..3.0, 1..5),
        maxiter in 0usize..25,
        momentum in 0.0f64..0.95,
    ) {
        let optimizer = Graber::new(
            GraberConfig::default().with_maxiter(maxiter).with_momentum(momentum),
        ).unwrap();

        let num_vars = start.len();
        let mut calls = 0usize;
        let result = optimizer
            .optimize(
                num_vars,
                |x: &[f64]| {
                    calls += 1;
                    Ok::<_, Infallible>(coupled(x))
                },
                None,
                None,
                Some(start.as_slice()),
            )
            .unwrap();

        prop_assert_eq!(calls, 1 + result.num_iterations * (2 * num_vars + 1));
        prop_assert_eq!(result.num_evaluations, calls);
        prop_assert_eq!(result.history.len(), result.num_iterations + 1);
        prop_assert!(result.num_iterations <= maxiter);
        prop_assert!(result.converged || result.num_iterations == maxiter);
    }

    #[test]
    fn prop_best_value_is_minimum_of_history(
        start in prop::collection::vec(-3.0f64..3.0, 1..4),
        maxiter in 1usize..40,
    ) {
        let optimizer = Graber::new(GraberConfig::default().with_maxiter(maxiter)).unwrap();
        let result = optimizer.minimize(coupled, start).unwrap();

        for value in &result.history {
            prop_assert!(result.optimal_value <= *value);
        }
        prop_assert!(result.history.contains(&result.optimal_value));
        prop_assert_eq!(coupled(&result.optimal_params), result.optimal_value);
    }

    #[test]
    fn prop_more_iterations_never_worsen_best(
        start in prop::collection::vec(-3.0f64..3.0, 1..4),
        maxiter in 1usize..30,
        extra in 1usize..30,
    ) {
        let short = Graber::new(GraberConfig::default().with_maxiter(maxiter)).unwrap();
        let long = Graber::new(GraberConfig::default().with_maxiter(maxiter + extra)).unwrap();

        let a = short.minimize(coupled, start.clone()).unwrap();
        let b = long.minimize(coupled, start).unwrap();

        prop_assert!(b.optimal_value <= a.optimal_value);
        prop_assert_eq!(&b.history[..a.history.len()], &a.history[..]);
    }
}
