extern crate pretty_env_logger as pel;

use rstest::*;
use tellus::io::ConfigRepr;
use tellus::roots::{
    NewtonRaphson, RootFinderConfig, RootFindingError, RootFunction, SolverStatus,
};

use crate::test_config_path;

#[fixture]
fn configs() -> Vec<RootFinderConfig> {
    let _ = pel::try_init();
    RootFinderConfig::load_many(test_config_path("root_finders.yaml")).unwrap()
}

/// f(x) = x^2 - 2
struct SquareRootOfTwo;

impl RootFunction for SquareRootOfTwo {
    fn compute_function(&self, x: f64) -> f64 {
        x * x - 2.0
    }

    fn compute_first_derivative_function(&self, x: f64) -> f64 {
        2.0 * x
    }
}

#[rstest]
fn sqrt_two_from_free_functions(configs: Vec<RootFinderConfig>) {
    let cfg = configs[0];
    assert_eq!(cfg.tolerance, 1e-9);

    let mut solver = NewtonRaphson::new(cfg).unwrap();
    solver.set_functions(|x| x * x - 2.0, |x| 2.0 * x);
    let sol = solver.execute().unwrap();

    println!("{solver}");
    assert_eq!(sol.status, SolverStatus::Converged);
    assert!((sol.root - 2.0_f64.sqrt()).abs() < 1e-9);
    assert_eq!(solver.computed_root(), sol.root);
}

#[rstest]
#[case(1.0, 2.0_f64.sqrt())]
#[case(100.0, 2.0_f64.sqrt())]
#[case(-0.5, -(2.0_f64.sqrt()))]
#[case(-30.0, -(2.0_f64.sqrt()))]
fn sqrt_two_from_any_side(#[case] initial_guess: f64, #[case] expected: f64) {
    let cfg = RootFinderConfig::builder()
        .initial_guess(initial_guess)
        .tolerance(1e-12)
        .build();
    let sol = NewtonRaphson::with_adaptor(cfg, SquareRootOfTwo)
        .unwrap()
        .execute()
        .unwrap();
    assert!(sol.is_converged());
    assert!((sol.root - expected).abs() < 1e-12);
}

#[rstest]
fn identical_runs_are_identical(configs: Vec<RootFinderConfig>) {
    let cfg = RootFinderConfig {
        record_iterates: true,
        ..configs[0]
    };

    let mut solver = NewtonRaphson::with_adaptor(cfg, SquareRootOfTwo).unwrap();
    let first = solver.execute().unwrap();
    let second = solver.execute().unwrap();

    assert_eq!(first.iterates.len(), first.iterations);
    assert_eq!(first, second);

    let mut other = NewtonRaphson::new(cfg).unwrap();
    other.set_functions(|x| x * x - 2.0, |x| 2.0 * x);
    assert_eq!(other.execute().unwrap().iterates, first.iterates);
}

#[rstest]
fn single_iteration_does_not_converge(configs: Vec<RootFinderConfig>) {
    let cfg = configs[1];
    assert_eq!(cfg.max_iterations, 1);

    let mut solver = NewtonRaphson::with_adaptor(cfg, SquareRootOfTwo).unwrap();
    let sol = solver.execute().unwrap();

    assert_eq!(sol.status, SolverStatus::NonConvergent);
    assert_eq!(sol.root, 0.0);
    assert!(sol.root.is_sign_negative());
    assert!(solver.current_value().is_sign_negative() && solver.current_value() == 0.0);
    assert!(solver.next_value().is_sign_negative() && solver.next_value() == 0.0);
    assert_eq!(
        sol.ensure_converged(),
        Err(RootFindingError::NonConvergence { max_iterations: 1 })
    );

    // Raising the bound makes the same problem converge.
    solver
        .configure(RootFinderConfig {
            max_iterations: 100,
            ..cfg
        })
        .unwrap();
    assert!(solver.execute().unwrap().is_converged());
}

#[test]
fn adaptor_replaces_free_functions() {
    let cfg = RootFinderConfig::builder()
        .initial_guess(3.0)
        .tolerance(1e-12)
        .build();
    let mut solver = NewtonRaphson::new(cfg).unwrap();

    // Root of this pair is 5
    solver.set_functions(|x| x - 5.0, |_| 1.0);
    assert!(solver.source().unwrap().is_pair());

    solver.set_adaptor(SquareRootOfTwo);
    assert!(solver.source().unwrap().is_adaptor());

    let sol = solver.execute().unwrap();
    assert!((sol.root - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn configuration_failures() {
    let mut solver = NewtonRaphson::new(RootFinderConfig::default()).unwrap();
    assert_eq!(
        solver.execute(),
        Err(RootFindingError::NoFunctionSource)
    );

    // Flat at the initial guess
    solver.set_functions(|x| x * x + 1.0, |x| 2.0 * x);
    assert_eq!(
        solver.execute(),
        Err(RootFindingError::ZeroDerivative {
            iteration: 0,
            value: 0.0
        })
    );

    assert!(NewtonRaphson::new(RootFinderConfig {
        tolerance: -1.0,
        ..Default::default()
    })
    .is_err());
}
