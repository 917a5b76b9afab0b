use hyperdual::Float;
use rstest::*;
use tellus::roots::{Dual, DualFunction, NewtonRaphson, RootFinderConfig};

/// Kepler's equation solved for the eccentric anomaly, with the derivative from automatic differentiation.
#[rstest]
#[case(0.0, 1.0)]
#[case(0.1, 1.0)]
#[case(0.5, 2.5)]
#[case(0.9, 0.2)]
fn kepler_equation(#[case] ecc: f64, #[case] mean_anomaly: f64) {
    let _ = pretty_env_logger::try_init();

    let kepler = DualFunction::new(move |ecc_anomaly: Dual| {
        ecc_anomaly - Dual::from_real(ecc) * ecc_anomaly.sin() - Dual::from_real(mean_anomaly)
    });

    let cfg = RootFinderConfig::builder()
        .initial_guess(std::f64::consts::PI)
        .tolerance(1e-14)
        .build();

    let sol = NewtonRaphson::with_adaptor(cfg, &kepler)
        .unwrap()
        .execute()
        .unwrap();

    assert!(sol.is_converged(), "{sol:?}");
    let residual = sol.root - ecc * sol.root.sin() - mean_anomaly;
    assert!(residual.abs() < 1e-12, "residual = {residual:e}");
}
