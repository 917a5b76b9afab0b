extern crate pretty_env_logger as pel;

use approx::assert_relative_eq;
use rstest::*;
use tellus::gravity::{GravityError, PredefinedProfile, SphericalHarmonicsGravityField};
use tellus::linalg::{Matrix3, Vector3};
use tellus::roots::RootFinderConfig;
use tellus::utils::{is_diagonal, is_symmetric};

#[fixture]
fn wgs84() -> SphericalHarmonicsGravityField {
    let _ = pel::try_init();
    SphericalHarmonicsGravityField::from_profile(PredefinedProfile::EarthWorldGeodeticSystem84)
}

#[test]
fn wgs84_exact_values() {
    let mut field = SphericalHarmonicsGravityField::from_profile(
        PredefinedProfile::EarthWorldGeodeticSystem72,
    );
    field.load_predefined_profile(PredefinedProfile::EarthWorldGeodeticSystem84);

    let params = field.parameters();
    assert_eq!(params.gravitational_parameter(), 398600.4418e9);
    assert_eq!(params.reference_radius(), 6378.137e3);
    assert_eq!(params.j2(), 0.00108262998905);
    assert_eq!(params.j3(), -0.00000253215306);
    assert_eq!(params.j4(), -0.00000161098761);
    assert_eq!(field.profile(), Some(PredefinedProfile::EarthWorldGeodeticSystem84));
}

#[rstest]
fn unknown_profile_name_is_a_no_op(mut wgs84: SphericalHarmonicsGravityField) {
    let before = wgs84.clone();
    let err = wgs84.load_predefined_profile_named("jupiterJuno").unwrap_err();
    assert_eq!(
        err,
        GravityError::UnknownProfile {
            name: "jupiterJuno".to_string()
        }
    );
    assert_eq!(wgs84, before);

    assert_eq!(
        wgs84.load_predefined_profile_named("WGS72"),
        Ok(PredefinedProfile::EarthWorldGeodeticSystem72)
    );
    assert_ne!(wgs84, before);
}

#[rstest]
#[case(Vector3::x(), 0)]
#[case(Vector3::y(), 1)]
#[case(Vector3::z(), 2)]
fn point_mass_tensor_on_axes(
    wgs84: SphericalHarmonicsGravityField,
    #[case] axis: Vector3<f64>,
    #[case] idx: usize,
    #[values(1.0, 1.1, 6.6)] radii: f64,
) {
    let distance = radii * wgs84.reference_radius();
    let mu = wgs84.gravitational_parameter();

    let tensor = wgs84.gradient_tensor_of_potential(&(distance * axis)).unwrap();

    let mut expected = Matrix3::from_diagonal_element(-mu / distance.powi(3));
    expected[(idx, idx)] = 2.0 * mu / distance.powi(3);

    assert!(is_diagonal(&tensor, 1e-30));
    assert_relative_eq!(tensor, expected, max_relative = 1e-14);
}

#[rstest]
#[case(Vector3::new(-2436.45e3, -2436.45e3, 6891.037e3))]
#[case(Vector3::new(7_000e3, 0.0, 0.0))]
#[case(Vector3::new(0.0, 0.0, 6_400e3))]
#[case(Vector3::new(1e5, -4e7, 3e6))]
fn tensors_satisfy_laplace(wgs84: SphericalHarmonicsGravityField, #[case] position: Vector3<f64>) {
    let monopole = wgs84.gradient_tensor_of_potential(&position).unwrap();
    let zonal = wgs84.zonal_gradient_tensor(&position).unwrap();

    for tensor in [monopole, zonal] {
        let scale = tensor.abs().max();
        assert!(is_symmetric(&tensor, 1e-12 * scale), "{tensor}");
        assert!(tensor.trace().abs() < 1e-10 * scale, "{tensor}");
    }

    // The zonal terms are a small perturbation of the point mass
    assert!((zonal - monopole).norm() < 1e-2 * monopole.norm());
}

#[rstest]
fn acceleration_points_inward(wgs84: SphericalHarmonicsGravityField) {
    let position = Vector3::new(4_000e3, -3_000e3, 5_000e3);
    let accel = wgs84.acceleration(&position).unwrap();
    let radial = accel.dot(&position.normalize());
    assert!(radial < 0.0);

    let mu = wgs84.gravitational_parameter();
    assert_relative_eq!(
        accel.norm(),
        mu / position.norm_squared(),
        max_relative = 1e-2
    );
}

#[rstest]
fn origin_is_singular(wgs84: SphericalHarmonicsGravityField) {
    let origin = Vector3::new(-1.5e11, 2.0e10, 0.0);
    let field = wgs84.with_origin(origin);
    assert!(matches!(
        field.gradient_tensor_of_potential(&origin),
        Err(GravityError::SingularPosition { .. })
    ));
}

#[rstest]
#[case(Vector3::new(1.0, 0.0, 0.0), 6_878_137.0)]
#[case(Vector3::new(1.0, 1.0, 1.0), 7_000_000.0)]
#[case(Vector3::new(0.0, 0.0, -1.0), 42_164_000.0)]
fn equipotential_radius_recovers_distance(
    wgs84: SphericalHarmonicsGravityField,
    #[case] direction: Vector3<f64>,
    #[case] distance: f64,
) {
    let position = distance * direction.normalize();
    let potential = wgs84.potential(&position).unwrap();

    let cfg = RootFinderConfig::builder()
        .initial_guess(wgs84.reference_radius())
        .tolerance(1e-6)
        .build();

    let radius = wgs84
        .equipotential_radius(potential, &direction, cfg)
        .unwrap();
    assert!(
        (radius - distance).abs() < 1e-4,
        "{radius} != {distance}"
    );
}

#[rstest]
fn equipotential_search_failure(wgs84: SphericalHarmonicsGravityField) {
    let cfg = RootFinderConfig::builder()
        .initial_guess(wgs84.reference_radius())
        .max_iterations(1)
        .build();
    let potential = wgs84.potential(&Vector3::new(8e6, 0.0, 0.0)).unwrap();
    assert!(matches!(
        wgs84.equipotential_radius(potential, &Vector3::x(), cfg),
        Err(GravityError::EquipotentialSearch { .. })
    ));
}

#[rstest]
fn equipotential_seeded_behind_origin(wgs84: SphericalHarmonicsGravityField) {
    let cfg = RootFinderConfig::builder()
        .initial_guess(-wgs84.reference_radius())
        .tolerance(1e-6)
        .build();
    let potential = wgs84.potential(&Vector3::new(7e6, 0.0, 0.0)).unwrap();
    assert!(matches!(
        wgs84.equipotential_radius(potential, &Vector3::x(), cfg),
        Err(GravityError::NonPositiveRadius { .. })
    ));
}
