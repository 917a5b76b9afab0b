use std::collections::BTreeMap;

use rstest::*;
use tellus::gravity::{PredefinedProfile, SphericalHarmonicsGravityField};
use tellus::io::{ConfigRepr, Configurable, GravityFieldCfg};
use tellus::linalg::Vector3;

use crate::test_config_path;

#[fixture]
fn fields() -> BTreeMap<String, SphericalHarmonicsGravityField> {
    let _ = pretty_env_logger::try_init();

    let cfgs: BTreeMap<String, GravityFieldCfg> =
        GravityFieldCfg::load_named(test_config_path("gravity_fields.yaml")).unwrap();

    cfgs.into_iter()
        .map(|(name, cfg)| (name, SphericalHarmonicsGravityField::from_config(cfg).unwrap()))
        .collect()
}

#[rstest]
fn named_fields(fields: BTreeMap<String, SphericalHarmonicsGravityField>) {
    assert_eq!(fields.len(), 3);

    let wgs84 = &fields["earth_wgs84"];
    assert_eq!(wgs84.profile(), Some(PredefinedProfile::EarthWorldGeodeticSystem84));
    assert_eq!(wgs84.gravitational_parameter(), 398600.4418e9);
    assert_eq!(wgs84.degree(), 4);
    println!("{wgs84}");

    let wgs72 = &fields["earth_wgs72_j2"];
    assert_eq!(wgs72.reference_radius(), 6378.135e3);
    assert_eq!(wgs72.degree(), 2);

    let moon = &fields["moon_j2"];
    assert_eq!(moon.name(), "moon");
    assert_eq!(moon.profile(), None);
    assert_eq!(moon.parameters().j2(), 0.0002033);
    assert_eq!(moon.parameters().j4(), 0.0);
}

#[test]
fn field_from_yaml_file() {
    let moon =
        SphericalHarmonicsGravityField::from_yaml(test_config_path("gravity_moon.yaml")).unwrap();
    assert_eq!(moon.origin(), Vector3::zeros());
    assert_eq!(moon.reference_radius(), 1738000.0);
    assert_eq!(moon.degree(), 2);

    // Degree two: the potential only carries J2
    let position = Vector3::new(0.0, 0.0, 2_000e3);
    let rmag: f64 = 2_000e3;
    let expected = moon.gravitational_parameter() / rmag
        * (1.0 - 0.0002033 * (1738000.0 / rmag).powi(2));
    let potential = moon.potential(&position).unwrap();
    assert!(((potential - expected) / expected).abs() < 1e-14);
}

#[test]
fn missing_file() {
    assert!(SphericalHarmonicsGravityField::from_yaml(test_config_path("does_not_exist.yaml")).is_err());
}
