use rstest::*;
use std::str::FromStr;
use tellus::cosmic::constants::*;
use tellus::cosmic::CelestialBody;
use tellus::gravity::{GravitationalParameterSet, SphericalHarmonicsGravityField};
use tellus::TellusError;

#[test]
fn moon_from_earth_moon_mass_ratio() {
    assert_eq!(
        MOON_GRAVITATIONAL_PARAMETER,
        1.32712440018e20 / (328900.56 * (1.0 + 81.30059))
    );
}

#[rstest]
#[case("sun", SUN_GRAVITATIONAL_PARAMETER)]
#[case("Mercury", SUN_GRAVITATIONAL_PARAMETER / 6023600.0)]
#[case("VENUS", SUN_GRAVITATIONAL_PARAMETER / 408523.71)]
#[case("earth", 3.986004418E14)]
#[case("luna", MOON_GRAVITATIONAL_PARAMETER)]
#[case("mars", SUN_GRAVITATIONAL_PARAMETER / 3098708.0)]
#[case("jupiter", SUN_GRAVITATIONAL_PARAMETER / 1047.3486)]
#[case("saturn", SUN_GRAVITATIONAL_PARAMETER / 3497.898)]
#[case("uranus", SUN_GRAVITATIONAL_PARAMETER / 22902.98)]
#[case("neptune", SUN_GRAVITATIONAL_PARAMETER / 19412.24)]
#[case("pluto", SUN_GRAVITATIONAL_PARAMETER / 1.35e8)]
fn body_by_name(#[case] name: &str, #[case] gm: f64) {
    let body = CelestialBody::from_str(name).unwrap();
    assert_eq!(body.gm(), gm);
}

/// Every module error converts into the crate error.
fn earth_point_mass(radius: f64) -> Result<f64, TellusError> {
    let body = CelestialBody::from_str("earth")?;
    let params = GravitationalParameterSet::from_body(body, radius)?;
    let field = SphericalHarmonicsGravityField::new(body.name(), params);
    Ok(field.gravitational_parameter())
}

#[test]
fn crate_error() {
    assert_eq!(
        earth_point_mass(EARTH_EQUATORIAL_RADIUS).unwrap(),
        EARTH_GRAVITATIONAL_PARAMETER
    );
    let err = earth_point_mass(-1.0).unwrap_err();
    assert!(matches!(err, TellusError::GravityField { .. }));
    assert!(CelestialBody::from_str("vulcan").is_err());
}
