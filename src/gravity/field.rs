/*
    tellus, gravity fields and root finding for astrodynamics
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::profile::{GravitationalParameterSet, PredefinedProfile, MAX_ZONAL_DEGREE};
use super::{
    zonal, EquipotentialSearchSnafu, GravityError, InvalidExpansionSnafu, NonPositiveRadiusSnafu,
    NullDirectionSnafu, SingularPositionSnafu,
};
use crate::linalg::{Matrix3, Vector3, U4};
use crate::roots::{NewtonRaphson, RootFinderConfig, RootFunction};
use hyperdual::OHyperdual;
use snafu::{ensure, ResultExt};
use std::fmt;
use std::str::FromStr;

/// A spherical harmonics gravity field around a body, truncated to its zonal terms.
///
/// The field owns a copy of its [`GravitationalParameterSet`], which is only ever replaced wholesale, and an origin from
/// which all positions are measured. Queries are read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct SphericalHarmonicsGravityField {
    name: String,
    profile: Option<PredefinedProfile>,
    origin: Vector3<f64>,
    parameters: GravitationalParameterSet,
    degree: u16,
    order: u16,
}

impl SphericalHarmonicsGravityField {
    /// Initializes a field at the origin from the provided parameters, expanded up to the highest stored zonal degree.
    pub fn new<S: Into<String>>(name: S, parameters: GravitationalParameterSet) -> Self {
        Self {
            name: name.into(),
            profile: None,
            origin: Vector3::zeros(),
            parameters,
            degree: MAX_ZONAL_DEGREE,
            order: 0,
        }
    }

    /// Initializes a field from one of the predefined profiles.
    pub fn from_profile(profile: PredefinedProfile) -> Self {
        let mut me = Self::new(profile.name(), profile.parameters());
        me.profile = Some(profile);
        me
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Builder pattern to set the origin of the field.
    pub fn with_origin(mut self, origin: Vector3<f64>) -> Self {
        self.origin = origin;
        self
    }

    /// Builder pattern to set the truncation of the expansion.
    pub fn with_expansion(mut self, degree: u16, order: u16) -> Result<Self, GravityError> {
        self.set_expansion(degree, order)?;
        Ok(self)
    }

    /// Replaces the gravitational parameter, reference radius and zonal coefficients with those of the profile.
    pub fn load_predefined_profile(&mut self, profile: PredefinedProfile) {
        self.parameters = profile.parameters();
        self.profile = Some(profile);
        self.name = profile.name().to_string();
        debug!("loaded predefined gravity field {profile}");
    }

    /// Loads a predefined profile from its name.
    ///
    /// If the name is unknown, a warning is logged, the error is returned, and the current parameters are left untouched.
    pub fn load_predefined_profile_named(
        &mut self,
        name: &str,
    ) -> Result<PredefinedProfile, GravityError> {
        match PredefinedProfile::from_str(name) {
            Ok(profile) => {
                self.load_predefined_profile(profile);
                Ok(profile)
            }
            Err(e) => {
                warn!("{e}: keeping the {} parameters", self.name);
                Err(e)
            }
        }
    }

    /// Replaces the whole parameter set.
    pub fn set_parameters(&mut self, parameters: GravitationalParameterSet) {
        self.parameters = parameters;
        self.profile = None;
    }

    pub fn set_origin(&mut self, origin: Vector3<f64>) {
        self.origin = origin;
    }

    /// Sets the truncation of the expansion: the degree may not exceed the highest stored zonal degree, and the order may not exceed the degree.
    pub fn set_expansion(&mut self, degree: u16, order: u16) -> Result<(), GravityError> {
        ensure!(
            degree <= MAX_ZONAL_DEGREE && order <= degree,
            InvalidExpansionSnafu {
                degree,
                order,
                max_degree: MAX_ZONAL_DEGREE
            }
        );
        self.degree = degree;
        self.order = order;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the predefined profile in use, if the parameters were loaded from one.
    pub fn profile(&self) -> Option<PredefinedProfile> {
        self.profile
    }

    pub fn origin(&self) -> Vector3<f64> {
        self.origin
    }

    pub fn parameters(&self) -> &GravitationalParameterSet {
        &self.parameters
    }

    pub fn gravitational_parameter(&self) -> f64 {
        self.parameters.gravitational_parameter()
    }

    pub fn reference_radius(&self) -> f64 {
        self.parameters.reference_radius()
    }

    pub fn degree(&self) -> u16 {
        self.degree
    }

    pub fn order(&self) -> u16 {
        self.order
    }

    /// Returns the position relative to the origin, and its norm, or an error if it coincides with the origin.
    fn relative_position(&self, position: &Vector3<f64>) -> Result<(Vector3<f64>, f64), GravityError> {
        let rel = position - self.origin;
        let rmag = rel.norm();
        ensure!(
            rmag > 0.0,
            SingularPositionSnafu {
                x: position.x,
                y: position.y,
                z: position.z
            }
        );
        Ok((rel, rmag))
    }

    fn zonals(&self) -> Vec<f64> {
        self.parameters.zonals_up_to(self.degree)
    }

    /// Gradient tensor of the point mass potential: `μ / |r|^5 (3 r rᵀ - |r|² I)` with `r` relative to the origin.
    pub fn gradient_tensor_of_potential(
        &self,
        position: &Vector3<f64>,
    ) -> Result<Matrix3<f64>, GravityError> {
        let (rel, rmag) = self.relative_position(position)?;

        Ok(self.gravitational_parameter() / rmag.powi(5)
            * (3.0 * rel * rel.transpose() - rel.norm_squared() * Matrix3::identity()))
    }

    /// Gravitational potential (positive convention, `μ/r` for a point mass) including the zonal terms up to the degree of expansion.
    pub fn potential(&self, position: &Vector3<f64>) -> Result<f64, GravityError> {
        let (rel, _) = self.relative_position(position)?;
        Ok(self.potential_rel(&rel))
    }

    /// Acceleration, i.e. the gradient of the potential, including the zonal terms up to the degree of expansion.
    pub fn acceleration(&self, position: &Vector3<f64>) -> Result<Vector3<f64>, GravityError> {
        let (rel, _) = self.relative_position(position)?;
        Ok(self.acceleration_rel(&rel))
    }

    /// Gradient tensor of the full potential (zonal terms included), computed by automatic differentiation of the acceleration.
    pub fn zonal_gradient_tensor(
        &self,
        position: &Vector3<f64>,
    ) -> Result<Matrix3<f64>, GravityError> {
        let (rel, _) = self.relative_position(position)?;

        let radius = [
            OHyperdual::<f64, U4>::from_slice(&[rel.x, 1.0, 0.0, 0.0]),
            OHyperdual::<f64, U4>::from_slice(&[rel.y, 0.0, 1.0, 0.0]),
            OHyperdual::<f64, U4>::from_slice(&[rel.z, 0.0, 0.0, 1.0]),
        ];

        let accel = zonal::acceleration(
            &radius,
            self.gravitational_parameter(),
            self.reference_radius(),
            &self.zonals(),
        );

        let mut grad = Matrix3::zeros();
        for i in 0..3 {
            for j in 1..4 {
                grad[(i, j - 1)] = accel[i][j];
            }
        }
        Ok(grad)
    }

    /// Finds the distance from the origin, along `direction`, at which the potential equals `potential`.
    ///
    /// The search is a Newton-Raphson iteration on the radius, starting from the initial guess of the configuration.
    /// The potential is even along the ray on the equator, so the iteration may land on the opposite side of the origin:
    /// any non-positive root is rejected.
    pub fn equipotential_radius(
        &self,
        potential: f64,
        direction: &Vector3<f64>,
        cfg: RootFinderConfig,
    ) -> Result<f64, GravityError> {
        let dir_norm = direction.norm();
        ensure!(dir_norm > 0.0 && dir_norm.is_finite(), NullDirectionSnafu);

        let along_ray = AlongRay {
            field: self,
            direction: direction / dir_norm,
            potential,
        };

        let sol = NewtonRaphson::with_adaptor(cfg, along_ray)
            .context(EquipotentialSearchSnafu)?
            .execute()
            .context(EquipotentialSearchSnafu)?;

        let radius = sol.ensure_converged().context(EquipotentialSearchSnafu)?;
        if radius <= 0.0 {
            warn!("equipotential search converged behind the origin at {radius} m");
            return NonPositiveRadiusSnafu { radius }.fail();
        }
        debug!(
            "equipotential {potential:e} m^2/s^2 reached at {radius} m after {} iterations",
            sol.iterations
        );
        Ok(radius)
    }

    fn potential_rel(&self, rel: &Vector3<f64>) -> f64 {
        zonal::potential(
            &[rel.x, rel.y, rel.z],
            self.gravitational_parameter(),
            self.reference_radius(),
            &self.zonals(),
        )
    }

    fn acceleration_rel(&self, rel: &Vector3<f64>) -> Vector3<f64> {
        let accel = zonal::acceleration(
            &[rel.x, rel.y, rel.z],
            self.gravitational_parameter(),
            self.reference_radius(),
            &self.zonals(),
        );
        Vector3::new(accel[0], accel[1], accel[2])
    }
}

/// Potential offset along a ray from the origin of the field, as a function of the distance.
struct AlongRay<'a> {
    field: &'a SphericalHarmonicsGravityField,
    direction: Vector3<f64>,
    potential: f64,
}

impl RootFunction for AlongRay<'_> {
    fn compute_function(&self, x: f64) -> f64 {
        self.field.potential_rel(&(x * self.direction)) - self.potential
    }

    fn compute_first_derivative_function(&self, x: f64) -> f64 {
        self.field
            .acceleration_rel(&(x * self.direction))
            .dot(&self.direction)
    }
}

impl fmt::Display for SphericalHarmonicsGravityField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "spherical harmonics gravity field `{}`", self.name)?;
        writeln!(
            f,
            "\tgravitational parameter: {:e} m^3/s^2",
            self.gravitational_parameter()
        )?;
        writeln!(
            f,
            "\torigin: [{}, {}, {}] m",
            self.origin.x, self.origin.y, self.origin.z
        )?;
        writeln!(f, "\tdegree of expansion: {}", self.degree)?;
        writeln!(f, "\torder of expansion: {}", self.order)?;
        write!(f, "\treference radius: {} m", self.reference_radius())
    }
}
