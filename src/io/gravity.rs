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

use super::{ConfigError, ConfigRepr, Configurable};
use crate::gravity::{
    GravitationalParameterSet, PredefinedProfile, SphericalHarmonicsGravityField,
    MAX_ZONAL_DEGREE,
};
use crate::linalg::Vector3;
use serde_derive::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Name given to fields built from explicit values when the configuration does not name them.
const CUSTOM_FIELD_NAME: &str = "custom";

/// Configuration of a [`SphericalHarmonicsGravityField`].
///
/// Either a predefined `profile` or both the `gravitational_parameter` and the `reference_radius` must be set, never both.
///
/// ```yaml
/// profile: wgs84
/// origin: [0.0, 0.0, 0.0]
/// degree: 2
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct GravityFieldCfg {
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PredefinedProfile>,
    /// Gravitational parameter in m^3 s^-2
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravitational_parameter: Option<f64>,
    /// Reference radius in meters
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_radius: Option<f64>,
    /// Unnormalized zonal coefficients, starting at J2
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zonals: Vec<f64>,
    /// Origin of the field in meters
    #[builder(default)]
    #[serde(default)]
    pub origin: [f64; 3],
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<u16>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u16>,
}

impl ConfigRepr for GravityFieldCfg {}

impl GravityFieldCfg {
    fn explicit_parameters(&self) -> Result<GravitationalParameterSet, ConfigError> {
        let (gm, radius) = match (self.gravitational_parameter, self.reference_radius) {
            (Some(gm), Some(radius)) => (gm, radius),
            _ => {
                return Err(ConfigError::InvalidConfig(
                    "a gravity field needs either a profile or both a gravitational parameter and a reference radius"
                        .to_string(),
                ))
            }
        };

        let max_zonals = usize::from(MAX_ZONAL_DEGREE) - 1;
        if self.zonals.len() > max_zonals {
            return Err(ConfigError::InvalidConfig(format!(
                "at most {max_zonals} zonal coefficients (J2 to J{MAX_ZONAL_DEGREE}) are supported, got {}",
                self.zonals.len()
            )));
        }

        let zonal = |n: usize| self.zonals.get(n).copied().unwrap_or(0.0);

        GravitationalParameterSet::new(gm, radius, zonal(0), zonal(1), zonal(2))
            .map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }
}

impl Configurable for SphericalHarmonicsGravityField {
    type IntermediateRepr = GravityFieldCfg;

    fn from_config(cfg: Self::IntermediateRepr) -> Result<Self, ConfigError>
    where
        Self: Sized,
    {
        let explicit = cfg.gravitational_parameter.is_some()
            || cfg.reference_radius.is_some()
            || !cfg.zonals.is_empty();

        let mut field = match cfg.profile {
            Some(profile) => {
                if explicit {
                    return Err(ConfigError::InvalidConfig(format!(
                        "gravity field uses the {profile} profile but also sets explicit parameters"
                    )));
                }
                Self::from_profile(profile)
            }
            None => Self::new(CUSTOM_FIELD_NAME, cfg.explicit_parameters()?),
        };

        if let Some(name) = cfg.name {
            field = field.with_name(name);
        }

        let degree = cfg.degree.unwrap_or(field.degree());
        let order = cfg.order.unwrap_or(0);

        field
            .with_origin(Vector3::from(cfg.origin))
            .with_expansion(degree, order)
            .map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }

    fn to_config(&self) -> Result<Self::IntermediateRepr, ConfigError> {
        let origin = self.origin();
        let mut cfg = GravityFieldCfg {
            origin: [origin.x, origin.y, origin.z],
            degree: Some(self.degree()),
            order: Some(self.order()),
            ..Default::default()
        };

        match self.profile() {
            Some(profile) => {
                cfg.profile = Some(profile);
                if self.name() != profile.name() {
                    cfg.name = Some(self.name().to_string());
                }
            }
            None => {
                let params = self.parameters();
                cfg.name = Some(self.name().to_string());
                cfg.gravitational_parameter = Some(params.gravitational_parameter());
                cfg.reference_radius = Some(params.reference_radius());
                cfg.zonals = vec![params.j2(), params.j3(), params.j4()];
            }
        }

        Ok(cfg)
    }
}
