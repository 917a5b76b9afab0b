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

use super::{GravityError, InvalidParameterSnafu, UnknownProfileSnafu};
use crate::cosmic::CelestialBody;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;
use std::str::FromStr;

/// Highest zonal degree stored in a parameter set (J4).
pub const MAX_ZONAL_DEGREE: u16 = 4;

/// Gravity fields with predefined parameters.
///
/// Reference: Vallado, D. A., Crawford, P., Hujsak, R., & Kelso, T. Revisiting Spacetrack Report #3: Rev 1,
/// AIAA/AAS Astrodynamics Specialist Conference, Keystone, CO, 2006 (tables 2 and 3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedProfile {
    #[serde(rename = "earthWorldGeodeticSystem72", alias = "wgs72")]
    EarthWorldGeodeticSystem72,
    #[serde(rename = "earthWorldGeodeticSystem84", alias = "wgs84")]
    EarthWorldGeodeticSystem84,
}

impl PredefinedProfile {
    pub const ALL: [Self; 2] = [
        Self::EarthWorldGeodeticSystem72,
        Self::EarthWorldGeodeticSystem84,
    ];

    pub const fn name(&self) -> &'static str {
        match *self {
            Self::EarthWorldGeodeticSystem72 => "earthWorldGeodeticSystem72",
            Self::EarthWorldGeodeticSystem84 => "earthWorldGeodeticSystem84",
        }
    }

    /// Returns the parameters of this profile.
    pub const fn parameters(&self) -> GravitationalParameterSet {
        match *self {
            // Table 2 of Vallado et al. (2006)
            Self::EarthWorldGeodeticSystem72 => GravitationalParameterSet {
                gravitational_parameter: 398600.8e9,
                reference_radius: 6378.135e3,
                j2: 0.001082616,
                j3: -0.00000253881,
                j4: -0.00000165597,
            },
            // Table 3 of Vallado et al. (2006)
            Self::EarthWorldGeodeticSystem84 => GravitationalParameterSet {
                gravitational_parameter: 398600.4418e9,
                reference_radius: 6378.137e3,
                j2: 0.00108262998905,
                j3: -0.00000253215306,
                j4: -0.00000161098761,
            },
        }
    }
}

impl fmt::Display for PredefinedProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PredefinedProfile {
    type Err = GravityError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "earthworldgeodeticsystem72" | "wgs72" | "wgs-72" => {
                Ok(Self::EarthWorldGeodeticSystem72)
            }
            "earthworldgeodeticsystem84" | "wgs84" | "wgs-84" => {
                Ok(Self::EarthWorldGeodeticSystem84)
            }
            _ => UnknownProfileSnafu { name }.fail(),
        }
    }
}

/// Physical constants of a body needed to evaluate its gravity field.
///
/// The set is immutable: a field replaces its parameter set wholesale, never field by field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravitationalParameterSet {
    gravitational_parameter: f64,
    reference_radius: f64,
    j2: f64,
    j3: f64,
    j4: f64,
}

impl GravitationalParameterSet {
    /// Builds a parameter set, ensuring that the gravitational parameter and the reference radius are positive.
    pub fn new(
        gravitational_parameter: f64,
        reference_radius: f64,
        j2: f64,
        j3: f64,
        j4: f64,
    ) -> Result<Self, GravityError> {
        ensure!(
            gravitational_parameter > 0.0 && gravitational_parameter.is_finite(),
            InvalidParameterSnafu {
                param: "gravitational parameter",
                value: gravitational_parameter
            }
        );
        ensure!(
            reference_radius > 0.0 && reference_radius.is_finite(),
            InvalidParameterSnafu {
                param: "reference radius",
                value: reference_radius
            }
        );
        for (param, value) in [("J2", j2), ("J3", j3), ("J4", j4)] {
            ensure!(value.is_finite(), InvalidParameterSnafu { param, value });
        }

        Ok(Self {
            gravitational_parameter,
            reference_radius,
            j2,
            j3,
            j4,
        })
    }

    /// Parameter set without any zonal harmonic.
    pub fn point_mass(
        gravitational_parameter: f64,
        reference_radius: f64,
    ) -> Result<Self, GravityError> {
        Self::new(gravitational_parameter, reference_radius, 0.0, 0.0, 0.0)
    }

    /// Point mass parameter set using the tabulated gravitational parameter of the provided body.
    pub fn from_body(body: CelestialBody, reference_radius: f64) -> Result<Self, GravityError> {
        Self::point_mass(body.gm(), reference_radius)
    }

    /// Gravitational parameter in m^3 s^-2
    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    /// Reference radius in meters
    pub fn reference_radius(&self) -> f64 {
        self.reference_radius
    }

    pub fn j2(&self) -> f64 {
        self.j2
    }

    pub fn j3(&self) -> f64 {
        self.j3
    }

    pub fn j4(&self) -> f64 {
        self.j4
    }

    /// Returns the unnormalized zonal coefficient J_n, zero for any degree which is not stored.
    pub fn zonal(&self, degree: u16) -> f64 {
        match degree {
            2 => self.j2,
            3 => self.j3,
            4 => self.j4,
            _ => 0.0,
        }
    }

    /// Returns the zonal coefficients indexed by their degree, from 0 up to and including `max_degree`.
    pub(crate) fn zonals_up_to(&self, max_degree: u16) -> Vec<f64> {
        (0..=max_degree).map(|n| self.zonal(n)).collect()
    }
}

impl From<PredefinedProfile> for GravitationalParameterSet {
    fn from(profile: PredefinedProfile) -> Self {
        profile.parameters()
    }
}
