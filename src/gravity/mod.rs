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

use crate::roots::RootFindingError;
use snafu::Snafu;

mod profile;
pub use profile::{GravitationalParameterSet, PredefinedProfile, MAX_ZONAL_DEGREE};

mod zonal;

/// Spherical harmonics gravity field, with its potential, gradient and gradient tensor.
mod field;
pub use field::SphericalHarmonicsGravityField;

/// Gravity field errors.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GravityError {
    #[snafu(display("predefined spherical harmonics gravity field `{name}` does not exist"))]
    UnknownProfile { name: String },
    #[snafu(display("{param} must be strictly positive and finite, got {value}"))]
    InvalidParameter { param: &'static str, value: f64 },
    #[snafu(display(
        "invalid expansion: degree {degree} and order {order} (degree must be at most {max_degree} and order at most the degree)"
    ))]
    InvalidExpansion {
        degree: u16,
        order: u16,
        max_degree: u16,
    },
    #[snafu(display(
        "position [{x}, {y}, {z}] coincides with the origin of the gravity field"
    ))]
    SingularPosition { x: f64, y: f64, z: f64 },
    #[snafu(display("direction of the equipotential search must be non-zero"))]
    NullDirection,
    #[snafu(display("equipotential search converged to a non-positive radius {radius} m"))]
    NonPositiveRadius { radius: f64 },
    #[snafu(display("equipotential search failed: {source}"))]
    EquipotentialSearch { source: RootFindingError },
}
