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

/*! # tellus

Gravity field evaluation, Newton-Raphson root finding and celestial body constants for astrodynamics.

The two numerical workhorses are the [`roots::NewtonRaphson`] solver, which accepts free functions, an adaptor object or an
automatically differentiated function, and the [`gravity::SphericalHarmonicsGravityField`], which evaluates the potential,
its gradient and its gradient tensor around a body described by a [`gravity::GravitationalParameterSet`].
*/

/// Celestial body constants (gravitational parameters, Earth geodetic constants).
pub mod cosmic;

/// Generic scalar root finding.
pub mod roots;

/// Spherical harmonics gravity fields and their predefined profiles.
pub mod gravity;

/// Configuration loading (YAML) for the solvers and the gravity fields.
pub mod io;

/// Utility functions shared by different modules.
pub mod utils;

mod errors;
/// Functions which may fail will return an error (tellus does not panic on bad input).
pub use self::errors::TellusError;

#[macro_use]
extern crate log;
extern crate nalgebra as na;

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub mod prelude {
    pub use crate::cosmic::CelestialBody;
    pub use crate::gravity::{
        GravitationalParameterSet, GravityError, PredefinedProfile, SphericalHarmonicsGravityField,
    };
    pub use crate::io::{ConfigError, ConfigRepr, Configurable};
    pub use crate::roots::{
        DualFunction, NewtonRaphson, RootFinderConfig, RootFindingError, RootFunction,
        RootSolution, SolverStatus,
    };
    pub use crate::TellusError;
}
