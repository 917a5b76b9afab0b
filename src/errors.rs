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

use crate::cosmic::CosmicError;
use crate::gravity::GravityError;
use crate::io::ConfigError;
use crate::roots::RootFindingError;
use snafu::prelude::*;

/// Crate level error, wrapping the error of each module.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TellusError {
    #[snafu(display("root finding failed: {source}"))]
    RootFinding { source: RootFindingError },
    #[snafu(display("gravity field error: {source}"))]
    GravityField { source: GravityError },
    #[snafu(display("configuration error: {source}"))]
    Config { source: ConfigError },
    #[snafu(display("constants table error: {source}"))]
    Cosmic { source: CosmicError },
}

impl From<RootFindingError> for TellusError {
    fn from(source: RootFindingError) -> Self {
        Self::RootFinding { source }
    }
}

impl From<GravityError> for TellusError {
    fn from(source: GravityError) -> Self {
        Self::GravityField { source }
    }
}

impl From<ConfigError> for TellusError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}

impl From<CosmicError> for TellusError {
    fn from(source: CosmicError) -> Self {
        Self::Cosmic { source }
    }
}
