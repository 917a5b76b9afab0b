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

use super::constants::*;
use super::{BodyNotFoundSnafu, CosmicError};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The celestial bodies for which a gravitational parameter is tabulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    /// All of the tabulated bodies, from the Sun outward.
    pub const ALL: [Self; 11] = [
        Self::Sun,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Moon,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    /// Returns the gravitational parameter of this body in m^3 s^-2.
    pub const fn gm(&self) -> f64 {
        match *self {
            Self::Sun => SUN_GRAVITATIONAL_PARAMETER,
            Self::Mercury => MERCURY_GRAVITATIONAL_PARAMETER,
            Self::Venus => VENUS_GRAVITATIONAL_PARAMETER,
            Self::Earth => EARTH_GRAVITATIONAL_PARAMETER,
            Self::Moon => MOON_GRAVITATIONAL_PARAMETER,
            Self::Mars => MARS_GRAVITATIONAL_PARAMETER,
            Self::Jupiter => JUPITER_GRAVITATIONAL_PARAMETER,
            Self::Saturn => SATURN_GRAVITATIONAL_PARAMETER,
            Self::Uranus => URANUS_GRAVITATIONAL_PARAMETER,
            Self::Neptune => NEPTUNE_GRAVITATIONAL_PARAMETER,
            Self::Pluto => PLUTO_GRAVITATIONAL_PARAMETER,
        }
    }

    /// Returns the human name
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = CosmicError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "sun" | "sol" => Ok(Self::Sun),
            "mercury" => Ok(Self::Mercury),
            "venus" => Ok(Self::Venus),
            "earth" => Ok(Self::Earth),
            "moon" | "luna" => Ok(Self::Moon),
            "mars" => Ok(Self::Mars),
            "jupiter" => Ok(Self::Jupiter),
            "saturn" => Ok(Self::Saturn),
            "uranus" => Ok(Self::Uranus),
            "neptune" => Ok(Self::Neptune),
            "pluto" => Ok(Self::Pluto),
            _ => BodyNotFoundSnafu { name }.fail(),
        }
    }
}

impl TryFrom<String> for CelestialBody {
    type Error = CosmicError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_str(&name)
    }
}
