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

//! Celestial body constants.
//!
//! Gravitational parameters are from the JPL list of astrodynamic constants (2012), except for the Earth (IERS 2010 conventions).
//! Most planetary values are derived from the solar gravitational parameter and the Sun/planet mass ratio.
//!
//! These constants are not meant for precise orbit determination: retrieve up-to-date values from the IERS or the IAU for that.

/// Earth equatorial radius, in meters (IERS, 2010).
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6378136.6;

/// Earth flattening factor, i.e. the inverse flattening (IERS, 2010).
pub const EARTH_FLATTENING_FACTOR: f64 = 298.25642;

/// Earth normalized J2 (C20) coefficient of the EGM2008 model.
pub const EARTH_GEODESY_NORMALIZED_J2: f64 = -0.484165143790815E-03;

/// Solar gravitational parameter, in m^3 s^-2 (JPL, 2012).
pub const SUN_GRAVITATIONAL_PARAMETER: f64 = 1.32712440018e20;

/// Mercury, from the Sun/Mercury mass ratio, in m^3 s^-2.
pub const MERCURY_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 6023600.0;

/// Venus, from the Sun/Venus mass ratio, in m^3 s^-2.
pub const VENUS_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 408523.71;

/// Earth gravitational parameter, in m^3 s^-2 (IERS, 2010).
pub const EARTH_GRAVITATIONAL_PARAMETER: f64 = 3.986004418E14;

/// Moon, from the Sun/Earth-Moon-system mass ratio and the Earth/Moon mass ratio, in m^3 s^-2.
pub const MOON_GRAVITATIONAL_PARAMETER: f64 =
    SUN_GRAVITATIONAL_PARAMETER / (328900.56 * (1.0 + 81.30059));

/// Mars, from the Sun/Mars mass ratio, in m^3 s^-2.
pub const MARS_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 3098708.0;

/// Jupiter, from the Sun/Jupiter mass ratio, in m^3 s^-2.
pub const JUPITER_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 1047.3486;

/// Saturn, from the Sun/Saturn mass ratio, in m^3 s^-2.
pub const SATURN_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 3497.898;

/// Uranus, from the Sun/Uranus mass ratio, in m^3 s^-2.
pub const URANUS_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 22902.98;

/// Neptune, from the Sun/Neptune mass ratio, in m^3 s^-2.
pub const NEPTUNE_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 19412.24;

/// Pluto, from the Sun/Pluto mass ratio, in m^3 s^-2.
pub const PLUTO_GRAVITATIONAL_PARAMETER: f64 = SUN_GRAVITATIONAL_PARAMETER / 1.35e8;
