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

//! Zonal expansion of the potential, generic over the scalar so that the same code serves the plain evaluation
//! and the hyperdual evaluation of the gradient tensor.
//!
//! Potential convention: U = μ/r (1 - Σ_{n≥2} J_n (R/r)^n P_n(z/r)), acceleration = ∇U.

use hyperdual::Float;

/// Legendre polynomials P_n(u) and their first derivatives P'_n(u), for n in 0..=max_degree.
pub(crate) fn legendre<T>(u: T, max_degree: usize) -> (Vec<T>, Vec<T>)
where
    T: Float + From<f64>,
{
    let zero: T = 0.0_f64.into();
    let one: T = 1.0_f64.into();

    let mut p_n = Vec::with_capacity(max_degree + 1);
    let mut dp_n = Vec::with_capacity(max_degree + 1);
    p_n.push(one);
    dp_n.push(zero);
    if max_degree == 0 {
        return (p_n, dp_n);
    }
    p_n.push(u);
    dp_n.push(one);

    for n in 1..max_degree {
        let nf64 = n as f64;
        let two_n_p1: T = (2.0 * nf64 + 1.0).into();
        let n_t: T = nf64.into();
        let n_p1: T = (nf64 + 1.0).into();
        // Bonnet's recursion, and P'_{n+1} = P'_{n-1} + (2n+1) P_n which stays regular at the poles
        p_n.push((two_n_p1 * u * p_n[n] - n_t * p_n[n - 1]) / n_p1);
        dp_n.push(dp_n[n - 1] + two_n_p1 * p_n[n]);
    }

    (p_n, dp_n)
}

/// Potential at the relative position `r`, with `zonals[n]` the J_n coefficient.
pub(crate) fn potential<T>(r: &[T; 3], gm: f64, radius: f64, zonals: &[f64]) -> T
where
    T: Float + From<f64>,
{
    let rmag = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
    let gm_t: T = gm.into();
    let one: T = 1.0_f64.into();

    let max_degree = zonals.len().saturating_sub(1);
    if max_degree < 2 {
        return gm_t / rmag;
    }

    let u = r[2] / rmag;
    let rho = <T as From<f64>>::from(radius) / rmag;
    let (p_n, _) = legendre(u, max_degree);

    let mut sum = <T as From<f64>>::from(0.0);
    for (n, j_n) in zonals.iter().enumerate().skip(2) {
        if *j_n == 0.0 {
            continue;
        }
        sum = sum + <T as From<f64>>::from(*j_n) * rho.powi(n as i32) * p_n[n];
    }

    gm_t / rmag * (one - sum)
}

/// Acceleration (gradient of the potential) at the relative position `r`, with `zonals[n]` the J_n coefficient.
pub(crate) fn acceleration<T>(r: &[T; 3], gm: f64, radius: f64, zonals: &[f64]) -> [T; 3]
where
    T: Float + From<f64>,
{
    let r2 = r[0] * r[0] + r[1] * r[1] + r[2] * r[2];
    let rmag = r2.sqrt();
    let gm_t: T = gm.into();

    // Point mass
    let r3 = r2 * rmag;
    let mut accel = [-gm_t * r[0] / r3, -gm_t * r[1] / r3, -gm_t * r[2] / r3];

    let max_degree = zonals.len().saturating_sub(1);
    if max_degree < 2 {
        return accel;
    }

    let zero: T = 0.0_f64.into();
    let one: T = 1.0_f64.into();
    let u = r[2] / rmag;
    let rho = <T as From<f64>>::from(radius) / rmag;
    let (p_n, dp_n) = legendre(u, max_degree);

    for (n, j_n) in zonals.iter().enumerate().skip(2) {
        if *j_n == 0.0 {
            continue;
        }
        let n_p1: T = (n as f64 + 1.0).into();
        // dU_n/dx_i = -μ J_n R^n / r^(n+2) [ -(n+1) P_n x_i/r + P'_n (δ_iz - u x_i/r) ]
        let factor = -gm_t * <T as From<f64>>::from(*j_n) * rho.powi(n as i32) / r2;
        for (i, accel_i) in accel.iter_mut().enumerate() {
            let unit_i = r[i] / rmag;
            let delta_iz = if i == 2 { one } else { zero };
            let term = -n_p1 * p_n[n] * unit_i + dp_n[n] * (delta_iz - u * unit_i);
            *accel_i = *accel_i + factor * term;
        }
    }

    accel
}
