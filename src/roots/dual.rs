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

use super::RootFunction;
use crate::linalg::U2;
use hyperdual::OHyperdual;

/// Dual number: the real part and the partial with respect to the single input.
pub type Dual = OHyperdual<f64, U2>;

/// Adaptor which only requires the function, written over dual numbers: the first derivative is computed by
/// automatic differentiation.
///
/// ```
/// use tellus::roots::{Dual, DualFunction, NewtonRaphson, RootFinderConfig};
/// use hyperdual::Float;
///
/// // Dottie number, the fixed point of the cosine
/// let dottie = DualFunction::new(|x: Dual| x.cos() - x);
/// let cfg = RootFinderConfig::builder().initial_guess(1.0).build();
/// let sol = NewtonRaphson::with_adaptor(cfg, dottie).unwrap().execute().unwrap();
/// assert!((sol.root - 0.739_085_133_215_160_6).abs() < 1e-12);
/// ```
pub struct DualFunction<F>
where
    F: Fn(Dual) -> Dual,
{
    func: F,
}

impl<F> DualFunction<F>
where
    F: Fn(Dual) -> Dual,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// Evaluates the function on the dual number seeded at `x`.
    pub fn eval(&self, x: f64) -> Dual {
        (self.func)(OHyperdual::from_slice(&[x, 1.0]))
    }
}

impl<F> RootFunction for DualFunction<F>
where
    F: Fn(Dual) -> Dual,
{
    fn compute_function(&self, x: f64) -> f64 {
        self.eval(x).real()
    }

    fn compute_first_derivative_function(&self, x: f64) -> f64 {
        self.eval(x)[1]
    }
}
