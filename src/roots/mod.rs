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

use snafu::Snafu;
use std::fmt;

/// Uses a [Newton Raphson](https://en.wikipedia.org/wiki/Newton%27s_method) iteration on a scalar function and its first derivative.
mod newton_raphson;
pub use newton_raphson::{NewtonRaphson, RootFinderConfig, RootSolution, SolverStatus};

/// Adaptor computing the first derivative with hyperdual numbers.
mod dual;
pub use dual::{Dual, DualFunction};

/// An adaptor object which exposes a scalar function and its first derivative to the root finder.
pub trait RootFunction {
    /// Evaluates the function whose root is sought.
    fn compute_function(&self, x: f64) -> f64;
    /// Evaluates the first derivative of the function with respect to its input.
    fn compute_first_derivative_function(&self, x: f64) -> f64;
}

impl<T: RootFunction + ?Sized> RootFunction for &T {
    fn compute_function(&self, x: f64) -> f64 {
        (**self).compute_function(x)
    }

    fn compute_first_derivative_function(&self, x: f64) -> f64 {
        (**self).compute_first_derivative_function(x)
    }
}

type ScalarFn<'a> = Box<dyn Fn(f64) -> f64 + 'a>;

/// The source of the function and derivative evaluations of a root finder.
///
/// Exactly one source is installed at any time: installing a new one replaces the previous one.
pub enum FunctionSource<'a> {
    /// A pair of free functions (or closures): the function and its first derivative.
    Pair {
        function: ScalarFn<'a>,
        derivative: ScalarFn<'a>,
    },
    /// An object exposing both evaluations.
    Adaptor(Box<dyn RootFunction + 'a>),
}

impl<'a> FunctionSource<'a> {
    /// Builds a source from a pair of functions.
    pub fn pair<F, D>(function: F, derivative: D) -> Self
    where
        F: Fn(f64) -> f64 + 'a,
        D: Fn(f64) -> f64 + 'a,
    {
        Self::Pair {
            function: Box::new(function),
            derivative: Box::new(derivative),
        }
    }

    /// Builds a source from an adaptor object.
    pub fn adaptor<A: RootFunction + 'a>(adaptor: A) -> Self {
        Self::Adaptor(Box::new(adaptor))
    }

    /// Returns the function and its derivative evaluated at `x`.
    pub fn evaluate(&self, x: f64) -> (f64, f64) {
        match self {
            Self::Pair {
                function,
                derivative,
            } => (function(x), derivative(x)),
            Self::Adaptor(adaptor) => (
                adaptor.compute_function(x),
                adaptor.compute_first_derivative_function(x),
            ),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }

    pub fn is_adaptor(&self) -> bool {
        matches!(self, Self::Adaptor(_))
    }
}

impl fmt::Debug for FunctionSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pair { .. } => write!(f, "FunctionSource::Pair"),
            Self::Adaptor(_) => write!(f, "FunctionSource::Adaptor"),
        }
    }
}

/// Root finding errors.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RootFindingError {
    #[snafu(display("no function source set, provide a function pair or an adaptor"))]
    NoFunctionSource,
    #[snafu(display("tolerance must be strictly positive and finite, got {tolerance}"))]
    InvalidTolerance { tolerance: f64 },
    #[snafu(display("the maximum number of iterations must be at least one"))]
    InvalidIterationLimit,
    #[snafu(display("derivative is zero at x = {value} (iteration {iteration})"))]
    ZeroDerivative { iteration: usize, value: f64 },
    #[snafu(display(
        "non-finite evaluation at x = {value} (iteration {iteration}): f = {function}, f' = {derivative}"
    ))]
    NonFiniteEvaluation {
        iteration: usize,
        value: f64,
        function: f64,
        derivative: f64,
    },
    #[snafu(display("Newton-Raphson did not converge after {max_iterations} iterations"))]
    NonConvergence { max_iterations: usize },
}
