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

use super::{
    FunctionSource, InvalidIterationLimitSnafu, InvalidToleranceSnafu, NoFunctionSourceSnafu,
    NonConvergenceSnafu, NonFiniteEvaluationSnafu, RootFindingError, RootFunction,
    ZeroDerivativeSnafu,
};
use crate::io::ConfigRepr;
use serde_derive::{Deserialize, Serialize};
use snafu::{ensure, OptionExt};
use std::fmt;
use typed_builder::TypedBuilder;

const DEFAULT_TOLERANCE: f64 = 1e-12;
const DEFAULT_MAX_ITERATIONS: usize = 100;

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

/// Numerical settings of a single root finding attempt.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct RootFinderConfig {
    /// Starting point of the iteration
    #[builder(default)]
    #[serde(default)]
    pub initial_guess: f64,
    /// Convergence threshold on the difference between two successive iterates
    #[builder(default = DEFAULT_TOLERANCE)]
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Maximum number of Newton steps before declaring non-convergence
    #[builder(default = DEFAULT_MAX_ITERATIONS)]
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Set to true to keep every iterate in the returned solution
    #[builder(default)]
    #[serde(default)]
    pub record_iterates: bool,
}

impl RootFinderConfig {
    /// Checks that the tolerance and the iteration bound can be used by the solver.
    pub fn validate(&self) -> Result<(), RootFindingError> {
        ensure!(
            self.tolerance > 0.0 && self.tolerance.is_finite(),
            InvalidToleranceSnafu {
                tolerance: self.tolerance
            }
        );
        ensure!(self.max_iterations > 0, InvalidIterationLimitSnafu);
        Ok(())
    }
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            record_iterates: false,
        }
    }
}

impl ConfigRepr for RootFinderConfig {}

/// Outcome of a root finding attempt which did not hit a numerical failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolverStatus {
    Converged,
    /// The iteration bound was reached before the tolerance was satisfied: the root is the sentinel and is meaningless.
    NonConvergent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RootSolution {
    /// Accepted root, or the `-0.0` sentinel if the solver did not converge
    pub root: f64,
    /// Number of Newton steps taken
    pub iterations: usize,
    pub status: SolverStatus,
    /// Successive iterates, only populated if requested in the configuration
    pub iterates: Vec<f64>,
}

impl RootSolution {
    pub fn is_converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }

    /// Returns the root if the solver converged, and a non-convergence error otherwise.
    pub fn ensure_converged(&self) -> Result<f64, RootFindingError> {
        ensure!(
            self.is_converged(),
            NonConvergenceSnafu {
                max_iterations: self.iterations
            }
        );
        Ok(self.root)
    }
}

/// Newton-Raphson root finder: `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
///
/// The solver is configured with a [`RootFinderConfig`] and exactly one [`FunctionSource`], then executed.
/// It may be reconfigured and executed again as many times as needed.
///
/// ```
/// use tellus::roots::{NewtonRaphson, RootFinderConfig};
///
/// let cfg = RootFinderConfig::builder()
///     .initial_guess(1.0)
///     .tolerance(1e-9)
///     .build();
///
/// let mut solver = NewtonRaphson::new(cfg).unwrap();
/// solver.set_functions(|x| x * x - 2.0, |x| 2.0 * x);
/// let sol = solver.execute().unwrap();
/// assert!(sol.is_converged());
/// assert!((sol.root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct NewtonRaphson<'a> {
    cfg: RootFinderConfig,
    source: Option<FunctionSource<'a>>,
    current_value: f64,
    next_value: f64,
}

impl<'a> NewtonRaphson<'a> {
    /// Initializes a solver without any function source.
    pub fn new(cfg: RootFinderConfig) -> Result<Self, RootFindingError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            source: None,
            current_value: 0.0,
            next_value: 0.0,
        })
    }

    /// Initializes a solver from the provided adaptor.
    pub fn with_adaptor<A: RootFunction + 'a>(
        cfg: RootFinderConfig,
        adaptor: A,
    ) -> Result<Self, RootFindingError> {
        let mut me = Self::new(cfg)?;
        me.set_adaptor(adaptor);
        Ok(me)
    }

    /// Replaces the numerical settings, keeping the current function source.
    pub fn configure(&mut self, cfg: RootFinderConfig) -> Result<(), RootFindingError> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(())
    }

    pub fn set_initial_guess(&mut self, initial_guess: f64) {
        self.cfg.initial_guess = initial_guess;
    }

    /// Installs a pair of functions, replacing any previously installed source.
    pub fn set_functions<F, D>(&mut self, function: F, derivative: D)
    where
        F: Fn(f64) -> f64 + 'a,
        D: Fn(f64) -> f64 + 'a,
    {
        self.source = Some(FunctionSource::pair(function, derivative));
    }

    /// Installs an adaptor, replacing (and thereby clearing) any previously installed functions.
    pub fn set_adaptor<A: RootFunction + 'a>(&mut self, adaptor: A) {
        self.source = Some(FunctionSource::adaptor(adaptor));
    }

    /// Installs an already built function source.
    pub fn set_source(&mut self, source: FunctionSource<'a>) {
        self.source = Some(source);
    }

    pub fn source(&self) -> Option<&FunctionSource<'a>> {
        self.source.as_ref()
    }

    pub fn config(&self) -> &RootFinderConfig {
        &self.cfg
    }

    /// Last iterate from which a step was taken.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Last computed iterate, i.e. the root if the last execution converged.
    pub fn next_value(&self) -> f64 {
        self.next_value
    }

    pub fn computed_root(&self) -> f64 {
        self.next_value
    }

    /// Runs the iteration from the initial guess.
    ///
    /// Non-convergence is not an error: both iterates are reset to `-0.0`, a warning is logged, and the
    /// returned solution is flagged [`SolverStatus::NonConvergent`].
    /// A zero or non-finite evaluation stops the iteration and is returned as an error.
    pub fn execute(&mut self) -> Result<RootSolution, RootFindingError> {
        let source = self.source.as_ref().context(NoFunctionSourceSnafu)?;
        let max_iterations = self.cfg.max_iterations;
        let mut iterates = Vec::new();

        self.next_value = self.cfg.initial_guess;

        for iteration in 0..max_iterations {
            self.current_value = self.next_value;

            let (f_eval, d_eval) = source.evaluate(self.current_value);

            if d_eval == 0.0 {
                error!(
                    "Newton-Raphson: zero derivative at x = {} (iteration {iteration})",
                    self.current_value
                );
                return ZeroDerivativeSnafu {
                    iteration,
                    value: self.current_value,
                }
                .fail();
            }

            if !(f_eval.is_finite() && d_eval.is_finite()) {
                error!(
                    "Newton-Raphson: non-finite evaluation at x = {} (iteration {iteration}): f(x) = {f_eval}, f'(x) = {d_eval}",
                    self.current_value
                );
                return NonFiniteEvaluationSnafu {
                    iteration,
                    value: self.current_value,
                    function: f_eval,
                    derivative: d_eval,
                }
                .fail();
            }

            self.next_value = self.current_value - f_eval / d_eval;
            trace!(
                "Newton-Raphson #{iteration}: x = {:e}\tf(x) = {f_eval:e}\tf'(x) = {d_eval:e}",
                self.next_value
            );

            if self.cfg.record_iterates {
                iterates.push(self.next_value);
            }

            if (self.next_value - self.current_value).abs() <= self.cfg.tolerance {
                debug!(
                    "Newton-Raphson converged to {} after {} iterations",
                    self.next_value,
                    iteration + 1
                );
                return Ok(RootSolution {
                    root: self.next_value,
                    iterations: iteration + 1,
                    status: SolverStatus::Converged,
                    iterates,
                });
            }
        }

        self.current_value = -0.0;
        self.next_value = -0.0;
        warn!("Newton-Raphson did not converge after {max_iterations} iterations");

        Ok(RootSolution {
            root: self.next_value,
            iterations: max_iterations,
            status: SolverStatus::NonConvergent,
            iterates,
        })
    }
}

impl fmt::Display for NewtonRaphson<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Newton-Raphson root finder")?;
        writeln!(
            f,
            "\tmaximum number of iterations: {}",
            self.cfg.max_iterations
        )?;
        writeln!(f, "\ttolerance: {:e}", self.cfg.tolerance)?;
        writeln!(f, "\tinitial guess: {}", self.cfg.initial_guess)?;
        write!(f, "\tcomputed root: {}", self.computed_root())
    }
}
