//! The GRABER optimization loop.
//!
//! Each iteration takes one step length from the schedule and sweeps the
//! coordinates in ascending order. Coordinate `j` is differentiated at the
//! point left by coordinates `0..j` of the same sweep, so a sweep is a
//! Gauss-Seidel pass rather than a batch gradient step. The objective is
//! then evaluated once at the new point, the best point is updated, and the
//! convergence window is consulted before the next sweep.
//!
//! A run with `it` iterations over `n` parameters calls the objective
//! exactly `1 + it * (2n + 1)` times.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GraberConfig;
use crate::convergence::ConvergenceDetector;
use crate::error::{ConfigError, ConfigResult, OptimizeError};
use crate::momentum::MomentumUpdater;
use crate::schedule::StepScheduler;
use crate::shift::parameter_shift;

/// How an optimizer treats one of the optional inputs of
/// [`Optimizer::optimize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLevel {
    /// Passing the input is an error.
    NotSupported,
    /// The input is accepted and discarded.
    Ignored,
    /// The input is used when present.
    Supported,
    /// The input must be present.
    Required,
}

/// Static description of the inputs an optimizer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub gradient: SupportLevel,
    pub bounds: SupportLevel,
    pub initial_point: SupportLevel,
}

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Parameters with the lowest objective value seen.
    pub optimal_params: Vec<f64>,
    /// Lowest objective value seen.
    pub optimal_value: f64,
    /// Number of completed sweeps.
    pub num_iterations: usize,
    /// Number of objective evaluations.
    pub num_evaluations: usize,
    /// Objective value at the start and after every sweep.
    pub history: Vec<f64>,
    /// Whether the run stopped on the convergence test rather than `maxiter`.
    pub converged: bool,
}

impl OptimizationResult {
    /// `(best parameters, best value, iterations)`.
    pub fn into_tuple(self) -> (Vec<f64>, f64, usize) {
        (self.optimal_params, self.optimal_value, self.num_iterations)
    }
}

/// Trait for classical optimizers.
pub trait Optimizer {
    /// Which optional inputs the optimizer uses.
    fn capabilities(&self) -> Capabilities;

    /// Minimize `objective` over `num_vars` parameters.
    ///
    /// Errors returned by `objective` abort the run and are passed through
    /// in [`OptimizeError::Evaluator`].
    fn optimize<F, E>(
        &self,
        num_vars: usize,
        objective: F,
        gradient: Option<&dyn Fn(&[f64]) -> Vec<f64>>,
        bounds: Option<&[(Option<f64>, Option<f64>)]>,
        initial_point: Option<&[f64]>,
    ) -> Result<OptimizationResult, OptimizeError<E>>
    where
        F: FnMut(&[f64]) -> Result<f64, E>;

    /// Minimize an infallible objective starting from `initial_params`.
    fn minimize<F>(
        &self,
        mut objective: F,
        initial_params: Vec<f64>,
    ) -> Result<OptimizationResult, OptimizeError<Infallible>>
    where
        F: FnMut(&[f64]) -> f64,
    {
        self.optimize(
            initial_params.len(),
            |x: &[f64]| Ok(objective(x)),
            None,
            None,
            Some(initial_params.as_slice()),
        )
    }
}

/// Gradient descent with parameter-shift derivatives, momentum and a
/// warm-up step schedule.
#[derive(Debug, Clone)]
pub struct Graber {
    config: GraberConfig,
    schedule: StepScheduler,
    updater: MomentumUpdater,
}

impl Graber {
    /// Inputs consumed by GRABER: only the initial point.
    pub const CAPABILITIES: Capabilities = Capabilities {
        gradient: SupportLevel::Ignored,
        bounds: SupportLevel::Ignored,
        initial_point: SupportLevel::Required,
    };

    /// Build an optimizer, rejecting a momentum outside `[0, 1)` or an
    /// empty convergence window.
    pub fn new(config: GraberConfig) -> ConfigResult<Self> {
        if !(0.0..1.0).contains(&config.momentum) {
            return Err(ConfigError::InvalidMomentum {
                value: config.momentum,
            });
        }
        if config.convergence_window == 0 {
            return Err(ConfigError::InvalidWindow {
                value: config.convergence_window,
            });
        }

        Ok(Self {
            schedule: StepScheduler::new(config.initial_eta, config.offset),
            updater: MomentumUpdater::new(config.momentum),
            config,
        })
    }

    /// The configuration this optimizer was built with.
    pub fn config(&self) -> &GraberConfig {
        &self.config
    }

    fn report(&self, iteration: usize, energy: f64) {
        if self.config.disp {
            info!(iteration, energy, "GRABER iteration");
        } else {
            debug!(iteration, energy, "GRABER iteration");
        }
    }

    fn run<F, E>(
        &self,
        initial_point: &[f64],
        mut objective: F,
    ) -> Result<OptimizationResult, OptimizeError<E>>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        let num_vars = initial_point.len();
        let mut num_evaluations = 0;
        let mut evaluate = |x: &[f64]| {
            num_evaluations += 1;
            objective(x)
        };

        let mut params = initial_point.to_vec();
        let mut momentum = vec![0.0; num_vars];
        let mut detector =
            ConvergenceDetector::new(self.config.tol, self.config.convergence_window);
        let mut it = 0;

        let mut objval = evaluate(&params).map_err(OptimizeError::Evaluator)?;
        self.report(it, objval);

        let mut history = vec![objval];
        let mut best_value = objval;
        let mut best_params = params.clone();
        let mut converged = false;

        while it < self.config.maxiter {
            if detector.converged(objval) {
                converged = true;
                break;
            }

            let eta = self.schedule.step_length(it);
            for j in 0..num_vars {
                let derivative =
                    parameter_shift(j, &params, &mut evaluate).map_err(OptimizeError::Evaluator)?;
                let step = self.updater.update(eta, j, &mut params, derivative, &momentum);
                momentum[j] = step;
            }

            objval = evaluate(&params).map_err(OptimizeError::Evaluator)?;
            history.push(objval);

            if objval < best_value {
                best_value = objval;
                best_params.copy_from_slice(&params);
            }

            it += 1;
            self.report(it, objval);
        }

        debug!(
            iterations = it,
            evaluations = num_evaluations,
            converged,
            best = best_value,
            "GRABER finished"
        );

        Ok(OptimizationResult {
            optimal_params: best_params,
            optimal_value: best_value,
            num_iterations: it,
            num_evaluations,
            history,
            converged,
        })
    }
}

impl Optimizer for Graber {
    fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
    }

    fn optimize<F, E>(
        &self,
        num_vars: usize,
        objective: F,
        gradient: Option<&dyn Fn(&[f64]) -> Vec<f64>>,
        bounds: Option<&[(Option<f64>, Option<f64>)]>,
        initial_point: Option<&[f64]>,
    ) -> Result<OptimizationResult, OptimizeError<E>>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        if gradient.is_some() {
            debug!("gradient function ignored, derivatives use the parameter-shift rule");
        }
        if bounds.is_some() {
            debug!("variable bounds ignored");
        }

        let initial_point = initial_point.ok_or(OptimizeError::MissingInitialPoint)?;
        if initial_point.len() != num_vars {
            return Err(OptimizeError::DimensionMismatch {
                expected: num_vars,
                found: initial_point.len(),
            });
        }

        self.run(initial_point, objective)
    }
}
