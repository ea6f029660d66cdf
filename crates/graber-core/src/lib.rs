//! GRABER: momentum gradient descent driven by parameter-shift derivatives.
//!
//! This crate minimizes a scalar objective of a real parameter vector when
//! the gradient is only available through the parameter-shift rule, as is the
//! case for expectation values of parameterized quantum circuits.
//!
//! # Features
//!
//! - **Parameter-shift derivatives**: each partial derivative is estimated from
//!   two evaluations shifted by ±π/2
//! - **Sequential sweeps**: coordinates are updated one after another, each
//!   seeing the coordinates already moved in the same sweep
//! - **Momentum**: exponential blending of the new derivative with the
//!   coordinate's previous update
//! - **Warm-up schedule**: constant step length for `offset` iterations, then
//!   `1 / (it - offset)` decay
//! - **Windowed convergence**: stop once the objective agrees with the last
//!   `n` values within `tol`
//!
//! # Example
//!
//! ```
//! use graber_core::{Graber, GraberConfig, Optimizer};
//!
//! let optimizer = Graber::new(GraberConfig::default().with_momentum(0.0)).unwrap();
//! let result = optimizer
//!     .minimize(|x: &[f64]| x[0].sin(), vec![0.3])
//!     .unwrap();
//!
//! assert!(result.optimal_value < 0.3_f64.sin());
//! ```

pub mod config;
pub mod convergence;
pub mod error;
pub mod momentum;
pub mod optimizer;
pub mod schedule;
pub mod shift;

// Re-exports
pub use config::GraberConfig;
pub use convergence::ConvergenceDetector;
pub use error::{ConfigError, ConfigResult, OptimizeError};
pub use momentum::MomentumUpdater;
pub use optimizer::{Capabilities, Graber, OptimizationResult, Optimizer, SupportLevel};
pub use schedule::StepScheduler;
pub use shift::{SHIFT, parameter_shift};
