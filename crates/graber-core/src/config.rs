//! Run configuration for the GRABER optimizer.
//!
//! A [`GraberConfig`] is plain data: it can be built in code with the
//! `with_*` methods or deserialized from YAML/JSON. Nothing here validates;
//! [`crate::Graber::new`] does that once, at construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Default maximum number of iterations.
pub const DEFAULT_MAXITER: usize = 1000;

/// Default number of warm-up iterations before the step length decays.
pub const DEFAULT_OFFSET: f64 = 10.0;

/// Default warm-up step length.
pub const DEFAULT_INITIAL_ETA: f64 = 1.0;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default momentum coefficient.
pub const DEFAULT_MOMENTUM: f64 = 0.25;

/// Default number of past objective values checked for convergence.
pub const DEFAULT_CONVERGENCE_WINDOW: usize = 2;

/// Optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraberConfig {
    /// Maximum number of sweeps.
    pub maxiter: usize,
    /// Iterations run at `initial_eta` before the step length decays.
    pub offset: f64,
    /// Step length during warm-up.
    pub initial_eta: f64,
    /// Convergence tolerance on the objective.
    pub tol: f64,
    /// Report every iteration at `info` level.
    pub disp: bool,
    /// Weight of the previous update, in `[0, 1)`.
    pub momentum: f64,
    /// Number of past objective values that must agree within `tol`.
    pub convergence_window: usize,
}

impl Default for GraberConfig {
    fn default() -> Self {
        Self {
            maxiter: DEFAULT_MAXITER,
            offset: DEFAULT_OFFSET,
            initial_eta: DEFAULT_INITIAL_ETA,
            tol: DEFAULT_TOLERANCE,
            disp: false,
            momentum: DEFAULT_MOMENTUM,
            convergence_window: DEFAULT_CONVERGENCE_WINDOW,
        }
    }
}

impl GraberConfig {
    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set the warm-up length.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the warm-up step length.
    pub fn with_initial_eta(mut self, eta: f64) -> Self {
        self.initial_eta = eta;
        self
    }

    /// Set the convergence tolerance. `None` selects [`DEFAULT_TOLERANCE`].
    pub fn with_tol(mut self, tol: Option<f64>) -> Self {
        self.tol = tol.unwrap_or(DEFAULT_TOLERANCE);
        self
    }

    /// Enable per-iteration progress reports.
    pub fn with_disp(mut self, disp: bool) -> Self {
        self.disp = disp;
        self
    }

    /// Set the momentum coefficient.
    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    /// Set the convergence window.
    pub fn with_convergence_window(mut self, window: usize) -> Self {
        self.convergence_window = window;
        self
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse a JSON document. Missing keys take their defaults.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a config file, as JSON when the extension is `.json` and as YAML
    /// otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_defaults() {
        let config = GraberConfig::default();
        assert_eq!(config.maxiter, 1000);
        assert_eq!(config.offset, 10.0);
        assert_eq!(config.initial_eta, 1.0);
        assert_eq!(config.tol, 1e-6);
        assert!(!config.disp);
        assert_eq!(config.momentum, 0.25);
        assert_eq!(config.convergence_window, 2);
    }

    #[test]
    fn test_tol_none_falls_back() {
        let config = GraberConfig::default().with_tol(Some(1e-3)).with_tol(None);
        assert_eq!(config.tol, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_yaml_partial() {
        let config = GraberConfig::from_yaml_str("maxiter: 50\nmomentum: 0.5\n").unwrap();
        assert_eq!(config.maxiter, 50);
        assert_eq!(config.momentum, 0.5);
        assert_eq!(config.offset, DEFAULT_OFFSET);
    }

    #[test]
    fn test_json_partial() {
        let config = GraberConfig::from_json_str(r#"{"tol": 0.01, "disp": true}"#).unwrap();
        assert_eq!(config.tol, 0.01);
        assert!(config.disp);
        assert_eq!(config.maxiter, DEFAULT_MAXITER);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GraberConfig::from_yaml_str("learning_rate: 0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GraberConfig::from_path("/nonexistent/graber.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
