//! Windowed convergence test on the objective value.

use std::collections::VecDeque;

/// Reports convergence once the objective agrees with each of the last
/// `window` values to within `tol`.
///
/// The history is seeded on the first check with `window` copies of
/// `objval + 2 * tol`, so the first check never converges. Every check then
/// drops the oldest entry and appends the current value, whatever the
/// outcome.
#[derive(Debug, Clone)]
pub struct ConvergenceDetector {
    tol: f64,
    window: usize,
    history: Option<VecDeque<f64>>,
}

impl ConvergenceDetector {
    /// Create an unseeded detector.
    pub fn new(tol: f64, window: usize) -> Self {
        Self {
            tol,
            window,
            history: None,
        }
    }

    /// Check `objval` against the stored history, then record it.
    pub fn converged(&mut self, objval: f64) -> bool {
        let tol = self.tol;
        let window = self.window;
        let history = self
            .history
            .get_or_insert_with(|| std::iter::repeat_n(objval + 2.0 * tol, window).collect());

        let converged = history.iter().all(|prev| (objval - prev).abs() < tol);

        if history.pop_front().is_some() {
            history.push_back(objval);
        }

        converged
    }

    /// Stored objective values, oldest first. `None` before the first check.
    pub fn history(&self) -> Option<&VecDeque<f64>> {
        self.history.as_ref()
    }

    /// Forget the history; the next check seeds it again.
    pub fn reset(&mut self) {
        self.history = None;
    }
}
