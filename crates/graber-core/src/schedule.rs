//! Step-length schedule.

/// Flat warm-up followed by harmonic decay.
///
/// For `iteration <= offset` the step length is `initial_eta`; afterwards it
/// is `1 / (iteration - offset)`. The decay branch does not scale by
/// `initial_eta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepScheduler {
    initial_eta: f64,
    offset: f64,
}

impl StepScheduler {
    /// Create a schedule.
    pub fn new(initial_eta: f64, offset: f64) -> Self {
        Self { initial_eta, offset }
    }

    /// Step length for the given zero-based iteration.
    pub fn step_length(&self, iteration: usize) -> f64 {
        let it = iteration as f64;
        if it <= self.offset {
            self.initial_eta
        } else {
            1.0 / (it - self.offset)
        }
    }
}
