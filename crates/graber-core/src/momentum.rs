//! Momentum-weighted coordinate update.

/// Applies `m_new = eta * (d * (1 - m) + m_prev * m)` and `x -= m_new`
/// to one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumUpdater {
    coefficient: f64,
}

impl MomentumUpdater {
    /// Create an updater. The coefficient is assumed to lie in `[0, 1)`;
    /// [`crate::Graber::new`] enforces that.
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Momentum coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Move `params[index]` downhill and return the value to store in
    /// `momentum[index]`.
    pub fn update(
        &self,
        eta: f64,
        index: usize,
        params: &mut [f64],
        derivative: f64,
        momentum: &[f64],
    ) -> f64 {
        let m = self.coefficient;
        let step = eta * (derivative * (1.0 - m) + momentum[index] * m);
        params[index] -= step;
        step
    }
}
