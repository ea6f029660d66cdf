//! Parameter-shift derivative estimate.

use std::f64::consts::FRAC_PI_2;

use tracing::trace;

/// Offset applied to a single coordinate on each side of the current point.
pub const SHIFT: f64 = FRAC_PI_2;

/// Estimate the partial derivative of `objective` along `index`.
///
/// Evaluates the objective exactly twice, at `params` with coordinate
/// `index` moved by `+π/2` and by `-π/2`, and returns half the difference.
/// Both evaluations see independent copies; `params` is left untouched.
/// For objectives of the form `a·sin(θ + b) + c` this is the exact
/// derivative.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `params`.
pub fn parameter_shift<F, E>(index: usize, params: &[f64], objective: &mut F) -> Result<f64, E>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
{
    let mut plus = params.to_vec();
    plus[index] += SHIFT;

    let mut minus = params.to_vec();
    minus[index] -= SHIFT;

    let f_plus = objective(&plus)?;
    let f_minus = objective(&minus)?;
    let derivative = 0.5 * (f_plus - f_minus);

    trace!(index, f_plus, f_minus, derivative, "parameter shift");
    Ok(derivative)
}
