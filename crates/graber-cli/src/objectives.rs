//! Built-in benchmark objectives.

use clap::ValueEnum;

use crate::ansatz;
use crate::hamiltonian::h2_hamiltonian;

/// Objective functions selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Objective {
    /// Sum of squares.
    Quadratic,
    /// Sum of sines.
    Sine,
    /// Ring of coupled angles with a sine field.
    Ring,
    /// Two-qubit H2 energy of a Ry/CX ansatz.
    H2,
}

impl Objective {
    pub const ALL: [Objective; 4] = [
        Objective::Quadratic,
        Objective::Sine,
        Objective::Ring,
        Objective::H2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Objective::Quadratic => "quadratic",
            Objective::Sine => "sine",
            Objective::Ring => "ring",
            Objective::H2 => "h2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Objective::Quadratic => "f(x) = sum x_i^2",
            Objective::Sine => "f(x) = sum sin(x_i)",
            Objective::Ring => "f(x) = sum cos(x_i - x_(i+1)) + 0.5 sum sin(x_i), periodic",
            Objective::H2 => "H2 (STO-3G, 2 qubits) energy, Ry-CX-Ry ansatz",
        }
    }

    /// Fixed number of parameters, if the objective has one.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Objective::H2 => Some(ansatz::num_parameters(2)),
            _ => None,
        }
    }

    pub fn default_initial(&self) -> Vec<f64> {
        match self {
            Objective::Quadratic => vec![5.0],
            Objective::Sine => vec![0.3],
            Objective::Ring => vec![0.1, 0.7, -0.4, 1.2],
            Objective::H2 => vec![0.5, -0.3, 0.2, 0.1],
        }
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            Objective::Quadratic => x.iter().map(|v| v * v).sum(),
            Objective::Sine => x.iter().map(|v| v.sin()).sum(),
            Objective::Ring => {
                let n = x.len();
                let coupling: f64 = (0..n).map(|i| (x[i] - x[(i + 1) % n]).cos()).sum();
                let field: f64 = x.iter().map(|v| v.sin()).sum();
                coupling + 0.5 * field
            }
            Objective::H2 => ansatz::energy(&h2_hamiltonian(), x),
        }
    }
}
