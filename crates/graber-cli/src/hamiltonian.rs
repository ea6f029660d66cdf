//! Pauli-sum Hamiltonians.

use num_complex::Complex64;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    X,
    Y,
    Z,
}

/// A weighted Pauli string, `coefficient * P_q0 P_q1 ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliTerm {
    pub coefficient: f64,
    pub operators: Vec<(usize, Pauli)>,
}

impl PauliTerm {
    pub fn new(coefficient: f64, operators: Vec<(usize, Pauli)>) -> Self {
        Self {
            coefficient,
            operators,
        }
    }

    pub fn identity(coefficient: f64) -> Self {
        Self::new(coefficient, Vec::new())
    }

    pub fn z(coefficient: f64, q: usize) -> Self {
        Self::new(coefficient, vec![(q, Pauli::Z)])
    }

    pub fn zz(coefficient: f64, q0: usize, q1: usize) -> Self {
        Self::new(coefficient, vec![(q0, Pauli::Z), (q1, Pauli::Z)])
    }

    pub fn xx(coefficient: f64, q0: usize, q1: usize) -> Self {
        Self::new(coefficient, vec![(q0, Pauli::X), (q1, Pauli::X)])
    }

    pub fn yy(coefficient: f64, q0: usize, q1: usize) -> Self {
        Self::new(coefficient, vec![(q0, Pauli::Y), (q1, Pauli::Y)])
    }
}

/// Sum of Pauli terms.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliHamiltonian {
    pub terms: Vec<PauliTerm>,
}

impl PauliHamiltonian {
    pub fn new(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    /// One more than the highest qubit index any term acts on.
    pub fn num_qubits(&self) -> usize {
        self.terms
            .iter()
            .flat_map(|t| t.operators.iter().map(|(q, _)| q + 1))
            .max()
            .unwrap_or(0)
    }

    /// `<psi|H|psi>` for a normalized statevector with qubit 0 as the least
    /// significant bit of the basis index.
    pub fn expectation_value(&self, statevector: &[Complex64]) -> f64 {
        let mut energy = 0.0;

        for term in &self.terms {
            let mut term_value = Complex64::new(0.0, 0.0);
            for (i, &amplitude) in statevector.iter().enumerate() {
                let (j, phase) = apply_pauli_string(i, &term.operators);
                term_value += amplitude.conj() * phase * statevector[j];
            }
            energy += term.coefficient * term_value.re;
        }

        energy
    }
}

/// Apply a Pauli string to basis state `index`, returning the new index and
/// the accumulated phase.
fn apply_pauli_string(index: usize, operators: &[(usize, Pauli)]) -> (usize, Complex64) {
    let mut new_index = index;
    let mut phase = Complex64::new(1.0, 0.0);

    for &(qubit, pauli) in operators {
        let bit = (index >> qubit) & 1;

        match pauli {
            Pauli::X => new_index ^= 1 << qubit,
            Pauli::Y => {
                new_index ^= 1 << qubit;
                phase *= if bit == 0 {
                    Complex64::new(0.0, 1.0)
                } else {
                    Complex64::new(0.0, -1.0)
                };
            }
            Pauli::Z => {
                if bit == 1 {
                    phase = -phase;
                }
            }
        }
    }

    (new_index, phase)
}

/// H2 at 0.735 Å in the STO-3G basis, two-qubit reduced form.
///
/// H = g0 I + g1 Z0 + g2 Z1 + g3 Z0Z1 + g4 X0X1 + g5 Y0Y1
pub fn h2_hamiltonian() -> PauliHamiltonian {
    PauliHamiltonian::new(vec![
        PauliTerm::identity(-1.0523),
        PauliTerm::z(0.3979, 0),
        PauliTerm::z(-0.3979, 1),
        PauliTerm::zz(-0.0112, 0, 1),
        PauliTerm::xx(0.1809, 0, 1),
        PauliTerm::yy(0.1809, 0, 1),
    ])
}
