//! Statevector evaluation of a hardware-efficient Ry/CX ansatz.
//!
//! Layout for `n` qubits: one Ry layer, a CX ladder, a second Ry layer, so
//! `2n` angles. Every angle enters through `Ry(θ) = exp(-iθY/2)`, which
//! makes the energy a sinusoid in each angle and the ±π/2 shift exact.

use num_complex::Complex64;

use crate::hamiltonian::PauliHamiltonian;

/// Number of angles the ansatz consumes for `n_qubits`.
pub fn num_parameters(n_qubits: usize) -> usize {
    2 * n_qubits
}

/// Prepare the ansatz state from `|0...0>`.
///
/// # Panics
///
/// Panics if `params.len() != num_parameters(n_qubits)`.
pub fn prepare_state(n_qubits: usize, params: &[f64]) -> Vec<Complex64> {
    assert_eq!(
        params.len(),
        num_parameters(n_qubits),
        "ansatz parameter count"
    );

    let mut state = vec![Complex64::new(0.0, 0.0); 1 << n_qubits];
    state[0] = Complex64::new(1.0, 0.0);

    for q in 0..n_qubits {
        apply_ry(&mut state, q, params[q]);
    }
    for q in 1..n_qubits {
        apply_cx(&mut state, q - 1, q);
    }
    for q in 0..n_qubits {
        apply_ry(&mut state, q, params[n_qubits + q]);
    }

    state
}

/// Energy of `hamiltonian` in the ansatz state.
pub fn energy(hamiltonian: &PauliHamiltonian, params: &[f64]) -> f64 {
    let state = prepare_state(hamiltonian.num_qubits(), params);
    hamiltonian.expectation_value(&state)
}

fn apply_ry(state: &mut [Complex64], q: usize, theta: f64) {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    for i in 0..state.len() {
        if (i >> q) & 1 == 0 {
            let j = i | (1 << q);
            let a = state[i];
            let b = state[j];
            state[i] = a * c - b * s;
            state[j] = a * s + b * c;
        }
    }
}

fn apply_cx(state: &mut [Complex64], control: usize, target: usize) {
    for i in 0..state.len() {
        if (i >> control) & 1 == 1 && (i >> target) & 1 == 0 {
            state.swap(i, i | (1 << target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::h2_hamiltonian;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_state_is_normalized() {
        let state = prepare_state(2, &[0.3, -1.2, 2.0, 0.7]);
        let norm: f64 = state.iter().map(|a| a.norm_sqr()).sum();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ry_pi_flips() {
        let state = prepare_state(1, &[PI, 0.0]);
        assert_abs_diff_eq!(state[0].norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state[1].norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cx_entangles() {
        // Ry(π/2) on q0 then CX gives the Bell state (|00> + |11>)/sqrt(2)
        let state = prepare_state(2, &[PI / 2.0, 0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(state[0].re, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(state[3].re, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(state[1].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_h2_energy_at_zero() {
        assert_abs_diff_eq!(energy(&h2_hamiltonian(), &[0.0; 4]), -1.0635, epsilon = 1e-12);
    }
}
