//! Property-based tests for the unit-norm invariant.
//!
//! Random normalized states are pushed through random gate sequences; the
//! squared norm must stay within `NORM_TOLERANCE` of 1 under both drift
//! policies.

use proptest::prelude::*;
use qubit_state::{Complex64, Gate, NORM_TOLERANCE, NormPolicy, QubitState, StateError};
use std::f64::consts::PI;

/// A normalized state built from Bloch-sphere angles.
fn arb_state() -> impl Strategy<Value = (Complex64, Complex64)> {
    (0.0..=PI, 0.0..(2.0 * PI), 0.0..(2.0 * PI)).prop_map(|(theta, phi, global)| {
        let alpha = Complex64::from_polar((theta / 2.0).cos(), global);
        let beta = Complex64::from_polar((theta / 2.0).sin(), global + phi);
        (alpha, beta)
    })
}

/// A gate together with the parameter to apply it with.
fn arb_gate() -> impl Strategy<Value = (Gate, Option<f64>)> {
    prop_oneof![
        proptest::sample::select(Gate::ALL.to_vec())
            .prop_filter("fixed gates only", |g| !g.is_parameterized())
            .prop_map(|g| (g, None)),
        (
            proptest::sample::select(vec![Gate::Rx, Gate::Ry, Gate::Rz, Gate::P]),
            -10.0..10.0_f64,
        )
            .prop_map(|(g, theta)| (g, Some(theta))),
    ]
}

fn arb_policy() -> impl Strategy<Value = NormPolicy> {
    prop_oneof![Just(NormPolicy::Renormalize), Just(NormPolicy::Preserve)]
}

proptest! {
    /// Any sequence of gates keeps the state normalized.
    #[test]
    fn test_gate_sequences_preserve_norm(
        (alpha, beta) in arb_state(),
        gates in prop::collection::vec(arb_gate(), 0..200),
        policy in arb_policy(),
    ) {
        let mut q = QubitState::new(alpha, beta).expect("generated state is normalized")
            .with_policy(policy);
        for (gate, parameter) in gates {
            q.apply_gate(gate, parameter).expect("valid gate application");
            let deviation = q.amplitudes().deviation();
            prop_assert!(deviation.abs() <= NORM_TOLERANCE,
                "norm drifted by {} after {}", deviation, gate);
        }
    }

    /// Applying a self-inverse gate twice restores the state.
    #[test]
    fn test_self_inverse_gates(
        (alpha, beta) in arb_state(),
        gate in proptest::sample::select(vec![Gate::X, Gate::Y, Gate::Z, Gate::H]),
    ) {
        let mut q = QubitState::new(alpha, beta).expect("generated state is normalized");
        q.apply_gate(gate, None).unwrap();
        q.apply_gate(gate, None).unwrap();
        let (a, b) = q.get_state();
        prop_assert!((a - alpha).norm() < 1e-9);
        prop_assert!((b - beta).norm() < 1e-9);
    }

    /// Scaling a valid state away from unit norm is always rejected, and the
    /// reported deviation matches the scale.
    #[test]
    fn test_scaled_states_rejected(
        (alpha, beta) in arb_state(),
        scale in prop_oneof![0.0..0.99_f64, 1.01..5.0_f64],
    ) {
        let err = QubitState::new(alpha * scale, beta * scale).unwrap_err();
        match err {
            StateError::InvalidState { deviation } => {
                prop_assert!((deviation - (scale * scale - 1.0)).abs() < 1e-9);
            }
            other => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
