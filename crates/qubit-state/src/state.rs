//! The single-qubit state engine.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bloch::BlochVector;
use crate::error::{StateError, StateResult};
use crate::gate::Gate;
use crate::unitary::Unitary2x2;

/// Maximum allowed `| |alpha|^2 + |beta|^2 - 1 |` for a valid state.
pub const NORM_TOLERANCE: f64 = 1e-5;

/// What the engine does about floating-point drift after a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormPolicy {
    /// Rescale to unit norm after every gate application.
    #[default]
    Renormalize,
    /// Keep the raw product. Drift is only corrected once it would leave
    /// [`NORM_TOLERANCE`].
    Preserve,
}

/// A copied snapshot of the amplitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitudes {
    /// Amplitude of |0⟩.
    pub alpha: Complex64,
    /// Amplitude of |1⟩.
    pub beta: Complex64,
}

impl Amplitudes {
    /// The basis state |0⟩.
    pub const ZERO_STATE: Amplitudes = Amplitudes {
        alpha: Complex64::new(1.0, 0.0),
        beta: Complex64::new(0.0, 0.0),
    };

    /// Create a snapshot without validating it.
    pub const fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    /// `|alpha|^2 + |beta|^2`.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Signed deviation of the squared norm from 1.
    #[inline]
    pub fn deviation(&self) -> f64 {
        self.norm_sqr() - 1.0
    }

    /// Check the unit-norm invariant.
    pub fn validate(&self) -> StateResult<()> {
        let deviation = self.deviation();
        // NaN fails this comparison and is rejected as well.
        if deviation.abs() <= NORM_TOLERANCE {
            Ok(())
        } else {
            Err(StateError::InvalidState { deviation })
        }
    }

    /// Probabilities `(p0, p1)` of reading |0⟩ and |1⟩.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }

    /// Position on the Bloch sphere.
    pub fn bloch(&self) -> BlochVector {
        BlochVector::from_amplitudes(self.alpha, self.beta)
    }

    /// Render as `(a+bi)|0⟩ + (c+di)|1⟩` with two decimals.
    pub fn ket(&self) -> String {
        format!(
            "({:.2}{:+.2}i)|0⟩ + ({:.2}{:+.2}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }

    fn normalized(self) -> Self {
        let norm = self.norm_sqr().sqrt();
        if norm > 0.0 {
            Self::new(self.alpha / norm, self.beta / norm)
        } else {
            self
        }
    }
}

impl Default for Amplitudes {
    fn default() -> Self {
        Self::ZERO_STATE
    }
}

/// A normalized single-qubit state `alpha|0⟩ + beta|1⟩`.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitState {
    amps: Amplitudes,
    policy: NormPolicy,
}

impl QubitState {
    /// Create a state, rejecting amplitudes that are not unit-norm.
    pub fn new(alpha: Complex64, beta: Complex64) -> StateResult<Self> {
        let amps = Amplitudes::new(alpha, beta);
        amps.validate()?;
        Ok(Self {
            amps,
            policy: NormPolicy::default(),
        })
    }

    /// Set the drift policy.
    pub fn with_policy(mut self, policy: NormPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The drift policy in effect.
    pub fn norm_policy(&self) -> NormPolicy {
        self.policy
    }

    /// The current `(alpha, beta)` pair.
    #[inline]
    pub fn get_state(&self) -> (Complex64, Complex64) {
        (self.amps.alpha, self.amps.beta)
    }

    /// The current pair as a snapshot value.
    #[inline]
    pub fn amplitudes(&self) -> Amplitudes {
        self.amps
    }

    /// Return to |0⟩.
    pub fn reset_state(&mut self) {
        self.amps = Amplitudes::ZERO_STATE;
    }

    /// Replace the amplitudes. On error the previous state is kept.
    pub fn set_state(&mut self, alpha: Complex64, beta: Complex64) -> StateResult<()> {
        let amps = Amplitudes::new(alpha, beta);
        amps.validate()?;
        self.amps = amps;
        Ok(())
    }

    /// Apply `gate`, passing `parameter` to parameterized gates.
    ///
    /// On error the state is unchanged.
    pub fn apply_gate(&mut self, gate: Gate, parameter: Option<f64>) -> StateResult<()> {
        match gate.matrix(parameter)? {
            None => self.reset_state(),
            Some(m) => self.apply_matrix(&m),
        }
        debug!(gate = %gate, state = %self, "applied gate");
        Ok(())
    }

    /// Parse `name` and apply it. Unknown names leave the state unchanged.
    pub fn apply_named(&mut self, name: &str, parameter: Option<f64>) -> StateResult<Gate> {
        let gate: Gate = name.parse()?;
        self.apply_gate(gate, parameter)?;
        Ok(gate)
    }

    /// Multiply the amplitude row vector by `m`.
    ///
    /// `m` is assumed to be unitary; the result is checked against the drift
    /// policy but never rejected.
    pub fn apply_matrix(&mut self, m: &Unitary2x2) {
        let (alpha, beta) = m.apply_row(self.amps.alpha, self.amps.beta);
        let next = Amplitudes::new(alpha, beta);
        let deviation = next.deviation();

        self.amps = match self.policy {
            NormPolicy::Renormalize => next.normalized(),
            NormPolicy::Preserve if deviation.abs() > NORM_TOLERANCE => {
                warn!(deviation, "norm drift exceeded tolerance, renormalizing");
                next.normalized()
            }
            NormPolicy::Preserve => next,
        };
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self {
            amps: Amplitudes::ZERO_STATE,
            policy: NormPolicy::default(),
        }
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.amps.alpha, self.amps.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-9
    }

    fn assert_state(q: &QubitState, alpha: Complex64, beta: Complex64) {
        let (a, b) = q.get_state();
        assert!(approx_eq(a, alpha), "alpha = {a}, expected {alpha}");
        assert!(approx_eq(b, beta), "beta = {b}, expected {beta}");
    }

    #[test]
    fn test_default_state() {
        let q = QubitState::default();
        assert_eq!(q.get_state(), (c(1.0, 0.0), c(0.0, 0.0)));
        assert_eq!(q.norm_policy(), NormPolicy::Renormalize);
    }

    #[test]
    fn test_new_rejects_non_unit_norm() {
        let err = QubitState::new(c(1.0, 0.0), c(1.0, 0.0)).unwrap_err();
        match err {
            StateError::InvalidState { deviation } => assert!((deviation - 1.0).abs() < 1e-12),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_accepts_within_tolerance() {
        assert!(QubitState::new(c(1.0 + 1e-6, 0.0), c(0.0, 0.0)).is_ok());
        assert!(QubitState::new(c(0.0, 0.0), c(0.0, 0.0)).is_err());
        assert!(QubitState::new(c(f64::NAN, 0.0), c(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_set_state_is_atomic() {
        let mut q = QubitState::new(c(0.6, 0.0), c(0.8, 0.0)).unwrap();
        assert!(q.set_state(c(1.0, 0.0), c(1.0, 0.0)).is_err());
        assert_state(&q, c(0.6, 0.0), c(0.8, 0.0));

        q.set_state(c(0.0, 1.0), c(0.0, 0.0)).unwrap();
        assert_state(&q, c(0.0, 1.0), c(0.0, 0.0));
    }

    #[test]
    fn test_reset_idempotent() {
        let mut q = QubitState::new(c(0.6, 0.0), c(0.0, 0.8)).unwrap();
        q.reset_state();
        let once = q.get_state();
        q.reset_state();
        assert_eq!(q.get_state(), once);
        assert_eq!(once, (c(1.0, 0.0), c(0.0, 0.0)));
    }

    #[test]
    fn test_x_involution() {
        let mut q = QubitState::default();
        q.apply_gate(Gate::X, None).unwrap();
        assert_state(&q, c(0.0, 0.0), c(1.0, 0.0));
        q.apply_gate(Gate::X, None).unwrap();
        assert_state(&q, c(1.0, 0.0), c(0.0, 0.0));
    }

    #[test]
    fn test_hadamard_involution() {
        let mut q = QubitState::new(c(0.6, 0.0), c(0.0, 0.8)).unwrap();
        q.apply_gate(Gate::H, None).unwrap();
        q.apply_gate(Gate::H, None).unwrap();
        assert_state(&q, c(0.6, 0.0), c(0.0, 0.8));
    }

    #[test]
    fn test_hadamard_from_zero() {
        let mut q = QubitState::default();
        q.apply_gate(Gate::H, None).unwrap();
        assert_state(&q, c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0));
    }

    #[test]
    fn test_z_flips_beta_sign() {
        let mut q = QubitState::new(c(0.6, 0.0), c(0.8, 0.0)).unwrap();
        q.apply_gate(Gate::Z, None).unwrap();
        assert_state(&q, c(0.6, 0.0), c(-0.8, 0.0));
    }

    #[test]
    fn test_y_acts_on_row_vector() {
        // [1, 0] · [[0, -i], [i, 0]] = [0, -i]
        let mut q = QubitState::default();
        q.apply_gate(Gate::Y, None).unwrap();
        assert_state(&q, c(0.0, 0.0), c(0.0, -1.0));
    }

    #[test]
    fn test_phase_gates_on_one() {
        let mut q = QubitState::new(c(0.0, 0.0), c(1.0, 0.0)).unwrap();
        q.apply_gate(Gate::S, None).unwrap();
        assert_state(&q, c(0.0, 0.0), c(0.0, 1.0));

        let mut q = QubitState::new(c(0.0, 0.0), c(1.0, 0.0)).unwrap();
        q.apply_gate(Gate::T, None).unwrap();
        assert_state(&q, c(0.0, 0.0), c(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
    }

    #[test]
    fn test_rotation_with_parameter() {
        let mut q = QubitState::default();
        q.apply_gate(Gate::Ry, Some(PI)).unwrap();
        // [1, 0] · Ry(π) = [cos π/2, -sin π/2]
        assert_state(&q, c(0.0, 0.0), c(-1.0, 0.0));
    }

    #[test]
    fn test_reset_gate() {
        let mut q = QubitState::new(c(0.0, 0.0), c(0.0, 1.0)).unwrap();
        q.apply_gate(Gate::Reset, Some(3.0)).unwrap();
        assert_state(&q, c(1.0, 0.0), c(0.0, 0.0));
    }

    #[test]
    fn test_unknown_gate_leaves_state() {
        let mut q = QubitState::new(c(0.6, 0.0), c(0.8, 0.0)).unwrap();
        let err = q.apply_named("cnot", None).unwrap_err();
        assert_eq!(err, StateError::UnknownGate("cnot".into()));
        assert_state(&q, c(0.6, 0.0), c(0.8, 0.0));
    }

    #[test]
    fn test_missing_parameter_leaves_state() {
        let mut q = QubitState::default();
        assert!(q.apply_named("rx", None).is_err());
        assert_eq!(q.get_state(), (c(1.0, 0.0), c(0.0, 0.0)));
    }

    #[test]
    fn test_renormalize_bounds_drift() {
        let mut q = QubitState::default();
        for _ in 0..10_000 {
            q.apply_gate(Gate::H, None).unwrap();
            q.apply_gate(Gate::T, None).unwrap();
        }
        assert!(q.amplitudes().deviation().abs() < 1e-12);
    }

    #[test]
    fn test_preserve_keeps_invariant() {
        let mut q = QubitState::default().with_policy(NormPolicy::Preserve);
        for _ in 0..10_000 {
            q.apply_gate(Gate::H, None).unwrap();
            q.apply_gate(Gate::T, None).unwrap();
        }
        assert!(q.amplitudes().validate().is_ok());
    }

    #[test]
    fn test_display_and_ket() {
        let q = QubitState::new(c(0.6, 0.0), c(0.0, -0.8)).unwrap();
        assert_eq!(q.amplitudes().ket(), "(0.60+0.00i)|0⟩ + (0.00-0.80i)|1⟩");
        assert_eq!(q.to_string(), "[0.60+0.00i, 0.00-0.80i]");
    }

    #[test]
    fn test_probabilities() {
        let q = QubitState::new(c(0.6, 0.0), c(0.0, 0.8)).unwrap();
        let (p0, p1) = q.amplitudes().probabilities();
        assert!((p0 - 0.36).abs() < 1e-12);
        assert!((p1 - 0.64).abs() < 1e-12);
    }
}
