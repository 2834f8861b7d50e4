//! Data Transfer Objects for the dashboard API.
//!
//! These types bridge engine snapshots to JSON request and response bodies.

use serde::{Deserialize, Serialize};

use qubit_state::{Amplitudes, BlochVector, Complex64, Gate, NormPolicy};

// ============================================================================
// Amplitudes
// ============================================================================

/// The four real components of the amplitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudesResponse {
    /// Real part of alpha.
    pub alpha_real: f64,
    /// Imaginary part of alpha.
    pub alpha_imag: f64,
    /// Real part of beta.
    pub beta_real: f64,
    /// Imaginary part of beta.
    pub beta_imag: f64,
}

impl AmplitudesResponse {
    /// Reassemble the complex pair `(alpha, beta)`.
    pub fn to_pair(&self) -> (Complex64, Complex64) {
        (
            Complex64::new(self.alpha_real, self.alpha_imag),
            Complex64::new(self.beta_real, self.beta_imag),
        )
    }
}

impl From<Amplitudes> for AmplitudesResponse {
    fn from(amps: Amplitudes) -> Self {
        Self {
            alpha_real: amps.alpha.re,
            alpha_imag: amps.alpha.im,
            beta_real: amps.beta.re,
            beta_imag: amps.beta.im,
        }
    }
}

// ============================================================================
// Gate application
// ============================================================================

/// Request to apply a gate.
#[derive(Debug, Deserialize)]
pub struct GateRequest {
    /// Gate name (e.g., "h", "x", "reset", "rx").
    pub gate_name: String,
    /// Angle in radians for parameterized gates. Integers are accepted;
    /// fixed gates ignore it.
    #[serde(default)]
    pub phase: Option<f64>,
}

/// A supported gate.
#[derive(Debug, Serialize)]
pub struct GateInfo {
    /// Canonical gate name.
    pub name: &'static str,
    /// Whether `phase` is required.
    pub parameterized: bool,
}

impl From<Gate> for GateInfo {
    fn from(gate: Gate) -> Self {
        Self {
            name: gate.name(),
            parameterized: gate.is_parameterized(),
        }
    }
}

// ============================================================================
// Full state view
// ============================================================================

/// Measurement probabilities of the current state.
#[derive(Debug, Serialize)]
pub struct ProbabilitiesView {
    /// Probability of |0⟩.
    pub p0: f64,
    /// Probability of |1⟩.
    pub p1: f64,
}

/// Bloch sphere angles in radians.
#[derive(Debug, Serialize)]
pub struct BlochAnglesView {
    /// Polar angle θ ∈ [0, π].
    pub theta: f64,
    /// Azimuth φ ∈ [0, 2π).
    pub phi: f64,
}

/// Amplitudes plus the quantities derived from them.
#[derive(Debug, Serialize)]
pub struct StateView {
    /// The four amplitude components.
    pub amplitudes: AmplitudesResponse,
    /// Measurement probabilities.
    pub probabilities: ProbabilitiesView,
    /// Cartesian Bloch vector.
    pub bloch: BlochVector,
    /// Spherical form of `bloch`.
    pub bloch_angles: BlochAnglesView,
    /// `(a+bi)|0⟩ + (c+di)|1⟩` with two decimals.
    pub ket: String,
    /// Drift policy of the qubit.
    pub norm_policy: NormPolicy,
}

impl StateView {
    /// Build the view from a snapshot.
    pub fn new(amps: Amplitudes, norm_policy: NormPolicy) -> Self {
        let (p0, p1) = amps.probabilities();
        let bloch = amps.bloch();
        let (theta, phi) = bloch.angles();
        Self {
            amplitudes: amps.into(),
            probabilities: ProbabilitiesView { p0, p1 },
            bloch,
            bloch_angles: BlochAnglesView { theta, phi },
            ket: amps.ket(),
            norm_policy,
        }
    }
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_request_phase_is_optional() {
        let req: GateRequest = serde_json::from_str(r#"{"gate_name": "h"}"#).unwrap();
        assert_eq!(req.gate_name, "h");
        assert_eq!(req.phase, None);
    }

    #[test]
    fn test_gate_request_accepts_integer_phase() {
        let req: GateRequest = serde_json::from_str(r#"{"gate_name": "rz", "phase": 2}"#).unwrap();
        assert_eq!(req.phase, Some(2.0));
        let req: GateRequest = serde_json::from_str(r#"{"gate_name": "rz", "phase": 0.5}"#).unwrap();
        assert_eq!(req.phase, Some(0.5));
    }

    #[test]
    fn test_amplitudes_field_names() {
        let amps = Amplitudes::new(Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8));
        let value = serde_json::to_value(AmplitudesResponse::from(amps)).unwrap();
        assert_eq!(value["alpha_real"], 0.6);
        assert_eq!(value["alpha_imag"], 0.0);
        assert_eq!(value["beta_real"], 0.0);
        assert_eq!(value["beta_imag"], 0.8);
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_state_view() {
        let view = StateView::new(Amplitudes::ZERO_STATE, NormPolicy::Renormalize);
        assert_eq!(view.probabilities.p0, 1.0);
        assert_eq!(view.bloch.z, 1.0);
        assert_eq!(view.bloch_angles.theta, 0.0);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["norm_policy"], "renormalize");
    }
}
