//! Bloch sphere coordinates for a single-qubit state.
//!
//! A pure state `|ψ⟩ = α|0⟩ + β|1⟩` maps to the unit vector
//!
//! ```text
//! x = 2·Re(α*·β)    y = 2·Im(α*·β)    z = |α|² − |β|²
//! ```
//!
//! with |0⟩ at the north pole (`z = 1`) and |1⟩ at the south pole.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A point on the Bloch sphere in Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1).
    pub x: f64,
    /// Y coordinate (-1 to 1).
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩.
    pub z: f64,
}

impl BlochVector {
    /// Compute the Bloch vector of the state `alpha|0⟩ + beta|1⟩`.
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Self {
        let coherence = alpha.conj() * beta;
        Self {
            x: 2.0 * coherence.re,
            y: 2.0 * coherence.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Polar angle θ ∈ [0, π] and azimuth φ ∈ [0, 2π).
    pub fn angles(&self) -> (f64, f64) {
        let theta = self.z.clamp(-1.0, 1.0).acos();
        let mut phi = self.y.atan2(self.x);
        if phi < 0.0 {
            phi += 2.0 * PI;
        }
        (theta, phi)
    }
}
