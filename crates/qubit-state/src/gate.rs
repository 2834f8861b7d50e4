//! Single-qubit gate kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StateError, StateResult};
use crate::unitary::Unitary2x2;

/// The closed set of operations that can be applied to a qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Return to |0⟩. Not a unitary.
    Reset,

    // Fixed gates
    /// Identity gate.
    #[serde(rename = "id", alias = "i")]
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Parameterized gates; the angle is supplied at application time.
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// Phase gate.
    P,
}

impl Gate {
    /// Every gate, in display order.
    pub const ALL: [Gate; 14] = [
        Gate::Reset,
        Gate::I,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::Sdg,
        Gate::T,
        Gate::Tdg,
        Gate::Rx,
        Gate::Ry,
        Gate::Rz,
        Gate::P,
    ];

    /// Get the canonical name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Reset => "reset",
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::Rx => "rx",
            Gate::Ry => "ry",
            Gate::Rz => "rz",
            Gate::P => "p",
        }
    }

    /// Whether the gate needs an angle parameter.
    #[inline]
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Gate::Rx | Gate::Ry | Gate::Rz | Gate::P)
    }

    /// Build the matrix for this gate.
    ///
    /// Returns `Ok(None)` for [`Gate::Reset`], which has no matrix. Fixed
    /// gates ignore `parameter`; parameterized gates require a finite one.
    pub fn matrix(&self, parameter: Option<f64>) -> StateResult<Option<Unitary2x2>> {
        let m = match self {
            Gate::Reset => return Ok(None),
            Gate::I => Unitary2x2::identity(),
            Gate::X => Unitary2x2::x(),
            Gate::Y => Unitary2x2::y(),
            Gate::Z => Unitary2x2::z(),
            Gate::H => Unitary2x2::h(),
            Gate::S => Unitary2x2::s(),
            Gate::Sdg => Unitary2x2::sdg(),
            Gate::T => Unitary2x2::t(),
            Gate::Tdg => Unitary2x2::tdg(),
            Gate::Rx => Unitary2x2::rx(self.angle(parameter)?),
            Gate::Ry => Unitary2x2::ry(self.angle(parameter)?),
            Gate::Rz => Unitary2x2::rz(self.angle(parameter)?),
            Gate::P => Unitary2x2::p(self.angle(parameter)?),
        };
        Ok(Some(m))
    }

    fn angle(&self, parameter: Option<f64>) -> StateResult<f64> {
        let gate = self.name();
        match parameter {
            None => Err(StateError::MissingParameter { gate }),
            Some(value) if !value.is_finite() => Err(StateError::InvalidParameter { gate, value }),
            Some(value) => Ok(value),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let gate = match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Gate::Reset,
            "id" | "i" => Gate::I,
            "x" => Gate::X,
            "y" => Gate::Y,
            "z" => Gate::Z,
            "h" => Gate::H,
            "s" => Gate::S,
            "sdg" => Gate::Sdg,
            "t" => Gate::T,
            "tdg" => Gate::Tdg,
            "rx" => Gate::Rx,
            "ry" => Gate::Ry,
            "rz" => Gate::Rz,
            "p" => Gate::P,
            _ => return Err(StateError::UnknownGate(s.to_string())),
        };
        Ok(gate)
    }
}
