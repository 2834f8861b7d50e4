//! Single-qubit state engine.
//!
//! This crate holds one qubit as a normalized pair of complex amplitudes and
//! applies single-qubit unitary gates to it.
//!
//! # Core Components
//!
//! - [`QubitState`]: the amplitude pair, its unit-norm check and gate application
//! - [`Gate`]: the closed set of supported gates, parsed from names like `"h"`
//! - [`Unitary2x2`]: row-major gate matrices
//! - [`SharedQubit`]: a lock-guarded handle for concurrent callers
//!
//! Gates act on the amplitudes as a row vector: `[alpha', beta'] = [alpha, beta] · M`.
//!
//! # Example
//!
//! ```rust
//! use qubit_state::{Gate, QubitState};
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! let mut q = QubitState::default();
//! q.apply_gate(Gate::H, None).unwrap();
//!
//! let (alpha, beta) = q.get_state();
//! assert!((alpha.re - FRAC_1_SQRT_2).abs() < 1e-12);
//! assert!((beta.re - FRAC_1_SQRT_2).abs() < 1e-12);
//! ```

pub mod bloch;
pub mod error;
pub mod gate;
pub mod shared;
pub mod state;
pub mod unitary;

pub use bloch::BlochVector;
pub use error::{StateError, StateResult};
pub use gate::Gate;
pub use num_complex::Complex64;
pub use shared::SharedQubit;
pub use state::{Amplitudes, NORM_TOLERANCE, NormPolicy, QubitState};
pub use unitary::Unitary2x2;
