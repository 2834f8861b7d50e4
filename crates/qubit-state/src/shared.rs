//! Lock-guarded handle to a process-wide qubit.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use num_complex::Complex64;

use crate::error::StateResult;
use crate::gate::Gate;
use crate::state::{Amplitudes, NormPolicy, QubitState};

/// A cloneable handle to one [`QubitState`].
///
/// Mutations hold the write lock for the whole update and readers copy a
/// snapshot under the read lock, so a reader never sees a half-written pair.
/// Every update computes the new pair before assigning it, which makes a
/// poisoned lock safe to recover.
#[derive(Debug, Clone, Default)]
pub struct SharedQubit {
    inner: Arc<RwLock<QubitState>>,
}

impl SharedQubit {
    /// Wrap an existing state.
    pub fn new(state: QubitState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// A |0⟩ qubit using `policy` for drift.
    pub fn with_policy(policy: NormPolicy) -> Self {
        Self::new(QubitState::default().with_policy(policy))
    }

    fn read(&self) -> RwLockReadGuard<'_, QubitState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, QubitState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current amplitudes.
    pub fn snapshot(&self) -> Amplitudes {
        self.read().amplitudes()
    }

    /// Return to |0⟩ and report the new amplitudes.
    pub fn reset(&self) -> Amplitudes {
        let mut state = self.write();
        state.reset_state();
        state.amplitudes()
    }

    /// Replace the amplitudes if they are unit-norm.
    pub fn set(&self, alpha: Complex64, beta: Complex64) -> StateResult<Amplitudes> {
        let mut state = self.write();
        state.set_state(alpha, beta)?;
        Ok(state.amplitudes())
    }

    /// Apply a gate and report the resulting amplitudes.
    pub fn apply(&self, gate: Gate, parameter: Option<f64>) -> StateResult<Amplitudes> {
        if gate == Gate::Reset {
            return Ok(self.reset());
        }
        let mut state = self.write();
        state.apply_gate(gate, parameter)?;
        Ok(state.amplitudes())
    }

    /// Parse and apply a gate by name.
    pub fn apply_named(&self, name: &str, parameter: Option<f64>) -> StateResult<Amplitudes> {
        let gate: Gate = name.parse()?;
        self.apply(gate, parameter)
    }

    /// The drift policy of the wrapped state.
    pub fn norm_policy(&self) -> NormPolicy {
        self.read().norm_policy()
    }
}
