//! Gate application endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use qubit_state::{Gate, StateError};

use crate::dto::{AmplitudesResponse, GateInfo, GateRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/gate - Apply a gate and return the resulting amplitudes.
///
/// With `strict_gates` disabled an unknown gate name is logged and the
/// current amplitudes are returned unchanged.
pub async fn apply_gate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GateRequest>,
) -> Result<Json<AmplitudesResponse>, ApiError> {
    let amps = match state.qubit.apply_named(&req.gate_name, req.phase) {
        Ok(amps) => amps,
        Err(StateError::UnknownGate(name)) if !state.config.strict_gates => {
            tracing::warn!(gate = %name, "ignoring unknown gate");
            state.qubit.snapshot()
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Json(amps.into()))
}

/// GET /api/gates - List the supported gates.
pub async fn list_gates() -> Json<Vec<GateInfo>> {
    Json(Gate::ALL.into_iter().map(GateInfo::from).collect())
}
