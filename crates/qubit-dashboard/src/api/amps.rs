//! Amplitude read and replace endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::AmplitudesResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/amps - Current amplitudes.
pub async fn get_amps(State(state): State<Arc<AppState>>) -> Json<AmplitudesResponse> {
    Json(state.qubit.snapshot().into())
}

/// PUT /api/amps - Replace the amplitudes with a normalized pair.
pub async fn set_amps(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AmplitudesResponse>,
) -> Result<Json<AmplitudesResponse>, ApiError> {
    let (alpha, beta) = req.to_pair();
    let amps = state.qubit.set(alpha, beta).inspect_err(|e| {
        tracing::info!(error = %e, "rejected state update");
    })?;
    Ok(Json(amps.into()))
}
