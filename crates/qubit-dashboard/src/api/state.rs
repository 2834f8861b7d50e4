//! Full state view endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::StateView;
use crate::state::AppState;

/// GET /api/state - Amplitudes with probabilities, Bloch vector and ket form.
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateView> {
    Json(StateView::new(
        state.qubit.snapshot(),
        state.qubit.norm_policy(),
    ))
}
