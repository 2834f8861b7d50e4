//! Qubit Dashboard - HTTP interface to a single simulated qubit.
//!
//! The service owns one [`qubit_state::SharedQubit`] and exposes it over a
//! small JSON API:
//!
//! - `GET /api/amps` returns `alpha_real`, `alpha_imag`, `beta_real`, `beta_imag`
//! - `POST /api/gate` applies `{"gate_name": "h", "phase": null}` and returns the same fields
//! - `PUT /api/amps` replaces the amplitudes with a normalized pair
//! - `GET /api/state` adds probabilities, the Bloch vector and a ket string
//! - `GET /api/gates` and `GET /api/health`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qubit_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{
    AmplitudesResponse, BlochAnglesView, GateInfo, GateRequest, HealthResponse, StateView,
};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
