//! Application state for the dashboard server.

use std::net::SocketAddr;

use qubit_state::{NormPolicy, SharedQubit};

/// Front-end origins allowed by default.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Origins allowed to call the API cross-origin. `"*"` allows any.
    pub allowed_origins: Vec<String>,
    /// Reject unknown gate names. When false they are ignored.
    pub strict_gates: bool,
    /// Drift policy for the qubit.
    pub norm_policy: NormPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 8000).into(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            strict_gates: true,
            norm_policy: NormPolicy::default(),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The process-wide qubit.
    pub qubit: SharedQubit,
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            qubit: SharedQubit::with_policy(config.norm_policy),
            config,
        }
    }

    /// Use an existing qubit handle instead of a fresh |0⟩.
    pub fn with_qubit(mut self, qubit: SharedQubit) -> Self {
        self.qubit = qubit;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
