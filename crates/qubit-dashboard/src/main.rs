//! Qubit Dashboard binary entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qubit_dashboard::state::DEFAULT_ALLOWED_ORIGINS;
use qubit_dashboard::{AppState, DashboardConfig, create_router};
use qubit_state::NormPolicy;

/// Serve a single simulated qubit over HTTP
#[derive(Parser)]
#[command(name = "qubit-dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "QUBIT_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Allowed CORS origin; repeat or comma-separate. `*` allows any origin
    #[arg(
        long = "allow-origin",
        env = "QUBIT_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEFAULT_ALLOWED_ORIGINS.map(String::from)
    )]
    allowed_origins: Vec<String>,

    /// Ignore unknown gate names instead of rejecting them
    #[arg(long, env = "QUBIT_LENIENT_GATES")]
    lenient_gates: bool,

    /// Skip renormalization after each gate
    #[arg(long, env = "QUBIT_PRESERVE_DRIFT")]
    preserve_drift: bool,
}

impl Cli {
    fn into_config(self) -> DashboardConfig {
        DashboardConfig {
            bind_address: self.bind,
            allowed_origins: self
                .allowed_origins
                .into_iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            strict_gates: !self.lenient_gates,
            norm_policy: if self.preserve_drift {
                NormPolicy::Preserve
            } else {
                NormPolicy::Renormalize
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qubit_dashboard=info,qubit_state=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    let bind_addr = config.bind_address;
    info!(
        origins = ?config.allowed_origins,
        strict_gates = config.strict_gates,
        norm_policy = ?config.norm_policy,
        "Loaded configuration"
    );

    let state = Arc::new(AppState::with_config(config));
    let app = create_router(state);

    info!("Starting Qubit Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Qubit Dashboard shut down");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }
}
