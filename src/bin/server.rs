//! Standalone health server (without the Dioxus frontend)
//! Use this to run the deployment health check on its own.
//!
//! Run with: PORT=3003 cargo run --bin server
//! Defaults to port 3002, leaving 3001 to the backend API.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use japm_console::config::AppConfig;
use japm_console::handlers::{health_routes, LocalHealthState};

const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Parser)]
#[command(name = "japm-server", about = "JAPM console health server")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: std::net::IpAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::load();

    tracing::info!(environment = %config.environment, "Starting JAPM health server (standalone)...");

    let app = health_routes(LocalHealthState::from_config(&config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use japm_console::config::DEFAULT_API_URL;

    #[test]
    fn test_default_port_differs_from_backend() {
        let backend_port = DEFAULT_API_URL.rsplit(':').next().and_then(|p| p.parse::<u16>().ok());
        assert_eq!(backend_port, Some(3001));
        assert_ne!(backend_port, Some(DEFAULT_PORT));
    }

    #[test]
    fn test_explicit_flags_override_defaults() {
        let args = Args::try_parse_from(["japm-server", "--port", "4000", "--host", "0.0.0.0"]).unwrap();
        assert_eq!(args.port, 4000);
        assert!(args.host.is_unspecified());
    }
}
