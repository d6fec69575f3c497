#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::net::{Ipv4Addr, SocketAddr};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fixerupper site exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;
    for file in config.missing_fallback_assets() {
        tracing::warn!(file, assets = %config.assets_dir.display(), "fallback gallery image missing");
    }
    let app = routes::app(&config)?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "fixerupper site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
