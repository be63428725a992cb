use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vocadia::api::{app_router, ApiContext};
use vocadia::config::{self, Config};
use vocadia::db::open_database;
use vocadia::llm::GroqClient;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!(%err, "fatal");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;

    let conn = open_database(&cfg.db_path)?;
    tracing::info!(db = %cfg.db_path, "database ready");

    let llm = GroqClient::new(&cfg.api_url, &cfg.api_key, &cfg.model);
    let ctx = ApiContext::new(conn, Arc::new(llm));
    let app = app_router(ctx);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(
        addr = %cfg.bind_addr,
        model = %cfg.model,
        version = config::APP_VERSION,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install Ctrl-C handler");
    }
}
