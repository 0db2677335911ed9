use app_error::ServerError;
use config::AppConfig;
use router::routes::routes;
use setup_tracing::{setup_tracing, shutdown_tracing};

mod app_error;
mod config;
mod convert;
mod router;
mod setup_tracing;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "Could not listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    setup_tracing(config.log_level)?;

    if config.persist_output {
        tokio::fs::create_dir_all(&config.output_dir).await?;
        tracing::info!(output_dir = %config.output_dir.display(), "Persisting decoded audio");
    }

    let (addr, server) = warp::serve(routes(config.clone()))
        .try_bind_with_graceful_shutdown(config.socket_addr(), shutdown_signal())?;
    tracing::info!("Server listening on http://{}", addr);
    server.await;

    shutdown_tracing();
    Ok(())
}
