use std::net::SocketAddr;
use tracing::info;
use books_api::catalog::controller::build_router;
use books_api::catalog::factory::create_catalog_service;
use books_api::core::controller::AppState;
use books_api::core::domain::Configuration;
use books_api::utils::trace::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::new();
    let state = AppState::new(config.clone(), create_catalog_service());
    let app = build_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());

    info!("Server running at {}", config.public_url());
    info!("API docs available at {}", config.docs_url());

    server.with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
