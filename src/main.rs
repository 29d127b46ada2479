use tracing_subscriber::EnvFilter;

use wardgate_lib::api::{dashboard_router, ApiContext};
use wardgate_lib::config;
use wardgate_lib::db::{ConnectionFactory, SchemaCatalog, ScopedExecutor};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Wardgate starting v{}", config::APP_VERSION);

    let db = config::DbConfig::from_env();
    let factory = ConnectionFactory::new(&db);

    // Refuse to come up against storage that is missing tables. The
    // blocking driver must stay off the async workers, startup included.
    let reflect = factory.clone();
    let catalog = match tokio::task::spawn_blocking(move || SchemaCatalog::reflect(&reflect)).await
    {
        Ok(Ok(catalog)) => catalog,
        Ok(Err(err)) => {
            tracing::error!(%err, "partition reflection failed");
            std::process::exit(1);
        }
        Err(err) => {
            tracing::error!(%err, "partition reflection task panicked");
            std::process::exit(1);
        }
    };

    let ctx = ApiContext::new(ScopedExecutor::new(factory), catalog);
    let app = dashboard_router(ctx);

    let addr = config::listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, %err, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "dashboard API listening");
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(%err, "server error");
        std::process::exit(1);
    }
}
