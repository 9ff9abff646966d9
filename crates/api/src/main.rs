use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use digitalpro_api::config::ServerConfig;
use digitalpro_api::router::build_app_router;
use digitalpro_api::state::AppState;
use digitalpro_core::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "digitalpro_api=debug,digitalpro_db=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid server configuration");
            tracing::error!(
                "Set DATABASE_URL (a Postgres URL, or memory:// for a throwaway store) \
                 in the environment or in a .env file next to the binary."
            );
            std::process::exit(1);
        }
    };
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Record store ---
    let store = match digitalpro_db::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Record store connection failed");
            tracing::error!(
                "Possible causes: incorrect DATABASE_URL, invalid credentials, \
                 or the database host is not reachable from this machine."
            );
            std::process::exit(1);
        }
    };

    // --- Router ---
    let app = build_app_router(AppState::new(store), &config);

    // --- Start server ---
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind to address");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}
