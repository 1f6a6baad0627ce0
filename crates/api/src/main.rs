//! API server entry point.

use std::time::Duration;

use api::config::{Config, LogFormat};
use location_store::{LocationRepository, MongoLocationRepository};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Delay between releasing resources and process exit.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}

#[tokio::main]
async fn main() {
    // 1. Load .env (real environment variables take precedence) and tracing
    let _ = dotenvy::dotenv();
    init_tracing();

    // 2. Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "error on loading environment");
            std::process::exit(1);
        }
    };

    // 3. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 4. Connect to MongoDB and verify it answers
    let repository = MongoLocationRepository::connect(
        &config.mongo_uri(),
        &config.db_name,
        &config.db_collection,
    )
    .await
    .expect("failed to create mongodb client");
    if let Err(err) = repository.ping().await {
        tracing::error!(error = %err, "error on handling mongodb");
        std::process::exit(1);
    }

    // 5. Build the application
    let state = api::create_state(repository);
    let app = api::create_app(state.clone(), metrics_handle);

    // 6. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    // 7. Release the database client once in-flight requests have drained
    tracing::info!("closing tasks");
    state.locations.repository().stop().await;
    tokio::time::sleep(SHUTDOWN_GRACE).await;

    tracing::info!("server shut down gracefully");
}
