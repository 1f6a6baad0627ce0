//! HTTP API server for recording and querying vehicle locations.
//!
//! Exposes CRUD endpoints under `/api/v1/locations`, guarded by a JSON
//! content-type gate, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::LocationService;
use location_store::LocationRepository;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::locations::{self, AppState};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: LocationRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    let api_v1 = Router::new()
        .route(
            "/locations",
            get(locations::list::<R>).post(locations::create::<R>),
        )
        .route(
            "/locations/{id}",
            get(locations::get::<R>)
                .put(locations::update::<R>)
                .delete(locations::delete::<R>),
        );

    Router::new()
        .route("/health", get(routes::health::check::<R>))
        .nest("/api/v1", api_v1)
        .with_state(state)
        .merge(metrics_router)
        .layer(axum::middleware::from_fn(middleware::require_json))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a repository.
pub fn create_state<R: LocationRepository + 'static>(repository: R) -> Arc<AppState<R>> {
    Arc::new(AppState {
        locations: LocationService::new(repository),
    })
}
