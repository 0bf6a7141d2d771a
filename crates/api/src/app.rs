use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use persistence::Store;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{bookings, health, machines, tracking, trips, workers};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: Arc<dyn Store>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        store,
        config: config.clone(),
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    warn!(origin = %o, "Ignoring malformed CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Customer-facing routes
    let booking_routes = Router::new()
        .route(
            "/api/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route("/api/bookings/:id", get(bookings::get_booking))
        .route("/api/bookings/:id/confirm", post(bookings::confirm_booking))
        .route(
            "/api/tracking/generate",
            post(tracking::generate_tracking_code_handler),
        )
        .route(
            "/api/tracking/:tracking_code",
            get(tracking::get_tracking_status),
        )
        .route(
            "/api/tracking/:tracking_code/expire",
            post(tracking::expire_tracking_code),
        );

    // Fleet administration
    let admin_routes = Router::new()
        .route(
            "/api/admin/machines",
            post(machines::create_machine).get(machines::list_machines),
        )
        .route("/api/admin/machines/:id", get(machines::get_machine))
        .route(
            "/api/admin/workers",
            post(workers::create_worker).get(workers::list_workers),
        )
        .route("/api/admin/workers/:id", get(workers::get_worker));

    // Field worker routes
    let worker_routes = Router::new()
        .route("/api/worker/scan-machine", post(workers::scan_machine))
        .route("/api/trip/start", post(trips::start_trip))
        .route("/api/trip/:id", get(trips::get_trip))
        .route("/api/trip/:id/complete", post(trips::complete_trip));

    let public_routes = Router::new()
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(booking_routes)
        .merge(admin_routes)
        .merge(worker_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
