use axum::Router;

use backend_application::AppState;

use crate::handlers::{lookup_handlers, ops_handlers, report_handlers, timeline_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(timeline_handlers::dashboard))
        .route(
            "/reports",
            axum::routing::get(timeline_handlers::list_reports),
        )
        // Deployed dialogs disagree on the method; report routes take both.
        .route(
            "/reports/start",
            axum::routing::get(report_handlers::report_start).post(report_handlers::report_start),
        )
        .route(
            "/reports/menu",
            axum::routing::get(report_handlers::report_menu).post(report_handlers::report_menu),
        )
        .route(
            "/reports/end",
            axum::routing::get(report_handlers::report_end).post(report_handlers::report_end),
        )
        .route(
            "/matrikelnummer",
            axum::routing::get(lookup_handlers::lookup_matriculation_number),
        )
        .route("/class", axum::routing::get(lookup_handlers::lookup_class))
        .route("/health/live", axum::routing::get(ops_handlers::health_live))
        .route(
            "/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
