//! Dashboard API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`, one subtree per partition role.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the dashboard API router.
///
/// The dashboard front end is served separately, so CORS answers any
/// origin. Role narrowing happens per request inside the executor; the
/// router itself carries no auth state.
pub fn dashboard_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/doctor/patients",
            get(endpoints::doctor::list_patients).post(endpoints::doctor::create_patient),
        )
        .route(
            "/doctor/records",
            get(endpoints::doctor::list_records).post(endpoints::doctor::create_record),
        )
        .route("/patient/records", get(endpoints::patient::own_records))
        .route(
            "/admin/doctors",
            get(endpoints::admin::list_doctors).post(endpoints::admin::create_doctor),
        )
        .route(
            "/admin/hospitals",
            get(endpoints::admin::list_hospitals).post(endpoints::admin::create_hospital),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}
