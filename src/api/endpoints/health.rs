//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::Schema;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub partitions: PartitionCounts,
}

/// Reflected table counts per partition, so a dashboard can tell a
/// reachable server from a fully bootstrapped one.
#[derive(Serialize)]
pub struct PartitionCounts {
    pub doctor: usize,
    pub patient: usize,
    pub admin: usize,
}

/// `GET /api/health` — connection check for the dashboard.
pub async fn check(
    State(ctx): State<ApiContext>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        partitions: PartitionCounts {
            doctor: ctx.catalog.partition(Schema::Doctor).table_count(),
            patient: ctx.catalog.partition(Schema::Patient).table_count(),
            admin: ctx.catalog.partition(Schema::Admin).table_count(),
        },
    }))
}
