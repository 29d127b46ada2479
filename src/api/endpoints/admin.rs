//! Admin-partition endpoints: the doctor and hospital directories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListResponse};
use crate::db::operations::admin;
use crate::models::{Doctor, Hospital, NewDoctor, NewHospital};

/// `GET /api/admin/doctors` — staff directory.
pub async fn list_doctors(
    State(ctx): State<ApiContext>,
) -> Result<Json<ListResponse<Doctor>>, ApiError> {
    let rows = ctx.storage(admin::list_doctors).await?;
    Ok(Json(ListResponse::new(rows)))
}

/// `POST /api/admin/doctors` — register a doctor.
pub async fn create_doctor(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewDoctor>,
) -> Result<StatusCode, ApiError> {
    ctx.storage(move |executor| admin::insert_doctor(executor, &new))
        .await?;
    Ok(StatusCode::CREATED)
}

/// `GET /api/admin/hospitals` — facility directory.
pub async fn list_hospitals(
    State(ctx): State<ApiContext>,
) -> Result<Json<ListResponse<Hospital>>, ApiError> {
    let rows = ctx.storage(admin::list_hospitals).await?;
    Ok(Json(ListResponse::new(rows)))
}

/// `POST /api/admin/hospitals` — register a facility.
pub async fn create_hospital(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewHospital>,
) -> Result<StatusCode, ApiError> {
    ctx.storage(move |executor| admin::insert_hospital(executor, &new))
        .await?;
    Ok(StatusCode::CREATED)
}
