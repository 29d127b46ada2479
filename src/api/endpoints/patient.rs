//! Patient-partition endpoint: a patient's own medical records.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListResponse};
use crate::db::operations::patient;
use crate::models::MedicalRecord;

#[derive(Deserialize)]
pub struct OwnRecordsQuery {
    pub patient_id: i32,
}

/// `GET /api/patient/records?patient_id=N` — identity-scoped record list.
///
/// The id becomes the session identity before the role narrows, so rows
/// belonging to other patients are filtered in storage, not here.
pub async fn own_records(
    State(ctx): State<ApiContext>,
    Query(query): Query<OwnRecordsQuery>,
) -> Result<Json<ListResponse<MedicalRecord>>, ApiError> {
    if query.patient_id < 1 {
        return Err(ApiError::BadRequest("patient_id must be positive".into()));
    }
    let rows = ctx
        .storage(move |executor| patient::list_own_medical_records(executor, query.patient_id))
        .await?;
    Ok(Json(ListResponse::new(rows)))
}
