//! Doctor-partition endpoints: patient roster and medical records.
//!
//! Every handler here runs under the `doctor_user` role with the
//! search path pinned to `doctor_schema`; the narrowing happens in the
//! executor, not in the handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListResponse};
use crate::db::operations::doctor;
use crate::models::{MedicalRecord, NewMedicalRecord, NewPatient, Patient};

/// `GET /api/doctor/patients` — patient roster.
pub async fn list_patients(
    State(ctx): State<ApiContext>,
) -> Result<Json<ListResponse<Patient>>, ApiError> {
    let rows = ctx.storage(doctor::list_patients).await?;
    Ok(Json(ListResponse::new(rows)))
}

/// `POST /api/doctor/patients` — add a patient to the roster.
pub async fn create_patient(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewPatient>,
) -> Result<StatusCode, ApiError> {
    ctx.storage(move |executor| doctor::insert_patient(executor, &new))
        .await?;
    Ok(StatusCode::CREATED)
}

/// `GET /api/doctor/records` — every medical record, unfiltered.
pub async fn list_records(
    State(ctx): State<ApiContext>,
) -> Result<Json<ListResponse<MedicalRecord>>, ApiError> {
    let rows = ctx.storage(doctor::list_medical_records).await?;
    Ok(Json(ListResponse::new(rows)))
}

/// `POST /api/doctor/records` — record an admission.
pub async fn create_record(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewMedicalRecord>,
) -> Result<StatusCode, ApiError> {
    ctx.storage(move |executor| doctor::insert_medical_record(executor, &new))
        .await?;
    Ok(StatusCode::CREATED)
}
