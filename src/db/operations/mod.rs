//! The fixed catalog of named operations. Each is a thin binding of one
//! statement onto the executor under a fixed partition/role pair; no
//! other statement shapes exist.

pub mod admin;
pub mod doctor;
pub mod patient;

pub use admin::*;
pub use doctor::*;
pub use patient::*;

use std::str::FromStr;

use postgres::Row;

use crate::db::DatabaseError;
use crate::models::enums::AdmissionType;
use crate::models::MedicalRecord;

/// Shared between the doctor list and the patient's own-records list;
/// both partitions expose the same record shape.
pub(crate) const RECORD_COLUMNS: &str = "id, patient_id, doctor_id, hospital_id, provider_id, \
     medication_id, medical_condition, date_of_admission, discharge_date, admission_type, \
     room_number, billing_amount, length_of_stay";

/// Required-field check. Runs before any statement is built, so a blank
/// field never costs a connection.
pub(crate) fn require_nonblank(field: &str, value: &str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        return Err(DatabaseError::Validation(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}

pub(crate) fn record_from_row(row: &Row) -> Result<MedicalRecord, DatabaseError> {
    Ok(MedicalRecord {
        id: row.try_get("id")?,
        patient_id: row.try_get("patient_id")?,
        doctor_id: row.try_get("doctor_id")?,
        hospital_id: row.try_get("hospital_id")?,
        provider_id: row.try_get("provider_id")?,
        medication_id: row.try_get("medication_id")?,
        medical_condition: row.try_get("medical_condition")?,
        date_of_admission: row.try_get("date_of_admission")?,
        discharge_date: row.try_get("discharge_date")?,
        admission_type: AdmissionType::from_str(&row.try_get::<_, String>("admission_type")?)?,
        room_number: row.try_get("room_number")?,
        billing_amount: row.try_get("billing_amount")?,
        length_of_stay: row.try_get("length_of_stay")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonblank_accepts_real_text() {
        assert!(require_nonblank("name", "Amara Diallo").is_ok());
    }

    #[test]
    fn nonblank_rejects_empty_and_whitespace() {
        for value in ["", " ", "\t", "  \n "] {
            let err = require_nonblank("name", value).unwrap_err();
            match err {
                DatabaseError::Validation(detail) => assert!(detail.contains("name")),
                other => panic!("expected Validation, got {other:?}"),
            }
        }
    }
}
