//! Doctor-partition operations: patients and medical records.

use postgres::Row;

use super::{record_from_row, require_nonblank, RECORD_COLUMNS};
use crate::db::scope::SessionScope;
use crate::db::session::ScopedExecutor;
use crate::db::DatabaseError;
use crate::models::{MedicalRecord, NewMedicalRecord, NewPatient, Patient};

pub fn list_patients(executor: &ScopedExecutor) -> Result<Vec<Patient>, DatabaseError> {
    let rows = executor.query(
        SessionScope::doctor(),
        "SELECT id, name, age, gender, blood_type FROM patients ORDER BY id",
        &[],
    )?;
    rows.iter().map(patient_from_row).collect()
}

pub fn insert_patient(executor: &ScopedExecutor, new: &NewPatient) -> Result<(), DatabaseError> {
    require_nonblank("name", &new.name)?;
    require_nonblank("blood_type", &new.blood_type)?;
    executor.execute(
        SessionScope::doctor(),
        "INSERT INTO patients (name, age, gender, blood_type) VALUES ($1, $2, $3, $4)",
        &[&new.name, &new.age, &new.gender, &new.blood_type],
    )?;
    Ok(())
}

pub fn list_medical_records(executor: &ScopedExecutor) -> Result<Vec<MedicalRecord>, DatabaseError> {
    let rows = executor.query(
        SessionScope::doctor(),
        &format!("SELECT {RECORD_COLUMNS} FROM medical_records ORDER BY id"),
        &[],
    )?;
    rows.iter().map(record_from_row).collect()
}

pub fn insert_medical_record(
    executor: &ScopedExecutor,
    new: &NewMedicalRecord,
) -> Result<(), DatabaseError> {
    require_nonblank("medical_condition", &new.medical_condition)?;
    let admission_type = new.admission_type.as_str();
    executor.execute(
        SessionScope::doctor(),
        "INSERT INTO medical_records (patient_id, doctor_id, hospital_id, provider_id, \
         medication_id, medical_condition, date_of_admission, discharge_date, admission_type, \
         room_number, billing_amount, length_of_stay) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        &[
            &new.patient_id,
            &new.doctor_id,
            &new.hospital_id,
            &new.provider_id,
            &new.medication_id,
            &new.medical_condition,
            &new.date_of_admission,
            &new.discharge_date,
            &admission_type,
            &new.room_number,
            &new.billing_amount,
            &new.length_of_stay,
        ],
    )?;
    Ok(())
}

fn patient_from_row(row: &Row) -> Result<Patient, DatabaseError> {
    Ok(Patient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        gender: row.try_get("gender")?,
        blood_type: row.try_get("blood_type")?,
    })
}
