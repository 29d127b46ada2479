use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::AdmissionType;

/// One hospital admission. The same shape exists in the doctor and patient
/// partitions; which copy a query sees is decided by the session scope,
/// never by this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub hospital_id: i32,
    pub provider_id: i32,
    pub medication_id: i32,
    pub medical_condition: String,
    pub date_of_admission: NaiveDate,
    pub discharge_date: NaiveDate,
    pub admission_type: AdmissionType,
    pub room_number: i32,
    pub billing_amount: Decimal,
    pub length_of_stay: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedicalRecord {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub hospital_id: i32,
    pub provider_id: i32,
    pub medication_id: i32,
    pub medical_condition: String,
    pub date_of_admission: NaiveDate,
    pub discharge_date: NaiveDate,
    pub admission_type: AdmissionType,
    pub room_number: i32,
    pub billing_amount: Decimal,
    pub length_of_stay: i32,
}
