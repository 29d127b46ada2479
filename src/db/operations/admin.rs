//! Admin-partition operations: doctors and hospitals.

use postgres::Row;

use super::require_nonblank;
use crate::db::scope::SessionScope;
use crate::db::session::ScopedExecutor;
use crate::db::DatabaseError;
use crate::models::{Doctor, Hospital, NewDoctor, NewHospital};

pub fn list_doctors(executor: &ScopedExecutor) -> Result<Vec<Doctor>, DatabaseError> {
    let rows = executor.query(
        SessionScope::admin(),
        "SELECT id, name, specialty, phone_number FROM doctors ORDER BY id",
        &[],
    )?;
    rows.iter().map(doctor_from_row).collect()
}

pub fn insert_doctor(executor: &ScopedExecutor, new: &NewDoctor) -> Result<(), DatabaseError> {
    require_nonblank("name", &new.name)?;
    require_nonblank("specialty", &new.specialty)?;
    executor.execute(
        SessionScope::admin(),
        "INSERT INTO doctors (name, specialty, phone_number) VALUES ($1, $2, $3)",
        &[&new.name, &new.specialty, &new.phone_number],
    )?;
    Ok(())
}

pub fn list_hospitals(executor: &ScopedExecutor) -> Result<Vec<Hospital>, DatabaseError> {
    let rows = executor.query(
        SessionScope::admin(),
        "SELECT id, name, address, phone_number FROM hospitals ORDER BY id",
        &[],
    )?;
    rows.iter().map(hospital_from_row).collect()
}

pub fn insert_hospital(executor: &ScopedExecutor, new: &NewHospital) -> Result<(), DatabaseError> {
    require_nonblank("name", &new.name)?;
    // Blank contact details become NULL, not empty text.
    let address = new.address.as_deref().filter(|s| !s.trim().is_empty());
    let phone_number = new.phone_number.as_deref().filter(|s| !s.trim().is_empty());
    executor.execute(
        SessionScope::admin(),
        "INSERT INTO hospitals (name, address, phone_number) VALUES ($1, $2, $3)",
        &[&new.name, &address, &phone_number],
    )?;
    Ok(())
}

fn doctor_from_row(row: &Row) -> Result<Doctor, DatabaseError> {
    Ok(Doctor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        specialty: row.try_get("specialty")?,
        phone_number: row.try_get("phone_number")?,
    })
}

fn hospital_from_row(row: &Row) -> Result<Hospital, DatabaseError> {
    Ok(Hospital {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        phone_number: row.try_get("phone_number")?,
    })
}
