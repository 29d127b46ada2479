//! Live-database test support and shared fixtures.
//!
//! Integration tests need a real PostgreSQL: roles, search_path and row
//! security do not exist anywhere else. Set `WARDGATE_TEST_DB` to the
//! name of a maintenance database (usually `postgres`) reachable with
//! the `WARDGATE_DB_*` settings and superuser rights; each test then
//! provisions a throwaway database, applies the bootstrap DDL and drops
//! the database when done. With the variable unset, live tests no-op so
//! the suite passes without a server.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::session::ConnectionFactory;
use crate::config::DbConfig;
use crate::models::{NewDoctor, NewHospital, NewMedicalRecord, NewPatient};
use crate::models::enums::AdmissionType;

const BOOTSTRAP_SQL: &str = include_str!("../../resources/sql/bootstrap.sql");

/// Factory pointing at a port nothing listens on, for exercising
/// connection-failure paths without a server.
pub(crate) fn unreachable_factory() -> ConnectionFactory {
    ConnectionFactory::new(&DbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        user: "postgres".into(),
        password: String::new(),
        dbname: "wardgate_never".into(),
    })
}

/// A throwaway database, dropped on `Drop`.
pub(crate) struct TestDb {
    pub factory: ConnectionFactory,
    admin: DbConfig,
    name: String,
}

/// Provision a fresh bootstrapped database, or `None` when
/// `WARDGATE_TEST_DB` is unset.
pub(crate) fn live() -> Option<TestDb> {
    let maintenance = std::env::var("WARDGATE_TEST_DB").ok()?;
    let mut admin = DbConfig::from_env();
    admin.dbname = maintenance;

    let name = format!("wardgate_test_{}", uuid::Uuid::new_v4().simple());
    let mut client = ConnectionFactory::new(&admin)
        .connect()
        .expect("maintenance database connect");
    client
        .batch_execute(&format!("CREATE DATABASE {name}"))
        .expect("create throwaway database");
    drop(client);

    let mut db = admin.clone();
    db.dbname = name.clone();
    let factory = ConnectionFactory::new(&db);
    factory
        .connect()
        .expect("throwaway database connect")
        .batch_execute(BOOTSTRAP_SQL)
        .expect("bootstrap DDL");

    Some(TestDb {
        factory,
        admin,
        name,
    })
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Roles are cluster-wide and shared between parallel tests;
        // only the database goes. FORCE kicks connections a failing
        // test may have left behind (needs PostgreSQL 13+).
        if let Ok(mut client) = ConnectionFactory::new(&self.admin).connect() {
            let _ = client.batch_execute(&format!(
                "DROP DATABASE IF EXISTS {} WITH (FORCE)",
                self.name
            ));
        }
    }
}

/// Ids of the reference rows a medical-record insert points at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RefIds {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub hospital_id: i32,
    pub provider_id: i32,
    pub medication_id: i32,
}

impl RefIds {
    /// For tests that never reach storage.
    pub(crate) fn placeholder() -> Self {
        Self {
            patient_id: 1,
            doctor_id: 1,
            hospital_id: 1,
            provider_id: 1,
            medication_id: 1,
        }
    }
}

/// Seed the rows record inserts reference, plus one patient in the
/// doctor partition. Superuser writes; the partition grants stay as the
/// bootstrap DDL made them.
pub(crate) fn seed_reference_data(db: &TestDb) -> RefIds {
    let mut client = db.factory.connect().expect("seed connect");
    let mut returning_id = |sql: &str| -> i32 {
        client.query_one(sql, &[]).expect("seed insert").get(0)
    };

    RefIds {
        patient_id: returning_id(
            "INSERT INTO doctor_schema.patients (name, age, gender, blood_type) \
             VALUES ('Amara Diallo', 44, 'Female', 'O+') RETURNING id",
        ),
        doctor_id: returning_id(
            "INSERT INTO admin_schema.doctors (name, specialty, phone_number) \
             VALUES ('Nadia Osei', 'Cardiology', '555-0100') RETURNING id",
        ),
        hospital_id: returning_id(
            "INSERT INTO admin_schema.hospitals (name, address, phone_number) \
             VALUES ('Mercy General', '12 Harbour Road', '555-0199') RETURNING id",
        ),
        provider_id: returning_id(
            "INSERT INTO admin_schema.insurance_providers (name) \
             VALUES ('Northwind Mutual') RETURNING id",
        ),
        medication_id: returning_id(
            "INSERT INTO doctor_schema.medications (name) \
             VALUES ('Lisinopril') RETURNING id",
        ),
    }
}

/// One more patient in the doctor partition, by superuser write.
pub(crate) fn seed_patient(
    db: &TestDb,
    name: &str,
    age: i32,
    gender: &str,
    blood_type: &str,
) -> i32 {
    db.factory
        .connect()
        .expect("seed connect")
        .query_one(
            "INSERT INTO doctor_schema.patients (name, age, gender, blood_type) \
             VALUES ($1, $2, $3, $4) RETURNING id",
            &[&name, &age, &gender, &blood_type],
        )
        .expect("seed patient")
        .get(0)
}

// ── Insert-payload fixtures ─────────────────────────────────────────────

pub(crate) fn sample_patient() -> NewPatient {
    NewPatient {
        name: "Amara Diallo".into(),
        age: 44,
        gender: "Female".into(),
        blood_type: "O+".into(),
    }
}

pub(crate) fn sample_record(patient_id: i32, ids: &RefIds) -> NewMedicalRecord {
    NewMedicalRecord {
        patient_id,
        doctor_id: ids.doctor_id,
        hospital_id: ids.hospital_id,
        provider_id: ids.provider_id,
        medication_id: ids.medication_id,
        medical_condition: "Hypertension".into(),
        date_of_admission: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        discharge_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        admission_type: AdmissionType::Emergency,
        room_number: 214,
        billing_amount: Decimal::new(152_550, 2),
        length_of_stay: 4,
    }
}

pub(crate) fn sample_doctor() -> NewDoctor {
    NewDoctor {
        name: "Nadia Osei".into(),
        specialty: "Cardiology".into(),
        phone_number: "555-0100".into(),
    }
}

pub(crate) fn sample_hospital() -> NewHospital {
    NewHospital {
        name: "Mercy General".into(),
        address: Some("12 Harbour Road".into()),
        phone_number: Some("555-0199".into()),
    }
}
