//! Patient-partition operation. One read, identity-scoped.

use super::{record_from_row, RECORD_COLUMNS};
use crate::db::scope::SessionScope;
use crate::db::session::ScopedExecutor;
use crate::db::DatabaseError;
use crate::models::MedicalRecord;

/// Every record the row policy lets this identity see. Deliberately no
/// WHERE clause: the filtering happens in storage, under the narrowed
/// role, and cannot be forgotten at a call site.
pub fn list_own_medical_records(
    executor: &ScopedExecutor,
    patient_id: i32,
) -> Result<Vec<MedicalRecord>, DatabaseError> {
    let rows = executor.query(
        SessionScope::patient(patient_id),
        &format!("SELECT {RECORD_COLUMNS} FROM medical_records ORDER BY id"),
        &[],
    )?;
    rows.iter().map(record_from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::operations::doctor::{insert_medical_record, list_medical_records};
    use crate::db::testdb::{self, sample_record};

    #[test]
    fn unreachable_endpoint_is_a_connection_failure() {
        let executor = ScopedExecutor::new(testdb::unreachable_factory());
        let err = list_own_medical_records(&executor, 1).unwrap_err();
        assert!(matches!(err, DatabaseError::Connection(_)));
    }

    /// Records land through the doctor path; the patient path must only
    /// ever surface the caller's own.
    #[test]
    fn identity_scoped_read_excludes_other_patients() {
        let Some(db) = testdb::live() else { return };
        let ids = testdb::seed_reference_data(&db);
        let p2 = testdb::seed_patient(&db, "Rosa Delgado", 31, "Female", "A-");
        let executor = ScopedExecutor::new(db.factory.clone());

        insert_medical_record(&executor, &sample_record(ids.patient_id, &ids)).unwrap();
        insert_medical_record(&executor, &sample_record(ids.patient_id, &ids)).unwrap();
        insert_medical_record(&executor, &sample_record(p2, &ids)).unwrap();

        let own = list_own_medical_records(&executor, ids.patient_id).unwrap();
        assert_eq!(own.len(), 2);
        assert!(own.iter().all(|r| r.patient_id == ids.patient_id));

        let p2_own = list_own_medical_records(&executor, p2).unwrap();
        assert_eq!(p2_own.len(), 1);
        assert_eq!(p2_own[0].patient_id, p2);

        // The doctor path keeps seeing everything.
        assert_eq!(list_medical_records(&executor).unwrap().len(), 3);
    }

    #[test]
    fn unknown_identity_sees_nothing() {
        let Some(db) = testdb::live() else { return };
        let ids = testdb::seed_reference_data(&db);
        let executor = ScopedExecutor::new(db.factory.clone());

        insert_medical_record(&executor, &sample_record(ids.patient_id, &ids)).unwrap();
        assert!(list_own_medical_records(&executor, 999_999).unwrap().is_empty());
    }
}
