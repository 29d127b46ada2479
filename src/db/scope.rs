//! Session scoping: which schema, which role, which patient.
//!
//! Every statement the executor runs is preceded by a short session
//! setup sequence, in a fixed order:
//! 1. Bind the patient identity (if any) with `set_config`
//! 2. `SET search_path` to the partition's schema
//! 3. `SET ROLE` to the partition's role
//!
//! The identity must land before the role switch: the row-security
//! policy reads `current_setting('app.patient_id')` while running under
//! the narrowed role, and the narrowed roles are not granted the right
//! to re-scope their own session. `SET` itself cannot take a bound
//! parameter, so the identity goes through `set_config()`, which can.

use serde::{Deserialize, Serialize};

use crate::db::DatabaseError;
use crate::models::enums::str_enum;

// Closed sets. Scoping statements are rendered from `as_str()` output
// and nothing else, so no caller-supplied text ever reaches SET ROLE or
// SET search_path.
str_enum!(Role {
    Doctor => "doctor_user",
    Patient => "patient_user",
    Admin => "admin_user",
});

str_enum!(Schema {
    Doctor => "doctor_schema",
    Patient => "patient_schema",
    Admin => "admin_schema",
});

/// Identity binding, parameterized. `false` = session-wide, not
/// transaction-local; each call runs on a fresh connection anyway.
pub(crate) const SET_IDENTITY_SQL: &str = "SELECT set_config('app.patient_id', $1, false)";

/// The partition a call runs against: schema + role, plus the patient
/// identity when the role is identity-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionScope {
    pub schema: Schema,
    pub role: Role,
    pub patient_id: Option<i32>,
}

impl SessionScope {
    pub fn doctor() -> Self {
        Self {
            schema: Schema::Doctor,
            role: Role::Doctor,
            patient_id: None,
        }
    }

    /// Patient scope always carries an identity; a patient session
    /// without one would see no rows at all under the row policy.
    pub fn patient(patient_id: i32) -> Self {
        Self {
            schema: Schema::Patient,
            role: Role::Patient,
            patient_id: Some(patient_id),
        }
    }

    pub fn admin() -> Self {
        Self {
            schema: Schema::Admin,
            role: Role::Admin,
            patient_id: None,
        }
    }
}

/// One step of the session setup sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScopeStatement {
    /// `SET_IDENTITY_SQL` with this value bound as `$1`.
    BindIdentity { value: String },
    /// Rendered from closed enum text only.
    Raw { sql: String },
}

/// Render the ordered setup sequence for a scope. Pure; the executor
/// replays it verbatim on each fresh connection.
pub(crate) fn scope_statements(scope: &SessionScope) -> Vec<ScopeStatement> {
    let mut steps = Vec::with_capacity(3);
    if let Some(id) = scope.patient_id {
        steps.push(ScopeStatement::BindIdentity {
            value: id.to_string(),
        });
    }
    steps.push(ScopeStatement::Raw {
        sql: format!("SET search_path TO {}", scope.schema.as_str()),
    });
    steps.push(ScopeStatement::Raw {
        sql: format!("SET ROLE {}", scope.role.as_str()),
    });
    steps
}
