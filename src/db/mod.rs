pub mod catalog;
pub mod operations;
pub mod scope;
pub mod session;
#[cfg(test)]
pub(crate) mod testdb;

pub use catalog::*;
pub use operations::*;
pub use scope::*;
pub use session::*;

use postgres::error::SqlState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Storage unreachable, or the connection died below the protocol.
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// The narrowed role lacks a grant, or a row-security policy
    /// rejected the statement.
    #[error("Permission denied for role {role}: {detail}")]
    PermissionDenied { role: String, detail: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    /// Rejected before any statement was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A partition is missing a table the catalog requires. Fatal at
    /// startup; never raised afterwards.
    #[error("Missing required table {schema}.{table}")]
    MissingTable { schema: String, table: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Query failed: {0}")]
    Query(#[from] postgres::Error),
}

/// Buckets driver failures are classified into, keyed on SQLSTATE class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SqlStateClass {
    PermissionDenied,
    ConstraintViolation,
    Other,
}

/// Class 28 covers authorization failures at connect time; 42501 is what
/// PostgreSQL raises both for missing grants and for rows rejected by a
/// row-security WITH CHECK policy. Classes 22 and 23 are data and
/// integrity violations (bad casts, FK, NOT NULL, CHECK).
pub(crate) fn classify_sqlstate(state: &SqlState) -> SqlStateClass {
    let code = state.code();
    if state == &SqlState::INSUFFICIENT_PRIVILEGE || code.starts_with("28") {
        SqlStateClass::PermissionDenied
    } else if code.starts_with("23") || code.starts_with("22") {
        SqlStateClass::ConstraintViolation
    } else {
        SqlStateClass::Other
    }
}

impl DatabaseError {
    /// Single conversion point for driver errors. `role` is the effective
    /// database role at the time of the failure; it only ends up in the
    /// error when the failure is a permission denial.
    pub(crate) fn from_pg(err: postgres::Error, role: &str) -> Self {
        let Some(state) = err.code() else {
            // No SQLSTATE: refused socket, dropped connection, protocol
            // trouble. Everything the server never saw lands here.
            return DatabaseError::Connection(err.to_string());
        };
        let detail = err
            .as_db_error()
            .map(|db| db.message().to_string())
            .unwrap_or_else(|| err.to_string());
        match classify_sqlstate(state) {
            SqlStateClass::PermissionDenied => DatabaseError::PermissionDenied {
                role: role.to_string(),
                detail,
            },
            SqlStateClass::ConstraintViolation => DatabaseError::ConstraintViolation(detail),
            SqlStateClass::Other => DatabaseError::Query(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_codes_are_constraint_violations() {
        for code in ["23503", "23502", "23505", "23514"] {
            assert_eq!(
                classify_sqlstate(&SqlState::from_code(code)),
                SqlStateClass::ConstraintViolation,
                "SQLSTATE {code}"
            );
        }
    }

    #[test]
    fn bad_data_codes_are_constraint_violations() {
        // Class 22: invalid text representation, numeric overflow.
        for code in ["22P02", "22003"] {
            assert_eq!(
                classify_sqlstate(&SqlState::from_code(code)),
                SqlStateClass::ConstraintViolation,
                "SQLSTATE {code}"
            );
        }
    }

    #[test]
    fn privilege_and_auth_codes_are_permission_denied() {
        for code in ["42501", "28000", "28P01"] {
            assert_eq!(
                classify_sqlstate(&SqlState::from_code(code)),
                SqlStateClass::PermissionDenied,
                "SQLSTATE {code}"
            );
        }
    }

    #[test]
    fn unrelated_codes_stay_unclassified() {
        // Undefined table, syntax error, query cancelled.
        for code in ["42P01", "42601", "57014"] {
            assert_eq!(
                classify_sqlstate(&SqlState::from_code(code)),
                SqlStateClass::Other,
                "SQLSTATE {code}"
            );
        }
    }
}
