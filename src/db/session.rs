//! Connection factory and the role-scoped executor.
//!
//! Every call opens a fresh connection, applies the session scope in
//! order (identity, search_path, role), runs exactly one statement and
//! lets the connection drop. Session state therefore cannot leak
//! between callers, which is what makes the executor safe to share
//! across threads. No pooling, no retries, no timeouts here.

use postgres::types::ToSql;
use postgres::{Client, NoTls, Row};

use super::scope::{scope_statements, ScopeStatement, SessionScope, SET_IDENTITY_SQL};
use super::DatabaseError;
use crate::config::{self, DbConfig};

/// Builds connections from held settings. Explicitly passed to whoever
/// needs one; there is no process-global handle.
#[derive(Clone)]
pub struct ConnectionFactory {
    config: postgres::Config,
}

impl ConnectionFactory {
    pub fn new(db: &DbConfig) -> Self {
        let mut config = postgres::Config::new();
        config
            .host(&db.host)
            .port(db.port)
            .user(&db.user)
            .password(db.password.as_str())
            .dbname(&db.dbname)
            .application_name(config::APP_NAME);
        Self { config }
    }

    /// Open a fresh connection under the login user, unscoped. The
    /// catalog uses this at startup; the executor scopes its own.
    pub fn connect(&self) -> Result<Client, DatabaseError> {
        self.config
            .connect(NoTls)
            .map_err(|e| DatabaseError::from_pg(e, self.login_user()))
    }

    fn login_user(&self) -> &str {
        self.config.get_user().unwrap_or("postgres")
    }
}

/// Runs statements under a [`SessionScope`]. One connection per call,
/// dropped on every exit path.
pub struct ScopedExecutor {
    factory: ConnectionFactory,
}

impl ScopedExecutor {
    pub fn new(factory: ConnectionFactory) -> Self {
        Self { factory }
    }

    /// Run a read under the scope and materialize all rows.
    pub fn query(
        &self,
        scope: SessionScope,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, DatabaseError> {
        let mut client = self.factory.connect()?;
        apply_scope(&mut client, &scope)?;
        client
            .query(sql, params)
            .map_err(|e| DatabaseError::from_pg(e, scope.role.as_str()))
    }

    /// Run a write under the scope and return the affected-row count.
    pub fn execute(
        &self,
        scope: SessionScope,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, DatabaseError> {
        let mut client = self.factory.connect()?;
        apply_scope(&mut client, &scope)?;
        client
            .execute(sql, params)
            .map_err(|e| DatabaseError::from_pg(e, scope.role.as_str()))
    }
}

/// Replay the scope's setup sequence on a fresh connection. Runs under
/// the login user; everything after the final `SET ROLE` runs under the
/// narrowed role.
fn apply_scope(client: &mut Client, scope: &SessionScope) -> Result<(), DatabaseError> {
    for step in scope_statements(scope) {
        match step {
            ScopeStatement::BindIdentity { value } => {
                client
                    .execute(SET_IDENTITY_SQL, &[&value])
                    .map_err(|e| DatabaseError::from_pg(e, scope.role.as_str()))?;
            }
            ScopeStatement::Raw { sql } => {
                client
                    .batch_execute(&sql)
                    .map_err(|e| DatabaseError::from_pg(e, scope.role.as_str()))?;
            }
        }
    }
    tracing::debug!(
        schema = scope.schema.as_str(),
        role = scope.role.as_str(),
        identity = scope.patient_id,
        "session scoped"
    );
    Ok(())
}
