//! Shared types for the dashboard API layer.

use std::sync::Arc;

use serde::Serialize;

use crate::api::error::ApiError;
use crate::db::{DatabaseError, ScopedExecutor, SchemaCatalog};

// ═══════════════════════════════════════════════════════════
// API context — shared state for the dashboard router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
///
/// The executor opens a freshly scoped connection per request, so the
/// context itself holds no connection state and is cheap to clone.
#[derive(Clone)]
pub struct ApiContext {
    pub executor: Arc<ScopedExecutor>,
    pub catalog: Arc<SchemaCatalog>,
}

impl ApiContext {
    pub fn new(executor: ScopedExecutor, catalog: SchemaCatalog) -> Self {
        Self {
            executor: Arc::new(executor),
            catalog: Arc::new(catalog),
        }
    }

    /// Runs a storage call on the blocking pool.
    ///
    /// The database layer is synchronous and drives its connections
    /// through a runtime of its own; on an async worker thread that
    /// nesting panics. Every handler's storage access goes through
    /// here so the call lands on a thread that may block.
    pub async fn storage<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: FnOnce(&ScopedExecutor) -> Result<T, DatabaseError> + Send + 'static,
        T: Send + 'static,
    {
        let executor = Arc::clone(&self.executor);
        tokio::task::spawn_blocking(move || call(&executor))
            .await
            .map_err(|e| ApiError::Internal(format!("Task join error: {e}")))?
            .map_err(ApiError::from)
    }
}

// ═══════════════════════════════════════════════════════════
// Response envelopes
// ═══════════════════════════════════════════════════════════

/// List envelope: the rows plus their count, so dashboard tables can
/// render a total without counting client-side.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub rows: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(rows: Vec<T>) -> Self {
        let count = rows.len();
        Self { rows, count }
    }
}
