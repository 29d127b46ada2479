//! Dashboard HTTP API.
//!
//! Exposes the role-scoped database operations as JSON endpoints for a
//! separately served dashboard front end. Routes are nested under
//! `/api/`, one subtree per partition role.
//!
//! The router is composable — `dashboard_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::dashboard_router;
pub use types::{ApiContext, ListResponse};
