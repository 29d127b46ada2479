//! Role-scoped healthcare records backend. Three storage partitions in
//! one PostgreSQL database, each call narrowed with `SET ROLE` and a
//! pinned search path before any statement runs; row security keeps
//! patients inside their own records. A dashboard JSON API fronts the
//! nine storage operations.

pub mod api; // Dashboard API: router, endpoints, error mapping
pub mod config;
pub mod db; // Catalog reflection + role-scoped executor + operations
pub mod models;
