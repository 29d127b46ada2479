//! API endpoint handlers.
//!
//! One module per dashboard role, plus the health check. Handlers stay
//! thin: scope selection and row filtering live in the `db` layer.

pub mod admin;
pub mod doctor;
pub mod health;
pub mod patient;
