//! HTTP request handlers.
//!
//! Controllers extract state, path ids and JSON bodies, build parameter types from the
//! DTOs, call a service and wrap the result in the response envelope. Errors propagate as
//! `AppError`.

pub mod auth;
pub mod bank_account;
pub mod product;
pub mod system;
pub mod user;
