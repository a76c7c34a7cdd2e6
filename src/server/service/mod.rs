//! Business logic layer.
//!
//! Services validate parameters first, then apply business rules, then call the
//! repositories. They convert entity models into domain models so controllers never
//! see database types.

pub mod auth;
pub mod bank_account;
pub mod password;
pub mod product;
pub mod system;
pub mod user;
