//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models in the service layer and transformed to
//! DTOs at the controller boundary. Parameter types carry the `validator` rules that the
//! services check before touching the database.

pub mod bank_account;
pub mod pagination;
pub mod product;
pub mod status;
pub mod system;
pub mod user;
