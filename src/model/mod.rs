//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes of request bodies and response payloads. They carry
//! no behaviour; the server converts them into its own parameter and domain types.

pub mod api;
pub mod auth;
pub mod bank_account;
pub mod product;
pub mod system;
pub mod user;
