//! SeaORM entity models for the storefront database.
//!
//! Each module maps one table. The tables are standalone; no entity declares a relation.

pub mod bank_account;
pub mod prelude;
pub mod product;
pub mod user;
