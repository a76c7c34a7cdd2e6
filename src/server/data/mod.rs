//! Database repository layer for all domain entities.
//!
//! Repositories handle CRUD for each table through SeaORM and return entity models; the
//! service layer converts them into domain models. Page numbers follow `PageRequest` and
//! start at 1; results are ordered by id.

pub mod bank_account;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
