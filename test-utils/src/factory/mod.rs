//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let product = factory::product::ProductFactory::new(&db)
//!     .price(19.9)
//!     .build()
//!     .await?;
//! ```

pub mod bank_account;
pub mod helpers;
pub mod product;
pub mod user;
