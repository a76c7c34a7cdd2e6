//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation and business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Repositories performing database operations on SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - CORS, content-type checks, JSON normalization, auth guards
//!
//! # Infrastructure
//!
//! - **Bootstrap** (`bootstrap`) - Module registry merging each module's routes by priority
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connections, config)
//! - **Startup** (`startup`) - Database connections, migrations and the session layer
//! - **Router** (`router`) - Route providers, middleware stack and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request; middleware checks content type and normalizes JSON
//! 2. **Controller** extracts path, query and body, converts DTOs to params, calls the service
//! 3. **Service** validates params, applies business rules, calls repositories
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts entities into domain models
//! 6. **Controller** converts domain models to DTOs wrapped in the response envelope

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
