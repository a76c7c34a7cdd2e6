//! HTTP middleware and request guards.
//!
//! Layers applied around every route (CORS, content-type validation, JSON/UTF-8
//! normalization, fallbacks for unknown routes and panics) plus the session-backed
//! `AuthGuard` used inside handlers.

pub mod auth;
pub mod content_type;
pub mod cors;
pub mod fallback;
pub mod json;
pub mod session;
