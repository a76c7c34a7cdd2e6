//! Request extractors and validation helpers shared by several modules.

pub mod document;
pub mod extract;
pub mod response;
pub mod validation;
