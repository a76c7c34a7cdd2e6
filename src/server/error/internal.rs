use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored column holds a value outside its enumerated domain.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The unexpected value
        value: String,
    },

    /// Two route providers were registered under the same name.
    #[error("Module '{0}' is already registered")]
    DuplicateModule(String),

    /// A blocking task such as password hashing panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}
