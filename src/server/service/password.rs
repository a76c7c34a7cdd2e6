use crate::server::error::{internal::InternalError, AppError};

/// bcrypt hashing with a configurable cost.
///
/// Hashing runs on the blocking thread pool since a single hash at the default cost
/// takes long enough to stall the runtime.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_string();
        let cost = self.cost;

        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| InternalError::TaskFailed(e.to_string()))??;

        Ok(hash)
    }

    /// Checks a password against a stored hash.
    ///
    /// Malformed hashes, such as the placeholder of accounts without a usable password,
    /// never match.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_string();
        let hash = hash.to_string();

        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
                .await
                .map_err(|e| InternalError::TaskFailed(e.to_string()))?;

        Ok(matches)
    }
}
