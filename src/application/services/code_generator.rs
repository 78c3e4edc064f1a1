//! Unique short code generation with bounded collision retries.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_code::{CODE_LENGTH, random_code};

/// Default number of draws before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum CodeGenerationError {
    /// Every drawn code was already taken.
    #[error("no free short code after {attempts} attempts")]
    Exhausted { attempts: usize },
    /// The store could not be asked whether a code is taken.
    #[error("short code lookup failed: {0}")]
    Lookup(#[source] AppError),
}

/// Draws random codes until one is not present in the store.
///
/// The check is not atomic with the later insert; the unique constraint on
/// `links.code` catches the remaining race.
pub struct CodeGenerator<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    code_length: usize,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> CodeGenerator<L> {
    /// Creates a generator with 6-character codes and 5 attempts.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_limits(link_repository, CODE_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_limits(link_repository: Arc<L>, code_length: usize, max_attempts: usize) -> Self {
        Self {
            link_repository,
            code_length,
            max_attempts,
        }
    }

    /// Returns a code that no row, deleted or not, currently uses.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenerationError::Exhausted`] after `max_attempts` collisions
    /// and [`CodeGenerationError::Lookup`] if the store query fails.
    #[tracing::instrument(skip(self))]
    pub async fn generate_unique_code(&self) -> Result<String, CodeGenerationError> {
        for attempt in 1..=self.max_attempts {
            let code = random_code(self.code_length);

            let taken = self
                .link_repository
                .code_exists(&code)
                .await
                .map_err(CodeGenerationError::Lookup)?;

            if !taken {
                tracing::debug!(attempt, code = %code, "generated short code");
                return Ok(code);
            }

            tracing::warn!(attempt, code = %code, "short code collision, retrying");
        }

        tracing::error!(attempts = self.max_attempts, "short code space exhausted");
        Err(CodeGenerationError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_returns_first_free_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_code_exists()
            .withf(|code| code.len() == CODE_LENGTH)
            .times(1)
            .returning(|_| Ok(false));

        let generator = CodeGenerator::new(Arc::new(mock_repo));

        let code = generator.generate_unique_code().await.unwrap();

        assert_eq!(code.len(), 6);
    }

    #[tokio::test]
    async fn test_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_code_exists()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        mock_repo
            .expect_code_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        let generator = CodeGenerator::new(Arc::new(mock_repo));

        assert!(generator.generate_unique_code().await.is_ok());
    }

    #[tokio::test]
    async fn test_exhausted_after_max_attempts() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_code_exists()
            .times(DEFAULT_MAX_ATTEMPTS)
            .returning(|_| Ok(true));

        let generator = CodeGenerator::new(Arc::new(mock_repo));

        let err = generator.generate_unique_code().await.unwrap_err();

        assert!(matches!(err, CodeGenerationError::Exhausted { attempts: 5 }));
    }

    #[tokio::test]
    async fn test_lookup_failure_stops_immediately() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_code_exists()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let generator = CodeGenerator::new(Arc::new(mock_repo));

        let err = generator.generate_unique_code().await.unwrap_err();

        assert!(matches!(err, CodeGenerationError::Lookup(_)));
    }

    #[tokio::test]
    async fn test_custom_limits() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_code_exists()
            .withf(|code| code.len() == 8)
            .times(2)
            .returning(|_| Ok(true));

        let generator = CodeGenerator::with_limits(Arc::new(mock_repo), 8, 2);

        let err = generator.generate_unique_code().await.unwrap_err();

        assert!(matches!(err, CodeGenerationError::Exhausted { attempts: 2 }));
    }
}
