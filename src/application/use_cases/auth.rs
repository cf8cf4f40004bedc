use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::{jwt::TokenIssuer, password},
    domain::entities::user::UserCredentials,
};

/// Resolves a submitted handle to the stored identity record.
#[async_trait]
pub trait CredentialRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserCredentials>>;
}

#[derive(Clone)]
pub struct AuthUseCases {
    repo: Arc<dyn CredentialRepo>,
    issuer: Arc<TokenIssuer>,
    dummy_hash: SecretString,
}

impl AuthUseCases {
    /// `dummy_hash` is compared against when the handle is unknown; it should
    /// carry the same scheme and cost as real stored hashes.
    pub fn new(
        repo: Arc<dyn CredentialRepo>,
        issuer: Arc<TokenIssuer>,
        dummy_hash: SecretString,
    ) -> Self {
        Self {
            repo,
            issuer,
            dummy_hash,
        }
    }

    /// Check `password` for `email` and mint a session token on success.
    ///
    /// Unknown handles and wrong secrets both come back as
    /// `AppError::InvalidCredentials`, after the same amount of hashing work.
    #[instrument(skip(self, password))]
    pub async fn signin(&self, email: &str, password: &str) -> AppResult<String> {
        let record = self.repo.find_by_email(email).await?;

        let (stored_hash, user_id) = match &record {
            Some(user) => (user.password_hash.clone(), Some(user.id)),
            None => (self.dummy_hash.clone(), None),
        };

        let matched = check_password(password.to_owned(), stored_hash).await?;

        let Some(user_id) = user_id.filter(|_| matched) else {
            debug!("signin rejected");
            return Err(AppError::InvalidCredentials);
        };

        debug!(user_id, "credentials verified, issuing token");
        self.issuer.issue(&user_id.to_string())
    }
}

// Hash comparison is deliberately slow; keep it off the async workers.
async fn check_password(password: String, stored_hash: SecretString) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        password::verify_password(&password, stored_hash.expose_secret())
    })
    .await
    .map_err(|e| AppError::Internal(format!("password check task failed: {e}")))
}
