use async_trait::async_trait;

use crate::{
    app_error::AppResult, domain::entities::user::UserCredentials,
    use_cases::auth::CredentialRepo,
};

/// A single identity record fixed for the lifetime of the process.
pub struct StaticCredentialStore {
    user: UserCredentials,
}

impl StaticCredentialStore {
    pub fn new(user: UserCredentials) -> Self {
        Self { user }
    }
}

#[async_trait]
impl CredentialRepo for StaticCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserCredentials>> {
        if email.trim().eq_ignore_ascii_case(self.user.email.trim()) {
            return Ok(Some(self.user.clone()));
        }
        Ok(None)
    }
}
