//! In-memory mock implementations for auth-related repository traits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    app_error::AppResult, domain::entities::user::UserCredentials,
    use_cases::auth::CredentialRepo,
};

// ============================================================================
// InMemoryCredentialRepo
// ============================================================================

/// In-memory implementation of CredentialRepo for testing, keyed by email.
#[derive(Default)]
pub struct InMemoryCredentialRepo {
    pub users: Mutex<HashMap<String, UserCredentials>>,
}

impl InMemoryCredentialRepo {
    pub fn with_users(users: Vec<UserCredentials>) -> Self {
        let map: HashMap<String, UserCredentials> =
            users.into_iter().map(|u| (u.email.clone(), u)).collect();
        Self {
            users: Mutex::new(map),
        }
    }
}

#[async_trait]
impl CredentialRepo for InMemoryCredentialRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserCredentials>> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }
}
