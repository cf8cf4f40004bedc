//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` backed by an in-memory
//! credential repo and the fixture signing secret.

use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::user::UserCredentials,
    test_utils::{InMemoryCredentialRepo, test_config, test_password_hash, test_token_issuer},
    use_cases::auth::AuthUseCases,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let user = create_test_credentials("secret", |u| u.id = 42);
///
/// let app_state = TestAppStateBuilder::new()
///     .with_user(user)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    users: Vec<UserCredentials>,
    environment: String,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            environment: "test".to_string(),
        }
    }

    /// Add a user to the credential repo.
    pub fn with_user(mut self, user: UserCredentials) -> Self {
        self.users.push(user);
        self
    }

    /// Set the environment name reported by `/status`.
    pub fn with_environment(mut self, environment: &str) -> Self {
        self.environment = environment.to_string();
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let repo = Arc::new(InMemoryCredentialRepo::with_users(self.users));
        let auth_use_cases = Arc::new(AuthUseCases::new(
            repo,
            Arc::new(test_token_issuer()),
            SecretString::new(test_password_hash("dummy").into()),
        ));

        let mut config = test_config();
        config.environment = self.environment;

        AppState {
            config: Arc::new(config),
            auth_use_cases,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
