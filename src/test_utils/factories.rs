//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

use crate::{
    application::{
        jwt::TokenIssuer,
        password::{HashScheme, hash_password},
    },
    domain::entities::user::UserCredentials,
    infra::config::AppConfig,
};

pub const TEST_JWT_SECRET: &str = "test_jwt_secret";
pub const TEST_JWT_ISSUER: &str = "mydomain.com";

/// bcrypt at the minimum cost, so fixtures hash in milliseconds.
pub fn test_password_hash(password: &str) -> String {
    hash_password(password, HashScheme::Bcrypt { cost: 4 }).unwrap()
}

/// Create test credentials whose hash matches `password`.
pub fn create_test_credentials(
    password: &str,
    overrides: impl FnOnce(&mut UserCredentials),
) -> UserCredentials {
    let mut user = UserCredentials {
        id: 10,
        email: "koopa@go.com".to_string(),
        password_hash: SecretString::new(test_password_hash(password).into()),
    };
    overrides(&mut user);
    user
}

/// Token issuer sharing the secret used by `test_config` and `TestAppStateBuilder`.
pub fn test_token_issuer() -> TokenIssuer {
    TokenIssuer::new(
        SecretString::new(TEST_JWT_SECRET.into()),
        TEST_JWT_ISSUER,
        Duration::hours(24),
    )
    .unwrap()
}

/// Create minimal config for testing.
pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: SecretString::new(TEST_JWT_SECRET.into()),
        jwt_issuer: TEST_JWT_ISSUER.to_string(),
        access_token_ttl: Duration::hours(24),
        bind_addr: "127.0.0.1:4000".parse::<SocketAddr>().unwrap(),
        environment: "test".to_string(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        signin_user_id: 10,
        signin_email: "koopa@go.com".to_string(),
        signin_password_hash: SecretString::new(test_password_hash("password").into()),
        log_file: String::new(),
    }
}
