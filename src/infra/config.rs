use std::env::VarError;
use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use time::Duration;

use crate::infra::InfraError;

/// Identity record the server authenticates against when nothing overrides it.
pub const DEFAULT_SIGNIN_USER_ID: i64 = 10;
pub const DEFAULT_SIGNIN_EMAIL: &str = "koopa@go.com";
pub const DEFAULT_SIGNIN_PASSWORD_HASH: &str =
    "$2a$12$OenzkpXD2MyXwjXszZaAROsarYjsl2hTaW8.zxz8lntm1ljfe.lZG";

pub struct AppConfig {
    pub jwt_secret: SecretString,
    /// Used as both `iss` and the single `aud` entry of issued tokens.
    pub jwt_issuer: String,
    pub access_token_ttl: Duration,
    pub bind_addr: SocketAddr,
    /// Reported by `/status` (e.g. "development", "production").
    pub environment: String,
    pub cors_origin: HeaderValue,
    pub signin_user_id: i64,
    pub signin_email: String,
    pub signin_password_hash: SecretString,
    /// JSON log output. Skipped when the file cannot be created.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let jwt_secret = jwt_secret_from(std::env::var("JWT_SECRET"))?;

        let jwt_issuer: String = get_env_default("JWT_ISSUER", "mydomain.com".to_string());
        let access_token_ttl_secs: i64 = get_env_default("ACCESS_TOKEN_TTL_SECS", 86_400);

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 4000)),
        );
        let environment: String = get_env_default("APP_ENV", "development".to_string());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "CORS_ORIGIN",
                    reason: "not a valid header value".to_string(),
                })?;

        let signin_user_id: i64 = get_env_default("SIGNIN_USER_ID", DEFAULT_SIGNIN_USER_ID);
        let signin_email: String =
            get_env_default("SIGNIN_EMAIL", DEFAULT_SIGNIN_EMAIL.to_string());
        let signin_password_hash = SecretString::new(
            get_env_default(
                "SIGNIN_PASSWORD_HASH",
                DEFAULT_SIGNIN_PASSWORD_HASH.to_string(),
            )
            .into(),
        );
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Ok(Self {
            jwt_secret,
            jwt_issuer,
            access_token_ttl: Duration::seconds(access_token_ttl_secs),
            bind_addr,
            environment,
            cors_origin,
            signin_user_id,
            signin_email,
            signin_password_hash,
            log_file,
        })
    }
}

// Never defaulted. Blank values are rejected by `TokenIssuer::new`.
fn jwt_secret_from(var: Result<String, VarError>) -> Result<SecretString, InfraError> {
    var.map(|s| SecretString::new(s.into()))
        .map_err(|_| InfraError::ConfigMissing { var: "JWT_SECRET" })
}
