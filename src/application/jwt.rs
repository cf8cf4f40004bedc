use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::app_error::{AppError, AppResult};
use crate::infra::InfraError;

/// Longest validity window a token may carry.
pub const MAX_TTL: Duration = Duration::days(365);

/// Session token payload. Field names are the registered JWT claim names so
/// any standard HS256 verifier can read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: Vec<String>,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

/// Mints HS256 session tokens with one long-lived signing secret.
pub struct TokenIssuer {
    secret: SecretString,
    issuer: String,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(
        secret: SecretString,
        issuer: impl Into<String>,
        ttl: Duration,
    ) -> Result<Self, InfraError> {
        if secret.expose_secret().trim().is_empty() {
            return Err(InfraError::ConfigMissing { var: "JWT_SECRET" });
        }
        let issuer = issuer.into();
        if issuer.trim().is_empty() {
            return Err(InfraError::ConfigInvalid {
                var: "JWT_ISSUER",
                reason: "must not be empty".to_string(),
            });
        }
        // Claims carry whole seconds, so anything under one second would give exp == nbf.
        if ttl.whole_seconds() < 1 {
            return Err(InfraError::ConfigInvalid {
                var: "ACCESS_TOKEN_TTL_SECS",
                reason: "must be at least one second".to_string(),
            });
        }
        if ttl > MAX_TTL {
            return Err(InfraError::ConfigInvalid {
                var: "ACCESS_TOKEN_TTL_SECS",
                reason: format!("must not exceed {} seconds", MAX_TTL.whole_seconds()),
            });
        }
        Ok(Self {
            secret,
            issuer,
            ttl,
        })
    }

    pub fn claims_at(&self, subject: &str, now: OffsetDateTime) -> AppResult<Claims> {
        if subject.is_empty() {
            return Err(AppError::Internal("token subject is empty".to_string()));
        }
        let now = now.unix_timestamp();
        if now <= 0 {
            return Err(AppError::Internal(format!(
                "clock reads {now}, refusing to issue a token"
            )));
        }
        let exp = now
            .checked_add(self.ttl.whole_seconds())
            .ok_or_else(|| AppError::Internal(format!("token expiry overflows at {now}")))?;
        Ok(Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            aud: vec![self.issuer.clone()],
            iat: now,
            nbf: now,
            exp,
        })
    }

    pub fn issue(&self, subject: &str) -> AppResult<String> {
        self.issue_at(subject, OffsetDateTime::now_utc())
    }

    pub fn issue_at(&self, subject: &str, now: OffsetDateTime) -> AppResult<String> {
        let claims = self.claims_at(subject, now)?;
        let header = Header::new(Algorithm::HS256);
        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Decode a token minted by this issuer, checking signature, issuer,
    /// audience, `nbf` and `exp`.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["sub", "iss", "aud", "exp", "nbf"]);
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::InvalidCredentials)
    }
}
