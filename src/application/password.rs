//! Password hash verification.
//!
//! Stored hashes are PHC-style strings. Two schemes are understood:
//! bcrypt (`$2a$`, `$2b$`, `$2x$`, `$2y$`) and Argon2 (`$argon2id$`, `$argon2i$`,
//! `$argon2d$`). Both libraries compare the recomputed digest in constant time.
//!
//! Verification never fails structurally on the submitted secret. A stored hash
//! that cannot be used is reported as a mismatch and logged as an anomaly.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core::OsRng},
};
use base64::Engine;
use tracing::warn;

use crate::app_error::{AppError, AppResult};

const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];
const BCRYPT_HASH_LEN: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashScheme {
    Bcrypt { cost: u32 },
    Argon2id,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StoredScheme {
    Bcrypt,
    Argon2,
}

fn detect(stored_hash: &str) -> Option<StoredScheme> {
    if stored_hash.starts_with("$argon2") {
        Some(StoredScheme::Argon2)
    } else if BCRYPT_PREFIXES.iter().any(|p| stored_hash.starts_with(p)) {
        Some(StoredScheme::Bcrypt)
    } else {
        None
    }
}

/// Whether `stored_hash` is a hash `verify_password` can compare against.
/// An unusable hash rejects every attempt without doing any hashing work.
pub fn is_usable_hash(stored_hash: &str) -> bool {
    match detect(stored_hash) {
        Some(StoredScheme::Bcrypt) => {
            stored_hash.len() == BCRYPT_HASH_LEN
                && bcrypt_cost(stored_hash).is_some_and(|cost| (4..=31).contains(&cost))
        }
        Some(StoredScheme::Argon2) => PasswordHash::new(stored_hash)
            .ok()
            .is_some_and(|parsed| parsed.hash.is_some() && argon2_like(&parsed).is_ok()),
        None => false,
    }
}

/// Returns `true` only when `password` hashes to `stored_hash`.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match detect(stored_hash) {
        Some(StoredScheme::Bcrypt) => match bcrypt::verify(password, stored_hash) {
            Ok(matched) => matched,
            Err(err) => {
                warn!(error = %err, "stored bcrypt hash is unusable");
                false
            }
        },
        Some(StoredScheme::Argon2) => verify_argon2(password, stored_hash),
        None => {
            warn!("stored password hash has an unrecognised format");
            false
        }
    }
}

fn verify_argon2(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(error = %err, "stored argon2 hash is unusable");
            return false;
        }
    };
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => true,
        Err(password_hash::Error::Password) => false,
        Err(err) => {
            warn!(error = %err, "stored argon2 hash is unusable");
            false
        }
    }
}

pub fn hash_password(password: &str, scheme: HashScheme) -> AppResult<String> {
    match scheme {
        HashScheme::Bcrypt { cost } => {
            bcrypt::hash(password, cost).map_err(|e| AppError::Internal(e.to_string()))
        }
        HashScheme::Argon2id => hash_argon2(&Argon2::default(), password),
    }
}

fn hash_argon2(hasher: &Argon2<'_>, password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    hasher
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Hash a random secret with the same scheme and cost as `stored_hash`.
///
/// Comparing against this on an unknown handle costs as much as a real
/// comparison, so lookup misses cannot be told apart by response time.
pub fn dummy_hash_like(stored_hash: &str) -> AppResult<String> {
    let secret = random_secret();
    match detect(stored_hash) {
        Some(StoredScheme::Argon2) => match PasswordHash::new(stored_hash) {
            Ok(parsed) => hash_argon2(&argon2_like(&parsed)?, &secret),
            Err(_) => hash_password(&secret, HashScheme::Argon2id),
        },
        Some(StoredScheme::Bcrypt) => {
            let cost = bcrypt_cost(stored_hash).unwrap_or(bcrypt::DEFAULT_COST);
            hash_password(&secret, HashScheme::Bcrypt { cost })
        }
        None => hash_password(
            &secret,
            HashScheme::Bcrypt {
                cost: bcrypt::DEFAULT_COST,
            },
        ),
    }
}

fn argon2_like(parsed: &PasswordHash<'_>) -> AppResult<Argon2<'static>> {
    let algorithm =
        Algorithm::new(parsed.algorithm.as_str()).map_err(|e| AppError::Internal(e.to_string()))?;
    let version = match parsed.version {
        Some(v) => Version::try_from(v).map_err(|e| AppError::Internal(e.to_string()))?,
        None => Version::V0x13,
    };
    let params = Params::try_from(parsed).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Argon2::new(algorithm, version, params))
}

// "$2b$12$<salt+digest>" -> 12
fn bcrypt_cost(stored_hash: &str) -> Option<u32> {
    stored_hash.split('$').nth(2)?.parse().ok()
}

fn random_secret() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
