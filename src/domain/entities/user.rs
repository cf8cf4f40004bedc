use secrecy::SecretString;

/// The identity a signin attempt is checked against.
///
/// `password_hash` is a PHC-style string (bcrypt or Argon2). It stays wrapped
/// in a `SecretString` so it never shows up in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: i64,
    pub email: String,
    pub password_hash: SecretString,
}
