use crate::{
    adapters::{
        http::app_state::AppState, persistence::static_credentials::StaticCredentialStore,
    },
    application::{jwt::TokenIssuer, password},
    domain::entities::user::UserCredentials,
    infra::{InfraError, config::AppConfig},
    use_cases::auth::{AuthUseCases, CredentialRepo},
};
use secrecy::{ExposeSecret, SecretString};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let issuer = Arc::new(TokenIssuer::new(
        config.jwt_secret.clone(),
        config.jwt_issuer.clone(),
        config.access_token_ttl,
    )?);

    if !password::is_usable_hash(config.signin_password_hash.expose_secret()) {
        tracing::warn!(
            email = %config.signin_email,
            "SIGNIN_PASSWORD_HASH is not a usable bcrypt or argon2 hash, every signin will be rejected"
        );
    }

    // Same cost as the real record, so unknown handles are not faster to reject.
    let dummy_hash = password::dummy_hash_like(config.signin_password_hash.expose_secret())
        .map_err(|e| InfraError::PasswordHashing(e.to_string()))?;

    let user = UserCredentials {
        id: config.signin_user_id,
        email: config.signin_email.clone(),
        password_hash: config.signin_password_hash.clone(),
    };
    let credentials = Arc::new(StaticCredentialStore::new(user)) as Arc<dyn CredentialRepo>;

    let auth_use_cases = AuthUseCases::new(
        credentials,
        issuer,
        SecretString::new(dummy_hash.into()),
    );

    Ok(AppState {
        config: Arc::new(config),
        auth_use_cases: Arc::new(auth_use_cases),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movie_query=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let (json_layer, file_error) = match File::create(log_file) {
        Ok(file) => {
            let layer = fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true);
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some(err) = file_error {
        tracing::warn!(error = %err, log_file, "JSON log file unavailable, logging to console only");
    }
}
