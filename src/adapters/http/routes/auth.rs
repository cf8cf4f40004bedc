use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::auth::AuthUseCases,
};

#[derive(Deserialize)]
struct SigninPayload {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct SigninResponse {
    response: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/signin", post(signin))
}

async fn signin(
    State(auth): State<Arc<AuthUseCases>>,
    payload: Result<Json<SigninPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // An undecodable body is indistinguishable from a bad credential.
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "signin body rejected");
        AppError::InvalidCredentials
    })?;

    let token = auth.signin(&payload.email, &payload.password).await?;
    Ok(Json(SigninResponse { response: token }))
}
