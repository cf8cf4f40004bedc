pub mod auth;
pub mod status;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(status::router())
        .nest("/v1", auth::router())
}
