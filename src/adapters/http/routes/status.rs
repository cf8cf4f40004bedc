use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct AppStatus {
    status: &'static str,
    environment: String,
    version: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(status))
}

async fn status(State(app_state): State<AppState>) -> Json<AppStatus> {
    Json(AppStatus {
        status: "available",
        environment: app_state.config.environment.clone(),
        version: VERSION,
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;
    use crate::test_utils::TestAppStateBuilder;

    #[tokio::test]
    async fn status_reports_environment_and_version() {
        let app_state = TestAppStateBuilder::new()
            .with_environment("staging")
            .build();
        let server = TestServer::new(router().with_state(app_state)).unwrap();

        let response = server.get("/status").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "available");
        assert_eq!(body["environment"], "staging");
        assert_eq!(body["version"], VERSION);
    }
}
