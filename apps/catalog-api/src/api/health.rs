//! Readiness endpoint.

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

/// Readiness probe: verifies the database connection with a round trip.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let db = state.db.clone();
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async move {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
