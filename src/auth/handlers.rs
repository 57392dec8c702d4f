use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info, instrument};

use crate::{
    auth::{
        dto::{AuthResult, Credentials},
        services::authenticate_user,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<AuthResult>, (StatusCode, String)> {
    let result = authenticate_user(state.issuer.as_ref(), &payload.username, &payload.password)
        .map_err(|e| {
            error!(error = %e, "token issue failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!(username = %payload.username, "user logged in");
    Ok(Json(result))
}
