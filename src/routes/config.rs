use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{db::DbConfig, state::AppState};

pub fn config_routes() -> Router<AppState> {
    Router::new().route("/config/db", get(db_config_route))
}

#[instrument(skip(state))]
pub async fn db_config_route(State(state): State<AppState>) -> Json<DbConfig> {
    Json(state.config.db.clone())
}
