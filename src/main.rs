mod app;
mod auth;
mod cart;
mod config;
mod db;
mod routes;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "capture_fixture=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init();
    let db = &state.config.db;
    let connect = db.connect_options();
    let pool = db.pool_options();
    tracing::info!(
        host = %connect.get_host(),
        port = connect.get_port(),
        database = ?connect.get_database(),
        ssl_mode = ?connect.get_ssl_mode(),
        ca = db.ssl.ca.is_some(),
        max_connections = pool.get_max_connections(),
        idle_timeout = ?pool.get_idle_timeout(),
        "database config loaded"
    );

    let app = app::build_app(state.clone());
    app::serve(app, &state).await
}
