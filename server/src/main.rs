mod cors;
mod routes;
mod services;
mod state;

use crate::state::ServerConfig;

fn config_from_env() -> ServerConfig {
    let echo_codes = routes::auth::env_bool("AUTH_ECHO_CODES").unwrap_or(false);
    let admin_emails = std::env::var("ADMIN_EMAILS")
        .map(|raw| {
            raw.split(',')
                .filter_map(services::session::normalize_email)
                .collect()
        })
        .unwrap_or_default();
    ServerConfig { echo_codes, admin_emails }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = config_from_env();
    if config.echo_codes {
        tracing::warn!("AUTH_ECHO_CODES enabled — login codes are echoed in API responses");
    }

    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "brandkit edge listening");
    axum::serve(listener, app).await.expect("server failed");
}
