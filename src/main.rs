mod config;
mod routes;
mod services;
mod state;

use config::ServerConfig;
use services::cameras::CameraRegistry;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let registry = match CameraRegistry::load(&config.cameras_file).await {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "camera registry unavailable");
            std::process::exit(1);
        }
    };
    if registry.is_empty() {
        tracing::warn!(file = %config.cameras_file.display(), "camera registry is empty");
    }
    tracing::info!(
        cameras = registry.len(),
        file = %config.cameras_file.display(),
        initial = ?config.initial_active,
        "camera registry loaded"
    );

    let state = state::AppState::new(registry, config.initial_active);

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "camwall listening");
    axum::serve(listener, app).await.expect("server failed");
}
