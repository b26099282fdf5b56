mod certificate;
mod config;
mod routes;
mod state;
mod storage;
mod templates;

use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "certgen=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env()?;

    // Created for parity with the deployed layout; certificates are never written here.
    storage::ensure_upload_dir(&config.upload_folder)?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(state::AppState::new(config));

    let resources = state.composer.config();
    tracing::info!(
        "Using template {} (fonts: {}, {})",
        resources.template_path.display(),
        resources.script_font_path.display(),
        resources.regular_font_path.display()
    );
    let app = routes::router(state);

    tracing::info!("certgen listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
