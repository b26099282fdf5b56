mod certificate;
mod error;
mod pages;

pub use certificate::generate_certificate;
pub use pages::index;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.base_dir.join("static");

    Router::new()
        .route("/", get(index).post(generate_certificate))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
