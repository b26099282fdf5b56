use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tera::Context;

use crate::state::AppState;

pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("max_upload_mb", &(state.config.max_upload_bytes / (1024 * 1024)));
    render_template(&state, "form.html", ctx)
}

fn render_template(state: &AppState, name: &str, ctx: Context) -> Html<String> {
    let rendered = state.tera.render(name, &ctx).unwrap_or_else(|e| {
        tracing::error!("Failed to render {}: {}", name, e);
        format!("Template error: {}", name)
    });
    Html(rendered)
}
