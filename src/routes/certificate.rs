use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, info_span, Instrument, Span};

use super::error::AppError;
use crate::certificate::Submission;
use crate::state::AppState;
use crate::storage::generate_request_id;

pub const DOWNLOAD_NAME: &str = "certificate.png";

/// Parts of a submission seen so far; a repeated part replaces the earlier one.
#[derive(Default)]
struct SubmissionParts {
    name: Option<String>,
    state: Option<String>,
    district: Option<String>,
    field: Option<String>,
    msme_reg: Option<String>,
    profile_pic: Option<Vec<u8>>,
    signature: Option<Vec<u8>>,
}

impl SubmissionParts {
    async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut parts = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "name" => parts.name = Some(field.text().await?),
                "state" => parts.state = Some(field.text().await?),
                "district" => parts.district = Some(field.text().await?),
                "field" => parts.field = Some(field.text().await?),
                "msme_reg" => parts.msme_reg = Some(field.text().await?),
                "profile_pic" => parts.profile_pic = Some(field.bytes().await?.to_vec()),
                "signature" => parts.signature = Some(field.bytes().await?.to_vec()),
                other => tracing::debug!("Ignoring form part {:?}", other),
            }
        }

        Ok(parts)
    }

    fn into_submission(self) -> Result<Submission, AppError> {
        Ok(Submission {
            name: self.name.ok_or(AppError::MissingField("name"))?,
            state: self.state.ok_or(AppError::MissingField("state"))?,
            district: self.district.ok_or(AppError::MissingField("district"))?,
            field: self.field.ok_or(AppError::MissingField("field"))?,
            msme_reg: self.msme_reg.ok_or(AppError::MissingField("msme_reg"))?,
            profile_pic: self.profile_pic.ok_or(AppError::MissingField("profile_pic"))?,
            signature: self.signature.ok_or(AppError::MissingField("signature"))?,
        })
    }
}

/// Span that carries one submission from multipart parsing through composition.
fn request_span(request_id: &str) -> Span {
    info_span!("certificate", request_id)
}

pub async fn generate_certificate(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let span = request_span(&generate_request_id());

    let submission = SubmissionParts::read(&mut multipart)
        .instrument(span.clone())
        .await?
        .into_submission()?;

    // Decoding and encoding are CPU-bound; keep them off the async workers.
    let composer = state.composer.clone();
    let compose_span = span.clone();
    let png = tokio::task::spawn_blocking(move || {
        let _guard = compose_span.enter();
        composer.compose(&submission)
    })
    .await??;

    span.in_scope(|| info!("Generated certificate ({} bytes)", png.len()));

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_NAME),
            ),
        ],
        png,
    )
        .into_response())
}
