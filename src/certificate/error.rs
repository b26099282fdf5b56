use std::path::PathBuf;

use super::layout::ImageSlot;

#[derive(thiserror::Error, Debug)]
pub enum ComposeError {
    #[error("failed to load certificate template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not decode {slot} image: {source}")]
    Upload {
        slot: ImageSlot,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode certificate: {0}")]
    Encode(#[source] image::ImageError),
}

impl ComposeError {
    /// True when the caller sent something unusable, as opposed to a server-side fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ComposeError::Upload { .. })
    }
}
