use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

/// Short id attached to the log lines of one certificate request.
pub fn generate_request_id() -> String {
    format!(
        "{}_{}",
        Utc::now().format("%Y%m%d"),
        &Uuid::new_v4().simple().to_string()[..8]
    )
}

pub fn ensure_upload_dir(upload_folder: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(upload_folder)
}
