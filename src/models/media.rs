use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uploaded media metadata. The backend also returns the file body
/// base64-encoded; it is not kept client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub file_type: String,
    pub file_size: u64,
    #[serde(default, with = "crate::models::timestamp")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl MediaFile {
    pub fn is_image(&self) -> bool {
        self.file_type.starts_with("image/")
    }
}
