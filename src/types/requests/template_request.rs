use serde::Deserialize;

/// Metadata for a template already placed in the external object store.
/// `uploaded_by` is the uploader's hex ObjectId.
#[derive(Debug, Deserialize)]
pub struct UploadTemplateRequest {
    pub name: String,
    pub category: String,
    pub object_key: String,
    pub locale: String,
    pub uploaded_by: String,
}
