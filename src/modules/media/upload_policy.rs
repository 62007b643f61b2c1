// src/modules/media/upload_policy.rs

/// Limits for images stored inline in entity fields. Oversized or
/// non-image uploads are rejected before any state mutation.
#[derive(Debug, Clone)]
pub struct InlineImagePolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl InlineImagePolicy {
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp"];

    pub fn new() -> Self {
        Self {
            max_file_size_bytes: 2 * 1024 * 1024, // 2MB
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    pub fn allows_mime_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(&mime_type)
    }
}

impl Default for InlineImagePolicy {
    fn default() -> Self {
        Self::new()
    }
}
