// src/modules/media/data_url.rs
//
// Images are data, not links: an accepted upload becomes a self-contained
// data URL stored directly in `image` / `avatar` / `gallery` fields.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::modules::media::upload_policy::InlineImagePolicy;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InlineImageError {
    #[error("Image is {size} bytes, which exceeds the {max} byte limit")]
    TooLarge { size: u64, max: u64 },

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),
}

/// Validate against the policy and encode as `data:<mime>;base64,<payload>`.
pub fn encode_inline_image(
    policy: &InlineImagePolicy,
    mime_type: &str,
    bytes: &[u8],
) -> Result<String, InlineImageError> {
    if !policy.allows_mime_type(mime_type) {
        return Err(InlineImageError::UnsupportedType(mime_type.to_string()));
    }

    let size = bytes.len() as u64;
    if size > policy.max_file_size_bytes {
        return Err(InlineImageError::TooLarge {
            size,
            max: policy.max_file_size_bytes,
        });
    }

    Ok(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
}
