use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Largest accepted decoded image payload: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for inline images.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// A validated inline image, transported as a self-describing data URI.
///
/// The URI is embedded verbatim into the preview surface, so the rasterizer
/// decodes the payload; nothing in this crate ever does.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InlineImage {
    /// The full `data:<mime>;base64,<payload>` URI.
    pub data_uri: String,
    pub mime_type: String,
    /// Decoded payload size in bytes.
    pub size: usize,
}

/// Validate a `data:` URI against the accepted MIME types and size cap.
///
/// The decoded size is computed from the base64 payload length without
/// decoding. Failures are per-file: callers report them individually and
/// keep processing the rest of a batch.
pub fn validate_data_uri(uri: &str) -> Result<InlineImage, CoreError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CoreError::MalformedDataUri("missing data: scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CoreError::MalformedDataUri("missing payload separator".to_string()))?;

    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| CoreError::MalformedDataUri("payload is not base64-encoded".to_string()))?;

    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err(CoreError::UnsupportedImageType(mime_type.to_string()));
    }

    if payload.is_empty() {
        return Err(CoreError::MalformedDataUri("empty payload".to_string()));
    }

    let size = decoded_len(payload);
    if size > MAX_IMAGE_BYTES {
        return Err(CoreError::ImageTooLarge { size });
    }

    Ok(InlineImage {
        data_uri: uri.to_string(),
        mime_type: mime_type.to_string(),
        size,
    })
}

/// Decoded byte length of a base64 payload: 3 bytes per 4 characters,
/// minus trailing padding.
fn decoded_len(payload: &str) -> usize {
    let padding = payload.chars().rev().take_while(|&c| c == '=').count();
    (payload.len() / 4) * 3 - padding
}
