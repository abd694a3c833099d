//! `data:image/png;base64,...` wrapping of signature images.

use crate::errors::{AppError, AppResult};
use crate::signature::png;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const PNG_PREFIX: &str = "data:image/png;base64,";

pub fn encode_png(bytes: &[u8]) -> String {
    format!("{PNG_PREFIX}{}", STANDARD.encode(bytes))
}

/// Unwrap a PNG data URI. The image is validated, the original bytes are
/// returned untouched.
pub fn decode_png(uri: &str) -> AppResult<Vec<u8>> {
    let payload = uri
        .strip_prefix(PNG_PREFIX)
        .ok_or_else(|| AppError::Image("expected a PNG data URI".into()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::Image(format!("invalid base64: {e}")))?;

    png::decode(&bytes)?;
    Ok(bytes)
}
