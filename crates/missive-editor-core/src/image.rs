//! Image data-URL encoding for uploaded files.

use base64::{Engine, engine::general_purpose::STANDARD};
use mime_sniffer::MimeTypeSniffer;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Pick the MIME type for an uploaded file.
///
/// A sniffed image type wins; otherwise the type the file declared; otherwise
/// whatever was sniffed; otherwise `application/octet-stream`.
pub fn image_mime_type(bytes: &[u8], declared: Option<&str>) -> String {
    let sniffed = bytes.sniff_mime_type();
    if let Some(mime) = sniffed.filter(|m| m.starts_with("image/")) {
        return mime.to_string();
    }
    declared
        .filter(|d| !d.trim().is_empty())
        .or(sniffed)
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

/// Encode file bytes as a base64 `data:` URL.
pub fn to_data_url(bytes: &[u8], declared: Option<&str>) -> String {
    let mime = image_mime_type(bytes, declared);
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
