use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};

pub const PNG_MIME: &str = "image/png";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// `qrcode-{ISO 8601 UTC with millis}.png`, with `:` and `.` replaced by `-`
/// so the name is valid on every file system.
pub fn download_filename(at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(|c: char| c == ':' || c == '.', "-");
    format!("qrcode-{stamp}.png")
}

pub fn png_data_url(png: &[u8]) -> String {
    format!("data:{PNG_MIME};base64,{}", STANDARD.encode(png))
}
