use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("legacy copy command failed")]
    LegacyCommandFailed,
}

/// What the platform clipboard supports; detected before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipboardCapabilities {
    /// Promise-based text write.
    pub async_text: bool,
    /// Image items can be written.
    pub image: bool,
}

/// System clipboard. Writes resolve or fail at the platform's discretion;
/// there is no cancellation and no timeout.
#[async_trait(?Send)]
pub trait Clipboard {
    fn capabilities(&self) -> ClipboardCapabilities;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Synchronous fallback through a temporary selectable element and the
    /// legacy copy command.
    fn write_text_legacy(&self, text: &str) -> Result<(), ClipboardError>;

    /// Writes PNG bytes as an `image/png` item.
    async fn write_png(&self, png: &[u8]) -> Result<(), ClipboardError>;
}
