use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("file save is not available: {0}")]
    Unavailable(String),
    #[error("file save failed: {0}")]
    Failed(String),
}

/// Hands a finished file to the user (browser download, save dialog, ...).
pub trait FileSaver {
    fn save_png(&self, filename: &str, png: &[u8]) -> Result<(), SaveError>;
}
