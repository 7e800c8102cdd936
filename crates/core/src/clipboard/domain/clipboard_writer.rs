use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Domain interface for writing plain text to the host clipboard.
pub trait ClipboardWriter: Send {
    fn is_available(&self) -> bool;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
