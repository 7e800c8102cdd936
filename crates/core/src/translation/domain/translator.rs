use thiserror::Error;

use super::translation_request::TranslationRequest;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("translation service returned HTTP {0}")]
    Status(u16),
    #[error("unreadable translation response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("translation was interrupted before a reply arrived")]
    Interrupted,
}

/// Domain interface for a remote translation service.
///
/// Blocking; callers run it off the UI thread.
pub trait Translator: Send + Sync {
    /// Returns the translated text, or an empty string when the service
    /// answered without one.
    fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}
