pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
pub const PROVIDER_URL: &str = "https://mymemory.translated.net/";

/// Quiet period before an edit triggers a translation request.
pub const DEBOUNCE_MS: u64 = 650;
pub const MAX_TEXT_LENGTH: usize = 500;
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Pseudo-language meaning "let the service infer the source language".
pub const AUTO_DETECT_ID: &str = "auto";
/// Concrete language substituted for auto-detect wherever a real code is needed.
pub const FALLBACK_LANGUAGE_ID: &str = "en";

pub const DEFAULT_SOURCE_LANGUAGE_ID: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE_ID: &str = "fr";
pub const DEFAULT_SOURCE_TEXT: &str = "Hello, how are you?";
