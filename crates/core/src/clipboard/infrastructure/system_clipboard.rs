use cli_clipboard::{ClipboardContext, ClipboardProvider};

use crate::clipboard::domain::clipboard_writer::{ClipboardError, ClipboardWriter};

/// Clipboard writer backed by the platform clipboard.
///
/// A fresh context is opened per write so a clipboard that appears or
/// disappears while the app runs (e.g. an X11 session restart) is picked up.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn is_available(&self) -> bool {
        match ClipboardContext::new() {
            Ok(_) => true,
            Err(e) => {
                log::debug!("Clipboard probe failed: {e}");
                false
            }
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
