use crate::clipboard::domain::clipboard_writer::{ClipboardError, ClipboardWriter};
use crate::clipboard::infrastructure::system_clipboard::SystemClipboard;
use crate::language::domain::catalog;
use crate::speech::domain::speech_synthesizer::{SpeechSynthesizer, Utterance};
use crate::speech::infrastructure::system_speech::SystemSpeech;

pub const SPEECH_UNSUPPORTED: &str = "Text-to-speech is not supported on this system.";
pub const SPEECH_FAILED: &str = "Unable to play text.";
pub const CLIPBOARD_UNAVAILABLE: &str = "Clipboard is not available.";
pub const COPY_FAILED: &str = "Unable to copy text.";

/// A message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    fn speech(message: &'static str) -> Self {
        Self {
            title: "Text-to-speech",
            message,
        }
    }

    fn clipboard(message: &'static str) -> Self {
        Self {
            title: "Clipboard",
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// Nothing to do (e.g. blank text to speak).
    Skipped,
    Notify(Notice),
}

/// Speak and copy, with every failure turned into an outcome rather than
/// an error. Host capabilities are injected so tests can run without them.
pub struct HostActions {
    speech: Box<dyn SpeechSynthesizer>,
    clipboard: Box<dyn ClipboardWriter>,
}

impl HostActions {
    pub fn new(speech: Box<dyn SpeechSynthesizer>, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self { speech, clipboard }
    }

    /// Actions backed by the platform's speech command and clipboard.
    pub fn system() -> Self {
        Self::new(
            Box::new(SystemSpeech::detect()),
            Box::new(SystemClipboard::new()),
        )
    }

    /// Speak `text` with the voice of `language_id`, replacing whatever is
    /// currently being spoken.
    pub fn speak(&mut self, text: &str, language_id: &str) -> ActionOutcome {
        if text.trim().is_empty() {
            return ActionOutcome::Skipped;
        }
        if !self.speech.is_available() {
            return ActionOutcome::Notify(Notice::speech(SPEECH_UNSUPPORTED));
        }

        let utterance = Utterance::new(text, catalog::voice_tag_for(language_id));
        self.speech.cancel();
        match self.speech.speak(&utterance) {
            Ok(()) => ActionOutcome::Done,
            Err(e) => {
                log::warn!("Speech failed: {e}");
                ActionOutcome::Notify(Notice::speech(SPEECH_FAILED))
            }
        }
    }

    pub fn copy(&mut self, text: &str) -> ActionOutcome {
        if !self.clipboard.is_available() {
            return ActionOutcome::Notify(Notice::clipboard(CLIPBOARD_UNAVAILABLE));
        }
        match self.clipboard.write_text(text) {
            Ok(()) => ActionOutcome::Done,
            Err(ClipboardError::Unavailable(reason)) => {
                log::warn!("Clipboard vanished before write: {reason}");
                ActionOutcome::Notify(Notice::clipboard(CLIPBOARD_UNAVAILABLE))
            }
            Err(e) => {
                log::warn!("{e}");
                ActionOutcome::Notify(Notice::clipboard(COPY_FAILED))
            }
        }
    }

    pub fn stop_speaking(&mut self) {
        self.speech.cancel();
    }

    /// Block until speech started by [`speak`](Self::speak) has finished.
    pub fn finish_speaking(&mut self) {
        self.speech.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::domain::speech_synthesizer::SpeechError;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    struct FakeSpeech {
        available: bool,
        fail: bool,
        log: Log,
    }

    impl SpeechSynthesizer for FakeSpeech {
        fn is_available(&self) -> bool {
            self.available
        }

        fn cancel(&mut self) {
            self.log.lock().unwrap().push("cancel".to_string());
        }

        fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
            if self.fail {
                return Err(SpeechError::Unavailable);
            }
            self.log.lock().unwrap().push(format!(
                "speak {} [{}]",
                utterance.text,
                utterance.voice_tag.as_deref().unwrap_or("-")
            ));
            Ok(())
        }
    }

    struct FakeClipboard {
        available: bool,
        error: Option<ClipboardError>,
        log: Log,
    }

    impl ClipboardWriter for FakeClipboard {
        fn is_available(&self) -> bool {
            self.available
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if let Some(e) = self.error.clone() {
                return Err(e);
            }
            self.log.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Harness {
        actions: HostActions,
        speech_log: Log,
        clipboard_log: Log,
    }

    fn harness(
        speech_available: bool,
        speech_fails: bool,
        clipboard_available: bool,
        clipboard_error: Option<ClipboardError>,
    ) -> Harness {
        let speech_log: Log = Arc::default();
        let clipboard_log: Log = Arc::default();
        let actions = HostActions::new(
            Box::new(FakeSpeech {
                available: speech_available,
                fail: speech_fails,
                log: speech_log.clone(),
            }),
            Box::new(FakeClipboard {
                available: clipboard_available,
                error: clipboard_error,
                log: clipboard_log.clone(),
            }),
        );
        Harness {
            actions,
            speech_log,
            clipboard_log,
        }
    }

    fn working() -> Harness {
        harness(true, false, true, None)
    }

    // ── Speak ─────────────────────────────────────────────────────────

    #[test]
    fn test_speak_cancels_then_speaks_with_language_voice() {
        let mut h = working();

        let outcome = h.actions.speak("Bonjour", "fr");

        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(*h.speech_log.lock().unwrap(), ["cancel", "speak Bonjour [fr-FR]"]);
    }

    #[test]
    fn test_speak_auto_detect_uses_fallback_voice() {
        let mut h = working();
        h.actions.speak("Hello", "auto");
        assert_eq!(h.speech_log.lock().unwrap()[1], "speak Hello [en-US]");
    }

    #[test]
    fn test_speak_blank_text_makes_no_speech_call() {
        let mut h = working();

        assert_eq!(h.actions.speak("", "fr"), ActionOutcome::Skipped);
        assert_eq!(h.actions.speak("  \n", "fr"), ActionOutcome::Skipped);
        assert!(h.speech_log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_speak_without_engine_notifies() {
        let mut h = harness(false, false, true, None);

        let outcome = h.actions.speak("Hello", "en");

        assert_eq!(
            outcome,
            ActionOutcome::Notify(Notice {
                title: "Text-to-speech",
                message: SPEECH_UNSUPPORTED,
            })
        );
        assert!(h.speech_log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_speak_failure_notifies() {
        let mut h = harness(true, true, true, None);
        assert!(matches!(
            h.actions.speak("Hello", "en"),
            ActionOutcome::Notify(Notice { message: SPEECH_FAILED, .. })
        ));
    }

    #[test]
    fn test_stop_speaking_cancels() {
        let mut h = working();
        h.actions.stop_speaking();
        assert_eq!(*h.speech_log.lock().unwrap(), ["cancel"]);
    }

    // ── Copy ──────────────────────────────────────────────────────────

    #[test]
    fn test_copy_writes_text() {
        let mut h = working();

        assert_eq!(h.actions.copy("Bonjour"), ActionOutcome::Done);
        assert_eq!(*h.clipboard_log.lock().unwrap(), ["Bonjour"]);
    }

    #[test]
    fn test_copy_without_clipboard_notifies() {
        let mut h = harness(true, false, false, None);

        let outcome = h.actions.copy("Bonjour");

        assert_eq!(
            outcome,
            ActionOutcome::Notify(Notice {
                title: "Clipboard",
                message: "Clipboard is not available.",
            })
        );
        assert!(h.clipboard_log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_copy_write_failure_notifies() {
        let mut h = harness(
            true,
            false,
            true,
            Some(ClipboardError::Write("denied".to_string())),
        );
        assert!(matches!(
            h.actions.copy("Bonjour"),
            ActionOutcome::Notify(Notice { message: COPY_FAILED, .. })
        ));
    }

    #[test]
    fn test_copy_clipboard_lost_before_write_notifies_unavailable() {
        let mut h = harness(
            true,
            false,
            true,
            Some(ClipboardError::Unavailable("no display".to_string())),
        );
        assert!(matches!(
            h.actions.copy("Bonjour"),
            ActionOutcome::Notify(Notice { message: CLIPBOARD_UNAVAILABLE, .. })
        ));
    }
}
