use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, TryRecvError};

use translator_core::controller::translate_controller::RequestTicket;
use translator_core::translation::domain::translation_request::TranslationRequest;
use translator_core::translation::domain::translator::{TranslateError, Translator};

/// A request running on its own thread.
pub struct PendingTranslation {
    pub ticket: RequestTicket,
    rx: Receiver<Result<String, TranslateError>>,
}

impl PendingTranslation {
    /// `None` while the request is still running.
    pub fn poll(&self) -> Option<Result<String, TranslateError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(TranslateError::Interrupted)),
        }
    }
}

pub fn spawn(
    translator: Arc<dyn Translator>,
    ticket: RequestTicket,
    request: TranslationRequest,
) -> PendingTranslation {
    let (tx, rx) = crossbeam_channel::bounded(1);

    thread::spawn(move || {
        let _ = tx.send(translator.translate(&request));
    });

    PendingTranslation { ticket, rx }
}
