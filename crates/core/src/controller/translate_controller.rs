use std::mem;
use std::time::{Duration, Instant};

use crate::language::domain::catalog;
use crate::panel::translate_panel::{clamp_to_max_length, PanelModel, PanelVariant};
use crate::shared::config::{StaleResponsePolicy, TranslatorConfig};
use crate::shared::constants::{
    DEFAULT_SOURCE_LANGUAGE_ID, DEFAULT_SOURCE_TEXT, DEFAULT_TARGET_LANGUAGE_ID,
    FALLBACK_LANGUAGE_ID,
};
use crate::shared::debouncer::Debouncer;
use crate::translation::domain::translation_request::TranslationRequest;
use crate::translation::domain::translator::TranslateError;

/// Shown only when `report_failures` is enabled.
pub const FAILURE_MESSAGE: &str = "Translation failed. Please try again.";

/// Identifies one issued request so its completion can be matched up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// State of the two-panel translator and the rules for changing it.
///
/// Pure and single-threaded: the caller feeds it UI events and the current
/// time, runs the requests it hands out wherever it likes, and reports
/// results back through [`complete`](Self::complete).
///
/// Any change to the source text or either language re-arms the debounce
/// timer; [`tick`](Self::tick) turns an expired timer into a request.
/// Blank source text never produces a request and clears the translation.
#[derive(Debug)]
pub struct TranslateController {
    source_language: &'static str,
    target_language: &'static str,
    source_text: String,
    translated_text: String,
    is_loading: bool,
    error_message: String,
    debounce: Debouncer,
    max_length: usize,
    stale_responses: StaleResponsePolicy,
    report_failures: bool,
    issued: u64,
    in_flight: usize,
}

impl TranslateController {
    /// Mount with the default languages and sample text. The first
    /// translation is scheduled right away.
    pub fn new(config: &TranslatorConfig, now: Instant) -> Self {
        let mut controller = Self {
            source_language: DEFAULT_SOURCE_LANGUAGE_ID,
            target_language: DEFAULT_TARGET_LANGUAGE_ID,
            source_text: clamp_to_max_length(DEFAULT_SOURCE_TEXT, config.max_length).to_string(),
            translated_text: String::new(),
            is_loading: false,
            error_message: String::new(),
            debounce: Debouncer::new(config.debounce()),
            max_length: config.max_length,
            stale_responses: config.stale_responses,
            report_failures: config.report_failures,
            issued: 0,
            in_flight: 0,
        };
        controller.schedule(now);
        controller
    }

    pub fn source_language(&self) -> &'static str {
        self.source_language
    }

    pub fn target_language(&self) -> &'static str {
        self.target_language
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// True while a debounce is armed or a request has not reported back.
    pub fn has_pending_work(&self) -> bool {
        self.debounce.is_pending() || self.in_flight > 0
    }

    pub fn debounce_remaining(&self, now: Instant) -> Option<Duration> {
        self.debounce.remaining(now)
    }

    pub fn source_panel(&self) -> PanelModel {
        PanelModel::new(
            PanelVariant::Source,
            &self.source_text,
            self.max_length,
            self.is_loading,
        )
    }

    pub fn target_panel(&self) -> PanelModel {
        PanelModel::new(
            PanelVariant::Target,
            &self.translated_text,
            self.max_length,
            self.is_loading,
        )
    }

    pub fn edit_source_text(&mut self, text: &str, now: Instant) {
        let text = clamp_to_max_length(text, self.max_length);
        if text == self.source_text {
            return;
        }
        self.source_text = text.to_string();
        self.schedule(now);
    }

    /// Returns `false` (and changes nothing) for ids outside the catalog.
    pub fn select_source_language(&mut self, id: &str, now: Instant) -> bool {
        let Some(language) = catalog::find(id) else {
            log::warn!("Ignoring unknown source language {id:?}");
            return false;
        };
        if language.id != self.source_language {
            self.source_language = language.id;
            self.schedule(now);
        }
        true
    }

    /// Returns `false` for unknown ids and for auto-detect, which the
    /// target side never offers.
    pub fn select_target_language(&mut self, id: &str, now: Instant) -> bool {
        let Some(language) = catalog::find(id).filter(|l| !catalog::is_auto_detect(l.id)) else {
            log::warn!("Ignoring invalid target language {id:?}");
            return false;
        };
        if language.id != self.target_language {
            self.target_language = language.id;
            self.schedule(now);
        }
        true
    }

    /// Exchange languages and texts in one step.
    ///
    /// Auto-detect cannot be a target, so it lands on the target side as
    /// the fallback language. An empty translation leaves the source text
    /// in place instead of wiping it.
    pub fn swap(&mut self, now: Instant) {
        let old_source_language = self.source_language;
        self.source_language = self.target_language;
        self.target_language = if catalog::is_auto_detect(old_source_language) {
            FALLBACK_LANGUAGE_ID
        } else {
            old_source_language
        };

        let old_source_text = mem::take(&mut self.source_text);
        let new_source_text = if self.translated_text.is_empty() {
            old_source_text.clone()
        } else {
            mem::take(&mut self.translated_text)
        };
        self.source_text = clamp_to_max_length(&new_source_text, self.max_length).to_string();
        self.translated_text = old_source_text;

        log::debug!(
            "Swapped languages to {}|{}",
            self.source_language,
            self.target_language
        );
        self.schedule(now);
    }

    /// Fire the debounce if its quiet period is over.
    pub fn tick(&mut self, now: Instant) -> Option<TranslationRequest> {
        if self.debounce.poll(now) {
            self.request()
        } else {
            None
        }
    }

    /// Manual trigger: a request for the current state, right now. A
    /// pending debounce is left alone and may fire again later.
    pub fn translate_now(&mut self) -> Option<TranslationRequest> {
        self.request()
    }

    /// Mark `request` as sent.
    pub fn begin(&mut self, request: &TranslationRequest) -> RequestTicket {
        self.issued += 1;
        self.in_flight += 1;
        self.is_loading = true;
        self.error_message.clear();
        log::debug!(
            "Issuing request #{} ({})",
            self.issued,
            request.langpair()
        );
        RequestTicket {
            generation: self.issued,
        }
    }

    /// Apply the outcome of a request started with [`begin`](Self::begin).
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<String, TranslateError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let stale = ticket.generation < self.issued;
        let discard = stale && self.stale_responses == StaleResponsePolicy::DiscardStale;

        self.is_loading = match self.stale_responses {
            StaleResponsePolicy::LastWriteWins => false,
            StaleResponsePolicy::DiscardStale => self.in_flight > 0,
        };

        if discard {
            log::debug!(
                "Dropping response #{} (newest is #{})",
                ticket.generation,
                self.issued
            );
            return;
        }

        match result {
            Ok(text) => {
                if stale {
                    log::debug!(
                        "Applying response #{} after #{} was issued",
                        ticket.generation,
                        self.issued
                    );
                }
                self.translated_text = text;
            }
            Err(e) => {
                log::warn!("Translation #{} failed: {e}", ticket.generation);
                if self.report_failures {
                    self.error_message = FAILURE_MESSAGE.to_string();
                } else {
                    self.error_message.clear();
                }
            }
        }
    }

    /// Cancel the pending debounce. Requests already sent still report back.
    pub fn teardown(&mut self) {
        self.debounce.cancel();
    }

    fn schedule(&mut self, now: Instant) {
        if self.source_text.trim().is_empty() {
            self.debounce.cancel();
            self.translated_text.clear();
        } else {
            self.debounce.rearm(now);
        }
    }

    fn request(&mut self) -> Option<TranslationRequest> {
        if self.source_text.trim().is_empty() {
            self.translated_text.clear();
            return None;
        }
        Some(TranslationRequest::new(
            self.source_text.clone(),
            self.source_language,
            self.target_language,
        ))
    }
}
