use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::widget::text_editor::{self, Action, Motion};
use iced::widget::{button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use translator_core::controller::host_actions::{ActionOutcome, HostActions};
use translator_core::controller::translate_controller::TranslateController;
use translator_core::language::domain::language_tabs::LanguageTabs;
use translator_core::panel::translate_panel::PanelVariant;
use translator_core::shared::constants::PROVIDER_URL;
use translator_core::translation::domain::translation_request::TranslationRequest;
use translator_core::translation::domain::translator::{TranslateError, Translator};

use crate::settings::{Appearance, Settings};
use crate::theme;
use crate::widgets::language_tabs::language_tabs;
use crate::widgets::{icons, translate_panel};
use crate::workers::translate_worker::{self, PendingTranslation};

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum TabsMessage {
    Toggle,
    Select(&'static str),
}

#[derive(Debug, Clone)]
pub enum Message {
    Edited(PanelVariant, Action),
    Tabs(PanelVariant, TabsMessage),
    TranslatePressed,
    TranslateHovered(bool),
    SwapPressed,
    SpeakPressed(PanelVariant),
    CopyPressed(PanelVariant),
    Tick(Instant),
    NoticeDismissed,
    OpenProvider,
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    controller: TranslateController,
    source_tabs: LanguageTabs,
    target_tabs: LanguageTabs,
    source_editor: text_editor::Content,
    target_editor: text_editor::Content,
    actions: HostActions,
    translator: Option<Arc<dyn Translator>>,
    pending: Vec<PendingTranslation>,
    settings: Settings,
    translate_hovered: bool,
}

impl App {
    pub fn new(
        settings: Settings,
        translator: Option<Arc<dyn Translator>>,
    ) -> (Self, Task<Message>) {
        let controller = TranslateController::new(&settings.translator, Instant::now());
        let source_editor = text_editor::Content::with_text(controller.source_text());

        (
            Self {
                controller,
                source_tabs: LanguageTabs::for_source(),
                target_tabs: LanguageTabs::for_target(),
                source_editor,
                target_editor: text_editor::Content::new(),
                actions: HostActions::system(),
                translator,
                pending: Vec::new(),
                settings,
                translate_hovered: false,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Edited(PanelVariant::Source, action) => {
                let is_edit = action.is_edit();
                self.source_editor.perform(action);
                if is_edit {
                    let had_translation = !self.controller.translated_text().is_empty();
                    let typed = editor_text(&self.source_editor);
                    self.controller.edit_source_text(&typed, Instant::now());
                    if typed.chars().count() > self.controller.max_length() {
                        self.sync_source_editor();
                    }
                    // Blank input clears the translation without a request.
                    if had_translation && self.controller.translated_text().is_empty() {
                        self.sync_target_editor();
                    }
                }
            }
            // Selection and scrolling only; the translation stays read-only.
            Message::Edited(PanelVariant::Target, action) => {
                if !action.is_edit() {
                    self.target_editor.perform(action);
                }
            }
            Message::Tabs(variant, TabsMessage::Toggle) => {
                self.tabs_mut(variant).toggle();
            }
            Message::Tabs(variant, TabsMessage::Select(id)) => {
                let Some(id) = self.tabs_mut(variant).select(id) else {
                    return Task::none();
                };
                let now = Instant::now();
                match variant {
                    PanelVariant::Source => self.controller.select_source_language(id, now),
                    PanelVariant::Target => self.controller.select_target_language(id, now),
                };
            }
            Message::TranslatePressed => {
                if let Some(request) = self.controller.translate_now() {
                    self.dispatch(request);
                }
            }
            Message::TranslateHovered(hovered) => {
                self.translate_hovered = hovered;
            }
            Message::SwapPressed => {
                self.controller.swap(Instant::now());
                self.source_tabs.close();
                self.target_tabs.close();
                self.sync_source_editor();
                self.sync_target_editor();
            }
            Message::SpeakPressed(variant) => {
                let (text, language) = match variant {
                    PanelVariant::Source => (
                        self.controller.source_text(),
                        self.controller.source_language(),
                    ),
                    PanelVariant::Target => (
                        self.controller.translated_text(),
                        self.controller.target_language(),
                    ),
                };
                let outcome = self.actions.speak(text, language);
                return notify(outcome);
            }
            Message::CopyPressed(variant) => {
                let text = match variant {
                    PanelVariant::Source => self.controller.source_text(),
                    PanelVariant::Target => self.controller.translated_text(),
                };
                let outcome = self.actions.copy(text);
                return notify(outcome);
            }
            Message::Tick(now) => {
                if let Some(request) = self.controller.tick(now) {
                    self.dispatch(request);
                }
                self.collect_finished();
            }
            Message::NoticeDismissed => {}
            Message::OpenProvider => {
                if let Err(e) = open::that(PROVIDER_URL) {
                    log::warn!("Failed to open {PROVIDER_URL}: {e}");
                }
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;

        let header = row![svg(icons::logo())
            .width(scaled(140.0, fs))
            .height(scaled(32.0, fs))]
        .align_y(Alignment::Center);

        let source_tabs = language_tabs(
            &self.source_tabs,
            self.controller.source_language(),
            fs,
            |id| Message::Tabs(PanelVariant::Source, TabsMessage::Select(id)),
            Message::Tabs(PanelVariant::Source, TabsMessage::Toggle),
        );
        let target_tabs = language_tabs(
            &self.target_tabs,
            self.controller.target_language(),
            fs,
            |id| Message::Tabs(PanelVariant::Target, TabsMessage::Select(id)),
            Message::Tabs(PanelVariant::Target, TabsMessage::Toggle),
        );

        let cards = row![
            translate_panel::view(
                self.controller.source_panel(),
                source_tabs,
                &self.source_editor,
                fs,
                self.translate_hovered,
            ),
            translate_panel::view(
                self.controller.target_panel(),
                target_tabs,
                &self.target_editor,
                fs,
                false,
            ),
        ]
        .spacing(16)
        .align_y(Alignment::Start);

        let mut body = column![header, cards].spacing(20);

        let error = self.controller.error_message();
        if !error.is_empty() {
            body = body.push(text(error).size(scaled(13.0, fs)).style(text::danger));
        }

        let content = container(scrollable(body.padding(24)).height(Length::Fill))
            .height(Length::Fill);

        let footer = container(
            button(text("Translations by MyMemory").size(scaled(11.0, fs)))
                .on_press(Message::OpenProvider)
                .style(button::text),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([4, 0]);

        column![content, footer]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance, self.settings.high_contrast)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let tick = if self.controller.has_pending_work() || !self.pending.is_empty() {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let system_theme = if self.settings.appearance == Appearance::System {
            iced::time::every(THEME_POLL_INTERVAL).map(|_| Message::PollSystemTheme)
        } else {
            Subscription::none()
        };

        Subscription::batch([tick, system_theme])
    }

    fn tabs_mut(&mut self, variant: PanelVariant) -> &mut LanguageTabs {
        match variant {
            PanelVariant::Source => &mut self.source_tabs,
            PanelVariant::Target => &mut self.target_tabs,
        }
    }

    fn dispatch(&mut self, request: TranslationRequest) {
        let ticket = self.controller.begin(&request);
        match &self.translator {
            Some(translator) => {
                let pending = translate_worker::spawn(Arc::clone(translator), ticket, request);
                self.pending.push(pending);
            }
            None => {
                log::error!("No translation client; dropping request");
                self.controller
                    .complete(ticket, Err(TranslateError::Interrupted));
            }
        }
    }

    fn collect_finished(&mut self) {
        let mut finished = Vec::new();
        self.pending.retain(|pending| match pending.poll() {
            Some(result) => {
                finished.push((pending.ticket, result));
                false
            }
            None => true,
        });

        if finished.is_empty() {
            return;
        }
        for (ticket, result) in finished {
            self.controller.complete(ticket, result);
        }
        self.sync_target_editor();
    }

    fn sync_source_editor(&mut self) {
        self.source_editor = text_editor::Content::with_text(self.controller.source_text());
        self.source_editor.perform(Action::Move(Motion::DocumentEnd));
    }

    fn sync_target_editor(&mut self) {
        self.target_editor = text_editor::Content::with_text(self.controller.translated_text());
    }
}

fn notify(outcome: ActionOutcome) -> Task<Message> {
    let ActionOutcome::Notify(notice) = outcome else {
        return Task::none();
    };
    Task::perform(
        rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(notice.title)
            .set_description(notice.message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show(),
        |_| Message::NoticeDismissed,
    )
}

/// Editor contents without the final line break.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::Edit;

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
            Ok(format!("T:{}", request.text))
        }
    }

    fn translated_app() -> App {
        let (mut app, _) = App::new(Settings::default(), Some(Arc::new(EchoTranslator)));
        let _ = app.update(Message::TranslatePressed);

        let deadline = Instant::now() + Duration::from_secs(5);
        while editor_text(&app.target_editor).is_empty() {
            assert!(Instant::now() < deadline, "translation never arrived");
            std::thread::sleep(Duration::from_millis(5));
            let _ = app.update(Message::Tick(Instant::now()));
        }
        app
    }

    #[test]
    fn test_translation_lands_in_target_editor() {
        let app = translated_app();
        assert_eq!(editor_text(&app.target_editor), "T:Hello, how are you?");
        assert_eq!(app.controller.translated_text(), "T:Hello, how are you?");
    }

    #[test]
    fn test_clearing_source_clears_target_editor() {
        let mut app = translated_app();

        let _ = app.update(Message::Edited(PanelVariant::Source, Action::SelectAll));
        let _ = app.update(Message::Edited(
            PanelVariant::Source,
            Action::Edit(Edit::Delete),
        ));

        assert_eq!(app.controller.source_text(), "");
        assert_eq!(app.controller.translated_text(), "");
        assert_eq!(editor_text(&app.target_editor), "");
    }

    #[test]
    fn test_target_editor_ignores_edits() {
        let mut app = translated_app();

        let _ = app.update(Message::Edited(PanelVariant::Target, Action::SelectAll));
        let _ = app.update(Message::Edited(
            PanelVariant::Target,
            Action::Edit(Edit::Delete),
        ));

        assert_eq!(editor_text(&app.target_editor), "T:Hello, how are you?");
    }

    #[test]
    fn test_scaled_rounds() {
        assert_eq!(scaled(13.0, 1.0), 13.0);
        assert_eq!(scaled(13.0, 1.25), 16.0);
        assert_eq!(scaled(11.0, 0.8), 9.0);
    }

    #[test]
    fn test_editor_text_round_trips_controller_text() {
        let content = text_editor::Content::with_text("Hello,\nhow are you?");
        assert_eq!(editor_text(&content), "Hello,\nhow are you?");
    }

    #[test]
    fn test_editor_text_empty() {
        let content = text_editor::Content::new();
        assert_eq!(editor_text(&content), "");
    }
}
