use iced::border::Border;
use iced::widget::{column, container, row, text, text_editor, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use translator_core::panel::translate_panel::{
    PanelModel, COPY_LABEL, LISTEN_LABEL, SWAP_LABEL, TRANSLATE_LABEL,
};

use crate::app::{scaled, Message};
use crate::theme::{border_color, muted_color, surface_color, tertiary_color};
use crate::widgets::icon_button::icon_button;
use crate::widgets::icons;
use crate::widgets::primary_button::primary_button;

const CARD_RADIUS: f32 = 18.0;
const EDITOR_HEIGHT: f32 = 220.0;

/// One translate card: language tabs, editor and action footer.
pub fn view<'a>(
    model: PanelModel,
    tabs: Element<'a, Message>,
    content: &'a text_editor::Content,
    fs: f32,
    translate_hovered: bool,
) -> Element<'a, Message> {
    let variant = model.variant;

    let mut header = row![tabs, Space::new().width(Length::Fill)]
        .spacing(8)
        .align_y(Alignment::Start);
    if model.shows_swap_button() {
        header = header.push(icon_button(
            icons::swap(),
            SWAP_LABEL,
            Message::SwapPressed,
        ));
    }

    let editor = text_editor(content)
        .placeholder(model.placeholder())
        .on_action(move |action| Message::Edited(variant, action))
        .height(Length::Fixed(scaled(EDITOR_HEIGHT, fs)))
        .size(scaled(18.0, fs))
        .padding(0)
        .style(|theme: &Theme, status| text_editor::Style {
            background: Color::TRANSPARENT.into(),
            border: Border::default(),
            placeholder: tertiary_color(theme),
            ..text_editor::default(theme, status)
        });

    let mut footer = row![
        icon_button(icons::speaker(), LISTEN_LABEL, Message::SpeakPressed(variant)),
        icon_button(icons::copy(), COPY_LABEL, Message::CopyPressed(variant)),
        Space::new().width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if model.shows_counter() {
        footer = footer.push(
            text(model.counter_label())
                .size(scaled(12.0, fs))
                .style(|theme: &Theme| text::Style {
                    color: Some(muted_color(theme)),
                }),
        );
    }

    if model.shows_translate_button() {
        let on_press = model
            .translate_enabled()
            .then_some(Message::TranslatePressed);
        footer = footer.push(primary_button(
            move || {
                text(TRANSLATE_LABEL)
                    .size(scaled(14.0, fs))
                    .color(Color::WHITE)
                    .into()
            },
            on_press,
            translate_hovered,
            Message::TranslateHovered,
            [8, 20],
        ));
    }

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(1)
        .style(|theme: &Theme| container::Style {
            background: Some(border_color(theme).into()),
            ..container::Style::default()
        });

    container(column![header, divider, editor, footer].spacing(14))
        .padding(20)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(surface_color(theme).into()),
            border: Border {
                color: border_color(theme),
                width: 1.0,
                radius: CARD_RADIUS.into(),
            },
            ..container::Style::default()
        })
        .into()
}
