use iced::border::Border;
use iced::widget::{button, column, container, row, svg, text, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use translator_core::language::domain::language_tabs::LanguageTabs;

use crate::app::scaled;
use crate::theme::{border_color, muted_color, surface_color, tertiary_color};
use crate::widgets::icons;

const PILL_RADIUS: f32 = 10.0;
const MENU_RADIUS: f32 = 10.0;

/// Pill row for a language selector. When the dropdown is open its
/// options are listed under the row.
pub fn language_tabs<'a, Message: Clone + 'a>(
    tabs: &'a LanguageTabs,
    selected: &'a str,
    fs: f32,
    on_select: impl Fn(&'static str) -> Message + 'a,
    on_toggle: Message,
) -> Element<'a, Message> {
    let mut pills = row![].spacing(4).align_y(Alignment::Center);

    for option in tabs.primary() {
        let active = option.id == selected;
        pills = pills.push(pill(option.label, active, fs, on_select(option.id)));
    }

    if tabs.has_dropdown() {
        pills = pills.push(toggle(
            tabs.toggle_label(selected),
            tabs.is_overflow_active(selected),
            fs,
            on_toggle,
        ));
    }

    if !tabs.is_open() {
        return pills.into();
    }

    let menu = column(tabs.overflow().iter().map(|option| {
        let active = option.id == selected;
        menu_item(option.label, active, fs, on_select(option.id))
    }))
    .spacing(2);

    let menu = container(menu)
        .padding(6)
        .width(Length::Fixed(scaled(180.0, fs)))
        .style(|theme: &Theme| container::Style {
            background: Some(surface_color(theme).into()),
            border: Border {
                color: tertiary_color(theme),
                width: 1.0,
                radius: MENU_RADIUS.into(),
            },
            ..container::Style::default()
        });

    column![pills, menu].spacing(6).into()
}

fn pill<'a, Message: Clone + 'a>(
    label: &'a str,
    active: bool,
    fs: f32,
    on_press: Message,
) -> Element<'a, Message> {
    button(text(label).size(scaled(13.0, fs)))
        .on_press(on_press)
        .padding([6, 12])
        .style(move |theme: &Theme, status| pill_style(theme, status, active))
        .into()
}

fn toggle<'a, Message: Clone + 'a>(
    label: &'a str,
    active: bool,
    fs: f32,
    on_press: Message,
) -> Element<'a, Message> {
    let icon = svg(icons::expand())
        .width(Length::Fixed(scaled(14.0, fs)))
        .height(Length::Fixed(scaled(14.0, fs)))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(muted_color(theme)),
        });

    let mut content = row![].spacing(4).align_y(Alignment::Center);
    if !label.is_empty() {
        content = content.push(text(label).size(scaled(13.0, fs)));
    }
    content = content.push(icon);

    button(content)
        .on_press(on_press)
        .padding([6, 10])
        .style(move |theme: &Theme, status| pill_style(theme, status, active))
        .into()
}

fn menu_item<'a, Message: Clone + 'a>(
    label: &'a str,
    active: bool,
    fs: f32,
    on_press: Message,
) -> Element<'a, Message> {
    let content = row![
        text(label).size(scaled(13.0, fs)),
        Space::new().width(Length::Fill),
    ];

    button(content)
        .on_press(on_press)
        .width(Length::Fill)
        .padding([6, 10])
        .style(move |theme: &Theme, status| pill_style(theme, status, active))
        .into()
}

fn pill_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.palette();
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    let background = if active {
        Some(border_color(theme).into())
    } else if hovered {
        Some(Color { a: 0.06, ..palette.text }.into())
    } else {
        None
    };
    let text_color = if active { palette.text } else { muted_color(theme) };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: PILL_RADIUS.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
