use iced::border::Border;
use iced::widget::{button, svg, tooltip, Svg};
use iced::{Color, Element, Length, Theme};

use crate::theme::{border_color, muted_color, surface_color};

const CORNER_RADIUS: f32 = 10.0;
const ICON_SIZE: f32 = 18.0;

/// Square outlined button holding a single icon, labelled by a tooltip.
pub fn icon_button<'a, Message: Clone + 'a>(
    icon: svg::Handle,
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    let glyph: Svg<'a, Theme> = svg(icon)
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(muted_color(theme)),
        });

    let btn = button(glyph)
        .on_press(on_press)
        .padding(8)
        .style(|theme: &Theme, status: button::Status| styled(theme, status));

    tooltip(btn, label, tooltip::Position::Bottom)
        .gap(4)
        .style(iced::widget::container::rounded_box)
        .into()
}

fn styled(theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    let surface = surface_color(theme);
    let background = if hovered {
        Color {
            a: 0.10,
            ..theme.palette().text
        }
    } else {
        surface
    };

    button::Style {
        background: Some(background.into()),
        text_color: muted_color(theme),
        border: Border {
            color: border_color(theme),
            width: 1.5,
            radius: CORNER_RADIUS.into(),
        },
        ..button::Style::default()
    }
}
