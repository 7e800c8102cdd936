use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::settings::Appearance;

/// Resolve the iced Theme from appearance + high_contrast settings.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => system_prefers_dark(),
    };

    let palette = match (is_dark, high_contrast) {
        (true, false) => dark_palette(),
        (false, false) => light_palette(),
        (true, true) => high_contrast_dark_palette(),
        (false, true) => high_contrast_light_palette(),
    };

    Theme::custom("Translator", palette)
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x12, 0x14, 0x1a),
        text: color!(0xf9, 0xfa, 0xfb),
        primary: color!(0x37, 0x62, 0xe3),
        success: color!(0x30, 0xd1, 0x58),
        warning: color!(0xff, 0xcc, 0x00),
        danger: color!(0xf0, 0x5d, 0x5d),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf3, 0xf4, 0xf6),
        text: color!(0x12, 0x14, 0x1a),
        primary: color!(0x37, 0x62, 0xe3),
        success: color!(0x34, 0xc7, 0x59),
        warning: color!(0xff, 0x9f, 0x0a),
        danger: color!(0xd9, 0x30, 0x25),
    }
}

fn high_contrast_dark_palette() -> Palette {
    Palette {
        background: color!(0x00, 0x00, 0x00),
        text: color!(0xff, 0xff, 0xff),
        primary: color!(0x6c, 0xb4, 0xff),
        success: color!(0x30, 0xd1, 0x58),
        warning: color!(0xff, 0xd6, 0x0a),
        danger: color!(0xff, 0x45, 0x3a),
    }
}

fn high_contrast_light_palette() -> Palette {
    Palette {
        background: color!(0xff, 0xff, 0xff),
        text: color!(0x00, 0x00, 0x00),
        primary: color!(0x00, 0x50, 0xd0),
        success: color!(0x24, 0x8a, 0x3d),
        warning: color!(0xb2, 0x5c, 0x00),
        danger: color!(0xd7, 0x00, 0x15),
    }
}

fn is_light(theme: &Theme) -> bool {
    let bg = theme.palette().background;
    bg.r * 0.299 + bg.g * 0.587 + bg.b * 0.114 > 0.5
}

/// Card background, one step off the window background.
pub fn surface_color(theme: &Theme) -> Color {
    let bg = theme.palette().background;
    if is_light(theme) {
        Color::WHITE
    } else {
        Color {
            r: (bg.r + 0.06).min(1.0),
            g: (bg.g + 0.06).min(1.0),
            b: (bg.b + 0.08).min(1.0),
            a: 1.0,
        }
    }
}

/// Secondary text (labels, counter).
pub fn muted_color(theme: &Theme) -> Color {
    Color {
        a: 0.65,
        ..theme.palette().text
    }
}

/// Least prominent text (placeholders, hints).
pub fn tertiary_color(theme: &Theme) -> Color {
    Color {
        a: 0.45,
        ..theme.palette().text
    }
}

pub fn border_color(theme: &Theme) -> Color {
    Color {
        a: 0.15,
        ..theme.palette().text
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().eq_ignore_ascii_case("dark"))
            .unwrap_or(true)
    }
    #[cfg(target_os = "windows")]
    {
        // AppsUseLightTheme is 0x0 when apps use the dark theme.
        std::process::Command::new("reg")
            .args([
                "query",
                r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
                "/v",
                "AppsUseLightTheme",
            ])
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("0x0"))
            .unwrap_or(true)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        true
    }
}
