use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use translator_core::shared::config::{config_path, TranslatorConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    System,
    Dark,
    Light,
}

const MIN_FONT_SCALE: f32 = 0.8;
const MAX_FONT_SCALE: f32 = 1.5;

/// Desktop settings. Read at startup only; nothing the user does in the
/// window is written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub appearance: Appearance,
    pub high_contrast: bool,
    pub font_scale: f32,
    pub translator: TranslatorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appearance: Appearance::System,
            high_contrast: false,
            font_scale: 1.0,
            translator: TranslatorConfig::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Defaults for a missing or unreadable file.
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&json) {
            Ok(mut settings) => {
                settings.font_scale = sanitize_font_scale(settings.font_scale);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Clamp to the supported range; anything non-finite becomes 1.0.
fn sanitize_font_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
    } else {
        1.0
    }
}
