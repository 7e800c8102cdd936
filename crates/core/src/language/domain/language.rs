/// A language the translator can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub id: &'static str,
    pub label: &'static str,
    /// BCP 47 tag handed to speech synthesis. `None` for pseudo-languages.
    pub voice_tag: Option<&'static str>,
}

impl Language {
    pub const fn new(id: &'static str, label: &'static str, voice_tag: &'static str) -> Self {
        Self {
            id,
            label,
            voice_tag: Some(voice_tag),
        }
    }

    pub fn option(&self) -> LangOption {
        LangOption {
            id: self.id,
            label: self.label,
        }
    }
}

/// One selectable entry in a language tabs selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangOption {
    pub id: &'static str,
    pub label: &'static str,
}
