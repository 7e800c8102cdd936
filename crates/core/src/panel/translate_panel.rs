use crate::shared::constants::DEFAULT_SOURCE_TEXT;

pub const LISTEN_LABEL: &str = "Listen";
pub const COPY_LABEL: &str = "Copy text";
pub const SWAP_LABEL: &str = "Swap languages";
pub const TRANSLATE_LABEL: &str = "Translate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    Source,
    Target,
}

/// Everything a translate card needs to decide what to show.
///
/// Derived from the controller's state on every render; holds no state of
/// its own and calls nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelModel {
    pub variant: PanelVariant,
    pub char_count: usize,
    pub max_length: usize,
    pub is_loading: bool,
    pub read_only: bool,
    has_text: bool,
}

impl PanelModel {
    pub fn new(variant: PanelVariant, text: &str, max_length: usize, is_loading: bool) -> Self {
        Self {
            variant,
            char_count: text.chars().count(),
            max_length,
            is_loading,
            read_only: variant == PanelVariant::Target,
            has_text: !text.trim().is_empty(),
        }
    }

    pub fn shows_counter(&self) -> bool {
        self.variant == PanelVariant::Source
    }

    /// `current/max`, never reporting more than `max`.
    pub fn counter_label(&self) -> String {
        format!(
            "{}/{}",
            self.char_count.min(self.max_length),
            self.max_length
        )
    }

    pub fn shows_translate_button(&self) -> bool {
        self.variant == PanelVariant::Source
    }

    pub fn translate_enabled(&self) -> bool {
        self.shows_translate_button() && !self.is_loading && self.has_text
    }

    pub fn shows_swap_button(&self) -> bool {
        self.variant == PanelVariant::Target
    }

    pub fn placeholder(&self) -> &'static str {
        match self.variant {
            PanelVariant::Source => DEFAULT_SOURCE_TEXT,
            PanelVariant::Target => "",
        }
    }
}

/// Truncate `text` to at most `max_length` characters.
pub fn clamp_to_max_length(text: &str, max_length: usize) -> &str {
    match text.char_indices().nth(max_length) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_source_variant_controls() {
        let model = PanelModel::new(PanelVariant::Source, "Hello", 500, false);
        assert!(model.shows_counter());
        assert!(model.shows_translate_button());
        assert!(!model.shows_swap_button());
        assert!(!model.read_only);
        assert_eq!(model.placeholder(), "Hello, how are you?");
    }

    #[test]
    fn test_target_variant_controls() {
        let model = PanelModel::new(PanelVariant::Target, "Bonjour", 500, false);
        assert!(!model.shows_counter());
        assert!(!model.shows_translate_button());
        assert!(!model.translate_enabled());
        assert!(model.shows_swap_button());
        assert!(model.read_only);
        assert_eq!(model.placeholder(), "");
    }

    #[rstest]
    #[case::has_text("Hello", false, true)]
    #[case::loading("Hello", true, false)]
    #[case::empty("", false, false)]
    #[case::whitespace("  \n\t", false, false)]
    fn test_translate_enabled(#[case] text: &str, #[case] loading: bool, #[case] expected: bool) {
        let model = PanelModel::new(PanelVariant::Source, text, 500, loading);
        assert_eq!(model.translate_enabled(), expected);
    }

    #[rstest]
    #[case::empty("", "0/500")]
    #[case::ascii("Hello, how are you?", "19/500")]
    #[case::multibyte("héllo wörld", "11/500")]
    fn test_counter_label(#[case] text: &str, #[case] expected: &str) {
        let model = PanelModel::new(PanelVariant::Source, text, 500, false);
        assert_eq!(model.counter_label(), expected);
    }

    #[test]
    fn test_counter_never_exceeds_max() {
        let text = "a".repeat(650);
        let model = PanelModel::new(PanelVariant::Source, &text, 500, false);
        assert_eq!(model.counter_label(), "500/500");
    }

    #[rstest]
    #[case::short("abc", 5, "abc")]
    #[case::exact("abcde", 5, "abcde")]
    #[case::long("abcdefg", 5, "abcde")]
    #[case::multibyte("ééééé", 3, "ééé")]
    #[case::zero("abc", 0, "")]
    fn test_clamp_to_max_length(#[case] text: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(clamp_to_max_length(text, max), expected);
    }
}
