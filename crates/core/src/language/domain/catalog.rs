use super::language::{LangOption, Language};
use crate::shared::constants::{AUTO_DETECT_ID, FALLBACK_LANGUAGE_ID};

pub static LANGUAGES: &[Language] = &[
    Language {
        id: AUTO_DETECT_ID,
        label: "Detect Language",
        voice_tag: None,
    },
    Language::new("en", "English", "en-US"),
    Language::new("fr", "French", "fr-FR"),
    Language::new("es", "Spanish", "es-ES"),
    Language::new("it", "Italian", "it-IT"),
    Language::new("de", "German", "de-DE"),
    Language::new("pt", "Portuguese", "pt-PT"),
    Language::new("ja", "Japanese", "ja-JP"),
    Language::new("zh", "Chinese", "zh-CN"),
];

/// Ids shown as individual pills; the rest of the catalog goes behind the
/// overflow dropdown.
const PRIMARY_TAB_IDS: &[&str] = &[AUTO_DETECT_ID, "en", "fr"];

pub fn find(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.id == id)
}

pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}

pub fn is_auto_detect(id: &str) -> bool {
    id == AUTO_DETECT_ID
}

pub fn source_languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.iter()
}

pub fn target_languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.iter().filter(|l| !is_auto_detect(l.id))
}

/// The code actually sent to the translation service.
pub fn resolve_code(id: &str) -> &str {
    if is_auto_detect(id) {
        FALLBACK_LANGUAGE_ID
    } else {
        id
    }
}

/// Voice for speaking text in `id`, falling back to the fallback
/// language's voice when `id` has none.
pub fn voice_tag_for(id: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|l| l.id == id && l.voice_tag.is_some())
        .or_else(|| find(FALLBACK_LANGUAGE_ID))
        .and_then(|l| l.voice_tag)
}

/// `(primary, overflow)` options for a tabs selector.
pub fn tab_options(include_auto_detect: bool) -> (Vec<LangOption>, Vec<LangOption>) {
    let languages: Vec<&Language> = if include_auto_detect {
        source_languages().collect()
    } else {
        target_languages().collect()
    };
    let (primary, overflow): (Vec<&Language>, Vec<&Language>) = languages
        .into_iter()
        .partition(|l| PRIMARY_TAB_IDS.contains(&l.id));
    (
        primary.into_iter().map(Language::option).collect(),
        overflow.into_iter().map(Language::option).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = LANGUAGES.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), LANGUAGES.len());
    }

    #[test]
    fn test_only_auto_detect_lacks_voice_tag() {
        for language in LANGUAGES {
            assert_eq!(language.voice_tag.is_none(), is_auto_detect(language.id));
        }
    }

    #[test]
    fn test_target_languages_exclude_auto_detect() {
        assert!(target_languages().all(|l| l.id != AUTO_DETECT_ID));
        assert_eq!(target_languages().count(), LANGUAGES.len() - 1);
        assert!(source_languages().any(|l| l.id == AUTO_DETECT_ID));
    }

    #[rstest]
    #[case::auto(AUTO_DETECT_ID, "en")]
    #[case::english("en", "en")]
    #[case::spanish("es", "es")]
    fn test_resolve_code(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(resolve_code(id), expected);
    }

    #[rstest]
    #[case::french("fr", Some("fr-FR"))]
    #[case::japanese("ja", Some("ja-JP"))]
    #[case::auto_falls_back(AUTO_DETECT_ID, Some("en-US"))]
    #[case::unknown_falls_back("xx", Some("en-US"))]
    fn test_voice_tag_for(#[case] id: &str, #[case] expected: Option<&str>) {
        assert_eq!(voice_tag_for(id), expected);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("de").map(|l| l.label), Some("German"));
        assert!(find("klingon").is_none());
        assert!(is_known("zh"));
        assert!(!is_known(""));
    }

    #[test]
    fn test_source_tab_options() {
        let (primary, overflow) = tab_options(true);
        let primary_ids: Vec<&str> = primary.iter().map(|o| o.id).collect();
        let overflow_ids: Vec<&str> = overflow.iter().map(|o| o.id).collect();
        assert_eq!(primary_ids, ["auto", "en", "fr"]);
        assert_eq!(overflow_ids, ["es", "it", "de", "pt", "ja", "zh"]);
    }

    #[test]
    fn test_target_tab_options_drop_auto_detect() {
        let (primary, overflow) = tab_options(false);
        let primary_ids: Vec<&str> = primary.iter().map(|o| o.id).collect();
        assert_eq!(primary_ids, ["en", "fr"]);
        assert_eq!(overflow.len(), 6);
    }
}
