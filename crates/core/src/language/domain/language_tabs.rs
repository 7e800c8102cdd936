use super::catalog;
use super::language::LangOption;

/// State of a language pill row with an overflow dropdown.
///
/// The selected id itself belongs to the caller; this only tracks the
/// dropdown's open flag and the label of the last overflow pick, which
/// keeps showing on the toggle after the dropdown closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTabs {
    primary: Vec<LangOption>,
    overflow: Vec<LangOption>,
    open: bool,
    last_overflow_label: Option<&'static str>,
}

impl LanguageTabs {
    pub fn new(primary: Vec<LangOption>, overflow: Vec<LangOption>) -> Self {
        Self {
            primary,
            overflow,
            open: false,
            last_overflow_label: None,
        }
    }

    /// Tabs for the source panel (auto-detect included).
    pub fn for_source() -> Self {
        let (primary, overflow) = catalog::tab_options(true);
        Self::new(primary, overflow)
    }

    /// Tabs for the target panel (auto-detect excluded).
    pub fn for_target() -> Self {
        let (primary, overflow) = catalog::tab_options(false);
        Self::new(primary, overflow)
    }

    pub fn primary(&self) -> &[LangOption] {
        &self.primary
    }

    pub fn overflow(&self) -> &[LangOption] {
        &self.overflow
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `false` when there is nothing to put behind the dropdown.
    pub fn has_dropdown(&self) -> bool {
        !self.overflow.is_empty()
    }

    pub fn toggle(&mut self) {
        if self.has_dropdown() {
            self.open = !self.open;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Record a pick and return the id to report to the owner.
    /// Returns `None` for ids this selector does not offer.
    pub fn select(&mut self, id: &str) -> Option<&'static str> {
        if let Some(option) = self.primary.iter().find(|o| o.id == id) {
            return Some(option.id);
        }
        let option = self.overflow.iter().find(|o| o.id == id)?;
        self.last_overflow_label = Some(option.label);
        self.open = false;
        Some(option.id)
    }

    pub fn is_overflow_active(&self, selected: &str) -> bool {
        self.overflow.iter().any(|o| o.id == selected)
    }

    /// Label on the dropdown toggle: the selected overflow option, else the
    /// last overflow option picked, else empty.
    pub fn toggle_label(&self, selected: &str) -> &'static str {
        self.overflow
            .iter()
            .find(|o| o.id == selected)
            .map(|o| o.label)
            .or(self.last_overflow_label)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &'static str, label: &'static str) -> LangOption {
        LangOption { id, label }
    }

    fn tabs() -> LanguageTabs {
        LanguageTabs::new(
            vec![option("en", "English"), option("fr", "French")],
            vec![option("es", "Spanish"), option("de", "German")],
        )
    }

    #[test]
    fn test_starts_closed_with_empty_toggle_label() {
        let tabs = tabs();
        assert!(!tabs.is_open());
        assert_eq!(tabs.toggle_label("en"), "");
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut tabs = tabs();
        tabs.toggle();
        assert!(tabs.is_open());
        tabs.toggle();
        assert!(!tabs.is_open());
    }

    #[test]
    fn test_select_primary_reports_id_and_leaves_dropdown() {
        let mut tabs = tabs();
        tabs.toggle();

        assert_eq!(tabs.select("fr"), Some("fr"));
        assert!(tabs.is_open());
        assert_eq!(tabs.toggle_label("fr"), "");
    }

    #[test]
    fn test_select_overflow_closes_and_remembers_label() {
        let mut tabs = tabs();
        tabs.toggle();

        assert_eq!(tabs.select("de"), Some("de"));
        assert!(!tabs.is_open());
        assert_eq!(tabs.toggle_label("de"), "German");
        assert!(tabs.is_overflow_active("de"));
    }

    #[test]
    fn test_toggle_label_survives_primary_reselect() {
        let mut tabs = tabs();
        tabs.select("es");
        tabs.select("en");

        assert_eq!(tabs.toggle_label("en"), "Spanish");
        assert!(!tabs.is_overflow_active("en"));
    }

    #[test]
    fn test_toggle_label_prefers_current_selection() {
        let mut tabs = tabs();
        tabs.select("es");

        // Selection changed from outside (e.g. a swap) to another overflow id.
        assert_eq!(tabs.toggle_label("de"), "German");
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut tabs = tabs();
        tabs.toggle();
        assert_eq!(tabs.select("ja"), None);
        assert!(tabs.is_open());
    }

    #[test]
    fn test_empty_overflow_has_no_dropdown() {
        let mut tabs = LanguageTabs::new(vec![option("en", "English")], vec![]);
        assert!(!tabs.has_dropdown());
        tabs.toggle();
        assert!(!tabs.is_open());
    }

    #[test]
    fn test_catalog_backed_tabs() {
        let source = LanguageTabs::for_source();
        let target = LanguageTabs::for_target();
        assert!(source.primary().iter().any(|o| o.id == "auto"));
        assert!(target.primary().iter().all(|o| o.id != "auto"));
        assert!(source.has_dropdown());
        assert_eq!(source.overflow(), target.overflow());
    }
}
