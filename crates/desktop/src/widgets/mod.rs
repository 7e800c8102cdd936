pub mod icon_button;
pub mod icons;
pub mod language_tabs;
pub mod primary_button;
pub mod translate_panel;
