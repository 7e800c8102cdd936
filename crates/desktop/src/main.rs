mod app;
mod settings;
mod theme;
mod widgets;
mod workers;

use std::sync::Arc;

use translator_core::translation::domain::translator::Translator;
use translator_core::translation::infrastructure::mymemory_translator::MyMemoryTranslator;

use app::App;
use settings::Settings;

fn main() -> iced::Result {
    env_logger::init();

    let settings = Settings::load();
    let translator = build_translator(&settings);

    iced::application(
        move || App::new(settings.clone(), translator.clone()),
        App::update,
        App::view,
    )
    .title("Translator")
    .theme(App::theme)
    .subscription(App::subscription)
    .window(iced::window::Settings {
        size: iced::Size::new(980.0, 560.0),
        icon: load_icon(),
        ..Default::default()
    })
    .run()
}

fn build_translator(settings: &Settings) -> Option<Arc<dyn Translator>> {
    let config = &settings.translator;
    match MyMemoryTranslator::new(config.endpoint.as_str(), config.request_timeout()) {
        Ok(translator) => Some(Arc::new(translator)),
        Err(e) => {
            log::error!("Failed to build translation client: {e}");
            None
        }
    }
}

fn load_icon() -> Option<iced::window::Icon> {
    let icon_bytes = include_bytes!("../assets/icon.png");
    let img = image::load_from_memory(icon_bytes).ok()?.into_rgba8();
    let (w, h) = img.dimensions();
    iced::window::icon::from_rgba(img.into_raw(), w, h).ok()
}
