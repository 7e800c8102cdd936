use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use translator_core::controller::host_actions::{ActionOutcome, HostActions};
use translator_core::controller::translate_controller::TranslateController;
use translator_core::language::domain::catalog;
use translator_core::shared::config::TranslatorConfig;
use translator_core::shared::constants::{DEFAULT_SOURCE_LANGUAGE_ID, DEFAULT_TARGET_LANGUAGE_ID};
use translator_core::translation::domain::translator::Translator;
use translator_core::translation::infrastructure::mymemory_translator::MyMemoryTranslator;

/// Translate text between languages, optionally speaking or copying the result.
#[derive(Parser)]
#[command(name = "translator")]
struct Cli {
    /// Text to translate. Read from stdin when omitted.
    text: Option<String>,

    /// Source language id ("auto" to detect).
    #[arg(long, default_value = DEFAULT_SOURCE_LANGUAGE_ID)]
    from: String,

    /// Target language id.
    #[arg(long, default_value = DEFAULT_TARGET_LANGUAGE_ID)]
    to: String,

    /// Read the translation aloud.
    #[arg(long)]
    speak: bool,

    /// Copy the translation to the clipboard.
    #[arg(long)]
    copy: bool,

    /// List supported language ids and exit.
    #[arg(long)]
    list_languages: bool,

    /// Translation endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Settings file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_languages {
        print_languages();
        return Ok(());
    }

    let config = load_config(&cli)?;
    let text = match cli.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let now = Instant::now();
    let mut controller = TranslateController::new(&config, now);

    if !controller.select_source_language(&cli.from, now) {
        return Err(format!("unknown source language: {}", cli.from).into());
    }
    if !controller.select_target_language(&cli.to, now) {
        return Err(format!("invalid target language: {}", cli.to).into());
    }
    if text.chars().count() > config.max_length {
        log::warn!(
            "Input truncated to {} characters",
            config.max_length
        );
    }
    controller.edit_source_text(&text, now);
    // One-shot: the manual trigger below replaces the debounce.
    controller.teardown();

    let Some(request) = controller.translate_now() else {
        println!();
        return Ok(());
    };

    let translator = MyMemoryTranslator::new(config.endpoint.as_str(), config.request_timeout())?;
    let ticket = controller.begin(&request);
    let translated = translator.translate(&request)?;
    controller.complete(ticket, Ok(translated));
    println!("{}", controller.translated_text());

    if cli.speak || cli.copy {
        let mut actions = HostActions::system();
        if cli.copy {
            report(actions.copy(controller.translated_text()));
        }
        if cli.speak {
            let outcome = actions.speak(controller.translated_text(), controller.target_language());
            let started = outcome == ActionOutcome::Done;
            report(outcome);
            if started {
                actions.finish_speaking();
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<TranslatorConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => TranslatorConfig::load_from(path)?,
        None => TranslatorConfig::load(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }
    Ok(config)
}

fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

fn print_languages() {
    for language in catalog::source_languages() {
        let voice = language.voice_tag.unwrap_or("-");
        println!("{:<6} {:<16} {voice}", language.id, language.label);
    }
}

fn report(outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Notify(notice) => eprintln!("{}: {}", notice.title, notice.message),
        ActionOutcome::Done | ActionOutcome::Skipped => {}
    }
}
