use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use crate::speech::domain::speech_synthesizer::{SpeechError, SpeechSynthesizer, Utterance};

/// Command-line speech engines, in probe order per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEngine {
    Say,
    PowerShell,
    EspeakNg,
    Espeak,
}

impl SpeechEngine {
    pub fn candidates() -> &'static [SpeechEngine] {
        #[cfg(target_os = "macos")]
        {
            &[SpeechEngine::Say]
        }
        #[cfg(target_os = "windows")]
        {
            &[SpeechEngine::PowerShell]
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            &[SpeechEngine::EspeakNg, SpeechEngine::Espeak]
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            SpeechEngine::Say => "say",
            SpeechEngine::PowerShell => "powershell",
            SpeechEngine::EspeakNg => "espeak-ng",
            SpeechEngine::Espeak => "espeak",
        }
    }

    /// Build the command. Every engine reads the text from stdin so it is
    /// never parsed as arguments.
    pub fn command(self, voice_tag: Option<&str>) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            // `say` has no language switch; it speaks stdin with the system voice.
            SpeechEngine::Say => {}
            SpeechEngine::PowerShell => {
                let script = powershell_script(voice_tag);
                cmd.args(["-NoProfile", "-NonInteractive", "-Command", script.as_str()]);
            }
            SpeechEngine::EspeakNg | SpeechEngine::Espeak => {
                if let Some(lang) = voice_tag.and_then(espeak_voice) {
                    cmd.args(["-v", lang.as_str()]);
                }
                cmd.arg("--stdin");
            }
        }
        cmd
    }
}

/// `fr-FR` -> `fr`. Only plain ASCII letters survive.
fn espeak_voice(voice_tag: &str) -> Option<String> {
    let primary = voice_tag.split('-').next()?;
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

fn powershell_script(voice_tag: Option<&str>) -> String {
    let mut script = String::from(
        "Add-Type -AssemblyName System.Speech; \
         $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; ",
    );
    let safe_tag = voice_tag.filter(|t| t.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    if let Some(tag) = safe_tag {
        script.push_str(&format!(
            "try {{ $s.SelectVoiceByHints('NotSet', 'NotSet', 0, [Globalization.CultureInfo]'{tag}') }} catch {{}}; "
        ));
    }
    script.push_str("$s.Speak([Console]::In.ReadToEnd())");
    script
}

/// Locate an executable on `PATH`.
fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    let file_name = format!("{program}{}", env::consts::EXE_SUFFIX);
    env::split_paths(&paths)
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Kill `child` if it is still running and reap it.
fn stop_child(child: &mut Child) {
    if let Ok(None) = child.try_wait() {
        let _ = child.kill();
    }
    let _ = child.wait();
}

/// Speech synthesizer that shells out to the platform's speech command.
pub struct SystemSpeech {
    engine: Option<SpeechEngine>,
    current: Option<Child>,
}

impl SystemSpeech {
    /// Probe `PATH` for the first usable engine.
    pub fn detect() -> Self {
        let engine = SpeechEngine::candidates()
            .iter()
            .copied()
            .find(|engine| find_in_path(engine.program()).is_some());
        match engine {
            Some(engine) => log::info!("Using speech engine: {}", engine.program()),
            None => log::info!("No speech engine found on PATH"),
        }
        Self::with_engine(engine)
    }

    pub fn with_engine(engine: Option<SpeechEngine>) -> Self {
        Self {
            engine,
            current: None,
        }
    }

    pub fn engine(&self) -> Option<SpeechEngine> {
        self.engine
    }
}

impl SpeechSynthesizer for SystemSpeech {
    fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            stop_child(&mut child);
        }
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        let engine = self.engine.ok_or(SpeechError::Unavailable)?;
        let spawn_error = |source: std::io::Error| SpeechError::Spawn {
            program: engine.program().to_string(),
            source,
        };

        let mut child = engine
            .command(utterance.voice_tag.as_deref())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(utterance.text.as_bytes()) {
                drop(stdin);
                stop_child(&mut child);
                return Err(spawn_error(e));
            }
        }

        self.current = Some(child);
        Ok(())
    }

    fn wait(&mut self) {
        if let Some(mut child) = self.current.take() {
            if let Err(e) = child.wait() {
                log::warn!("Lost track of speech process: {e}");
            }
        }
    }
}

impl Drop for SystemSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}
