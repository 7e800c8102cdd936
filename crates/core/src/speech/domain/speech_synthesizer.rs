use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("no speech engine available")]
    Unavailable,
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    /// BCP 47 tag such as `fr-FR`. `None` leaves the engine's default voice.
    pub voice_tag: Option<String>,
}

impl Utterance {
    pub fn new(text: impl Into<String>, voice_tag: Option<&str>) -> Self {
        Self {
            text: text.into(),
            voice_tag: voice_tag.map(str::to_string),
        }
    }
}

/// Domain interface for host text-to-speech.
///
/// At most one utterance plays at a time; `speak` does not cancel on its
/// own, callers do that explicitly first.
pub trait SpeechSynthesizer: Send {
    fn is_available(&self) -> bool;

    /// Stop the utterance in progress, if any.
    fn cancel(&mut self);

    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Block until the current utterance has finished. Default: return at once.
    fn wait(&mut self) {}
}
