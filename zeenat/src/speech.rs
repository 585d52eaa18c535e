//! Dictation seam over the platform speech-to-text capability.
//!
//! The engine never implements recognition; it drives an external
//! collaborator through [`SpeechRecognizer`], started and stopped by user
//! gesture with a language tag (`ur-PK` / `en-US`). A session yields zero or
//! one transcript. Recognizer errors are logged and reset the listening
//! state; they never reach the analysis flow.

use thiserror::Error;
use tracing::warn;

use crate::language::Language;

/// Failure inside the platform recognizer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("recognizer unavailable: {0}")]
    Unavailable(String),
    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Platform speech-to-text collaborator.
pub trait SpeechRecognizer {
    /// Begins listening with a BCP-47 language tag.
    fn start(&mut self, language_tag: &str) -> Result<(), SpeechError>;
    /// Stops listening; returns the transcript if one was produced.
    fn stop(&mut self) -> Result<Option<String>, SpeechError>;
}

/// Listening-state controller around a recognizer.
///
/// `toggle` mirrors the one microphone button: start when idle, stop and
/// surface the transcript when listening. Every error path lands back on
/// "not listening".
pub struct Dictation<R> {
    recognizer: R,
    listening: bool,
}

impl<R: SpeechRecognizer> Dictation<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            listening: false,
        }
    }

    pub fn listening(&self) -> bool {
        self.listening
    }

    /// Start or stop dictation; returns a transcript only when a listening
    /// session ends with one.
    pub fn toggle(&mut self, language: Language) -> Option<String> {
        if self.listening {
            self.listening = false;
            match self.recognizer.stop() {
                Ok(transcript) => transcript,
                Err(err) => {
                    warn!(error = %err, "speech recognizer failed to stop");
                    None
                }
            }
        } else {
            match self.recognizer.start(language.speech_tag()) {
                Ok(()) => {
                    self.listening = true;
                }
                Err(err) => {
                    warn!(error = %err, "speech recognizer failed to start");
                }
            }
            None
        }
    }
}

/// Scripted recognizer for tests: optional canned transcript, optional
/// failure on start or stop.
#[derive(Default)]
pub struct ScriptedRecognizer {
    pub transcript: Option<String>,
    pub fail_on_start: bool,
    pub fail_on_stop: bool,
    active: bool,
}

impl ScriptedRecognizer {
    pub fn with_transcript(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
            ..Self::default()
        }
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(&mut self, _language_tag: &str) -> Result<(), SpeechError> {
        if self.fail_on_start {
            return Err(SpeechError::Unavailable("no microphone".to_string()));
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<Option<String>, SpeechError> {
        if self.fail_on_stop {
            return Err(SpeechError::Recognition("audio dropped".to_string()));
        }
        if self.active {
            self.active = false;
            Ok(self.transcript.take())
        } else {
            Ok(None)
        }
    }
}
