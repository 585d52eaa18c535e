//! Application state: the four-view state machine and the one async
//! operation that suspends it.
//!
//! State-in, state-out: every transition consumes the [`SessionState`] and
//! returns the replacement struct wholesale; a presentation layer rerenders
//! from the new value. Transitions are user-triggered only. `loading` is an
//! orthogonal flag spanning exactly the model call; while it is set the
//! triggering controls are expected to be disabled, and [`SessionState::analyze`]
//! refuses to start a second call regardless.

use tracing::warn;

use crate::inquiry::Inquiry;
use crate::language::Language;
use crate::llm::{run_guardian_analysis, GuardianModel};
use crate::locale::strings;
use crate::profile::{ProfileError, UserProfile};
use crate::report::AnalysisResult;

/// The four views of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Landing,
    Profile,
    Guardian,
    Result,
}

/// The whole per-session state. Created on load, discarded on reload;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub view: AppView,
    pub language: Language,
    pub profile: UserProfile,
    /// Draft text of the voice/text inquiry box.
    pub draft_input: String,
    /// The current analysis result; replaced by the next one.
    pub result: Option<AnalysisResult>,
    /// True only for the span of the model call.
    pub loading: bool,
    /// One localized user-facing notice, set on analysis failure.
    pub notice: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl SessionState {
    /// Fresh session on the landing view with the default profile.
    pub fn new(language: Language) -> Self {
        Self {
            view: AppView::Landing,
            language,
            profile: UserProfile::default(),
            draft_input: String::new(),
            result: None,
            loading: false,
            notice: None,
        }
    }

    /// Fresh session using the configured default language; unknown tags
    /// fall back to Urdu.
    pub fn from_settings(settings: &env_config::Settings) -> Self {
        let language =
            Language::from_tag(&settings.default_language).unwrap_or_default();
        Self::new(language)
    }

    /// Landing → Profile.
    pub fn open_profile(self) -> Self {
        Self {
            view: AppView::Profile,
            ..self
        }
    }

    /// Switches the interface language; the view does not change.
    pub fn set_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    /// Profile submission: validates, stores the record, and enters the
    /// guardian view. Submitting the same profile again yields the same
    /// guardian state.
    pub fn submit_profile(self, profile: UserProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            view: AppView::Guardian,
            profile,
            ..self
        })
    }

    /// Appends a dictated transcript to the draft inquiry text.
    pub fn append_transcript(mut self, transcript: &str) -> Self {
        if transcript.is_empty() {
            return self;
        }
        if self.draft_input.is_empty() {
            self.draft_input = transcript.to_string();
        } else {
            self.draft_input.push(' ');
            self.draft_input.push_str(transcript);
        }
        self
    }

    /// Runs one analysis. On success the result replaces any prior one and
    /// the view moves to Result; on any failure the view stays put, `loading`
    /// is reset, and a single localized busy notice is set. A call while
    /// `loading` is already set returns the state unchanged.
    pub async fn analyze(mut self, inquiry: &Inquiry, model: &dyn GuardianModel) -> Self {
        if self.loading {
            return self;
        }
        self.notice = None;
        self.loading = true;

        match run_guardian_analysis(model, &self.profile, inquiry, self.language).await {
            Ok(result) => {
                self.result = Some(result);
                self.view = AppView::Result;
            }
            Err(err) => {
                warn!(error = %err, "guardian analysis failed");
                self.notice = Some(strings(self.language).busy_notice.to_string());
            }
        }

        self.loading = false;
        self
    }

    /// Result → Guardian; the old result is discarded.
    pub fn new_analysis(self) -> Self {
        Self {
            view: AppView::Guardian,
            result: None,
            ..self
        }
    }

    /// Takes the pending notice, clearing it.
    pub fn take_notice(mut self) -> (Self, Option<String>) {
        let notice = self.notice.take();
        (self, notice)
    }
}
