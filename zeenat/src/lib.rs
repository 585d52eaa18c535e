//! # Zeenat
//!
//! The 360 Guardian engine: a typed client for one generative-model analysis
//! call, plus the session state machine and static reference data behind a
//! bilingual (Urdu/English) rights-audit interface for the Pakistani
//! marriage contract (Nikkah Nama).
//!
//! ## Design principles
//!
//! - **One contract**: The interesting surface is the analysis
//!   request/response contract: prompt construction
//!   ([`build_analysis_prompt`]), the declared response schema
//!   ([`SchemaVariant`]), and the typed result ([`AnalysisResult`]). Keep it
//!   thin; there is no scheduler, cache, or protocol layer here.
//! - **State-in, state-out**: [`SessionState`] transitions consume the state
//!   and return the replacement struct wholesale; a shell rerenders from the
//!   new value.
//! - **One call, one failure signal**: [`run_guardian_analysis`] issues
//!   exactly one request; every failure collapses into a single localized
//!   busy notice, with causes kept apart only in the logs.
//!
//! ## Main modules
//!
//! - [`prompt`]: serialize `(profile, inquiry, language)` into the model
//!   instruction string.
//! - [`schema`]: the declared response schema, two named configurations
//!   (general inquiry / full contract audit).
//! - [`llm`]: [`GuardianModel`] trait, [`GeminiClient`], [`MockModel`], and
//!   the single invocation path.
//! - [`report`]: the typed analysis result and its contract checks.
//! - [`session`]: the Landing → Profile → Guardian → Result state machine.
//! - [`panels`]: fan the result out into localized report panels.
//! - [`profile`], [`inquiry`]: the request-side records.
//! - [`reference`], [`locale`], [`language`]: static data (districts, the
//!   sparse 25-column table, the NGO directory, icon names, UI strings).
//! - [`speech`]: dictation seam over the platform speech recognizer.
//! - [`export`]: plain-text save/copy of a drafted document.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use zeenat::{Inquiry, Language, MockModel, SessionState, UserProfile};
//!
//! # async fn run() {
//! let model = MockModel::with_reply(r#"{ "...": "..." }"#);
//! let state = SessionState::new(Language::Ur)
//!     .open_profile()
//!     .submit_profile(UserProfile::default())
//!     .unwrap();
//! let inquiry = Inquiry::free_text("مجھے اپنے نکاح نامہ کے کالم 18 پر مشورہ چاہیے");
//! let state = state.analyze(&inquiry, &model).await;
//! if let Some(result) = &state.result {
//!     println!("risk: {}", result.advocate.risk_level);
//! }
//! # }
//! ```

pub mod error;
pub mod export;
pub mod inquiry;
pub mod language;
pub mod llm;
pub mod locale;
pub mod panels;
pub mod profile;
pub mod prompt;
pub mod reference;
pub mod report;
pub mod schema;
pub mod session;
pub mod speech;

pub use error::GuardianError;
pub use export::{copy_draft, draft_file_name, draft_plain_text, save_draft, ClipboardSink};
pub use inquiry::{AuditFields, Inquiry, InquiryError};
pub use language::Language;
pub use llm::{run_guardian_analysis, GeminiClient, GuardianModel, MockModel};
pub use locale::{strings, UiStrings};
pub use panels::{compose, ReportPanels};
pub use profile::{MaritalStatus, ProfileError, UserProfile};
pub use prompt::build_analysis_prompt;
pub use reference::{column, NgoRecord, ReferenceColumn, DISTRICTS, NGO_DIRECTORY};
pub use report::{
    AdvocateBrief, AnalysisResult, DocumentKind, DraftedDocument, EmpowermentAudit, HealthNotes,
    NgoBridge, NgoReferral, RiskLevel, ShariaGuidance,
};
pub use schema::{SchemaNode, SchemaType, SchemaVariant};
pub use session::{AppView, SessionState};
pub use speech::{Dictation, ScriptedRecognizer, SpeechError, SpeechRecognizer};
