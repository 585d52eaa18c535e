//! Model client abstraction for the guardian analysis call.
//!
//! The session depends on a callable that takes the built prompt and the
//! declared response schema and returns the model's raw JSON text; this
//! module defines the trait, the real client, and a mock implementation.
//!
//! **Interaction**: [`run_guardian_analysis`] is the single invocation path;
//! it builds the prompt, selects the schema variant from the inquiry, issues
//! exactly one call, and parses the reply into [`AnalysisResult`]. No retry,
//! no cache: identical repeated inquiries re-invoke the model every time.

mod gemini;
mod mock;

pub use gemini::GeminiClient;
pub use mock::MockModel;

use async_trait::async_trait;
use tracing::debug;

use crate::error::GuardianError;
use crate::inquiry::Inquiry;
use crate::language::Language;
use crate::profile::UserProfile;
use crate::prompt::build_analysis_prompt;
use crate::report::AnalysisResult;
use crate::schema::SchemaNode;

/// Generative model client: prompt and declared schema in, raw JSON text out.
///
/// Implementations: [`MockModel`] (fixed reply or scripted failure) and
/// [`GeminiClient`] (real generateContent API).
#[async_trait]
pub trait GuardianModel: Send + Sync {
    /// One generateContent-style call. The returned string is the candidate
    /// text, expected to be JSON conforming to `schema`.
    async fn generate(&self, prompt: &str, schema: &SchemaNode) -> Result<String, GuardianError>;
}

/// Runs one guardian analysis end to end: build prompt, declare schema,
/// invoke the model once, parse the typed result.
pub async fn run_guardian_analysis(
    model: &dyn GuardianModel,
    profile: &UserProfile,
    inquiry: &Inquiry,
    language: Language,
) -> Result<AnalysisResult, GuardianError> {
    let prompt = build_analysis_prompt(profile, inquiry, language);
    let variant = inquiry.schema_variant();
    debug!(
        ?variant,
        prompt_len = prompt.len(),
        "issuing guardian analysis"
    );
    let text = model.generate(&prompt, variant.schema()).await?;
    AnalysisResult::from_model_json(&text)
}
