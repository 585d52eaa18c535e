//! Gemini generateContent client implementing [`GuardianModel`].
//!
//! One POST per analysis to
//! `{base}/v1beta/models/{model}:generateContent`, carrying the prompt as a
//! single user part and the declared response schema in `generationConfig`
//! (`responseMimeType: "application/json"`). The API key travels in the
//! `x-goog-api-key` header so it never appears in logged URLs. No timeout
//! beyond the reqwest defaults, no retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::GuardianError;
use crate::llm::GuardianModel;
use crate::schema::SchemaNode;

/// Client for the hosted generative language service.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client with the default model and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: env_config::Settings::DEFAULT_BASE_URL.to_string(),
            model: env_config::Settings::DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Applies the project `.env` and builds a client from the resulting
    /// environment. The usual startup path for a shell embedding the engine.
    pub fn from_env() -> Result<Self, GuardianError> {
        if let Err(err) = env_config::load_and_apply(None) {
            return Err(GuardianError::Config(err.to_string()));
        }
        Self::from_settings(&env_config::Settings::from_env())
    }

    /// Builds a client from loaded settings; fails when no API key is set.
    pub fn from_settings(settings: &env_config::Settings) -> Result<Self, GuardianError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(GuardianError::MissingApiKey(env_config::ENV_API_KEY))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            api_key,
        })
    }

    /// Overrides the service base URL (tests, regional endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a SchemaNode,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl GuardianModel for GeminiClient {
    async fn generate(&self, prompt: &str, schema: &SchemaNode) -> Result<String, GuardianError> {
        let trace_id = Uuid::new_v4();
        let url = self.generate_content_url();
        debug!(%trace_id, model = %self.model, %url, prompt_len = prompt.len(), "generateContent request");

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        let text: String = body
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(GuardianError::EmptyResponse);
        }
        debug!(%trace_id, response_len = text.len(), "generateContent response");
        Ok(text)
    }
}
