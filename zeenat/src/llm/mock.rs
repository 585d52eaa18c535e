//! Mock model for tests.
//!
//! Returns a fixed candidate text or a scripted transport failure, and
//! records the last prompt and schema it was handed so tests can assert on
//! the request side of the contract.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::GuardianError;
use crate::llm::GuardianModel;
use crate::schema::SchemaNode;

/// Mock model: fixed JSON reply or scripted failure.
///
/// **Interaction**: Implements [`GuardianModel`]; stands in for
/// [`super::GeminiClient`] in every test that exercises the analysis flow.
pub struct MockModel {
    /// Candidate text to return; `None` simulates a service outage.
    reply: Option<String>,
    last_prompt: Mutex<Option<String>>,
    last_schema: Mutex<Option<serde_json::Value>>,
}

impl MockModel {
    /// Mock that replies with the given candidate text.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            last_prompt: Mutex::new(None),
            last_schema: Mutex::new(None),
        }
    }

    /// Mock that fails every call with a transport error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            last_prompt: Mutex::new(None),
            last_schema: Mutex::new(None),
        }
    }

    /// The prompt of the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    /// The serialized schema of the most recent call, if any.
    pub fn last_schema(&self) -> Option<serde_json::Value> {
        self.last_schema.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuardianModel for MockModel {
    async fn generate(&self, prompt: &str, schema: &SchemaNode) -> Result<String, GuardianError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_schema.lock().unwrap() = serde_json::to_value(schema).ok();
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(GuardianError::Transport("simulated outage".to_string())),
        }
    }
}
