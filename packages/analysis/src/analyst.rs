//! The risk analyst component.
//!
//! Owns the generator seam and the prompt shaping. Both operations share one
//! failure contract: a typed `Result`, with degradation to an embedded
//! string happening exactly once in [`narrative_or_failure`].

use std::str::FromStr;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::client::OpenAiClient;
use crate::error::Result;
use crate::generator::TextGenerator;
use crate::prompts;

/// Marker prefixed to the narrative text when the external call fails.
pub const FAILURE_MARKER: &str = "GPT 분석 실패:";

/// Key of the remarks field inside the merged report mapping.
const REMARKS_KEY: &str = "물건비고";

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Which slice of the extraction result feeds the narrative prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrativeScope {
    /// Embed the whole merged report.
    #[default]
    FullReport,

    /// Embed only the remarks field.
    RemarksOnly,
}

impl FromStr for NarrativeScope {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "full" => Ok(NarrativeScope::FullReport),
            "remarks" => Ok(NarrativeScope::RemarksOnly),
            other => Err(format!(
                "unknown narrative scope '{}' (expected 'full' or 'remarks')",
                other
            )),
        }
    }
}

/// Configuration for a [`RiskAnalyst`].
///
/// The credential is carried here explicitly and scoped to the analyst
/// instance it builds; nothing reads the process environment.
#[derive(Debug, Clone)]
pub struct AnalystConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub scope: NarrativeScope,
}

impl AnalystConfig {
    /// Defaults: gpt-4o, temperature 0.7, full-report scope.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
            temperature: DEFAULT_TEMPERATURE,
            scope: NarrativeScope::default(),
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the narrative scope.
    pub fn with_scope(mut self, scope: NarrativeScope) -> Self {
        self.scope = scope;
        self
    }
}

/// Generates risk narratives by prompting the external service.
pub struct RiskAnalyst {
    generator: Arc<dyn TextGenerator>,
    temperature: f32,
    scope: NarrativeScope,
}

impl RiskAnalyst {
    /// Build an analyst backed by the OpenAI client.
    pub fn new(config: AnalystConfig) -> Self {
        let client = OpenAiClient::new(config.api_key).with_model(config.model);
        Self {
            generator: Arc::new(client),
            temperature: config.temperature,
            scope: config.scope,
        }
    }

    /// Build an analyst over any generator. Tests inject doubles here.
    pub fn with_generator(generator: Arc<dyn TextGenerator>, scope: NarrativeScope) -> Self {
        Self {
            generator,
            temperature: DEFAULT_TEMPERATURE,
            scope,
        }
    }

    /// Generate the risk narrative for a merged extraction result.
    pub async fn narrate(&self, report: &Map<String, Value>) -> Result<String> {
        let prompt = match self.scope {
            NarrativeScope::FullReport => prompts::format_report_prompt(report),
            NarrativeScope::RemarksOnly => {
                let remarks = report
                    .get(REMARKS_KEY)
                    .and_then(Value::as_str)
                    .unwrap_or("");
                prompts::format_remarks_prompt(remarks)
            }
        };

        debug!(scope = ?self.scope, prompt_len = prompt.len(), "requesting narrative");

        let text = self
            .generator
            .generate(prompts::SYSTEM_PROMPT, &prompt, self.temperature)
            .await?;
        Ok(text.trim().to_string())
    }

    /// Answer a follow-up question against a previously generated narrative.
    pub async fn answer(&self, prior_narrative: &str, question: &str) -> Result<String> {
        let prompt = prompts::format_followup_prompt(prior_narrative, question);

        debug!(prompt_len = prompt.len(), "requesting follow-up answer");

        let text = self
            .generator
            .generate(prompts::SYSTEM_PROMPT, &prompt, self.temperature)
            .await?;
        Ok(text.trim().to_string())
    }
}

/// Collapse an analyst outcome into the always-a-string narrative contract.
///
/// The narrative field is never absent: a failure becomes the fixed marker
/// followed by the underlying error message.
pub fn narrative_or_failure(outcome: Result<String>) -> String {
    match outcome {
        Ok(text) => text,
        Err(error) => format!("{} {}", FAILURE_MARKER, error),
    }
}
