//! Seam between the analyst and the external text-generation service.
//!
//! The service boundary is deliberately narrow: a system role description, a
//! user prompt, a sampling temperature, free-form text back. Test doubles
//! implement the same trait so the analyst and the HTTP boundary can be
//! exercised without the external service.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{AnalysisError, Result};

/// External text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate free-form text for the given system role and user prompt.
    async fn generate(&self, system: &str, prompt: &str, temperature: f32) -> Result<String>;
}

/// Canned generator for tests.
///
/// Returns a fixed response and records the prompts it was asked for.
#[derive(Default)]
pub struct CannedGenerator {
    response: String,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl CannedGenerator {
    /// Create a generator that always answers with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::default(),
        }
    }

    /// Number of generate calls seen so far.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }

    /// The user prompts passed to generate, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

impl Clone for CannedGenerator {
    fn clone(&self) -> Self {
        Self {
            response: self.response.clone(),
            prompts: Arc::clone(&self.prompts),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _system: &str, prompt: &str, _temperature: f32) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Generator that always fails, for exercising the degradation path.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    /// Create a generator that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _system: &str, _prompt: &str, _temperature: f32) -> Result<String> {
        Err(AnalysisError::Network(self.message.clone()))
    }
}
