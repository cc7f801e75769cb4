use analysis::NarrativeScope;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_model: String,
    pub narrative_scope: NarrativeScope,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let narrative_scope = match env::var("NARRATIVE_SCOPE") {
            Ok(value) => value
                .parse()
                .map_err(anyhow::Error::msg)
                .context("NARRATIVE_SCOPE must be 'full' or 'remarks'")?,
            Err(_) => NarrativeScope::default(),
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            narrative_scope,
        })
    }
}
