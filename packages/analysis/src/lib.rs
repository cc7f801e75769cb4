//! Legal-risk narrative generation for court-auction listings.
//!
//! Wraps the external text-generation service behind a small seam: prompt
//! templates embed the merged extraction result (or only its remarks field),
//! a thin chat-completions client performs the one outbound call, and the
//! [`RiskAnalyst`] component ties them together with a single typed failure
//! contract for both the narrative and the follow-up answer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use analysis::{narrative_or_failure, AnalystConfig, RiskAnalyst};
//!
//! let analyst = RiskAnalyst::new(AnalystConfig::new(api_key));
//! let narrative = narrative_or_failure(analyst.narrate(&merged_report).await);
//! ```

pub mod analyst;
pub mod client;
pub mod error;
pub mod generator;
pub mod prompts;
pub mod types;

pub use analyst::{
    narrative_or_failure, AnalystConfig, NarrativeScope, RiskAnalyst, FAILURE_MARKER,
};
pub use client::OpenAiClient;
pub use error::{AnalysisError, Result};
pub use generator::{CannedGenerator, FailingGenerator, TextGenerator};
