//! Render a finished battle as prose
//!
//! The pipeline asks the generator first and falls back to the template
//! narrator on any failure: error, timeout, or blank output. Callers always
//! get text back, and the battle result is only ever read.

use std::time::Duration;

use serde::Serialize;

use crate::core::config::NarrationConfig;
use crate::core::error::ArenaError;
use crate::llm::context::NarrationContext;
use crate::llm::fallback::fallback_narration;
use crate::llm::generator::{GenerationRequest, Offline, TextGenerator};

/// Which path produced the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationSource {
    Generated,
    Fallback,
}

/// Finished narration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narration {
    pub text: String,
    pub source: NarrationSource,
}

/// Generator plus fallback, with a bounded wait
pub struct NarrationPipeline<G: TextGenerator> {
    generator: G,
    config: NarrationConfig,
    timeout: Duration,
}

impl NarrationPipeline<Offline> {
    /// Pipeline that always uses the template narrator
    pub fn offline(config: NarrationConfig) -> Self {
        Self::new(Offline, config)
    }
}

impl<G: TextGenerator> NarrationPipeline<G> {
    pub fn new(generator: G, config: NarrationConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        Self {
            generator,
            config,
            timeout,
        }
    }

    /// Override the configured timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// Build the generation request for a battle
    pub fn build_request(&self, ctx: &NarrationContext<'_>) -> GenerationRequest {
        GenerationRequest {
            system: ctx.system_prompt(&self.config),
            user: ctx.user_message(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Narrate a battle; never fails
    pub async fn narrate(&self, ctx: &NarrationContext<'_>) -> Narration {
        let request = self.build_request(ctx);

        match self.try_generate(&request).await {
            Ok(text) => {
                tracing::debug!(words = text.split_whitespace().count(), "Narration generated");
                Narration {
                    text,
                    source: NarrationSource::Generated,
                }
            }
            Err(e) => {
                tracing::warn!("Narration generator failed, using fallback: {}", e);
                Narration {
                    text: fallback_narration(ctx),
                    source: NarrationSource::Fallback,
                }
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, ArenaError> {
        let text = tokio::time::timeout(self.timeout, self.generator.generate(request))
            .await
            .map_err(|_| ArenaError::LlmTimeout(self.timeout.as_millis() as u64))??;

        let text = text.trim();
        if text.is_empty() {
            return Err(ArenaError::LlmError("generator returned blank text".into()));
        }
        Ok(text.to_string())
    }
}
