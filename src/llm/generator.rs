//! Text generation seam
//!
//! The narration pipeline only needs `generate(request) -> text | error`.
//! The live HTTP client implements it; `Offline` always fails so the
//! template narrator is used.

use async_trait::async_trait;

use crate::core::error::{ArenaError, Result};

/// A single text-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Tone, voice and content constraints
    pub system: String,
    /// Stat blocks, condensed log and the verdict
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Anything that can turn a prompt into prose
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Generator that is never available
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

#[async_trait]
impl TextGenerator for Offline {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Err(ArenaError::LlmUnavailable("running offline".into()))
    }
}

#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        (**self).generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_always_fails() {
        let request = GenerationRequest {
            system: "s".into(),
            user: "u".into(),
            max_tokens: 10,
            temperature: 0.5,
        };
        let result = Offline.generate(&request).await;
        assert!(matches!(result, Err(ArenaError::LlmUnavailable(_))));
    }
}
