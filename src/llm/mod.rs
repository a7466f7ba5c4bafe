pub mod client;
pub mod context;
pub mod fallback;
pub mod generator;
pub mod narration;

pub use client::LlmClient;
pub use context::{battle_type_context, NarrationContext, NarrationStyle};
pub use fallback::fallback_narration;
pub use generator::{GenerationRequest, Offline, TextGenerator};
pub use narration::{Narration, NarrationPipeline, NarrationSource};
