pub mod config;
pub mod error;
pub mod types;

pub use config::NarrationConfig;
pub use error::{ArenaError, Result};
pub use types::{CombatantId, CombatantKind, Side};
