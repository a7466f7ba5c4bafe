//! Battle Chronicle - reproducible two-combatant battles with narration
//!
//! `combat` turns two records into a replayable battle result; `llm` turns
//! that result into prose, falling back to a template when no text
//! generator is reachable.

pub mod combat;
pub mod core;
pub mod llm;
