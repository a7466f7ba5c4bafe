//! Combat system constants - all tunable values in one place
//!
//! These are fixed at build time. Changing them changes every replay.

// Termination
pub const MAX_ROUNDS: u32 = 50;

// Dodge (probability = base + speed advantage * step, capped)
pub const DODGE_BASE_CHANCE: f64 = 0.10;
pub const DODGE_PER_SPEED_POINT: f64 = 0.02;
pub const DODGE_MAX_CHANCE: f64 = 0.35;

// Action selection
pub const SPECIAL_CHANCE: f64 = 0.25;
pub const CRITICAL_CHANCE: f64 = 0.15;

// Damage
pub const DEFENSE_SCALE: f64 = 100.0;
pub const VARIANCE_MIN: f64 = 0.8;
pub const VARIANCE_MAX: f64 = 1.2;
pub const CRITICAL_MULTIPLIER: u32 = 2;
pub const MIN_DAMAGE: u32 = 1;

/// Default special damage is attack * NUM / DEN (1.5x)
pub const SPECIAL_DAMAGE_NUM: u32 = 3;
pub const SPECIAL_DAMAGE_DEN: u32 = 2;

// Divine contest boost for the top entity tier (1.25x)
pub const DIVINE_BOOST_NUM: u32 = 5;
pub const DIVINE_BOOST_DEN: u32 = 4;
