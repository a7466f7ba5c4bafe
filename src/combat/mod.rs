pub mod adapter;
pub mod battle;
pub mod combatant;
pub mod constants;
pub mod outcome;
pub mod resolution;
pub mod stats;
pub mod summary;

pub use adapter::{from_creature, from_entity, CombatantSource, CreatureRecord, EntityRecord};
pub use battle::{apply_battle_modifiers, first_moves_first, simulate, simulate_seeded, BattleType};
pub use combatant::Combatant;
pub use outcome::{decide_winner, BattleResult, Verdict, WinnerKind};
pub use resolution::{compute_damage, dodge_chance, resolve_action, ActionKind, BattleAction, StrikeMode};
pub use stats::{resolve_stats, Category, CombatStats, DangerTier, EntityTier, StatOverrides};
pub use summary::{BattleSummary, BiggestHit};
