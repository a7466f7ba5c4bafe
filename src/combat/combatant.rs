//! Normalized battle participant

use serde::{Deserialize, Serialize};

use crate::combat::stats::{Category, CombatStats};
use crate::core::types::{CombatantId, CombatantKind};

/// A combatant in a battle
///
/// Built once per battle from a source record (see `combat::adapter`) and
/// never mutated by the simulation; health is tracked by the battle loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub kind: CombatantKind,
    pub category: Category,
    pub stats: CombatStats,
    /// Domain, habitat or description; narration flavor only
    pub flavor: Option<String>,
}

impl Combatant {
    pub fn new(
        id: impl Into<CombatantId>,
        name: impl Into<String>,
        kind: CombatantKind,
        category: Category,
        stats: CombatStats,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            category,
            stats,
            flavor: None,
        }
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    /// One-line stat block, e.g. for prompts and CLI output
    pub fn stat_line(&self) -> String {
        let s = &self.stats;
        let mut line = format!(
            "{} ({} {}) - HP {}/{}, ATK {}, DEF {}, SPD {}",
            self.name,
            self.category.label(),
            self.kind.label(),
            s.hp,
            s.max_hp,
            s.attack,
            s.defense,
            s.speed
        );
        if let Some(ability) = &s.special_ability {
            line.push_str(&format!(", special: {} ({} dmg)", ability, s.special_damage));
        }
        line
    }
}
