//! Combat stats and the category band table
//!
//! Every combatant belongs to a category. Categories map to a base stat band
//! through an exhaustive table, so an unrecognised label lands on a
//! compile-time default instead of a silent lookup miss. Stats authored on
//! the record always win over the band.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{SPECIAL_DAMAGE_DEN, SPECIAL_DAMAGE_NUM};

/// Power tier of an authored entity (deities, heroes, mortals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityTier {
    Mortal,
    Hero,
    Demigod,
    /// Top tier; boosted in divine contests
    God,
}

impl EntityTier {
    /// Parse a free-text tier label
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "mortal" | "human" => Some(EntityTier::Mortal),
            "hero" | "heroine" | "champion" => Some(EntityTier::Hero),
            "demigod" | "demi-god" | "half-god" => Some(EntityTier::Demigod),
            "god" | "goddess" | "deity" | "divine" => Some(EntityTier::God),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityTier::Mortal => "mortal",
            EntityTier::Hero => "hero",
            EntityTier::Demigod => "demigod",
            EntityTier::God => "god",
        }
    }
}

/// Danger rating of a bestiary creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerTier {
    Harmless,
    Low,
    Moderate,
    High,
    Extreme,
}

impl DangerTier {
    /// Parse a free-text danger label
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "harmless" | "none" | "trivial" => Some(DangerTier::Harmless),
            "low" => Some(DangerTier::Low),
            "moderate" | "medium" => Some(DangerTier::Moderate),
            "high" | "dangerous" => Some(DangerTier::High),
            "extreme" | "legendary" | "catastrophic" => Some(DangerTier::Extreme),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DangerTier::Harmless => "harmless",
            DangerTier::Low => "low",
            DangerTier::Moderate => "moderate",
            DangerTier::High => "high",
            DangerTier::Extreme => "extreme",
        }
    }
}

/// Category a combatant is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "group", content = "tier")]
pub enum Category {
    Entity(EntityTier),
    Creature(DangerTier),
    /// Missing or unrecognised label
    Unclassified,
}

impl Category {
    /// Category for an entity record's tier label
    pub fn entity(label: Option<&str>) -> Self {
        label
            .and_then(EntityTier::from_label)
            .map(Category::Entity)
            .unwrap_or(Category::Unclassified)
    }

    /// Category for a creature record's danger label
    pub fn creature(label: Option<&str>) -> Self {
        label
            .and_then(DangerTier::from_label)
            .map(Category::Creature)
            .unwrap_or(Category::Unclassified)
    }

    /// True for the highest entity tier
    pub fn is_top_tier(self) -> bool {
        matches!(self, Category::Entity(EntityTier::God))
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Entity(tier) => tier.label(),
            Category::Creature(tier) => tier.label(),
            Category::Unclassified => "unclassified",
        }
    }

    /// Base stat band for this category
    pub fn band(self) -> StatBand {
        match self {
            Category::Entity(EntityTier::Mortal) => StatBand::new(80, 8, 8, 10),
            Category::Entity(EntityTier::Hero) => StatBand::new(120, 14, 12, 13),
            Category::Entity(EntityTier::Demigod) => StatBand::new(160, 20, 16, 14),
            Category::Entity(EntityTier::God) => StatBand::new(200, 25, 20, 15),
            Category::Creature(DangerTier::Harmless) => StatBand::new(40, 4, 3, 8),
            Category::Creature(DangerTier::Low) => StatBand::new(70, 8, 6, 10),
            Category::Creature(DangerTier::Moderate) => StatBand::new(110, 13, 10, 12),
            Category::Creature(DangerTier::High) => StatBand::new(150, 18, 14, 14),
            Category::Creature(DangerTier::Extreme) => StatBand::new(190, 24, 18, 16),
            Category::Unclassified => StatBand::new(100, 10, 10, 10),
        }
    }
}

/// Base stats for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBand {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl StatBand {
    const fn new(hp: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed,
        }
    }
}

/// Explicitly authored stats; any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatOverrides {
    pub hp: Option<u32>,
    pub max_hp: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub speed: Option<u32>,
    pub special_ability: Option<String>,
    pub special_damage: Option<u32>,
}

/// Resolved combat stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special_ability: Option<String>,
    pub special_damage: u32,
}

impl CombatStats {
    pub fn has_special(&self) -> bool {
        self.special_ability.is_some()
    }
}

/// Default special damage for an attack value (1.5x, floored)
pub fn default_special_damage(attack: u32) -> u32 {
    attack.saturating_mul(SPECIAL_DAMAGE_NUM) / SPECIAL_DAMAGE_DEN
}

/// Resolve a full stat block from a category and authored overrides
///
/// Present fields are taken verbatim; missing ones come from the band.
/// `max_hp` falls back to an authored `hp` before the band, and is never
/// below 1. `hp` is clamped into `[0, max_hp]`.
pub fn resolve_stats(category: Category, overrides: &StatOverrides) -> CombatStats {
    let band = category.band();

    let max_hp = overrides
        .max_hp
        .or(overrides.hp)
        .unwrap_or(band.hp)
        .max(1);
    let hp = overrides.hp.unwrap_or(max_hp).min(max_hp);
    let attack = overrides.attack.unwrap_or(band.attack);

    CombatStats {
        hp,
        max_hp,
        attack,
        defense: overrides.defense.unwrap_or(band.defense),
        speed: overrides.speed.unwrap_or(band.speed),
        special_ability: overrides
            .special_ability
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        special_damage: overrides
            .special_damage
            .unwrap_or_else(|| default_special_damage(attack)),
    }
}
