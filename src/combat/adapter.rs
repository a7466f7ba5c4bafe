//! Combat adapter - bridges collaborator records to battle combatants
//!
//! The surrounding application stores two differently shaped records:
//! authored entities (tiered, with a nested stat block) and bestiary
//! creatures (danger-rated, with flat stat fields). Each shape gets its own
//! adapter; both produce the same `Combatant`.

use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::stats::{resolve_stats, Category, StatOverrides};
use crate::core::types::{CombatantId, CombatantKind};

/// Authored entity record (deity, hero, mortal)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    pub name: String,
    /// Tier label, e.g. "god" or "mortal"
    #[serde(default)]
    pub tier: Option<String>,
    /// Sphere of influence, e.g. "the sea"
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Named powers; the first is used as the special ability if none is set
    #[serde(default)]
    pub powers: Vec<String>,
    #[serde(default)]
    pub stats: Option<StatOverrides>,
}

/// Bestiary creature record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: String,
    pub name: String,
    /// Danger label, e.g. "low" or "extreme"
    #[serde(default)]
    pub danger_level: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub max_hp: Option<u32>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub speed: Option<u32>,
    #[serde(default)]
    pub special_ability: Option<String>,
    #[serde(default)]
    pub special_damage: Option<u32>,
}

/// Either record shape, tagged by `kind` on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatantSource {
    Entity(EntityRecord),
    Creature(CreatureRecord),
}

impl CombatantSource {
    pub fn into_combatant(self) -> Combatant {
        match self {
            CombatantSource::Entity(record) => from_entity(&record),
            CombatantSource::Creature(record) => from_creature(&record),
        }
    }
}

/// Build a combatant from an entity record
pub fn from_entity(record: &EntityRecord) -> Combatant {
    let category = Category::entity(record.tier.as_deref());

    let mut overrides = record.stats.clone().unwrap_or_default();
    if overrides.special_ability.is_none() {
        overrides.special_ability = first_named(&record.powers);
    }

    let stats = resolve_stats(category, &overrides);
    let flavor = join_flavor(
        record.domain.as_deref().map(|d| format!("Domain: {}", d)),
        record.description.as_deref(),
    );

    Combatant {
        id: CombatantId::new(record.id.clone()),
        name: display_name(&record.name, &record.id),
        kind: CombatantKind::Entity,
        category,
        stats,
        flavor,
    }
}

/// Build a combatant from a creature record
pub fn from_creature(record: &CreatureRecord) -> Combatant {
    let category = Category::creature(record.danger_level.as_deref());

    let overrides = StatOverrides {
        hp: record.hp,
        max_hp: record.max_hp,
        attack: record.attack,
        defense: record.defense,
        speed: record.speed,
        special_ability: record
            .special_ability
            .clone()
            .or_else(|| first_named(&record.abilities)),
        special_damage: record.special_damage,
    };

    let stats = resolve_stats(category, &overrides);
    let flavor = join_flavor(
        record.habitat.as_deref().map(|h| format!("Habitat: {}", h)),
        record.description.as_deref(),
    );

    Combatant {
        id: CombatantId::new(record.id.clone()),
        name: display_name(&record.name, &record.id),
        kind: CombatantKind::Creature,
        category,
        stats,
        flavor,
    }
}

fn first_named(names: &[String]) -> Option<String> {
    names
        .iter()
        .map(|n| n.trim())
        .find(|n| !n.is_empty())
        .map(str::to_string)
}

fn display_name(name: &str, id: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        id.to_string()
    } else {
        name.to_string()
    }
}

fn join_flavor(lead: Option<String>, description: Option<&str>) -> Option<String> {
    let description = description.map(str::trim).filter(|d| !d.is_empty());
    match (lead, description) {
        (Some(lead), Some(desc)) => Some(format!("{}. {}", lead, desc)),
        (Some(lead), None) => Some(lead),
        (None, Some(desc)) => Some(desc.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::stats::{DangerTier, EntityTier};

    #[test]
    fn test_entity_adapter_uses_tier_band_and_first_power() {
        let record = EntityRecord {
            id: "poseidon".into(),
            name: "Poseidon".into(),
            tier: Some("God".into()),
            domain: Some("the sea".into()),
            powers: vec!["Earthshaker".into(), "Storm Call".into()],
            ..Default::default()
        };
        let c = from_entity(&record);
        assert_eq!(c.kind, CombatantKind::Entity);
        assert_eq!(c.category, Category::Entity(EntityTier::God));
        assert_eq!(c.stats.max_hp, 200);
        assert_eq!(c.stats.special_ability.as_deref(), Some("Earthshaker"));
        assert_eq!(c.flavor.as_deref(), Some("Domain: the sea"));
    }

    #[test]
    fn test_entity_explicit_stats_win() {
        let record = EntityRecord {
            id: "e1".into(),
            name: "Odd One".into(),
            tier: Some("mortal".into()),
            stats: Some(StatOverrides {
                attack: Some(40),
                special_ability: Some("Gambit".into()),
                ..Default::default()
            }),
            powers: vec!["Ignored".into()],
            ..Default::default()
        };
        let c = from_entity(&record);
        assert_eq!(c.stats.attack, 40);
        assert_eq!(c.stats.defense, 8);
        assert_eq!(c.stats.special_damage, 60);
        assert_eq!(c.stats.special_ability.as_deref(), Some("Gambit"));
    }

    #[test]
    fn test_creature_adapter_reads_flat_fields() {
        let record = CreatureRecord {
            id: "kraken".into(),
            name: "Kraken".into(),
            danger_level: Some("extreme".into()),
            habitat: Some("Deep trenches".into()),
            description: Some("Many-armed terror.".into()),
            abilities: vec!["".into(), "Ink Cloud".into()],
            hp: Some(300),
            ..Default::default()
        };
        let c = from_creature(&record);
        assert_eq!(c.kind, CombatantKind::Creature);
        assert_eq!(c.category, Category::Creature(DangerTier::Extreme));
        assert_eq!(c.stats.max_hp, 300);
        assert_eq!(c.stats.attack, 24);
        assert_eq!(c.stats.special_ability.as_deref(), Some("Ink Cloud"));
        assert_eq!(
            c.flavor.as_deref(),
            Some("Habitat: Deep trenches. Many-armed terror.")
        );
    }

    #[test]
    fn test_unknown_labels_fall_back_to_default_band() {
        let c = from_creature(&CreatureRecord {
            id: "x".into(),
            name: "".into(),
            danger_level: Some("spooky".into()),
            ..Default::default()
        });
        assert_eq!(c.category, Category::Unclassified);
        assert_eq!(c.name, "x");
        assert_eq!(c.stats.max_hp, 100);
        assert!(!c.stats.has_special());
    }

    #[test]
    fn test_tagged_source_deserializes_both_shapes() {
        let json = r#"[
            {"kind": "entity", "id": "zeus", "name": "Zeus", "tier": "god",
             "stats": {"speed": 20}},
            {"kind": "creature", "id": "wolf", "name": "Dire Wolf",
             "danger_level": "moderate", "speed": 18}
        ]"#;
        let sources: Vec<CombatantSource> = serde_json::from_str(json).unwrap();
        let combatants: Vec<Combatant> =
            sources.into_iter().map(CombatantSource::into_combatant).collect();
        assert_eq!(combatants[0].kind, CombatantKind::Entity);
        assert_eq!(combatants[0].stats.speed, 20);
        assert_eq!(combatants[1].kind, CombatantKind::Creature);
        assert_eq!(combatants[1].stats.speed, 18);
        assert_eq!(combatants[1].stats.attack, 13);
    }
}
