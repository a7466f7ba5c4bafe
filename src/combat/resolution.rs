//! Single action resolution
//!
//! One attacker acts against one defender: dodge roll, action-kind
//! selection, damage. All randomness comes from the caller's RNG, so a
//! seeded generator replays the same action.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::constants::{
    CRITICAL_CHANCE, CRITICAL_MULTIPLIER, DEFENSE_SCALE, DODGE_BASE_CHANCE, DODGE_MAX_CHANCE,
    DODGE_PER_SPEED_POINT, MIN_DAMAGE, SPECIAL_CHANCE, VARIANCE_MAX, VARIANCE_MIN,
};
use crate::core::types::{CombatantId, Side};

/// What kind of action was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Attack,
    Special,
    Critical,
    Dodge,
}

/// How the attacker gets to act
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeMode {
    /// Regular turn; the defender may dodge
    Normal,
    /// Free opening action; no dodge roll
    Ambush,
}

/// One combat-log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleAction {
    /// Round number; 0 for the ambush opener
    pub round: u32,
    pub attacker: CombatantId,
    pub defender: CombatantId,
    /// Side of the acting combatant
    pub attacker_side: Side,
    pub kind: ActionKind,
    /// Damage dealt (0 for a dodge)
    pub damage: u32,
    /// Attacker health after the action
    pub attacker_hp: u32,
    /// Defender health after the action
    pub defender_hp: u32,
    pub description: String,
    /// True for the pre-round ambush action
    #[serde(default)]
    pub ambush: bool,
}

impl BattleAction {
    pub fn defender_side(&self) -> Side {
        self.attacker_side.opponent()
    }
}

/// Probability that the defender dodges
///
/// Grows with the defender's speed advantage, bounded to `[0.10, 0.35]`.
pub fn dodge_chance(attacker_speed: u32, defender_speed: u32) -> f64 {
    let advantage = defender_speed.saturating_sub(attacker_speed) as f64;
    (DODGE_BASE_CHANCE + advantage * DODGE_PER_SPEED_POINT).min(DODGE_MAX_CHANCE)
}

/// Damage for a hit before health is applied
///
/// `floor(power * 100 / (100 + defense) * variance)`, doubled for a critical,
/// never below 1.
pub fn compute_damage(power: u32, defense: u32, variance: f64, critical: bool) -> u32 {
    let mitigated = power as f64 * DEFENSE_SCALE / (DEFENSE_SCALE + defense as f64);
    let mut damage = (mitigated * variance).floor() as u32;
    if critical {
        damage = damage.saturating_mul(CRITICAL_MULTIPLIER);
    }
    damage.max(MIN_DAMAGE)
}

/// Resolve one action of `attacker` against `defender`
///
/// # Arguments
/// * `round` - Round number recorded on the log entry
/// * `attacker_side` - Side the attacker fights on
/// * `attacker_hp` / `defender_hp` - Current health values
/// * `mode` - Whether the defender may dodge
///
/// # Returns
/// The log entry; `defender_hp` on it is the defender's new health
#[allow(clippy::too_many_arguments)]
pub fn resolve_action<R: Rng + ?Sized>(
    round: u32,
    attacker_side: Side,
    attacker: &Combatant,
    defender: &Combatant,
    attacker_hp: u32,
    defender_hp: u32,
    mode: StrikeMode,
    rng: &mut R,
) -> BattleAction {
    let ambush = mode == StrikeMode::Ambush;

    // Step 1: Dodge
    if !ambush {
        let chance = dodge_chance(attacker.stats.speed, defender.stats.speed);
        if rng.gen::<f64>() < chance {
            return BattleAction {
                round,
                attacker: attacker.id.clone(),
                defender: defender.id.clone(),
                attacker_side,
                kind: ActionKind::Dodge,
                damage: 0,
                attacker_hp,
                defender_hp,
                description: describe(attacker, defender, ActionKind::Dodge, 0, false),
                ambush,
            };
        }
    }

    // Step 2: Action kind (special first, critical only if special was not picked)
    let kind = if attacker.stats.has_special() && rng.gen::<f64>() < SPECIAL_CHANCE {
        ActionKind::Special
    } else if rng.gen::<f64>() < CRITICAL_CHANCE {
        ActionKind::Critical
    } else {
        ActionKind::Attack
    };

    // Step 3: Damage
    let power = match kind {
        ActionKind::Special => attacker.stats.special_damage,
        _ => attacker.stats.attack,
    };
    let variance = rng.gen_range(VARIANCE_MIN..=VARIANCE_MAX);
    let damage = compute_damage(
        power,
        defender.stats.defense,
        variance,
        kind == ActionKind::Critical,
    );

    // Step 4: Apply
    let defender_hp = defender_hp.saturating_sub(damage);

    BattleAction {
        round,
        attacker: attacker.id.clone(),
        defender: defender.id.clone(),
        attacker_side,
        kind,
        damage,
        attacker_hp,
        defender_hp,
        description: describe(attacker, defender, kind, damage, ambush),
        ambush,
    }
}

fn describe(
    attacker: &Combatant,
    defender: &Combatant,
    kind: ActionKind,
    damage: u32,
    ambush: bool,
) -> String {
    let line = match kind {
        ActionKind::Dodge => format!("{} dodges {}'s attack!", defender.name, attacker.name),
        ActionKind::Special => format!(
            "{} unleashes {} on {} for {} damage!",
            attacker.name,
            attacker.stats.special_ability.as_deref().unwrap_or("a special ability"),
            defender.name,
            damage
        ),
        ActionKind::Critical => format!(
            "{} lands a critical strike on {} for {} damage!",
            attacker.name, defender.name, damage
        ),
        ActionKind::Attack => format!(
            "{} strikes {} for {} damage.",
            attacker.name, defender.name, damage
        ),
    };

    if ambush {
        format!("Ambush! {}", line)
    } else {
        line
    }
}
