//! Battle loop
//!
//! Orders turns by speed, applies the battle type's pre-conditions, then
//! alternates actions until someone falls or the round cap is hit.

use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::constants::{DIVINE_BOOST_DEN, DIVINE_BOOST_NUM, MAX_ROUNDS};
use crate::combat::outcome::{decide_winner, BattleResult};
use crate::combat::resolution::{resolve_action, BattleAction, StrikeMode};
use crate::core::types::Side;

/// Framing of a battle
///
/// Only `Ambush` and `DivineContest` change mechanics, and only before the
/// first round. The others exist for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleType {
    #[default]
    Duel,
    HonorCombat,
    Ambush,
    DivineContest,
    Tournament,
}

impl BattleType {
    pub const ALL: [BattleType; 5] = [
        BattleType::Duel,
        BattleType::HonorCombat,
        BattleType::Ambush,
        BattleType::DivineContest,
        BattleType::Tournament,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BattleType::Duel => "duel",
            BattleType::HonorCombat => "honor_combat",
            BattleType::Ambush => "ambush",
            BattleType::DivineContest => "divine_contest",
            BattleType::Tournament => "tournament",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl FromStr for BattleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown battle type '{}'", s))
    }
}

/// Apply the battle type's stat modifiers
///
/// In a divine contest, every top-tier entity has max health, current
/// health and attack scaled by 1.25 (floored). Other types return the
/// combatants unchanged.
pub fn apply_battle_modifiers(
    first: &Combatant,
    second: &Combatant,
    battle_type: BattleType,
) -> (Combatant, Combatant) {
    let mut first = first.clone();
    let mut second = second.clone();

    if battle_type == BattleType::DivineContest {
        for combatant in [&mut first, &mut second] {
            if combatant.category.is_top_tier() {
                let stats = &mut combatant.stats;
                stats.max_hp = divine_boost(stats.max_hp);
                stats.hp = divine_boost(stats.hp);
                stats.attack = divine_boost(stats.attack);
                tracing::debug!(
                    combatant = %combatant.id,
                    max_hp = stats.max_hp,
                    attack = stats.attack,
                    "Divine boost applied"
                );
            }
        }
    }

    (first, second)
}

fn divine_boost(value: u32) -> u32 {
    value.saturating_mul(DIVINE_BOOST_NUM) / DIVINE_BOOST_DEN
}

/// Which side acts first: `true` if `first` does
///
/// Higher speed goes first; ties keep input order.
pub fn first_moves_first(first: &Combatant, second: &Combatant) -> bool {
    first.stats.speed >= second.stats.speed
}

/// Run a full battle with the given random source
///
/// `first` is the initiating combatant: it takes the free action in an
/// ambush and wins speed ties.
pub fn simulate<R: Rng + ?Sized>(
    first: &Combatant,
    second: &Combatant,
    battle_type: BattleType,
    rng: &mut R,
) -> BattleResult {
    let (c1, c2) = apply_battle_modifiers(first, second, battle_type);
    let fighters = [&c1, &c2];
    let mut hp = [c1.stats.max_hp, c2.stats.max_hp];
    let mut log: Vec<BattleAction> = Vec::new();

    tracing::info!(
        first = %c1.id,
        second = %c2.id,
        battle_type = battle_type.label(),
        "Battle started"
    );

    if battle_type == BattleType::Ambush {
        let action = resolve_action(
            0,
            Side::First,
            &c1,
            &c2,
            hp[0],
            hp[1],
            StrikeMode::Ambush,
            rng,
        );
        hp[1] = action.defender_hp;
        tracing::debug!(damage = action.damage, "{}", action.description);
        log.push(action);
    }

    let order = if first_moves_first(&c1, &c2) {
        [Side::First, Side::Second]
    } else {
        [Side::Second, Side::First]
    };

    let mut total_rounds = 0;
    let mut round = 1;
    while round <= MAX_ROUNDS && hp[0] > 0 && hp[1] > 0 {
        total_rounds = round;

        for side in order {
            let (attacker, defender) = (side.index(), side.opponent().index());
            let action = resolve_action(
                round,
                side,
                fighters[attacker],
                fighters[defender],
                hp[attacker],
                hp[defender],
                StrikeMode::Normal,
                rng,
            );
            hp[defender] = action.defender_hp;
            tracing::debug!(round, damage = action.damage, "{}", action.description);
            log.push(action);

            if hp[defender] == 0 {
                break;
            }
        }

        round += 1;
    }

    let round_cap_reached = hp[0] > 0 && hp[1] > 0;
    let verdict = decide_winner(&c1, hp[0], &c2, hp[1]);

    tracing::info!(
        winner = verdict.winner.as_ref().map(|w| w.as_str()).unwrap_or("draw"),
        total_rounds,
        round_cap_reached,
        "Battle finished"
    );

    BattleResult {
        winner: verdict.winner,
        winner_side: verdict.winner_side,
        winner_kind: verdict.winner_kind,
        total_rounds,
        log,
        combatant1_final_hp: hp[0],
        combatant2_final_hp: hp[1],
        combatant1_max_hp: c1.stats.max_hp,
        combatant2_max_hp: c2.stats.max_hp,
        round_cap_reached,
    }
}

/// Run a battle with a ChaCha8 generator seeded from `seed`
///
/// The same seed and inputs always replay the same battle.
pub fn simulate_seeded(
    first: &Combatant,
    second: &Combatant,
    battle_type: BattleType,
    seed: u64,
) -> BattleResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate(first, second, battle_type, &mut rng)
}
