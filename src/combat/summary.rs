//! Condensed statistics over a battle log
//!
//! Used by both narration paths so prompt and fallback agree on the facts.

use serde::Serialize;

use crate::combat::outcome::BattleResult;
use crate::combat::resolution::ActionKind;
use crate::core::types::Side;

/// The single most damaging hit of a battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiggestHit {
    pub attacker: Side,
    pub damage: u32,
    pub round: u32,
    pub kind: ActionKind,
}

impl BiggestHit {
    pub fn defender(&self) -> Side {
        self.attacker.opponent()
    }

    /// When the hit landed, e.g. "in round 3"
    pub fn moment(&self) -> String {
        if self.round == 0 {
            "in the opening ambush".to_string()
        } else {
            format!("in round {}", self.round)
        }
    }
}

/// Tallies over a battle log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BattleSummary {
    pub total_rounds: u32,
    pub attacks: u32,
    pub specials: u32,
    pub criticals: u32,
    pub dodges: u32,
    /// Damage dealt, indexed by `Side::index`
    pub damage_dealt: [u32; 2],
    pub biggest_hit: Option<BiggestHit>,
    pub had_ambush: bool,
    pub round_cap_reached: bool,
}

impl BattleSummary {
    pub fn from_result(result: &BattleResult) -> Self {
        let mut summary = BattleSummary {
            total_rounds: result.total_rounds,
            round_cap_reached: result.round_cap_reached,
            ..Default::default()
        };

        for action in &result.log {
            match action.kind {
                ActionKind::Attack => summary.attacks += 1,
                ActionKind::Special => summary.specials += 1,
                ActionKind::Critical => summary.criticals += 1,
                ActionKind::Dodge => summary.dodges += 1,
            }
            summary.had_ambush |= action.ambush;

            summary.damage_dealt[action.attacker_side.index()] += action.damage;

            // Earliest hit wins ties
            let bigger = summary
                .biggest_hit
                .as_ref()
                .map_or(action.damage > 0, |best| action.damage > best.damage);
            if bigger {
                summary.biggest_hit = Some(BiggestHit {
                    attacker: action.attacker_side,
                    damage: action.damage,
                    round: action.round,
                    kind: action.kind,
                });
            }
        }

        summary
    }

    pub fn total_actions(&self) -> u32 {
        self.attacks + self.specials + self.criticals + self.dodges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::outcome::WinnerKind;
    use crate::combat::resolution::BattleAction;
    use crate::core::types::CombatantId;

    fn action(round: u32, attacker: &str, kind: ActionKind, damage: u32) -> BattleAction {
        let (defender, side) = if attacker == "a" {
            ("b", Side::First)
        } else {
            ("a", Side::Second)
        };
        BattleAction {
            round,
            attacker: CombatantId::new(attacker),
            defender: CombatantId::new(defender),
            attacker_side: side,
            kind,
            damage,
            attacker_hp: 10,
            defender_hp: 10,
            description: String::new(),
            ambush: round == 0,
        }
    }

    #[test]
    fn test_summary_counts_and_biggest_hit() {
        let result = BattleResult {
            winner: Some(CombatantId::new("a")),
            winner_side: Some(Side::First),
            winner_kind: WinnerKind::Entity,
            total_rounds: 2,
            log: vec![
                action(0, "a", ActionKind::Attack, 5),
                action(1, "a", ActionKind::Critical, 12),
                action(1, "b", ActionKind::Dodge, 0),
                action(2, "a", ActionKind::Special, 12),
                action(2, "b", ActionKind::Attack, 3),
            ],
            combatant1_final_hp: 10,
            combatant2_final_hp: 0,
            combatant1_max_hp: 13,
            combatant2_max_hp: 29,
            round_cap_reached: false,
        };

        let summary = BattleSummary::from_result(&result);
        assert_eq!(summary.attacks, 2);
        assert_eq!(summary.criticals, 1);
        assert_eq!(summary.specials, 1);
        assert_eq!(summary.dodges, 1);
        assert_eq!(summary.total_actions(), 5);
        assert_eq!(summary.damage_dealt, [29, 3]);
        assert!(summary.had_ambush);

        let biggest = summary.biggest_hit.unwrap();
        assert_eq!(biggest.damage, 12);
        assert_eq!(biggest.round, 1);
        assert_eq!(biggest.kind, ActionKind::Critical);
        assert_eq!(biggest.attacker, Side::First);
        assert_eq!(biggest.defender(), Side::Second);
        assert_eq!(biggest.moment(), "in round 1");
    }

    #[test]
    fn test_ambush_hit_moment() {
        let hit = BiggestHit {
            attacker: Side::First,
            damage: 40,
            round: 0,
            kind: ActionKind::Attack,
        };
        assert_eq!(hit.moment(), "in the opening ambush");
    }

    #[test]
    fn test_all_dodges_have_no_biggest_hit() {
        let result = BattleResult {
            winner: None,
            winner_side: None,
            winner_kind: WinnerKind::Draw,
            total_rounds: 1,
            log: vec![
                action(1, "a", ActionKind::Dodge, 0),
                action(1, "b", ActionKind::Dodge, 0),
            ],
            combatant1_final_hp: 10,
            combatant2_final_hp: 10,
            combatant1_max_hp: 10,
            combatant2_max_hp: 10,
            round_cap_reached: false,
        };
        let summary = BattleSummary::from_result(&result);
        assert!(summary.biggest_hit.is_none());
        assert_eq!(summary.damage_dealt, [0, 0]);
    }
}
