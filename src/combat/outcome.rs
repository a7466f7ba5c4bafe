//! Battle outcome and winner determination

use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;
use crate::combat::resolution::BattleAction;
use crate::core::types::{CombatantId, CombatantKind, Side};

/// Kind of the winning combatant, or a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinnerKind {
    Entity,
    Creature,
    Draw,
}

impl From<CombatantKind> for WinnerKind {
    fn from(kind: CombatantKind) -> Self {
        match kind {
            CombatantKind::Entity => WinnerKind::Entity,
            CombatantKind::Creature => WinnerKind::Creature,
        }
    }
}

/// Winner (or draw) decided from final health
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub winner: Option<CombatantId>,
    pub winner_side: Option<Side>,
    pub winner_kind: WinnerKind,
}

impl Verdict {
    fn win(combatant: &Combatant, side: Side) -> Self {
        Self {
            winner: Some(combatant.id.clone()),
            winner_side: Some(side),
            winner_kind: combatant.kind.into(),
        }
    }

    fn draw() -> Self {
        Self {
            winner: None,
            winner_side: None,
            winner_kind: WinnerKind::Draw,
        }
    }
}

/// Decide the winner from final health values
///
/// Whoever has strictly more health wins. That covers both a knockout
/// (one side at 0) and a round-cap finish with both sides standing.
/// Equal health, including a double knockout, is a draw. The rule only
/// compares health: swapping the arguments picks the same combatant, now
/// reported on the other side.
pub fn decide_winner(
    first: &Combatant,
    first_hp: u32,
    second: &Combatant,
    second_hp: u32,
) -> Verdict {
    match first_hp.cmp(&second_hp) {
        std::cmp::Ordering::Greater => Verdict::win(first, Side::First),
        std::cmp::Ordering::Less => Verdict::win(second, Side::Second),
        std::cmp::Ordering::Equal => Verdict::draw(),
    }
}

/// Complete result of one battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Winner id, `None` for a draw
    pub winner: Option<CombatantId>,
    /// Winner side; the only way to tell a mirror match apart
    pub winner_side: Option<Side>,
    pub winner_kind: WinnerKind,
    /// Rounds executed (the ambush opener does not count)
    pub total_rounds: u32,
    /// Ordered, append-only action log
    pub log: Vec<BattleAction>,
    pub combatant1_final_hp: u32,
    pub combatant2_final_hp: u32,
    /// Max health after battle-type modifiers
    pub combatant1_max_hp: u32,
    pub combatant2_max_hp: u32,
    /// True when the battle stopped at the round cap with both standing
    pub round_cap_reached: bool,
}

impl BattleResult {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Name of the winner among the two combatants, if any
    pub fn winner_name<'a>(&self, first: &'a Combatant, second: &'a Combatant) -> Option<&'a str> {
        match self.winner_side? {
            Side::First => Some(first.name.as_str()),
            Side::Second => Some(second.name.as_str()),
        }
    }

    /// Final health of one side
    pub fn final_hp(&self, side: Side) -> u32 {
        match side {
            Side::First => self.combatant1_final_hp,
            Side::Second => self.combatant2_final_hp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::stats::{resolve_stats, Category, StatOverrides};

    fn combatant(id: &str, kind: CombatantKind) -> Combatant {
        Combatant::new(
            id,
            id,
            kind,
            Category::Unclassified,
            resolve_stats(Category::Unclassified, &StatOverrides::default()),
        )
    }

    #[test]
    fn test_knockout_winner() {
        let a = combatant("a", CombatantKind::Entity);
        let b = combatant("b", CombatantKind::Creature);
        let verdict = decide_winner(&a, 0, &b, 12);
        assert_eq!(verdict.winner, Some(CombatantId::new("b")));
        assert_eq!(verdict.winner_side, Some(Side::Second));
        assert_eq!(verdict.winner_kind, WinnerKind::Creature);
    }

    #[test]
    fn test_cap_winner_strictly_ahead() {
        let a = combatant("a", CombatantKind::Entity);
        let b = combatant("b", CombatantKind::Creature);
        let verdict = decide_winner(&a, 41, &b, 40);
        assert_eq!(verdict.winner, Some(CombatantId::new("a")));
        assert_eq!(verdict.winner_kind, WinnerKind::Entity);
    }

    #[test]
    fn test_equal_health_is_draw() {
        let a = combatant("a", CombatantKind::Entity);
        let b = combatant("b", CombatantKind::Entity);
        assert_eq!(decide_winner(&a, 30, &b, 30).winner_kind, WinnerKind::Draw);
        assert_eq!(decide_winner(&a, 0, &b, 0).winner, None);
        assert_eq!(decide_winner(&a, 0, &b, 0).winner_side, None);
    }

    #[test]
    fn test_mirror_match_verdict_keeps_sides_apart() {
        let zeus = combatant("zeus", CombatantKind::Entity);
        let first_wins = decide_winner(&zeus, 9, &zeus, 0);
        let second_wins = decide_winner(&zeus, 0, &zeus, 9);
        assert_eq!(first_wins.winner, second_wins.winner);
        assert_eq!(first_wins.winner_side, Some(Side::First));
        assert_eq!(second_wins.winner_side, Some(Side::Second));
    }

    #[test]
    fn test_verdict_independent_of_argument_order() {
        let a = combatant("a", CombatantKind::Entity);
        let b = combatant("b", CombatantKind::Creature);
        for (ha, hb) in [(0, 5), (5, 0), (7, 7), (12, 3)] {
            let forward = decide_winner(&a, ha, &b, hb);
            let swapped = decide_winner(&b, hb, &a, ha);
            assert_eq!(forward.winner, swapped.winner);
            assert_eq!(forward.winner_kind, swapped.winner_kind);
            assert_eq!(forward.winner_side.map(Side::opponent), swapped.winner_side);
        }
    }
}
