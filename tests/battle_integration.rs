//! Battle system integration tests

use battle_chronicle::combat::*;
use battle_chronicle::core::types::{CombatantId, CombatantKind, Side};

fn entity(id: &str, tier: &str, stats: StatOverrides) -> Combatant {
    from_entity(&EntityRecord {
        id: id.into(),
        name: id.to_uppercase(),
        tier: Some(tier.into()),
        stats: Some(stats),
        ..Default::default()
    })
}

fn god_a() -> Combatant {
    entity(
        "a",
        "god",
        StatOverrides {
            hp: Some(200),
            attack: Some(25),
            defense: Some(20),
            speed: Some(15),
            ..Default::default()
        },
    )
}

fn mortal_b() -> Combatant {
    entity(
        "b",
        "mortal",
        StatOverrides {
            hp: Some(80),
            attack: Some(8),
            defense: Some(8),
            speed: Some(10),
            ..Default::default()
        },
    )
}

#[test]
fn test_god_beats_mortal_in_duel() {
    let a = god_a();
    let b = mortal_b();

    for seed in 0..25 {
        let result = simulate_seeded(&a, &b, BattleType::Duel, seed);

        assert_eq!(result.winner, Some(CombatantId::new("a")), "seed {}", seed);
        assert_eq!(result.winner_side, Some(Side::First));
        assert_eq!(result.winner_kind, WinnerKind::Entity);
        assert!(result.total_rounds < 50);
        assert_eq!(result.combatant2_final_hp, 0);
        assert!(!result.round_cap_reached);

        // A is faster, so A opens every round
        for round in 1..=result.total_rounds {
            let opener = result.log.iter().find(|a| a.round == round).unwrap();
            assert_eq!(opener.attacker, a.id);
        }
    }
}

#[test]
fn test_ambush_opens_with_free_action() {
    let a = god_a();
    // B is faster, so normal order puts B first once the ambush is over
    let b = entity(
        "b",
        "mortal",
        StatOverrides {
            speed: Some(30),
            hp: Some(500),
            ..Default::default()
        },
    );

    let result = simulate_seeded(&a, &b, BattleType::Ambush, 42);

    let opener = &result.log[0];
    assert!(opener.ambush);
    assert_eq!(opener.round, 0);
    assert_eq!(opener.attacker, a.id);
    assert_ne!(opener.kind, ActionKind::Dodge);
    assert!(opener.damage >= 1);

    assert_eq!(result.log.iter().filter(|a| a.ambush).count(), 1);
    let first_regular = &result.log[1];
    assert_eq!(first_regular.round, 1);
    assert_eq!(first_regular.attacker, b.id);
}

#[test]
fn test_duel_has_no_ambush_entry() {
    let result = simulate_seeded(&god_a(), &mortal_b(), BattleType::Duel, 3);
    assert!(result.log.iter().all(|a| !a.ambush));
    assert_eq!(result.log[0].round, 1);
}

#[test]
fn test_divine_contest_boosts_both_top_tier() {
    let a = god_a();
    let b = entity("b", "deity", StatOverrides::default());

    let (boosted_a, boosted_b) = apply_battle_modifiers(&a, &b, BattleType::DivineContest);
    assert_eq!(boosted_a.stats.max_hp, 200 * 5 / 4);
    assert_eq!(boosted_a.stats.attack, 25 * 5 / 4);
    assert_eq!(boosted_b.stats.max_hp, 250);
    assert_eq!(boosted_b.stats.attack, 31);

    let result = simulate_seeded(&a, &b, BattleType::DivineContest, 12);
    assert_eq!(result.combatant1_max_hp, 250);
    assert_eq!(result.combatant2_max_hp, 250);
}

#[test]
fn test_divine_contest_ignores_creatures_and_lower_tiers() {
    let dragon = from_creature(&CreatureRecord {
        id: "dragon".into(),
        name: "Dragon".into(),
        danger_level: Some("extreme".into()),
        ..Default::default()
    });
    let hero = entity("hero", "hero", StatOverrides::default());

    let result = simulate_seeded(&dragon, &hero, BattleType::DivineContest, 12);
    assert_eq!(result.combatant1_max_hp, dragon.stats.max_hp);
    assert_eq!(result.combatant2_max_hp, hero.stats.max_hp);
}

#[test]
fn test_same_seed_replays_identically() {
    let a = god_a();
    let b = mortal_b();
    for battle_type in BattleType::ALL {
        let first = simulate_seeded(&a, &b, battle_type, 777);
        let second = simulate_seeded(&a, &b, battle_type, 777);
        assert_eq!(first, second);
    }
}

#[test]
fn test_creature_winner_kind() {
    let hydra = from_creature(&CreatureRecord {
        id: "hydra".into(),
        name: "Hydra".into(),
        danger_level: Some("extreme".into()),
        hp: Some(1_000),
        attack: Some(60),
        ..Default::default()
    });
    let villager = entity("villager", "mortal", StatOverrides::default());

    let result = simulate_seeded(&villager, &hydra, BattleType::Tournament, 5);
    assert_eq!(result.winner, Some(hydra.id.clone()));
    assert_eq!(result.winner_kind, WinnerKind::Creature);
    assert_eq!(hydra.kind, CombatantKind::Creature);
}

#[test]
fn test_draw_exactly_when_health_is_equal() {
    // Twins with huge health and armor grind to the round cap
    let twin = |id: &str| {
        entity(
            id,
            "hero",
            StatOverrides {
                hp: Some(5_000),
                attack: Some(2),
                defense: Some(400),
                speed: Some(12),
                ..Default::default()
            },
        )
    };
    let (a, b) = (twin("castor"), twin("pollux"));

    for seed in 0..40 {
        let result = simulate_seeded(&a, &b, BattleType::HonorCombat, seed);
        assert!(result.round_cap_reached);
        assert_eq!(result.total_rounds, 50);
        let equal = result.combatant1_final_hp == result.combatant2_final_hp;
        assert_eq!(result.is_draw(), equal, "seed {}", seed);
        assert_eq!(result.winner_kind == WinnerKind::Draw, equal);
    }
}

#[test]
fn test_mirror_match_reports_winning_side() {
    let zeus = entity("zeus", "god", StatOverrides::default());
    let mut second_side_wins = 0;

    for seed in 0..200 {
        let result = simulate_seeded(&zeus, &zeus, BattleType::Duel, seed);
        let Some(side) = result.winner_side else {
            continue;
        };
        assert_eq!(result.winner, Some(zeus.id.clone()));
        assert_eq!(result.final_hp(side.opponent()), 0, "seed {}", seed);
        assert!(result.final_hp(side) > 0, "seed {}", seed);

        let summary = BattleSummary::from_result(&result);
        assert!(summary.damage_dealt[side.index()] >= zeus.stats.max_hp, "seed {}", seed);
        assert_eq!(
            summary.damage_dealt[side.opponent().index()],
            zeus.stats.max_hp - result.final_hp(side),
            "seed {}",
            seed
        );

        if side == Side::Second {
            second_side_wins += 1;
            assert_eq!(result.combatant1_final_hp, 0);
        }
    }

    assert!(second_side_wins > 0);
}

#[test]
fn test_result_serializes_for_collaborators() {
    let result = simulate_seeded(&god_a(), &mortal_b(), BattleType::Ambush, 1);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["winner"], "a");
    assert_eq!(json["winner_side"], "first");
    assert_eq!(json["log"][0]["attacker_side"], "first");
    assert_eq!(json["winner_kind"], "entity");
    assert_eq!(json["log"][0]["ambush"], true);
    assert!(json["log"][0]["description"]
        .as_str()
        .unwrap()
        .starts_with("Ambush!"));

    let back: BattleResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_bundled_records_load() {
    let load = |name: &str| -> Combatant {
        let path = format!("data/combatants/{}.json", name);
        let contents = std::fs::read_to_string(&path).expect("bundled record should exist");
        serde_json::from_str::<CombatantSource>(&contents)
            .expect("bundled record should parse")
            .into_combatant()
    };

    let athena = load("athena");
    assert_eq!(athena.category, Category::Entity(EntityTier::God));
    assert_eq!(athena.stats.special_ability.as_deref(), Some("Aegis Bash"));

    let arachne = load("arachne");
    assert_eq!(arachne.stats.speed, 12);
    assert_eq!(arachne.stats.special_damage, 14);

    let minotaur = load("minotaur");
    assert_eq!(minotaur.kind, CombatantKind::Creature);
    assert_eq!(minotaur.stats.max_hp, 170);

    let config = battle_chronicle::core::config::NarrationConfig::load("data/narration.toml")
        .expect("bundled config should be valid");
    assert_eq!(config, battle_chronicle::core::config::NarrationConfig::default());
}
