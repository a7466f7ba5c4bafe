//! Deterministic template narration
//!
//! Used whenever the generator fails. Built only from the battle result and
//! the combatants' names and categories, so it cannot fail and always states
//! the true outcome and round count.

use crate::combat::{ActionKind, BattleType};
use crate::llm::context::{battle_type_context, NarrationContext, NarrationStyle};

/// Render a narration without any external service
pub fn fallback_narration(ctx: &NarrationContext<'_>) -> String {
    let summary = ctx.summary();
    let mut paragraphs: Vec<String> = Vec::new();

    // Opening
    let mut opening = String::from(opening_line(ctx.style));
    if let Some(setting) = ctx.setting {
        opening.push_str(&format!(" The stage: {}.", setting.trim_end_matches('.')));
    }
    if let Some(collection) = ctx.collection {
        opening.push_str(&format!(" This tale is drawn from {}.", collection));
    }
    opening.push(' ');
    opening.push_str(&battle_type_context(ctx.battle_type, ctx.first, ctx.second));
    paragraphs.push(opening);

    // The combatants
    paragraphs.push(format!(
        "On one side stood {}, a {} {}. On the other, {}, a {} {}.",
        ctx.first.name,
        ctx.first.category.label(),
        ctx.first.kind.label(),
        ctx.second.name,
        ctx.second.category.label(),
        ctx.second.kind.label()
    ));

    // The fight
    let mut fight = String::new();
    if summary.had_ambush {
        if let Some(opener) = ctx.result.log.first() {
            fight.push_str(&format!("It began with a surprise: {} ", opener.description));
        }
    }
    fight.push_str(&format!(
        "Across {} {} there were {} critical {}, {} special {} and {} {}.",
        summary.total_rounds,
        plural(summary.total_rounds, "round", "rounds"),
        summary.criticals,
        plural(summary.criticals, "strike", "strikes"),
        summary.specials,
        plural(summary.specials, "move", "moves"),
        summary.dodges,
        plural(summary.dodges, "dodge", "dodges"),
    ));
    if let Some(hit) = &summary.biggest_hit {
        let how = match hit.kind {
            ActionKind::Special => "with a special move",
            ActionKind::Critical => "with a critical strike",
            _ => "with a single blow",
        };
        fight.push_str(&format!(
            " The mightiest moment came {}, when {} dealt {} damage to {} {}.",
            hit.moment(),
            ctx.name_of(hit.attacker),
            hit.damage,
            ctx.name_of(hit.defender()),
            how
        ));
    }
    paragraphs.push(fight);

    // The ending
    let ending = match (ctx.winner_name(), ctx.loser_name()) {
        (Some(winner), Some(loser)) => {
            let how = if summary.round_cap_reached {
                format!(
                    "When the contest was called after {} rounds, {} still stood stronger than {}.",
                    summary.total_rounds, winner, loser
                )
            } else if summary.total_rounds == 0 {
                format!("Before the first round began, {} could fight no more.", loser)
            } else {
                format!(
                    "After {} {}, {} could fight no more.",
                    summary.total_rounds,
                    plural(summary.total_rounds, "round", "rounds"),
                    loser
                )
            };
            format!("{} {} {}", how, victory_line(ctx.style, winner), honor_line(loser))
        }
        _ => format!(
            "After {} {}, neither could claim the field. The battle ends in a draw, {} and {} equal to the last.",
            summary.total_rounds,
            plural(summary.total_rounds, "round", "rounds"),
            ctx.first.name,
            ctx.second.name
        ),
    };
    paragraphs.push(ending);

    if ctx.battle_type == BattleType::Tournament {
        paragraphs.push("The crowd rose as one to salute both fighters.".to_string());
    }

    paragraphs.join("\n\n")
}

fn opening_line(style: NarrationStyle) -> &'static str {
    match style {
        NarrationStyle::Epic => "Sing now of a clash that the ages will remember.",
        NarrationStyle::Comedic => "Nobody expected this to go smoothly, and nobody was disappointed.",
        NarrationStyle::Tragic => "Some battles are won, and all of them cost something.",
        NarrationStyle::Dramatic => "The air went still. Everything came down to this.",
        NarrationStyle::Poetic => "Like two storms meeting over a quiet sea, they came together.",
    }
}

fn victory_line(style: NarrationStyle, winner: &str) -> String {
    match style {
        NarrationStyle::Epic => format!("{} is victorious, and the tale of it will be told for ages.", winner),
        NarrationStyle::Comedic => format!("{} wins, looking only slightly surprised about it.", winner),
        NarrationStyle::Tragic => format!("{} wins, though victory feels heavier than expected.", winner),
        NarrationStyle::Dramatic => format!("{} wins, and the silence that follows is deafening.", winner),
        NarrationStyle::Poetic => format!("{} wins, and the wind carries the name far and wide.", winner),
    }
}

fn honor_line(loser: &str) -> String {
    format!("{} fought bravely and with honor to the very end.", loser)
}

fn plural<'s>(count: u32, one: &'s str, many: &'s str) -> &'s str {
    if count == 1 {
        one
    } else {
        many
    }
}
