//! Gather battle context for narration prompts
//!
//! Builds the system instruction (tone plus content constraints) and the
//! user message (stat blocks, condensed log, verdict) for the generator.
//! The fallback narrator reads the same summary, so both paths agree on
//! what happened.

use serde::{Deserialize, Serialize};

use crate::combat::{BattleResult, BattleSummary, BattleType, Combatant, WinnerKind};
use crate::core::config::NarrationConfig;
use crate::core::types::Side;

/// Number of closing log lines quoted verbatim in the prompt
const KEY_MOMENTS: usize = 5;

/// Voice of the narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationStyle {
    #[default]
    Epic,
    Comedic,
    Tragic,
    Dramatic,
    Poetic,
}

impl NarrationStyle {
    pub const ALL: [NarrationStyle; 5] = [
        NarrationStyle::Epic,
        NarrationStyle::Comedic,
        NarrationStyle::Tragic,
        NarrationStyle::Dramatic,
        NarrationStyle::Poetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NarrationStyle::Epic => "epic",
            NarrationStyle::Comedic => "comedic",
            NarrationStyle::Tragic => "tragic",
            NarrationStyle::Dramatic => "dramatic",
            NarrationStyle::Poetic => "poetic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Tone and voice guidance for the generator
    pub fn instructions(self) -> &'static str {
        match self {
            NarrationStyle::Epic => {
                "Write in the grand voice of an ancient epic. Use sweeping imagery, \
                 invoke the weight of legend, and let each exchange feel momentous."
            }
            NarrationStyle::Comedic => {
                "Write with lighthearted humor. Find the absurdity in the clash, use \
                 playful asides and comic timing, but never mock either combatant."
            }
            NarrationStyle::Tragic => {
                "Write as a tragedy. Dwell on cost and consequence, give the defeated \
                 dignity, and let the ending carry a note of sorrow."
            }
            NarrationStyle::Dramatic => {
                "Write as a tense, cinematic drama. Build suspense round by round, \
                 use vivid pacing, and make the turning point land."
            }
            NarrationStyle::Poetic => {
                "Write in lyrical, rhythmic prose rich with metaphor. Let the battle \
                 read like a ballad without forcing rhyme."
            }
        }
    }
}

/// One sentence framing the battle type
pub fn battle_type_context(battle_type: BattleType, first: &Combatant, second: &Combatant) -> String {
    match battle_type {
        BattleType::Duel => format!(
            "{} and {} meet in a formal one-on-one duel.",
            first.name, second.name
        ),
        BattleType::HonorCombat => format!(
            "{} and {} fight an honor combat, bound by oath to fight fairly.",
            first.name, second.name
        ),
        BattleType::Ambush => format!(
            "{} ambushes {}, striking before the fight has truly begun.",
            first.name, second.name
        ),
        BattleType::DivineContest => format!(
            "{} and {} clash in a divine contest where the gods' own power burns brighter.",
            first.name, second.name
        ),
        BattleType::Tournament => format!(
            "{} and {} face each other in a tournament bout before a roaring crowd.",
            first.name, second.name
        ),
    }
}

/// Everything the narration stage reads
#[derive(Debug, Clone, Copy)]
pub struct NarrationContext<'a> {
    pub first: &'a Combatant,
    pub second: &'a Combatant,
    pub result: &'a BattleResult,
    pub battle_type: BattleType,
    pub style: NarrationStyle,
    /// Where the battle takes place
    pub setting: Option<&'a str>,
    /// Name of the collection the combatants come from
    pub collection: Option<&'a str>,
}

impl<'a> NarrationContext<'a> {
    pub fn new(
        first: &'a Combatant,
        second: &'a Combatant,
        result: &'a BattleResult,
        battle_type: BattleType,
        style: NarrationStyle,
    ) -> Self {
        Self {
            first,
            second,
            result,
            battle_type,
            style,
            setting: None,
            collection: None,
        }
    }

    pub fn with_setting(mut self, setting: &'a str) -> Self {
        self.setting = Some(setting);
        self
    }

    pub fn with_collection(mut self, collection: &'a str) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn summary(&self) -> BattleSummary {
        BattleSummary::from_result(self.result)
    }

    /// Display name of the combatant on `side`
    pub fn name_of(&self, side: Side) -> &'a str {
        match side {
            Side::First => self.first.name.as_str(),
            Side::Second => self.second.name.as_str(),
        }
    }

    /// Winner's name, `None` for a draw
    pub fn winner_name(&self) -> Option<&'a str> {
        self.result.winner_name(self.first, self.second)
    }

    /// Winner's opponent, `None` for a draw
    pub fn loser_name(&self) -> Option<&'a str> {
        let winner = self.result.winner_side?;
        Some(self.name_of(winner.opponent()))
    }

    /// The verdict as a plain statement
    pub fn verdict_line(&self) -> String {
        match self.winner_name() {
            Some(winner) => format!(
                "WINNER: {} ({}) after {} rounds",
                winner,
                label_winner_kind(self.result),
                self.result.total_rounds
            ),
            None => format!("RESULT: a draw after {} rounds", self.result.total_rounds),
        }
    }

    /// Build the system instruction
    pub fn system_prompt(&self, config: &NarrationConfig) -> String {
        let mut prompt = String::new();

        prompt.push_str("You are a storyteller who turns recorded battles into prose.\n\n");
        prompt.push_str(&format!("STYLE: {}\n", self.style.label()));
        prompt.push_str(self.style.instructions());
        prompt.push_str("\n\n");

        prompt.push_str("RULES:\n");
        prompt.push_str(&format!(
            "- Write between {} and {} words.\n",
            config.min_words, config.max_words
        ));
        prompt.push_str("- Keep it age-appropriate. No graphic violence, gore, or cruelty.\n");
        prompt.push_str("- Honor both combatants; the defeated side must keep its dignity.\n");
        prompt.push_str("- Follow the recorded events. Do not invent a different ending.\n");
        match self.winner_name() {
            Some(winner) => prompt.push_str(&format!(
                "- {} must be the winner of the story.\n",
                winner
            )),
            None => prompt.push_str("- The battle must end in a draw; neither side wins.\n"),
        }
        prompt.push_str("- Reply with the narration only, no headings or notes.\n");

        prompt
    }

    /// Build the user message
    pub fn user_message(&self) -> String {
        let summary = self.summary();
        let mut s = String::new();

        s.push_str(&battle_type_context(self.battle_type, self.first, self.second));
        s.push_str("\n\n");

        if let Some(setting) = self.setting {
            s.push_str(&format!("SETTING: {}\n", setting));
        }
        if let Some(collection) = self.collection {
            s.push_str(&format!("COLLECTION: {}\n", collection));
        }

        s.push_str("COMBATANTS:\n");
        for combatant in [self.first, self.second] {
            s.push_str(&format!("- {}\n", combatant.stat_line()));
            if let Some(flavor) = &combatant.flavor {
                s.push_str(&format!("  {}\n", flavor));
            }
        }

        s.push_str("\nBATTLE SUMMARY:\n");
        s.push_str(&format!("- Rounds: {}\n", summary.total_rounds));
        s.push_str(&format!(
            "- Critical hits: {}, special moves: {}, dodges: {}\n",
            summary.criticals, summary.specials, summary.dodges
        ));
        if let Some(hit) = &summary.biggest_hit {
            s.push_str(&format!(
                "- Most damaging hit: {} dealt {} damage to {} {}\n",
                self.name_of(hit.attacker),
                hit.damage,
                self.name_of(hit.defender()),
                hit.moment()
            ));
        }
        s.push_str(&format!(
            "- Final health: {} {}/{}, {} {}/{}\n",
            self.first.name,
            self.result.combatant1_final_hp,
            self.result.combatant1_max_hp,
            self.second.name,
            self.result.combatant2_final_hp,
            self.result.combatant2_max_hp
        ));
        if summary.round_cap_reached {
            s.push_str("- Neither fell; the battle was stopped at the round limit.\n");
        }

        let skip = self.result.log.len().saturating_sub(KEY_MOMENTS);
        if skip < self.result.log.len() {
            s.push_str("\nFINAL MOMENTS:\n");
            for action in self.result.log.iter().skip(skip) {
                s.push_str(&format!("- Round {}: {}\n", action.round, action.description));
            }
        }

        s.push('\n');
        s.push_str(&self.verdict_line());
        s.push('\n');

        s
    }
}

fn label_winner_kind(result: &BattleResult) -> &'static str {
    match result.winner_kind {
        WinnerKind::Entity => "entity",
        WinnerKind::Creature => "creature",
        WinnerKind::Draw => "draw",
    }
}
