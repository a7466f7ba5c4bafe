//! Headless Battle Runner
//!
//! Replays one matchup over a range of seeds and outputs JSON statistics
//! for balance tuning. No narration is performed.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use battle_chronicle::combat::{simulate_seeded, BattleResult, BattleType, Combatant, CombatantSource};
use battle_chronicle::core::error::Result;
use battle_chronicle::core::types::Side;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Headless Battle Runner - many seeded battles, one report
#[derive(Parser, Debug)]
#[command(name = "battle_runner")]
#[command(about = "Run a matchup across many seeds and output aggregate statistics")]
struct Args {
    /// JSON record of the first (initiating) combatant
    first: PathBuf,

    /// JSON record of the second combatant
    second: PathBuf,

    /// Battle type: duel, honor_combat, ambush, divine_contest, tournament
    #[arg(long, default_value = "duel", value_parser = BattleType::from_str)]
    battle_type: BattleType,

    /// Number of battles to run
    #[arg(long, default_value_t = 1000)]
    battles: u32,

    /// First seed; battle i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print one line per battle to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize, Default)]
struct MatchupReport {
    first: String,
    second: String,
    battle_type: String,
    battles: u32,
    first_wins: u32,
    second_wins: u32,
    draws: u32,
    round_cap_hits: u32,
    average_rounds: f64,
    first_win_rate: f64,
    start_seed: u64,
}

impl MatchupReport {
    /// Count one battle; wins go by side so a mirror match splits correctly
    fn record(&mut self, result: &BattleResult) {
        match result.winner_side {
            Some(Side::First) => self.first_wins += 1,
            Some(Side::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
        if result.round_cap_reached {
            self.round_cap_hits += 1;
        }
    }
}

fn load_combatant(path: &Path) -> Result<Combatant> {
    let contents = std::fs::read_to_string(path)?;
    let source: CombatantSource = serde_json::from_str(&contents)?;
    Ok(source.into_combatant())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "battle_chronicle=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let battle_type = args.battle_type;

    let first = load_combatant(&args.first)?;
    let second = load_combatant(&args.second)?;

    let mut report = MatchupReport {
        first: first.name.clone(),
        second: second.name.clone(),
        battle_type: battle_type.label().to_string(),
        battles: args.battles,
        start_seed: args.seed,
        ..Default::default()
    };
    let mut total_rounds: u64 = 0;

    for i in 0..args.battles {
        let seed = args.seed.wrapping_add(i as u64);
        let result = simulate_seeded(&first, &second, battle_type, seed);

        report.record(&result);
        total_rounds += result.total_rounds as u64;

        if args.verbose {
            eprintln!(
                "seed {:>6}: {:<12} rounds={:<2} hp={}/{}",
                seed,
                result.winner_name(&first, &second).unwrap_or("draw"),
                result.total_rounds,
                result.combatant1_final_hp,
                result.combatant2_final_hp
            );
        }
    }

    if args.battles > 0 {
        report.average_rounds = total_rounds as f64 / args.battles as f64;
        report.first_win_rate = report.first_wins as f64 / args.battles as f64;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
