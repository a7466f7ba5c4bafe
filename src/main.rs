//! Battle Chronicle - Entry Point
//!
//! Loads two combatant records, runs a seeded battle, and narrates it.
//! Narration uses the configured LLM when `LLM_API_KEY` is set and falls
//! back to the template narrator otherwise.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use battle_chronicle::combat::{simulate_seeded, BattleResult, BattleType, Combatant, CombatantSource};
use battle_chronicle::core::config::NarrationConfig;
use battle_chronicle::core::error::{ArenaError, Result};
use battle_chronicle::llm::{LlmClient, Narration, NarrationContext, NarrationPipeline, NarrationStyle};
use clap::Parser;
use serde::Serialize;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Battle Chronicle - simulate and narrate a battle between two records
#[derive(Parser, Debug)]
#[command(name = "battle-chronicle")]
#[command(about = "Simulate a battle between two combatant records and narrate it")]
struct Args {
    /// JSON record of the first (initiating) combatant
    first: PathBuf,

    /// JSON record of the second combatant
    second: PathBuf,

    /// Battle type: duel, honor_combat, ambush, divine_contest, tournament
    #[arg(long, default_value = "duel", value_parser = BattleType::from_str)]
    battle_type: BattleType,

    /// Narration style: epic, comedic, tragic, dramatic, poetic
    #[arg(long, default_value = "epic", value_parser = parse_style)]
    style: NarrationStyle,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Setting description passed to the narrator
    #[arg(long)]
    setting: Option<String>,

    /// Collection the combatants belong to
    #[arg(long)]
    collection: Option<String>,

    /// Narration config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the LLM and use the template narrator
    #[arg(long)]
    offline: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    battle_type: BattleType,
    style: NarrationStyle,
    combatants: [&'a Combatant; 2],
    result: &'a BattleResult,
    narration: &'a Narration,
}

fn parse_style(s: &str) -> std::result::Result<NarrationStyle, String> {
    NarrationStyle::from_label(s).ok_or_else(|| format!("unknown narration style '{}'", s))
}

fn load_combatant(path: &Path) -> Result<Combatant> {
    let contents = std::fs::read_to_string(path)?;
    let source: CombatantSource = serde_json::from_str(&contents)?;
    Ok(source.into_combatant())
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "battle_chronicle=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => NarrationConfig::load(path)?,
        None => NarrationConfig::default(),
    };

    let first = load_combatant(&args.first)?;
    let second = load_combatant(&args.second)?;

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let result = simulate_seeded(&first, &second, args.battle_type, seed);

    let mut ctx = NarrationContext::new(&first, &second, &result, args.battle_type, args.style);
    if let Some(setting) = args.setting.as_deref() {
        ctx = ctx.with_setting(setting);
    }
    if let Some(collection) = args.collection.as_deref() {
        ctx = ctx.with_collection(collection);
    }

    // Create the async runtime for the narration call
    let rt = Runtime::new()?;
    let client = if args.offline {
        None
    } else {
        match LlmClient::from_env() {
            Ok(client) => Some(client.with_request_timeout(std::time::Duration::from_secs(
                config.timeout_secs,
            ))?),
            Err(e) => {
                tracing::warn!("{} - narrating offline", e);
                None
            }
        }
    };
    let narration = rt.block_on(async {
        match client {
            Some(client) => NarrationPipeline::new(client, config).narrate(&ctx).await,
            None => NarrationPipeline::offline(config).narrate(&ctx).await,
        }
    });

    match args.format.as_str() {
        "json" => {
            let report = Report {
                seed,
                battle_type: args.battle_type,
                style: args.style,
                combatants: [&first, &second],
                result: &result,
                narration: &narration,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => print_text(&first, &second, &result, &narration, seed),
        other => {
            return Err(ArenaError::ConfigError(format!(
                "unknown output format '{}'",
                other
            )))
        }
    }

    Ok(())
}

fn print_text(
    first: &Combatant,
    second: &Combatant,
    result: &BattleResult,
    narration: &Narration,
    seed: u64,
) {
    println!("\n=== BATTLE (seed {}) ===", seed);
    println!("  {}", first.stat_line());
    println!("  {}", second.stat_line());
    println!();

    for action in &result.log {
        println!(
            "  [{:>2}] {} ({} / {})",
            action.round, action.description, action.attacker_hp, action.defender_hp
        );
    }
    println!();

    match result.winner_name(first, second) {
        Some(winner) => println!("Winner: {} after {} rounds", winner, result.total_rounds),
        None => println!("Draw after {} rounds", result.total_rounds),
    }
    println!(
        "Final health: {} {}/{}, {} {}/{}",
        first.name,
        result.combatant1_final_hp,
        result.combatant1_max_hp,
        second.name,
        result.combatant2_final_hp,
        result.combatant2_max_hp
    );

    println!("\n=== CHRONICLE ({:?}) ===\n", narration.source);
    println!("{}", narration.text);
}
