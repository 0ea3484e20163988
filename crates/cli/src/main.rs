//! SkillTrack CLI - log practice time and watch mastery grow.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use skilltrack_core::{InvalidInput, MasteryTable, SkillId, TimeAmount, TimeUnit};
use skilltrack_ledger::{LedgerError, TimeLedger};
use skilltrack_progress::{
    chart_data, format_hours, format_timestamp, level_legend, render_bars, ChartConfig,
    ProgressSnapshot, SkillProgress,
};
use skilltrack_storage::JsonStorage;

/// Cells in the progress bar of a skill card.
const CARD_BAR_WIDTH: usize = 20;

#[derive(Parser)]
#[command(name = "skilltrack")]
#[command(about = "Skill mastery tracker", long_about = None)]
struct Cli {
    /// Directory holding skills.json
    #[arg(long, global = true, default_value = ".skilltrack")]
    data_dir: std::path::PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new skill
    Add {
        /// Skill name
        name: String,
    },
    /// Log practice time against a skill
    Log {
        /// Skill id or name
        skill: String,
        /// Amount of time
        amount: String,
        /// hours or minutes
        #[arg(long, short, default_value = "hours")]
        unit: String,
    },
    /// List skills with their mastery
    List,
    /// Show a skill's log, most recent first
    History {
        /// Skill id or name
        skill: String,
    },
    /// Chart hours per skill
    Chart {
        /// Width of the longest bar
        #[arg(long, default_value = "40")]
        width: usize,
    },
    /// Show the mastery levels
    Levels,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(data_dir = %cli.data_dir.display(), "opening storage");
    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut ledger = TimeLedger::open(storage).await?;

    match run(&mut ledger, cli.command).await {
        Err(LedgerError::InvalidInput(e)) => {
            eprintln!("Invalid input: {}", e);
            std::process::exit(2);
        }
        other => other?,
    }

    Ok(())
}

async fn run(ledger: &mut TimeLedger<JsonStorage>, command: Commands) -> Result<(), LedgerError> {
    match command {
        Commands::Add { name } => {
            let skill = ledger.create_skill(&name).await?;
            println!("Added skill: {} - {}", skill.id(), skill.name());
        }
        Commands::Log { skill, amount, unit } => {
            let unit: TimeUnit = unit.parse()?;
            let amount = TimeAmount::parse(&amount, unit)?;
            let id = resolve_skill(ledger, &skill)?;

            let skill = ledger.log_time(id, amount).await?;
            let card = SkillProgress::of(skill);
            println!(
                "Logged {} to {} ({} total, {})",
                format_hours(amount.to_hours()),
                card.name,
                card.logged,
                card.title
            );
        }
        Commands::List => {
            let snapshot = ProgressSnapshot::take(ledger.skills());
            if snapshot.skills.is_empty() {
                println!("You haven't added any skills yet. Try `skilltrack add <name>`.");
                return Ok(());
            }

            println!("Skills ({})", snapshot.skills.len());
            for card in &snapshot.skills {
                print_card(card);
            }
            println!("Total: {}", format_hours(snapshot.total_hours()));
        }
        Commands::History { skill } => {
            let id = resolve_skill(ledger, &skill)?;
            let entries = ledger.history(id)?;
            let Some(skill) = ledger.get(id) else {
                return Err(InvalidInput::UnknownSkill(id).into());
            };

            println!("{} History", skill.name());
            if skill.history().is_empty() {
                println!("  No history recorded yet");
                return Ok(());
            }
            println!("  {:<19} | {:<14} | {}", "Date", "Time Added", "Total Time");
            for entry in entries {
                println!(
                    "  {:<19} | {:<14} | {}",
                    format_timestamp(&entry.timestamp),
                    format_hours(entry.hours_added),
                    format_hours(entry.total_hours)
                );
            }
        }
        Commands::Chart { width } => {
            if ledger.skills().is_empty() {
                println!("Add skills to see your progress chart");
            } else {
                let config = ChartConfig::default().with_bar_width(width);
                for row in render_bars(&chart_data(ledger.skills(), &config), &config) {
                    println!("  {}", row);
                }
            }
            println!();
            println!("Mastery Levels");
            for row in level_legend(&MasteryTable::standard()) {
                println!("  {}", row);
            }
        }
        Commands::Levels => {
            for level in MasteryTable::standard().levels() {
                println!("  {:>6} hr  {}", level.hours, level.title);
            }
        }
    }

    Ok(())
}

/// Accept either a numeric id or a skill name.
fn resolve_skill(ledger: &TimeLedger<JsonStorage>, key: &str) -> Result<SkillId, LedgerError> {
    if let Ok(id) = key.parse::<SkillId>() {
        if ledger.get(id).is_some() {
            return Ok(id);
        }
    }
    match ledger.find_by_name(key) {
        Some(skill) => Ok(skill.id()),
        None => Err(InvalidInput::UnknownSkillName(key.trim().to_string()).into()),
    }
}

fn print_card(card: &SkillProgress) {
    println!("  {} [{}]", card.name, card.id);
    println!("    {} logged - {}", card.logged, card.title);
    if let (Some(next), Some(remaining)) = (&card.next, &card.remaining) {
        let filled = (card.percent / 100.0 * CARD_BAR_WIDTH as f64).round() as usize;
        println!(
            "    Next: {} ({} remaining) [{}{}] {:.0}%",
            next.title,
            remaining,
            "#".repeat(filled),
            "-".repeat(CARD_BAR_WIDTH - filled.min(CARD_BAR_WIDTH)),
            card.percent
        );
    }
}
