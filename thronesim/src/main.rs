use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use thronesim_core::{apply_command, Command, Ledger, LogTag, SeededDice, SimConfig};

mod autoplay;
mod save;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the ruler
    #[arg(long, default_value = "Aldric")]
    name: String,

    /// Seed for every random draw in the run
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of days to simulate
    #[arg(short, long, default_value_t = 30)]
    days: u32,

    /// Bot at the helm (rest, random)
    #[arg(long, default_value = "rest")]
    bot: String,

    /// Resume the reign from this save file instead of starting fresh
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write the ledger to this save file when the run ends
    #[arg(long)]
    save: Option<PathBuf>,

    /// Log a state checksum every N days (0 = never)
    #[arg(long, default_value_t = 30)]
    checksum_frequency: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    log::info!("Starting thronesim...");

    let config = SimConfig {
        checksum_frequency: args.checksum_frequency,
    };
    let mut dice = SeededDice::new(args.seed);
    let mut ledger = match &args.load {
        Some(path) => load_or_new(path, &args.name, &mut dice),
        None => Ledger::new_game(&args.name, &mut dice),
    };
    let mut bot = autoplay::make_bot(&args.bot, args.seed)?;

    log::info!(
        "{} rules from day {}; the reign is fated to end on day {}",
        ledger.name,
        ledger.day,
        ledger.death_day
    );

    // Day Loop
    for _ in 0..args.days {
        if ledger.run_ended {
            break;
        }

        for command in bot.decide(&ledger) {
            ledger = apply_command(&ledger, &mut dice, &command);
        }
        ledger = apply_command(&ledger, &mut dice, &Command::Sleep);

        log::info!(
            "Day {} | {} | Gold: {} | People: {}/{} | Happiness: {} | Bread: {}",
            ledger.day,
            ledger.era_name(),
            ledger.money,
            ledger.people,
            ledger.max_people,
            ledger.happiness.get(),
            ledger.inventory.bread
        );
        if config.checksum_frequency > 0 && ledger.day % config.checksum_frequency == 0 {
            log::debug!("Day {} checksum: {:016x}", ledger.day, ledger.checksum());
        }
    }

    log::info!("Simulation finished on day {}", ledger.day);

    print_summary(&ledger);

    if let Some(path) = &args.save {
        save::save_ledger(&ledger, path)?;
        log::info!("Chronicle saved to {:?}", path);
    }

    Ok(())
}

/// Loads a saved ledger, or starts a fresh reign when the save is unreadable.
fn load_or_new(path: &Path, name: &str, dice: &mut SeededDice) -> Ledger {
    match save::load_ledger(path) {
        Ok(ledger) => {
            log::info!(
                "Resumed {}'s reign from {:?} at day {}",
                ledger.name,
                path,
                ledger.day
            );
            ledger
        }
        Err(err) => {
            log::warn!("Could not load {:?}: {:#}", path, err);
            let mut ledger = Ledger::new_game(name, dice);
            ledger.log.push(
                LogTag::Danger,
                "The old chronicle was ruined beyond reading; a new reign begins.",
            );
            ledger
        }
    }
}

/// Prints the end-of-run report to stdout.
fn print_summary(ledger: &Ledger) {
    println!("=== {} of the {} ===", ledger.name, ledger.era_name());
    println!(
        "Day {} of a reign fated to end on day {}.",
        ledger.day, ledger.death_day
    );
    println!(
        "Gold: {} | People: {}/{} | Happiness: {}/100 | Bread: {}",
        ledger.money,
        ledger.people,
        ledger.max_people,
        ledger.happiness.get(),
        ledger.inventory.bread
    );
    println!(
        "Arms: {} | Record: {} wins, {} losses",
        ledger.weapon.name, ledger.wins, ledger.losses
    );
    if ledger.run_ended {
        println!("The chronicle has closed.");
    }
    println!();
    println!("Chronicle, latest entries:");
    for entry in ledger.log.tail(10) {
        println!("  [{}] {}", tag_label(entry.tag), entry.text);
    }
}

fn tag_label(tag: LogTag) -> &'static str {
    match tag {
        LogTag::Event => "event",
        LogTag::Good => "good",
        LogTag::Warn => "warn",
        LogTag::Danger => "danger",
        LogTag::System => "system",
        LogTag::Merchant => "merchant",
        LogTag::Muted => "muted",
    }
}
