// stikh: CLI entry point.
//
// Loads the settings file, the chosen dictionary and structure, then either
// prints one poem (`--once`) or runs the interactive menu on stdin/stdout.
// Logs go to stderr through `tracing`, so stdout carries only the menu and
// the poems.
//
// Usage:
//   stikh [--settings PATH] [--dictionary NAME] [--structure NAME]
//         [--seed N] [--once] [-v | -q]
//
// Log filtering: `STIKH_LOG` (e.g. `STIKH_LOG=stikh_verse=debug`) overrides
// the level chosen by -v/-q.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use stikh_prng::VerseRng;
use stikh_verse::config::Settings;
use stikh_verse::menu::{Session, run_menu};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "stikh", version, about = "Generate metrical verse from a stress-marked dictionary")]
struct Cli {
    /// Settings file (JSON).
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,

    /// Dictionary name, overriding the settings file.
    #[arg(long)]
    dictionary: Option<String>,

    /// Structure name, overriding the settings file.
    #[arg(long)]
    structure: Option<String>,

    /// RNG seed; the same seed and inputs give the same poems.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a single poem and exit instead of showing the menu.
    #[arg(long)]
    once: bool,

    /// Log debug output.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let settings = Settings::load(&cli.settings).context("failed to load settings")?;
    info!(path = %cli.settings.display(), "settings loaded");

    let dictionary_name = cli.dictionary.unwrap_or_else(|| settings.dictionary.clone());
    let structure_name = cli.structure.unwrap_or_else(|| settings.structure.clone());
    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, "seeding generator");

    let mut session = Session::open(settings, dictionary_name, structure_name, VerseRng::new(seed))
        .context("failed to load poem inputs")?;

    let mut output = io::stdout().lock();
    if cli.once {
        let poem = session.generate()?;
        writeln!(output, "{poem}")?;
        return Ok(());
    }

    let mut input = io::stdin().lock();
    run_menu(&mut session, &mut input, &mut output)?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STIKH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Seed from the wall clock when none is given.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
