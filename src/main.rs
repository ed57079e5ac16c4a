use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zcalc::Config;
use zcalc::calculator::{Operation, Store, evaluate, parse_keys};
use zcalc::ui::run_calculator;

#[derive(Parser)]
#[command(name = "zcalc", version, about = "A keypad calculator for the terminal")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive keypad (default)
    Run,
    /// Replay a key sequence and print the display
    Press {
        /// Keys to press, e.g. "7+3=" or "12 DEL AC"
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the final calculator state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a single binary operation
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of + - * ÷ (or / and x)
        #[arg(allow_hyphen_values = true)]
        operation: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    let command = cli.command.unwrap_or(Commands::Run);

    let log_file = match command {
        Commands::Run => log_file_path(),
        _ => None,
    };
    init_logging(&config, cli.verbose, log_file.as_deref())?;

    match command {
        Commands::Run => run_calculator(config),
        Commands::Press { keys, json } => {
            println!("{}", press(config, &keys.join(" "), json)?);
            Ok(())
        }
        Commands::Eval {
            lhs,
            operation,
            rhs,
        } => {
            let op = Operation::from_symbol(&operation)
                .with_context(|| format!("Unknown operation '{}'", operation))?;
            println!("{}", evaluate(&lhs, &rhs, op));
            Ok(())
        }
    }
}

/// Replay `keys` and return what the display shows, or the state as JSON.
fn press(config: Config, keys: &str, json: bool) -> Result<String> {
    let actions = parse_keys(keys)?;
    tracing::debug!(count = actions.len(), "replaying keys");

    let mut store = Store::new(config);
    store.dispatch_all(actions);

    if json {
        return Ok(serde_json::to_string_pretty(store.state())?);
    }

    let display = store.display();
    Ok(format!("{}\n{}", display.previous, display.current))
}

/// Log destination for the interactive view, which owns the terminal.
fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("zcalc").join("zcalc.log"))
}

fn init_logging(config: &Config, verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
