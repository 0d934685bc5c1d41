pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use shopfront_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "shopfront",
    about = "Shopfront catalog CLI",
    long_about = "Inspect the storefront catalog: list products, look up identifiers, surface featured and best-selling items, seed demo data, and run readiness checks.",
    after_help = "Examples:\n  shopfront seed\n  shopfront show --id mug-classic\n  shopfront doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List every product in the catalog in storage order")]
    List,
    #[command(about = "Look up a single product by identifier")]
    Show {
        #[arg(long, help = "Product identifier from the backing document")]
        id: String,
    },
    #[command(about = "Show the featured product (first featured in storage order)")]
    Featured,
    #[command(name = "best-sellers", about = "List every product flagged as a best seller")]
    BestSellers,
    #[command(about = "Write the deterministic demo catalog to the configured document path")]
    Seed,
    #[command(about = "Validate config and catalog readability checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::List => commands::list::run(),
        Command::Show { id } => commands::show::run(&id),
        Command::Featured => commands::featured::run(),
        Command::BestSellers => commands::best_sellers::run(),
        Command::Seed => commands::seed::run(),
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging() {
    use shopfront_core::config::LogFormat::*;
    use tracing::Level;

    // Config failures are reported by the command itself; logging falls
    // back to defaults so the failure is still observable.
    let logging = AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| AppConfig::default().logging);
    let log_level = logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
