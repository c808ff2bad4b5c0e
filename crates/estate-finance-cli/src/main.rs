mod commands;
mod config;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::MortgageArgs;
use commands::proximity::{DistanceArgs, NearbyArgs};

/// Mortgage breakdowns and neighbourhood lookups for property listings
#[derive(Parser)]
#[command(
    name = "efc",
    version,
    about = "Mortgage breakdowns and neighbourhood lookups for property listings",
    long_about = "A CLI for the calculations behind a property listing page: \
                  fixed-rate mortgage breakdowns with decimal precision, and \
                  establishment proximity searches around a property."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment and first-period principal/interest split
    Mortgage(MortgageArgs),
    /// Establishments within a radius of a property, nearest first
    Nearby(NearbyArgs),
    /// Great-circle distance between two coordinates
    Distance(DistanceArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::Nearby(args) => commands::proximity::run_nearby(args),
        Commands::Distance(args) => commands::proximity::run_distance(args),
        Commands::Version => {
            println!("efc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
