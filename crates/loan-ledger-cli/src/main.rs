mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{ScheduleArgs, SummaryArgs};

/// Fixed-rate loan amortization from the command line
#[derive(Parser)]
#[command(
    name = "loan-ledger",
    version,
    about = "Fixed-rate loan amortization schedules and payment summaries",
    long_about = "Computes month-by-month amortization schedules and cumulative payment \
                  summaries for fixed-rate loans with decimal precision. Terms come from \
                  flags, a JSON or YAML file, or JSON piped on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full amortization schedule with payment totals
    Schedule(ScheduleArgs),
    /// Cumulative principal and interest through a given month
    Summary(SummaryArgs),
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

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Summary(args) => commands::amortization::run_summary(args),
        Commands::Version => {
            println!("loan-ledger {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
