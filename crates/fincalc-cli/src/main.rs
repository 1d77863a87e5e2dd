mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{AffordablePrincipalArgs, EmiArgs, RequiredTenureArgs};
use commands::recurring::{RequiredSipArgs, SipArgs};
use commands::single::{FdArgs, LumpsumArgs};

/// Deterministic financial projections with decimal precision
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Deterministic financial projections with decimal precision",
    long_about = "A CLI for the fincalc projection engines. Computes amortizing-loan \
                  EMIs with full schedules, SIP future values with optional annual \
                  step-up, fixed-deposit and lumpsum maturities, and the inverse \
                  helpers (affordable principal, required tenure, required SIP)."
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
    /// Amortizing loan projection: EMI, totals, and monthly schedule
    Emi(EmiArgs),
    /// Largest principal affordable at a target EMI
    AffordablePrincipal(AffordablePrincipalArgs),
    /// Months needed to amortize a principal at a fixed EMI
    RequiredTenure(RequiredTenureArgs),
    /// Recurring contribution (SIP) projection with optional step-up
    Sip(SipArgs),
    /// Monthly contribution needed to reach a target amount
    RequiredSip(RequiredSipArgs),
    /// One-time deposit compounded annually
    Lumpsum(LumpsumArgs),
    /// Fixed deposit with configurable compounding frequency
    Fd(FdArgs),
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
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::AffordablePrincipal(args) => commands::loan::run_affordable_principal(args),
        Commands::RequiredTenure(args) => commands::loan::run_required_tenure(args),
        Commands::Sip(args) => commands::recurring::run_sip(args),
        Commands::RequiredSip(args) => commands::recurring::run_required_sip(args),
        Commands::Lumpsum(args) => commands::single::run_lumpsum(args),
        Commands::Fd(args) => commands::single::run_fd(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
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
