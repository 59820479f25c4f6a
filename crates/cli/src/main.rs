use clap::{Parser, Subcommand};

mod commands;

use commands::{ExportArgs, ImpliedChanceArgs, StatsArgs, TableArgs};

#[derive(Parser)]
#[command(name = "martingale")]
#[command(about = "Streak calculator for Martingale wagering on Dice/Limbo games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute max loss streak, bust probability, and profit per win
    Stats(StatsArgs),
    /// Print the loss progression table
    Table(TableArgs),
    /// Export the progression table as CSV
    Export(ExportArgs),
    /// Print the fair chance implied by a payout and house edge
    ImpliedChance(ImpliedChanceArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Stats(args) => commands::run_stats(&args),
        Commands::Table(args) => commands::run_table(&args),
        Commands::Export(args) => commands::run_export(&args),
        Commands::ImpliedChance(args) => commands::run_implied_chance(&args),
    }
}
