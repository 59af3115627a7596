use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cli::{
    hash_password, load_ranking,
    report::{RosterReport, ranking_table},
    verify_password,
};
use storage::roster::Roster;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ranking-cli")]
#[command(about = "Operator tools for the director ranking service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a bcrypt hash to paste into the roster file
    HashPassword {
        password: String,

        #[arg(long, default_value_t = 12)]
        cost: u32,
    },
    /// Check a password against a stored hash
    VerifyPassword { password: String, hash: String },
    /// Load and validate the roster file
    CheckRoster {
        #[arg(long, env = "ROSTER_PATH", default_value = "roster.json")]
        roster: PathBuf,
    },
    /// Print the current ranking
    Ranking {
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite://metrics.db")]
        database_url: String,

        #[arg(long, env = "ROSTER_PATH", default_value = "roster.json")]
        roster: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ranking_cli={},cli={},storage={}", log_level, log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> cli::Result<ExitCode> {
    match command {
        Commands::HashPassword { password, cost } => {
            println!("{}", hash_password(&password, cost)?);
        }
        Commands::VerifyPassword { password, hash } => {
            if verify_password(&password, &hash)? {
                println!("match");
            } else {
                println!("no match");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::CheckRoster { roster } => {
            tracing::info!("Loading roster from: {}", roster.display());
            let report = RosterReport::from_roster(&Roster::load(&roster)?);
            report.log();
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
            tracing::info!("✓ Roster is valid");
        }
        Commands::Ranking {
            database_url,
            roster,
        } => {
            let entries = load_ranking(&database_url, &roster).await?;
            print!("{}", ranking_table(&entries));
        }
    }

    Ok(ExitCode::SUCCESS)
}
