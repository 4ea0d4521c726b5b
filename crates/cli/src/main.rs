//! Prosper CLI - database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! prosper-cli migrate
//!
//! # Wipe the database and load the demo data set
//! prosper-cli seed
//!
//! # Register a clinician
//! prosper-cli clinician create -n "Dr. Maria Rodriguez" -e maria@prosper.health -s "Neurodevelopmental Psychology"
//! ```
//!
//! # Environment Variables
//!
//! - `PROSPER_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "prosper-cli")]
#[command(author, version, about = "Prosper CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Replace all data with the demo data set
    Seed,
    /// Manage clinicians
    Clinician {
        #[command(subcommand)]
        action: ClinicianAction,
    },
}

#[derive(Subcommand)]
enum ClinicianAction {
    /// Register a new clinician
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Contact email address
        #[arg(short, long)]
        email: String,

        /// Area of practice
        #[arg(short, long)]
        specialty: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Clinician { action } => match action {
            ClinicianAction::Create {
                name,
                email,
                specialty,
            } => {
                commands::clinician::create(name, email, specialty).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clinician_create() {
        let cli = Cli::try_parse_from([
            "prosper-cli",
            "clinician",
            "create",
            "--name",
            "Dr. James Wilson",
            "--email",
            "james@prosper.health",
            "--specialty",
            "Behavioral Therapy",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Clinician {
                action: ClinicianAction::Create { .. }
            })
        ));
    }

    #[test]
    fn test_clinician_create_requires_specialty() {
        let cli = Cli::try_parse_from([
            "prosper-cli",
            "clinician",
            "create",
            "-n",
            "Dr. James Wilson",
            "-e",
            "james@prosper.health",
        ]);
        assert!(cli.is_err());
    }
}
