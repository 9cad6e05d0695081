//! # Operational toolkit
//!
//! Destructive administration lives here on purpose: the storefront server
//! never routes these actions, so a compromised or misconfigured front end
//! cannot reach them.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use maison::domain::config::ApiConfig;
use maison::domain::constants::RESET_CONFIRMATION;
use maison::kernel::config::load_config;
use maison_backend::Backend;
use maison_logger::Logger;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "maison-opsctl")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Operational toolkit for a Maison deployment")]
struct Cli {
    /// Path to the server configuration file
    #[arg(long, default_value = "server")]
    config: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    command: OpsCommand,
}

/// Enumeration of available operational subcommands.
#[derive(Debug, Subcommand)]
enum OpsCommand {
    /// Irreversibly wipe all user data and authentication accounts
    Reset {
        /// The exact confirmation literal, e.g. --confirm "ERASE EVERYTHING"
        #[arg(long)]
        confirm: String,
        /// Acknowledge that the wipe cannot be undone
        #[arg(long)]
        yes: bool,
    },
}

#[maison_runtime::main(memory_efficient)]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    match cli.command {
        OpsCommand::Reset { confirm, yes } => reset(&cli.config, &confirm, yes).await?,
    }

    Ok(())
}

async fn reset(config_path: &str, confirm: &str, yes: bool) -> Result<()> {
    ensure!(yes, "Refusing to run a destructive reset without --yes");
    ensure!(
        confirm == RESET_CONFIRMATION,
        "Confirmation literal does not match; refusing before any network call"
    );

    let cfg: ApiConfig =
        load_config(Some(config_path)).context("Critical: Configuration is malformed")?;

    let backend = Backend::builder()
        .url(&cfg.backend.url)
        .api_key(&cfg.backend.api_key)
        .init()
        .await
        .context("Backend is unreachable; nothing was wiped")?;

    // One attempt, no retry: the wipe carries no idempotence guarantee.
    backend.reset_all(confirm).await.context("Administrative reset failed")?;

    tracing::info!("Administrative reset completed");
    Ok(())
}
