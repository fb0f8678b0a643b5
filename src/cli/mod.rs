//! CLI module for HumanLayer
//!
//! Provides commands:
//! - `function-call`: create or fetch function-call approvals
//! - `contact`: create or fetch human-contact requests

use clap::{Args, Parser, Subcommand};
use humanlayer_cloud::{CloudBackend, ConnectionConfig};

pub mod contact;
pub mod function_call;

/// HumanLayer approval client
#[derive(Parser, Debug)]
#[command(name = "humanlayer")]
#[command(about = "Create and inspect HumanLayer approval requests")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for `HUMANLAYER_API_KEY` / `HUMANLAYER_API_BASE`
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// API key (defaults to HUMANLAYER_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL (defaults to HUMANLAYER_API_BASE)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,
}

impl ConnectionArgs {
    fn config(&self) -> ConnectionConfig {
        ConnectionConfig {
            api_key: self.api_key.clone(),
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Function-call approvals
    #[command(name = "function-call")]
    FunctionCall {
        #[command(subcommand)]
        command: function_call::FunctionCallCommand,
    },
    /// Human-contact requests
    Contact {
        #[command(subcommand)]
        command: contact::ContactCommand,
    },
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let backend = CloudBackend::from_config(cli.connection.config())?;
    match command {
        Commands::FunctionCall { command } => function_call::run(&backend, command).await,
        Commands::Contact { command } => contact::run(&backend, command).await,
    }
}

/// Print a value as pretty JSON on stdout
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
