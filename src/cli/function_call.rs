//! CLI command: `humanlayer function-call`

use anyhow::Context;
use clap::Subcommand;
use humanlayer_cloud::{AgentStore, CloudBackend};
use humanlayer_core::{FunctionCall, FunctionCallSpec};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum FunctionCallCommand {
    /// Fetch a function call and its approval status
    Get {
        /// Call ID
        call_id: String,
    },
    /// Submit a function call for approval
    Create {
        /// Agent run ID
        #[arg(long)]
        run_id: String,
        /// Function name
        #[arg(long = "fn")]
        fn_name: String,
        /// Keyword arguments as a JSON object
        #[arg(long)]
        kwargs: Option<String>,
        /// Call ID (generated when omitted)
        #[arg(long)]
        call_id: Option<String>,
    },
}

/// Run the function-call subcommand.
pub async fn run(backend: &CloudBackend, command: FunctionCallCommand) -> anyhow::Result<()> {
    match command {
        FunctionCallCommand::Get { call_id } => {
            let call = backend.functions().get(&call_id).await?;
            super::print_json(&call)
        }
        FunctionCallCommand::Create {
            run_id,
            fn_name,
            kwargs,
            call_id,
        } => {
            let mut spec = FunctionCallSpec::new(fn_name);
            if let Some(raw) = kwargs {
                spec = spec.with_kwargs(
                    serde_json::from_str(&raw).context("--kwargs must be a JSON object")?,
                );
            }

            let mut call = FunctionCall::new(run_id, spec);
            if let Some(id) = call_id {
                call = call.with_call_id(id);
            }

            backend.functions().add(&call).await?;
            info!(call_id = %call.call_id, "function call submitted");
            println!("{}", call.call_id);
            Ok(())
        }
    }
}
