//! CLI command: `humanlayer contact`

use clap::Subcommand;
use humanlayer_cloud::{AgentStore, CloudBackend};
use humanlayer_core::{HumanContact, HumanContactSpec};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ContactCommand {
    /// Fetch a human-contact request and its response
    Get {
        /// Call ID
        call_id: String,
    },
    /// Ask a human a question
    Create {
        /// Agent run ID
        #[arg(long)]
        run_id: String,
        /// Message for the human
        #[arg(long)]
        msg: String,
        /// Call ID (generated when omitted)
        #[arg(long)]
        call_id: Option<String>,
    },
}

/// Run the contact subcommand.
pub async fn run(backend: &CloudBackend, command: ContactCommand) -> anyhow::Result<()> {
    match command {
        ContactCommand::Get { call_id } => {
            let contact = backend.contacts().get(&call_id).await?;
            super::print_json(&contact)
        }
        ContactCommand::Create {
            run_id,
            msg,
            call_id,
        } => {
            let mut contact = HumanContact::new(run_id, HumanContactSpec::new(msg));
            if let Some(id) = call_id {
                contact = contact.with_call_id(id);
            }

            backend.contacts().add(&contact).await?;
            info!(call_id = %contact.call_id, "human contact submitted");
            println!("{}", contact.call_id);
            Ok(())
        }
    }
}
