//! HumanLayer Core - Approval Data Model
//!
//! This crate provides the types shared by every HumanLayer backend:
//! - Models: function calls, human contacts, contact channels
//! - Protocol: the `AgentStore` / `AgentBackend` traits a backend implements
//! - Error: the error type returned by store operations

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{Error, Result};
pub use models::{
    ContactChannel, EmailContactChannel, FunctionCall, FunctionCallSpec, FunctionCallStatus,
    HumanContact, HumanContactSpec, HumanContactStatus, ResponseOption, SlackContactChannel,
    SmsContactChannel, WhatsAppContactChannel,
};
pub use protocol::{AgentBackend, AgentStore, FunctionCallStore};
