//! Models - Wire types for approvals and human contacts
//!
//! Field names follow the HumanLayer REST API. Optional fields are
//! skipped when serializing and unknown fields are ignored when
//! deserializing, so responses from newer API versions still parse.

/// Contact channels and response options
pub mod channel;
/// Function-call approvals
pub mod function_call;
/// Human-contact requests
pub mod human_contact;

pub use channel::{
    ContactChannel, EmailContactChannel, ResponseOption, SlackContactChannel, SmsContactChannel,
    WhatsAppContactChannel,
};
pub use function_call::{FunctionCall, FunctionCallSpec, FunctionCallStatus};
pub use human_contact::{HumanContact, HumanContactSpec, HumanContactStatus};

/// Generate a fresh call identifier
pub(crate) fn generate_call_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
