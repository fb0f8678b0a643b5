use super::channel::{ContactChannel, ResponseOption};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message sent to a human
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanContactSpec {
    /// Message body
    pub msg: String,
    /// Subject line, for channels that have one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Where to send the message (backend default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ContactChannel>,
    /// Canned answers offered to the human
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_options: Option<Vec<ResponseOption>>,
    /// Opaque caller state echoed back by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
}

impl HumanContactSpec {
    /// Create a spec with just a message
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            subject: None,
            channel: None,
            response_options: None,
            state: None,
        }
    }

    /// Set the contact channel
    #[must_use]
    pub fn with_channel(mut self, channel: ContactChannel) -> Self {
        self.channel = Some(channel);
        self
    }
}

/// Resolution state of a human contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanContactStatus {
    /// When the request reached the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
    /// When a human answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
    /// The human's answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Name of the chosen response option, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_option_name: Option<String>,
}

impl HumanContactStatus {
    /// A human has answered
    #[must_use]
    pub fn is_responded(&self) -> bool {
        self.response.is_some()
    }
}

/// A request for a human to supply information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanContact {
    /// Agent run this contact belongs to
    pub run_id: String,
    /// Unique call identifier
    pub call_id: String,
    /// Request payload
    pub spec: HumanContactSpec,
    /// Filled in by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HumanContactStatus>,
}

impl HumanContact {
    /// Create a new contact with a generated `call_id`
    #[must_use]
    pub fn new(run_id: impl Into<String>, spec: HumanContactSpec) -> Self {
        Self {
            run_id: run_id.into(),
            call_id: super::generate_call_id(),
            spec,
            status: None,
        }
    }

    /// Override the generated call ID
    #[must_use]
    pub fn with_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_id = call_id.into();
        self
    }

    /// The human's answer, if there is one yet
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        self.status.as_ref()?.response.as_deref()
    }
}
