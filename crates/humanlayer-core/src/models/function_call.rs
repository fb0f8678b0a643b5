use super::channel::{ContactChannel, ResponseOption};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the agent wants to call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallSpec {
    /// Function name
    #[serde(rename = "fn")]
    pub fn_name: String,
    /// Keyword arguments, as a JSON object
    #[serde(default)]
    pub kwargs: serde_json::Map<String, serde_json::Value>,
    /// Where to ask for approval (backend default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ContactChannel>,
    /// Options offered to a reviewer who rejects the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_options: Option<Vec<ResponseOption>>,
    /// Opaque caller state echoed back by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
}

impl FunctionCallSpec {
    /// Create a spec with no arguments
    #[must_use]
    pub fn new(fn_name: impl Into<String>) -> Self {
        Self {
            fn_name: fn_name.into(),
            kwargs: serde_json::Map::new(),
            channel: None,
            reject_options: None,
            state: None,
        }
    }

    /// Set the keyword arguments
    #[must_use]
    pub fn with_kwargs(mut self, kwargs: serde_json::Map<String, serde_json::Value>) -> Self {
        self.kwargs = kwargs;
        self
    }

    /// Set the contact channel
    #[must_use]
    pub fn with_channel(mut self, channel: ContactChannel) -> Self {
        self.channel = Some(channel);
        self
    }
}

/// Resolution state of a function call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallStatus {
    /// When the request reached the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
    /// When a human answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
    /// `None` while pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    /// Reviewer comment, usually the rejection reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Name of the chosen reject option, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_option_name: Option<String>,
    /// Information about the responder supplied by the channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<serde_json::Value>,
}

impl FunctionCallStatus {
    /// A human has answered
    #[must_use]
    pub fn is_responded(&self) -> bool {
        self.approved.is_some()
    }

    /// Approved by the reviewer
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.approved == Some(true)
    }

    /// Rejected by the reviewer
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.approved == Some(false)
    }
}

/// A function call awaiting (or past) human approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Agent run this call belongs to
    pub run_id: String,
    /// Unique call identifier
    pub call_id: String,
    /// Request payload
    pub spec: FunctionCallSpec,
    /// Filled in by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FunctionCallStatus>,
}

impl FunctionCall {
    /// Create a new call with a generated `call_id`
    #[must_use]
    pub fn new(run_id: impl Into<String>, spec: FunctionCallSpec) -> Self {
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

    /// Approved by a human
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status.as_ref().is_some_and(FunctionCallStatus::is_approved)
    }
}
