use serde::{Deserialize, Serialize};

/// Slack destination for a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackContactChannel {
    /// Channel or user ID to post to
    pub channel_or_user_id: String,
    /// Free-form description shown to the LLM / reviewer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_about_channel_or_user: Option<String>,
    /// Bot token override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,
    /// Only these Slack users may respond
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_responder_ids: Option<Vec<String>>,
    /// Render the request with Slack blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_slack_blocks: Option<bool>,
    /// Reply inside an existing thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
}

impl SlackContactChannel {
    /// Create a Slack channel targeting a channel or user ID
    #[must_use]
    pub fn new(channel_or_user_id: impl Into<String>) -> Self {
        Self {
            channel_or_user_id: channel_or_user_id.into(),
            ..Self::default()
        }
    }

    /// Set the context description
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_about_channel_or_user = Some(context.into());
        self
    }
}

/// SMS destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsContactChannel {
    /// E.164 phone number
    pub phone_number: String,
    /// What the reviewer should know about this person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_about_user: Option<String>,
}

/// WhatsApp destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppContactChannel {
    /// E.164 phone number
    pub phone_number: String,
    /// What the reviewer should know about this person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_about_user: Option<String>,
}

/// Email destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContactChannel {
    /// Recipient address
    pub address: String,
    /// What the reviewer should know about this person
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_about_user: Option<String>,
    /// Extra recipients copied on the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_recipients: Option<Vec<String>>,
    /// Subject line override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_subject_line: Option<String>,
    /// Thread the email under this message ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_in_reply_to_message_id: Option<String>,
    /// `References` header for threading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_references_message_id: Option<String>,
}

impl EmailContactChannel {
    /// Create an email channel for a single address
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }
}

/// Where a request should be routed. At most one field is normally set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Slack destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackContactChannel>,
    /// SMS destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsContactChannel>,
    /// WhatsApp destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<WhatsAppContactChannel>,
    /// Email destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailContactChannel>,
}

impl ContactChannel {
    /// Route via Slack
    #[must_use]
    pub fn slack(channel: SlackContactChannel) -> Self {
        Self {
            slack: Some(channel),
            ..Self::default()
        }
    }

    /// Route via email
    #[must_use]
    pub fn email(channel: EmailContactChannel) -> Self {
        Self {
            email: Some(channel),
            ..Self::default()
        }
    }
}

/// A canned answer a reviewer can pick instead of typing one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOption {
    /// Machine-readable option name
    pub name: String,
    /// Button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer explanation shown under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Text prefilled into the response box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_fill: Option<String>,
    /// Whether the reviewer may edit the prefilled text
    #[serde(default)]
    pub interactive: bool,
}

impl ResponseOption {
    /// Create an option with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            prompt_fill: None,
            interactive: false,
        }
    }
}
