//! Protocol - Traits implemented by HumanLayer backends
//!
//! A backend exposes one store per resource kind. Stores are thin:
//! the remote service is the source of truth and nothing is cached.

use crate::error::Result;
use crate::models::{FunctionCall, FunctionCallStatus, HumanContact};

/// Create and fetch one kind of request
#[async_trait::async_trait]
pub trait AgentStore<T>: Send + Sync {
    /// Submit a new request
    async fn add(&self, item: &T) -> Result<()>;

    /// Fetch a request by call ID
    async fn get(&self, call_id: &str) -> Result<T>;
}

/// Store for function-call approvals
#[async_trait::async_trait]
pub trait FunctionCallStore: AgentStore<FunctionCall> {
    /// Record a human's decision on a call
    async fn respond(&self, call_id: &str, status: FunctionCallStatus) -> Result<()>;
}

/// Bundle of stores sharing one connection
pub trait AgentBackend: Send + Sync {
    /// Function-call store
    fn functions(&self) -> &dyn FunctionCallStore;

    /// Human-contact store
    fn contacts(&self) -> &dyn AgentStore<HumanContact>;
}
