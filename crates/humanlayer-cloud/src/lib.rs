//! HumanLayer Cloud - REST Backend
//!
//! This crate forwards approval requests to the HumanLayer API:
//! - Config: API key / base URL resolution (explicit, environment, default)
//! - Connection: authenticated HTTP calls with a fixed timeout
//! - Stores: `/function_calls` and `/contact_requests`
//! - Backend: facade bundling both stores behind one connection
//!
//! ```no_run
//! use humanlayer_cloud::{AgentStore, CloudBackend};
//!
//! # async fn demo() -> humanlayer_cloud::Result<()> {
//! let backend = CloudBackend::from_env()?;
//! let call = backend.functions().get("call-123").await?;
//! println!("approved: {}", call.is_approved());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod config;
pub mod connection;
pub mod function_calls;
pub mod human_contacts;
pub mod util;

pub use backend::CloudBackend;
pub use config::{
    ConnectionConfig, ResolvedConfig, API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE_URL,
    REQUEST_TIMEOUT,
};
pub use connection::CloudConnection;
pub use function_calls::CloudFunctionCallStore;
pub use human_contacts::CloudHumanContactStore;

pub use humanlayer_core::{AgentBackend, AgentStore, Error, FunctionCallStore, Result};
