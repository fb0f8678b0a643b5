//! Backend facade over the cloud stores

use crate::config::ConnectionConfig;
use crate::connection::CloudConnection;
use crate::function_calls::CloudFunctionCallStore;
use crate::human_contacts::CloudHumanContactStore;
use humanlayer_core::{AgentBackend, AgentStore, FunctionCallStore, HumanContact, Result};
use std::sync::{Arc, OnceLock};

/// HumanLayer cloud backend
///
/// Owns one connection and builds each store on first access.
#[derive(Debug)]
pub struct CloudBackend {
    connection: Arc<CloudConnection>,
    function_calls: OnceLock<CloudFunctionCallStore>,
    human_contacts: OnceLock<CloudHumanContactStore>,
}

impl CloudBackend {
    /// Create a backend over an existing connection
    #[must_use]
    pub fn new(connection: CloudConnection) -> Self {
        Self {
            connection: Arc::new(connection),
            function_calls: OnceLock::new(),
            human_contacts: OnceLock::new(),
        }
    }

    /// Resolve `config` against the environment and build a backend
    ///
    /// # Errors
    /// Returns `Error::Configuration` when no API key is available.
    pub fn from_config(config: ConnectionConfig) -> Result<Self> {
        Ok(Self::new(CloudConnection::from_config(config)?))
    }

    /// Create from environment variables
    ///
    /// # Errors
    /// Returns `Error::Configuration` when `HUMANLAYER_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ConnectionConfig::default())
    }

    /// The underlying connection
    #[must_use]
    pub fn connection(&self) -> &CloudConnection {
        &self.connection
    }

    /// Function-call store
    pub fn functions(&self) -> &CloudFunctionCallStore {
        self.function_calls
            .get_or_init(|| CloudFunctionCallStore::new(Arc::clone(&self.connection)))
    }

    /// Human-contact store
    pub fn contacts(&self) -> &CloudHumanContactStore {
        self.human_contacts
            .get_or_init(|| CloudHumanContactStore::new(Arc::clone(&self.connection)))
    }
}

impl AgentBackend for CloudBackend {
    fn functions(&self) -> &dyn FunctionCallStore {
        CloudBackend::functions(self)
    }

    fn contacts(&self) -> &dyn AgentStore<HumanContact> {
        CloudBackend::contacts(self)
    }
}
