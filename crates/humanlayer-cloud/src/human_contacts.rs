//! Human-contact requests: `/contact_requests`

use crate::connection::{read_json, CloudConnection};
use humanlayer_core::{AgentStore, Error, HumanContact, Result};
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tracing::instrument;

/// Creation path for human contacts
pub const CONTACT_REQUESTS_PATH: &str = "/contact_requests";

/// Human-contact store backed by the HumanLayer API
#[derive(Debug, Clone)]
pub struct CloudHumanContactStore {
    connection: Arc<CloudConnection>,
}

impl CloudHumanContactStore {
    /// Create a store on top of a shared connection
    #[must_use]
    pub fn new(connection: Arc<CloudConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait::async_trait]
impl AgentStore<HumanContact> for CloudHumanContactStore {
    #[instrument(skip(self, item), fields(call_id = %item.call_id))]
    async fn add(&self, item: &HumanContact) -> Result<()> {
        let payload = serde_json::to_value(item)?;
        let response = self
            .connection
            .request(Method::POST, CONTACT_REQUESTS_PATH, Some(&payload))
            .await?;
        let (status, body) = read_json(response).await?;

        if status != StatusCode::OK {
            return Err(Error::api(
                "Error creating human contact",
                status.as_u16(),
                body,
            ));
        }
        Ok(())
    }

    /// The status code is not checked: whatever JSON comes back is
    /// deserialized, so an error body fails as `Error::Json`.
    #[instrument(skip(self))]
    async fn get(&self, call_id: &str) -> Result<HumanContact> {
        let path = format!("{CONTACT_REQUESTS_PATH}/{call_id}");
        let response = self.connection.request(Method::GET, &path, None).await?;
        let (_status, body) = read_json(response).await?;

        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;
    use humanlayer_core::HumanContactSpec;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store(base_url: &str) -> CloudHumanContactStore {
        let config = ConnectionConfig::new()
            .with_api_key("test-key")
            .with_base_url(base_url)
            .resolve_with(|_| None)
            .unwrap();
        CloudHumanContactStore::new(Arc::new(CloudConnection::new(config).unwrap()))
    }

    fn contact_json(response: Option<&str>) -> serde_json::Value {
        let mut value = json!({
            "run_id": "run-2",
            "call_id": "xyz",
            "spec": {"msg": "which region should I deploy to?"}
        });
        if let Some(response) = response {
            value["status"] = json!({"response": response});
        }
        value
    }

    #[tokio::test]
    async fn test_add_posts_to_contact_requests() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/contact_requests"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_json(None)))
            .expect(1)
            .mount(&server)
            .await;

        let contact = HumanContact::new("run-2", HumanContactSpec::new("which region?"));
        store(&server.uri()).add(&contact).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_failure_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/contact_requests"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "msg required"})))
            .mount(&server)
            .await;

        let contact = HumanContact::new("run-2", HumanContactSpec::new(""));
        let err = store(&server.uri()).add(&contact).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("msg required"));
    }

    #[tokio::test]
    async fn test_get_returns_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contact_requests/xyz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_json(Some("us-east-1"))))
            .mount(&server)
            .await;

        let contact = store(&server.uri()).get("xyz").await.unwrap();
        assert_eq!(contact.call_id, "xyz");
        assert_eq!(contact.response(), Some("us-east-1"));
    }

    #[tokio::test]
    async fn test_get_ignores_status_code() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contact_requests/xyz"))
            .respond_with(ResponseTemplate::new(500).set_body_json(contact_json(None)))
            .mount(&server)
            .await;

        let contact = store(&server.uri()).get("xyz").await.unwrap();
        assert_eq!(contact.run_id, "run-2");
    }

    #[tokio::test]
    async fn test_get_error_body_fails_deserialization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contact_requests/xyz"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
            .mount(&server)
            .await;

        let err = store(&server.uri()).get("xyz").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
