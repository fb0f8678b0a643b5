//! Function-call approvals: `/function_calls`

use crate::connection::{read_json, CloudConnection};
use humanlayer_core::{
    AgentStore, Error, FunctionCall, FunctionCallStatus, FunctionCallStore, Result,
};
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tracing::instrument;

/// Creation path for function calls
pub const FUNCTION_CALLS_PATH: &str = "/function_calls";

/// Function-call store backed by the HumanLayer API
#[derive(Debug, Clone)]
pub struct CloudFunctionCallStore {
    connection: Arc<CloudConnection>,
}

impl CloudFunctionCallStore {
    /// Create a store on top of a shared connection
    #[must_use]
    pub fn new(connection: Arc<CloudConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait::async_trait]
impl AgentStore<FunctionCall> for CloudFunctionCallStore {
    #[instrument(skip(self, item), fields(call_id = %item.call_id))]
    async fn add(&self, item: &FunctionCall) -> Result<()> {
        let payload = serde_json::to_value(item)?;
        let response = self
            .connection
            .request(Method::POST, FUNCTION_CALLS_PATH, Some(&payload))
            .await?;
        let (status, body) = read_json(response).await?;

        if status != StatusCode::OK {
            return Err(Error::api(
                "Error creating function call",
                status.as_u16(),
                body,
            ));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, call_id: &str) -> Result<FunctionCall> {
        let path = format!("{FUNCTION_CALLS_PATH}/{call_id}");
        let response = self.connection.request(Method::GET, &path, None).await?;
        let (status, body) = read_json(response).await?;

        if status != StatusCode::OK {
            return Err(Error::api(
                "Error fetching function call",
                status.as_u16(),
                body,
            ));
        }
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait::async_trait]
impl FunctionCallStore for CloudFunctionCallStore {
    async fn respond(&self, _call_id: &str, _status: FunctionCallStatus) -> Result<()> {
        Err(Error::NotImplemented("responding to function calls"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;
    use humanlayer_core::FunctionCallSpec;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store(base_url: &str) -> CloudFunctionCallStore {
        let config = ConnectionConfig::new()
            .with_api_key("test-key")
            .with_base_url(base_url)
            .resolve_with(|_| None)
            .unwrap();
        CloudFunctionCallStore::new(Arc::new(CloudConnection::new(config).unwrap()))
    }

    fn sample_call() -> FunctionCall {
        let mut kwargs = serde_json::Map::new();
        kwargs.insert("x".to_string(), json!(2));
        kwargs.insert("y".to_string(), json!(5));
        FunctionCall::new("run-1", FunctionCallSpec::new("multiply").with_kwargs(kwargs))
            .with_call_id("abc")
    }

    #[tokio::test]
    async fn test_add_success() {
        let server = MockServer::start().await;
        let call = sample_call();

        Mock::given(method("POST"))
            .and(path("/function_calls"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(serde_json::to_value(&call).unwrap()))
            .respond_with(ResponseTemplate::new(200).set_body_json(&call))
            .expect(1)
            .mount(&server)
            .await;

        store(&server.uri()).add(&call).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_forbidden_embeds_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/function_calls"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"detail": "invalid api key"})),
            )
            .mount(&server)
            .await;

        let err = store(&server.uri()).add(&sample_call()).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 403, .. }));
        let msg = err.to_string();
        assert!(msg.contains("Error creating function call"));
        assert!(msg.contains("invalid api key"));
    }

    #[tokio::test]
    async fn test_add_rejects_other_success_codes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = store(&server.uri()).add(&sample_call()).await.unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[tokio::test]
    async fn test_get_deserializes_call() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/function_calls/abc"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "run_id": "run-1",
                "call_id": "abc",
                "spec": {"fn": "multiply", "kwargs": {"x": 2, "y": 5}},
                "status": {"approved": true, "requested_at": "2024-09-01T12:00:00Z"}
            })))
            .mount(&server)
            .await;

        let call = store(&server.uri()).get("abc").await.unwrap();
        assert_eq!(call.run_id, "run-1");
        assert_eq!(call.call_id, "abc");
        assert_eq!(call.spec.fn_name, "multiply");
        assert_eq!(call.spec.kwargs, sample_call().spec.kwargs);
        assert!(call.is_approved());
    }

    #[tokio::test]
    async fn test_get_not_found_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/function_calls/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
            .mount(&server)
            .await;

        let err = store(&server.uri()).get("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("Error fetching function call"));
    }

    #[tokio::test]
    async fn test_get_schema_mismatch_is_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let err = store(&server.uri()).get("abc").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_respond_is_not_implemented() {
        let server = MockServer::start().await;
        let store = store(&server.uri());

        let approved = FunctionCallStatus {
            approved: Some(true),
            ..FunctionCallStatus::default()
        };
        for status in [FunctionCallStatus::default(), approved] {
            let err = store.respond("abc", status).await.unwrap_err();
            assert!(matches!(err, Error::NotImplemented(_)));
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
