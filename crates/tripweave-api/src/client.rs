// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the itinerary backend.
//!
//! Provides [`ServiceClient`], which posts JSON bodies and maps every failure
//! onto the [`TransportError`] taxonomy. It never retries.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use tripweave_config::model::ServiceConfig;
use tripweave_core::{
    ChatRequest, ChatResponse, GenerationRequest, GenerationResponse, HealthStatus, TransportError,
    TripweaveError,
};

use crate::types::describe_failure;

/// Shared HTTP client for the generation and chat endpoints.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    generate_path: String,
    chat_path: String,
}

impl ServiceClient {
    /// Creates a client from the `[service]` config section.
    pub fn new(config: &ServiceConfig) -> Result<Self, TripweaveError> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("tripweave/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TripweaveError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            generate_path: config.generate_path.clone(),
            chat_path: config.chat_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests a new itinerary.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, TransportError> {
        self.post_json(&self.generate_path, request).await
    }

    /// Sends one chat turn.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.post_json(&self.chat_path, request).await
    }

    /// Reports whether the backend answers at all.
    ///
    /// Any HTTP response counts as reachable; only transport failures are unhealthy.
    pub async fn probe(&self) -> HealthStatus {
        match self.client.get(&self.base_url).send().await {
            Ok(response) if response.status().is_server_error() => {
                HealthStatus::Degraded(format!("backend answered {}", response.status()))
            }
            Ok(_) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "request did not reach the service");
                TransportError::NetworkUnreachable {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::NetworkUnreachable {
                message: format!("failed to read response body: {e}"),
            })?;
        debug!(url = %url, status = %status, bytes = bytes.len(), "service response received");

        if !status.is_success() {
            let message = describe_failure(status.as_u16(), &String::from_utf8_lossy(&bytes));
            warn!(url = %url, status = %status, message = %message, "service returned an error");
            return Err(TransportError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| TransportError::MalformedResponse {
            message: format!("failed to parse response from {path}: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ServiceClient {
        let config = ServiceConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..ServiceConfig::default()
        };
        ServiceClient::new(&config).unwrap()
    }

    fn paris_request() -> GenerationRequest {
        GenerationRequest {
            city: "Paris".into(),
            interests: vec!["food".into(), "museums".into()],
            budget: "1200".into(),
            people: "2".into(),
            from_date: "2026-05-01".into(),
            to_date: "2026-05-04".into(),
            comments: None,
            currency: Some("INR".into()),
        }
    }

    #[tokio::test]
    async fn generate_posts_request_and_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate-itinerary"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "city": "Paris",
                "people": "2",
                "currency": "INR"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "itinerary": "Day 1: Louvre ($20)",
                "weather": "Mild, 18C"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let response = client.generate(&paris_request()).await.unwrap();
        assert_eq!(response.itinerary, "Day 1: Louvre ($20)");
        assert_eq!(response.weather.as_deref(), Some("Mild, 18C"));
        assert!(response.summary.is_none());
    }

    #[tokio::test]
    async fn error_status_maps_to_service_error_without_retry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate-itinerary"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(serde_json::json!({"error": "model overloaded"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&paris_request()).await.unwrap_err();
        assert_eq!(
            err,
            TransportError::ServiceError {
                status: 503,
                message: "model overloaded".into()
            }
        );
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_malformed_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate-itinerary"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&paris_request()).await.unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn missing_itinerary_field_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"weather": "hot"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&paris_request()).await.unwrap_err();
        assert_eq!(err.reason(), "malformed_response");
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_unreachable() {
        // Port 9 (discard) is not expected to have a listener in test environments.
        let client = test_client("http://127.0.0.1:9");
        let err = client.generate(&paris_request()).await.unwrap_err();
        assert!(matches!(err, TransportError::NetworkUnreachable { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn chat_sends_preferences() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(serde_json::json!({
                "message": "Is it rainy?",
                "preferences": {"currency": "INR", "country": "India"}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"response": "Pack an umbrella."})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let response = client
            .chat(&ChatRequest {
                message: "Is it rainy?".into(),
                itinerary: "Destination: Paris\n\nDay 1: Louvre".into(),
                preferences: Some(tripweave_core::ChatPreferences {
                    currency: "INR".into(),
                    country: "India".into(),
                }),
            })
            .await
            .unwrap();
        assert_eq!(response.response, "Pack an umbrella.");
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/", server.uri()));
        let response = client
            .chat(&ChatRequest {
                message: "hi".into(),
                itinerary: String::new(),
                preferences: None,
            })
            .await
            .unwrap();
        assert_eq!(response.response, "ok");
    }

    #[tokio::test]
    async fn probe_reports_reachability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert_eq!(test_client(&server.uri()).probe().await, HealthStatus::Healthy);
        assert!(matches!(
            test_client("http://127.0.0.1:9").probe().await,
            HealthStatus::Unhealthy(_)
        ));
    }
}
