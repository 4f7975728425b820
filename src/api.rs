//! Contact relay endpoint
//!
//! - POST /api/contact - forward a contact form submission to the webhook
//!
//! The handler keeps no state between requests and never retries; a failed
//! delivery is reported to the caller, who may submit again.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::config::Config;
use crate::contact::{
    ContactAck, ContactFailure, ContactSubmission, WebhookMessage, GENERIC_FAILURE_MESSAGE,
    NOT_CONFIGURED_MESSAGE,
};

#[derive(Clone)]
pub struct ContactApiState {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl ContactApiState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.webhook_timeout)
            .build()?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    #[error("webhook URL not configured")]
    NotConfigured,

    #[error("invalid contact payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("webhook request failed: {0}")]
    Delivery(#[from] reqwest::Error),

    #[error("webhook responded with {0}")]
    Upstream(StatusCode),
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ContactApiError::NotConfigured => {
                tracing::warn!("contact submission dropped: {self}");
                NOT_CONFIGURED_MESSAGE
            }
            _ => {
                tracing::error!("error sending contact message: {self}");
                GENERIC_FAILURE_MESSAGE
            }
        };
        let body = ContactFailure {
            error: message.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn send_contact(
    State(state): State<ContactApiState>,
    body: Bytes,
) -> Result<Json<ContactAck>, ContactApiError> {
    let submission: ContactSubmission = serde_json::from_slice(&body)?;
    let webhook_url = state
        .config
        .webhook_url
        .as_deref()
        .ok_or(ContactApiError::NotConfigured)?;

    let message = WebhookMessage::from_submission(&submission, chrono::Utc::now());
    let response = state
        .client
        .post(webhook_url)
        .json(&message)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ContactApiError::Upstream(status));
    }

    tracing::info!(project_type = %submission.project_type, "contact message relayed");
    Ok(Json(ContactAck::sent()))
}

pub fn contact_router(state: ContactApiState) -> Router {
    Router::new()
        .route("/api/contact", post(send_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use mockito::Matcher;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(webhook_url: Option<String>) -> Router {
        let config = Config {
            webhook_url,
            ..Config::default()
        };
        contact_router(ContactApiState::new(config).unwrap())
    }

    fn post_contact(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn full_submission() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "",
            "company": "Analytical Engines",
            "projectType": "backend-development",
            "budget": "",
            "timeline": "asap",
            "message": "Need an API"
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_relays_submission_to_webhook() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_header("content-type", "application/json")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#""value":"Ada Lovelace""#.to_string()),
                Matcher::Regex(r#""value":"ada@example.com""#.to_string()),
                Matcher::Regex(r#""value":"Analytical Engines""#.to_string()),
                Matcher::Regex(r#""value":"backend-development""#.to_string()),
                Matcher::Regex(r#""value":"asap""#.to_string()),
                Matcher::Regex(r#""value":"Need an API""#.to_string()),
                Matcher::Regex(r#""value":"Not provided""#.to_string()),
                Matcher::Regex(r#""value":"Not specified""#.to_string()),
            ]))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let app = app_with(Some(format!("{}/hook", server.url())));
        let response = app
            .oneshot(post_contact(full_submission().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Message sent successfully!"})
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_webhook_makes_no_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let app = app_with(None);
        let response = app
            .oneshot(post_contact(full_submission().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Discord webhook URL not configured"})
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_webhook_failure_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(429)
            .expect(1)
            .create_async()
            .await;

        let app = app_with(Some(format!("{}/hook", server.url())));
        let response = app
            .oneshot(post_contact(full_submission().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to send message. Please try again."})
        );
        // no retry
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_generic_failure() {
        let app = app_with(Some("http://127.0.0.1:9/hook".to_string()));
        let response = app.oneshot(post_contact("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to send message. Please try again."})
        );
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_generic_failure() {
        // bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = app_with(Some(format!("http://{addr}/hook")));
        let response = app
            .oneshot(post_contact(full_submission().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to send message. Please try again."})
        );
    }

    #[tokio::test]
    async fn test_null_optional_field_is_relayed_with_placeholder() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#""value":"Ada Lovelace""#.to_string()),
                Matcher::Regex(r#""name":"📱 Phone","value":"Not provided""#.to_string()),
            ]))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let mut submission = full_submission();
        submission["phone"] = Value::Null;
        let app = app_with(Some(format!("{}/hook", server.url())));
        let response = app
            .oneshot(post_contact(submission.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_relayed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Regex(r#""value":"Need an API""#.to_string()))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from(full_submission().to_string()))
            .unwrap();
        let app = app_with(Some(format!("{}/hook", server.url())));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_object_is_relayed_with_placeholders() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Regex(r#""value":"No message provided""#.to_string()))
            .with_status(200)
            .create_async()
            .await;

        let app = app_with(Some(format!("{}/hook", server.url())));
        let response = app.oneshot(post_contact("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock.assert_async().await;
    }
}
