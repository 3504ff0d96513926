//! # HTTP Context
//!
//! `ApiContext` is the runtime context injected into every `ResourceActor` through
//! `run()`. It bundles the shared `reqwest::Client`, the API base URL and the bearer
//! token read at start-up. Every request it sends carries
//! `Authorization: Bearer <token>` and `Content-Type: application/json`.

use crate::error::FrameworkError;
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Connection details shared by every actor talking to the same API.
#[derive(Clone)]
pub struct ApiContext {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

// Hand-written so the token never reaches a log line.
impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiContext")
            .field("base_url", &self.base_url)
            .field("has_token", &self.has_token())
            .finish()
    }
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, token)
    }

    /// Builds a context whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FrameworkError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, base_url, token))
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            // An empty stored token is as good as none.
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one request and buffers the response body.
    ///
    /// Only transport failures are errors here; a non-2xx status is still an
    /// `Ok(ApiResponse)` so the caller can decide which message to surface.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, FrameworkError> {
        let token = self.token.as_deref().ok_or(FrameworkError::MissingToken)?;

        let mut request = self
            .http
            .request(method, self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FrameworkError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `message` field of a JSON error body, when there is a non-empty one.
    pub fn server_message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
    }

    pub fn json<R: DeserializeOwned>(&self) -> Result<R, FrameworkError> {
        serde_json::from_slice(&self.body).map_err(|e| FrameworkError::Decode(e.to_string()))
    }

    pub fn rejection(&self, message: String) -> FrameworkError {
        FrameworkError::RequestFailed {
            status: self.status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let ctx = ApiContext::new("https://www.talkietotz.com/", Some("abc".into()));
        assert_eq!(ctx.url("/lessons"), "https://www.talkietotz.com/lessons");
    }

    #[test]
    fn empty_token_counts_as_missing() {
        assert!(!ApiContext::new("http://x", Some(String::new())).has_token());
        assert!(!ApiContext::new("http://x", None).has_token());
        assert!(ApiContext::new("http://x", Some("abc".into())).has_token());
    }

    #[test]
    fn debug_hides_token() {
        let ctx = ApiContext::new("http://x", Some("secret-token".into()));
        let printed = format!("{ctx:?}");
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("has_token: true"));
    }

    #[test]
    fn server_message_extraction() {
        assert_eq!(response(500, r#"{"message":"bad"}"#).server_message(), Some("bad".into()));
        assert_eq!(response(500, r#"{"message":""}"#).server_message(), None);
        assert_eq!(response(500, r#"{"error":"x"}"#).server_message(), None);
        assert_eq!(response(500, "<html>oops</html>").server_message(), None);
    }

    #[test]
    fn undecodable_body_is_decode_error() {
        let err = response(200, "not json").json::<Vec<serde_json::Value>>().unwrap_err();
        assert!(matches!(err, FrameworkError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_token_short_circuits() {
        // Nothing listens on port 9; the call has to fail before connecting.
        let ctx = ApiContext::new("http://127.0.0.1:9", None);
        let err = ctx
            .execute::<()>(Method::GET, "/lessons", None)
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::MissingToken);
    }
}
