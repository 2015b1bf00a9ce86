//! Client for the external authentication service.
//!
//! The identity provider is a collaborator reached over a fixed JSON
//! contract; this module owns the request shapes and the HTTP transport,
//! nothing else. Accounts, sessions, and credential checks all live on the
//! other side of the wire.

use serde::{Deserialize, Serialize};

use super::validation::{SignInInput, SignUpInput};

/// Default base path for the auth API (proxied to the identity service)
pub const DEFAULT_API_BASE: &str = "/api/auth";

/// Sign-in request payload.
///
/// `callbackURL` is part of the external contract and tells the identity
/// service where to send the client after authentication.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Sign-up request payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl SignInRequest {
    pub fn new(input: &SignInInput, callback_url: &str) -> Self {
        Self {
            email: input.email.clone(),
            password: input.password.clone(),
            callback_url: callback_url.to_string(),
        }
    }
}

impl SignUpRequest {
    pub fn new(input: &SignUpInput, callback_url: &str) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
            callback_url: callback_url.to_string(),
        }
    }
}

/// Failure reported by the auth collaborator.
///
/// `message` is the human-readable text from the service, if it sent one.
/// Callers fall back to a static message when it is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitError {
    pub message: Option<String>,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn unknown() -> Self {
        Self { message: None }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "authentication request failed"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Error body returned by the auth API on non-2xx responses
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct AuthApiError {
    error: String,
}

/// Abstraction over the external identity service.
///
/// One request per call; no retries, no timeout. The real transport lives in
/// [`HttpAuthClient`]; tests substitute a recording mock.
pub trait AuthClient {
    async fn sign_in(&self, request: &SignInRequest) -> Result<(), SubmitError>;
    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SubmitError>;
}

/// HTTP implementation of [`AuthClient`] targeting the auth API base path
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    base: String,
}

impl HttpAuthClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), path)
    }
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(not(feature = "ssr"))]
impl AuthClient for HttpAuthClient {
    async fn sign_in(&self, request: &SignInRequest) -> Result<(), SubmitError> {
        post_json(&self.endpoint("sign-in"), request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SubmitError> {
        post_json(&self.endpoint("sign-up"), request).await
    }
}

// The forms only render client-side; on the server the transport is a stub
// so the lib target still compiles under the ssr feature.
#[cfg(feature = "ssr")]
impl AuthClient for HttpAuthClient {
    async fn sign_in(&self, _request: &SignInRequest) -> Result<(), SubmitError> {
        Err(SubmitError::new("Sign in is not available on the server"))
    }

    async fn sign_up(&self, _request: &SignUpRequest) -> Result<(), SubmitError> {
        Err(SubmitError::new("Sign up is not available on the server"))
    }
}

/// POST `body` as JSON and map the response onto the collaborator contract:
/// 2xx is success, anything else carries an optional `{ "error": ... }` body.
#[cfg(not(feature = "ssr"))]
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    let response = Request::post(url)
        .json(body)
        .map_err(|e| SubmitError::new(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::new(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    // A malformed error body still surfaces as a failure, just without a
    // service-provided message.
    match response.json::<AuthApiError>().await {
        Ok(err) => Err(SubmitError::new(err.error)),
        Err(_) => Err(SubmitError::unknown()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_serializes_callback_url() {
        let input = SignInInput {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let request = SignInRequest::new(&input, "/");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["password"], "secret");
        assert_eq!(json["callbackURL"], "/");
    }

    #[test]
    fn test_sign_up_request_includes_name() {
        let input = SignUpInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "lovelace".to_string(),
        };
        let request = SignUpRequest::new(&input, "/");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["callbackURL"], "/");
    }

    #[test]
    fn test_endpoint_joining() {
        let client = HttpAuthClient::new("/api/auth");
        assert_eq!(client.endpoint("sign-in"), "/api/auth/sign-in");

        let client = HttpAuthClient::new("/api/auth/");
        assert_eq!(client.endpoint("sign-up"), "/api/auth/sign-up");
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::new("Invalid credentials").to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            SubmitError::unknown().to_string(),
            "authentication request failed"
        );
    }

    #[test]
    fn test_api_error_body_decodes() {
        let err: AuthApiError = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(err.error, "Invalid credentials");
    }
}
