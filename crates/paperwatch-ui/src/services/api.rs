//! HTTP client for the Paperwatch backend (REST).
//!
//! # Design
//! - One client instance per app boot; the active base is swapped via
//!   interior mutability when the backend selector commits a change.
//! - Every failure mode (network fault, abort, non-2xx, malformed body) is
//!   normalized into [`ApiError`]; nothing throws past this boundary.
//! - Each in-flight request is bounded by an abort timer so no call blocks
//!   indefinitely.

use crate::core::api_base::{HealthStatus, build_api_url};
use crate::core::logic::server_error_message;
use crate::core::session;
use gloo_net::http::{Method, Request};
use gloo_timers::callback::Timeout;
use paperwatch_api_models::{
    AppConfig, ConfigUpdate, EmailVerificationRequest, EmailVerificationResponse, HealthResponse,
    LoginRequest, LoginResponse, MessageResponse, Paper, PaperCreate, PaperPreview,
    PaperPreviewRequest, PaperUpdate, PublicEmailConfig, SubscribeResponse, Subscriber,
    TestEmailRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use thiserror::Error;
use web_sys::AbortController;

/// Default per-request timeout.
const DEFAULT_TIMEOUT_MS: u32 = 60_000;
/// Extended timeout for the test-email round trip through SMTP.
const TEST_EMAIL_TIMEOUT_MS: u32 = 45_000;
/// Short timeout for the backend-selector liveness probe.
const HEALTH_TIMEOUT_MS: u32 = 8_000;

const TIMEOUT_MESSAGE: &str =
    "Request timed out. Please check your network and the backend address.";

/// Uniform error shape returned by every client call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status when the server answered with non-2xx.
    pub status: Option<u16>,
    /// Human-readable message, preferring the server's `detail` field.
    pub message: String,
}

impl ApiError {
    fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Shared HTTP client bound to the active API base.
#[derive(Debug)]
pub struct ApiClient {
    base_url: RefCell<String>,
}

impl ApiClient {
    /// Create a client for the given base.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: RefCell::new(base_url.into()),
        }
    }

    /// Swap the active base after a backend switch.
    pub fn set_base(&self, base_url: impl Into<String>) {
        *self.base_url.borrow_mut() = base_url.into();
    }

    /// The base all requests currently go to.
    #[must_use]
    pub fn base(&self) -> String {
        self.base_url.borrow().clone()
    }

    /// Fetch a paper preview for the confirmation step.
    pub async fn preview_paper(&self, body: &PaperPreviewRequest) -> Result<PaperPreview, ApiError> {
        self.post_json("/papers/preview", body, DEFAULT_TIMEOUT_MS)
            .await
    }

    /// Request an email verification code.
    pub async fn request_email_verification(
        &self,
        body: &EmailVerificationRequest,
    ) -> Result<EmailVerificationResponse, ApiError> {
        self.post_json("/papers/verify-email", body, DEFAULT_TIMEOUT_MS)
            .await
    }

    /// Subscribe to a confirmed paper.
    pub async fn add_paper(&self, body: &PaperCreate) -> Result<SubscribeResponse, ApiError> {
        self.post_json("/papers", body, DEFAULT_TIMEOUT_MS).await
    }

    /// Public sender information shown before sign-up.
    pub async fn public_email_config(&self) -> Result<PublicEmailConfig, ApiError> {
        self.get_json("/public/email-config").await
    }

    /// Exchange the admin password for a bearer token.
    pub async fn login(&self, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json(
            "/admin/login",
            &LoginRequest {
                password: password.to_string(),
            },
            DEFAULT_TIMEOUT_MS,
        )
        .await
    }

    /// List monitored papers.
    pub async fn papers(&self) -> Result<Vec<Paper>, ApiError> {
        self.get_json("/admin/papers").await
    }

    /// Delete a paper and all of its subscribers.
    pub async fn delete_paper(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::DELETE, &format!("/admin/papers/{id}"))
            .await
    }

    /// Patch a paper's display fields.
    pub async fn update_paper(&self, id: i64, body: &PaperUpdate) -> Result<Paper, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/admin/papers/{id}"))
            .json(body)
            .map_err(|err| ApiError::network(format!("Failed to encode request: {err}")))?;
        Self::execute(request, DEFAULT_TIMEOUT_MS).await
    }

    /// List subscribers across all papers.
    pub async fn subscribers(&self) -> Result<Vec<Subscriber>, ApiError> {
        self.get_json("/admin/subscribers").await
    }

    /// Delete a subscriber.
    pub async fn delete_subscriber(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::DELETE, &format!("/admin/subscribers/{id}"))
            .await
    }

    /// Reset a subscriber's notification-sent flags.
    pub async fn reset_subscriber_notifications(
        &self,
        id: i64,
    ) -> Result<MessageResponse, ApiError> {
        self.send_empty(
            Method::POST,
            &format!("/admin/subscribers/{id}/reset-notifications"),
        )
        .await
    }

    /// Fetch the current system configuration.
    pub async fn config(&self) -> Result<AppConfig, ApiError> {
        self.get_json("/admin/config").await
    }

    /// Apply a sparse configuration patch.
    pub async fn update_config(&self, body: &ConfigUpdate) -> Result<MessageResponse, ApiError> {
        let request = self
            .request(Method::PUT, "/admin/config")
            .json(body)
            .map_err(|err| ApiError::network(format!("Failed to encode request: {err}")))?;
        Self::execute(request, DEFAULT_TIMEOUT_MS).await
    }

    /// Send a test email; the SMTP round trip warrants the longer timeout.
    pub async fn send_test_email(&self, to_email: &str) -> Result<MessageResponse, ApiError> {
        self.post_json(
            "/admin/test-email",
            &TestEmailRequest {
                to_email: to_email.to_string(),
            },
            TEST_EMAIL_TIMEOUT_MS,
        )
        .await
    }

    /// Ask the backend to re-poll every paper now. The check itself runs
    /// asynchronously server-side.
    pub async fn check_now(&self) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::POST, "/admin/check-now").await
    }

    /// Probe a candidate base's liveness endpoint and classify the outcome.
    ///
    /// Takes an explicit base because the probe runs before the candidate is
    /// committed as the active base.
    pub async fn check_health(base: &str) -> HealthStatus {
        let request = Request::get(&build_api_url(base, "/health"));
        let controller = AbortController::new().ok();
        let request = match controller.as_ref() {
            Some(controller) => request.abort_signal(Some(&controller.signal())),
            None => request,
        };
        let timer =
            controller.map(|controller| Timeout::new(HEALTH_TIMEOUT_MS, move || controller.abort()));
        let result = request.send().await;
        if let Some(timer) = timer {
            timer.cancel();
        }
        match result {
            Ok(response) if response.ok() => match response.json::<HealthResponse>().await {
                Ok(_) => HealthStatus::Reachable,
                Err(_) => HealthStatus::Unreachable,
            },
            Ok(response) => HealthStatus::HttpError(response.status()),
            Err(gloo_net::Error::JsError(err)) if err.name == "AbortError" => {
                HealthStatus::TimedOut
            }
            Err(_) => HealthStatus::Unreachable,
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> Request {
        let url = build_api_url(&self.base(), endpoint);
        let mut request = Request::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        if let Some(token) = session::admin_token() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        request
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        Self::execute(self.request(Method::GET, endpoint), DEFAULT_TIMEOUT_MS).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        timeout_ms: u32,
    ) -> Result<T, ApiError> {
        let request = self
            .request(Method::POST, endpoint)
            .json(body)
            .map_err(|err| ApiError::network(format!("Failed to encode request: {err}")))?;
        Self::execute(request, timeout_ms).await
    }

    async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        Self::execute(self.request(method, endpoint), DEFAULT_TIMEOUT_MS).await
    }

    async fn execute<T: DeserializeOwned>(
        request: Request,
        timeout_ms: u32,
    ) -> Result<T, ApiError> {
        let controller = AbortController::new().ok();
        let request = match controller.as_ref() {
            Some(controller) => request.abort_signal(Some(&controller.signal())),
            None => request,
        };
        let timer =
            controller.map(|controller| Timeout::new(timeout_ms, move || controller.abort()));
        let result = request.send().await;
        if let Some(timer) = timer {
            timer.cancel();
        }
        let response = result.map_err(|err| match err {
            gloo_net::Error::JsError(js_err) if js_err.name == "AbortError" => {
                ApiError::network(TIMEOUT_MESSAGE)
            }
            other => ApiError::network(format!("Unable to reach the backend: {other}")),
        })?;
        if !response.ok() {
            let status = response.status();
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|value| {
                    value
                        .get("detail")
                        .and_then(serde_json::Value::as_str)
                        .map(ToString::to_string)
                });
            return Err(ApiError {
                status: Some(status),
                message: server_error_message(status, detail.as_deref()),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::network(format!("Malformed response body: {err}")))
    }
}
