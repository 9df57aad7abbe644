#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Paperwatch backend API.
//!
//! These types mirror the backend's wire contract exactly; the UI never
//! invents fields and never persists any of these shapes beyond ephemeral
//! view state. Timestamps stay as strings on purpose: the backend emits both
//! naive and offset datetimes, so parsing is a display concern that lives in
//! the UI layer.
use serde::{Deserialize, Serialize};

/// Coarse paper lifecycle states surfaced by the backend.
///
/// The backend owns the state machine; unknown values deserialize to
/// [`PaperStatus::Unknown`] so a new backend status never breaks list
/// decoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaperStatus {
    /// No reviews or decision observed yet.
    Pending,
    /// Reviews are available.
    Reviewed,
    /// Final decision: accepted.
    Accepted,
    /// Final decision: rejected.
    Rejected,
    /// A decision exists but is neither accept nor reject.
    Decided,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl PaperStatus {
    /// Stable lowercase label matching the wire encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Decided => "decided",
            Self::Unknown => "unknown",
        }
    }
}

/// Request body for the non-committing paper preview step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperPreviewRequest {
    /// Paper locator: a forum URL or a bare paper id.
    pub openreview_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional source-site username for restricted venues.
    pub openreview_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional source-site password for restricted venues.
    pub openreview_password: Option<String>,
}

/// Paper metadata returned by the preview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperPreview {
    /// Canonical paper id resolved from the locator.
    pub openreview_id: String,
    #[serde(default)]
    /// Submission number within the venue, when the venue exposes one.
    pub submission_number: Option<i64>,
    /// Paper title; absent for private submissions.
    pub title: Option<String>,
    /// Conference / venue label.
    pub venue: Option<String>,
    #[serde(default)]
    /// Author list, when visible.
    pub authors: Option<Vec<String>>,
}

/// Request body for the final subscribe call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperCreate {
    /// Canonical paper id from the confirmed preview.
    pub openreview_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Submission number carried over from the preview.
    pub submission_number: Option<i64>,
    /// Display title (falls back to the paper id when unknown).
    pub title: String,
    /// Display venue (falls back to a placeholder when unknown).
    pub venue: String,
    /// Subscriber email address.
    pub email: String,
    /// Code the subscriber received via the verification email.
    pub verification_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional source-site username, forwarded for restricted venues.
    pub openreview_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional source-site password, forwarded for restricted venues.
    pub openreview_password: Option<String>,
    /// Notify when reviews first appear.
    pub notify_on_review: bool,
    /// Notify when existing reviews change.
    pub notify_on_review_modified: bool,
    /// Notify when the final decision lands.
    pub notify_on_decision: bool,
}

/// Request body for sending an email verification code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailVerificationRequest {
    /// Address the code is mailed to.
    pub email: String,
    /// Paper the pending subscription targets.
    pub openreview_id: String,
}

/// Response for a verification-code request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailVerificationResponse {
    /// Human-readable acknowledgement.
    pub message: String,
    /// Minutes until the issued code expires.
    pub expires_in_minutes: i64,
}

/// Monitored paper as listed by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paper {
    /// Backend row id.
    pub id: i64,
    /// Canonical paper id on the source site.
    pub openreview_id: String,
    #[serde(default)]
    /// Submission number within the venue, when known.
    pub submission_number: Option<i64>,
    /// Paper title; may be unknown for private submissions.
    pub title: Option<String>,
    /// Conference / venue label; may be unknown.
    pub venue: Option<String>,
    /// Backend-observed lifecycle status.
    pub status: PaperStatus,
    /// Last successful poll, as an ISO datetime string.
    pub last_checked: Option<String>,
    /// Creation time, as an ISO datetime string.
    pub created_at: String,
    #[serde(default)]
    /// Number of active subscribers.
    pub subscriber_count: Option<i64>,
    #[serde(default)]
    /// Whether the review notification has gone out.
    pub notified_review: Option<bool>,
    #[serde(default)]
    /// Whether the decision notification has gone out.
    pub notified_decision: Option<bool>,
}

/// Sparse paper patch for `PUT /admin/papers/{id}`.
///
/// Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New display title.
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New venue label.
    pub venue: Option<String>,
}

/// Subscriber as listed by the admin API, with denormalized paper fields
/// for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscriber {
    /// Backend row id.
    pub id: i64,
    /// Owning paper row id.
    pub paper_id: i64,
    /// Subscriber email address.
    pub email: String,
    /// Preference: notify when reviews first appear.
    pub notify_on_review: bool,
    /// Preference: notify when existing reviews change.
    pub notify_on_review_modified: bool,
    /// Preference: notify when the final decision lands.
    pub notify_on_decision: bool,
    /// Whether the review notification has gone out to this subscriber.
    pub notified_review: bool,
    /// Whether the decision notification has gone out to this subscriber.
    pub notified_decision: bool,
    /// Creation time, as an ISO datetime string.
    pub created_at: String,
    /// Denormalized paper title for display.
    pub paper_title: Option<String>,
    /// Denormalized paper venue for display and grouping.
    pub paper_venue: Option<String>,
}

/// Current system configuration returned by `GET /admin/config`.
///
/// The SMTP password is intentionally absent from the read shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Paper poll interval, in minutes.
    pub check_interval: u32,
    /// Review-modification check interval, in minutes.
    pub review_mod_check_interval: u32,
    /// Gap between review-modification requests, in seconds.
    pub review_mod_request_gap_seconds: f64,
    /// Outbound SMTP host.
    pub smtp_host: String,
    /// Outbound SMTP port.
    pub smtp_port: u16,
    /// Outbound SMTP username.
    pub smtp_user: String,
    /// From address used for notifications.
    pub from_email: String,
    /// From display name used for notifications.
    pub from_name: String,
}

/// Sparse configuration patch for `PUT /admin/config`.
///
/// Absent fields are omitted from the payload entirely and the backend
/// leaves the corresponding settings untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New poll interval, in minutes.
    pub check_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New review-modification check interval, in minutes.
    pub review_mod_check_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New gap between review-modification requests, in seconds.
    pub review_mod_request_gap_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New SMTP host.
    pub smtp_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New SMTP port.
    pub smtp_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New SMTP username.
    pub smtp_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New SMTP password; write-only and never echoed back.
    pub smtp_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New From address.
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New From display name.
    pub from_name: Option<String>,
}

impl ConfigUpdate {
    /// Whether the patch carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.check_interval.is_none()
            && self.review_mod_check_interval.is_none()
            && self.review_mod_request_gap_seconds.is_none()
            && self.smtp_host.is_none()
            && self.smtp_port.is_none()
            && self.smtp_user.is_none()
            && self.smtp_password.is_none()
            && self.from_email.is_none()
            && self.from_name.is_none()
    }
}

/// Public sender information shown to subscribers before they sign up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicEmailConfig {
    /// Address notifications are sent from; empty when unconfigured.
    pub from_email: String,
    #[serde(default)]
    /// Display name notifications are sent with, when configured.
    pub from_name: Option<String>,
}

/// Request body for `POST /admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Admin password.
    pub password: String,
}

/// Response for a successful admin login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent admin calls.
    pub token: String,
    /// Token scheme label (always `bearer` today).
    pub token_type: String,
}

/// Request body for `POST /admin/test-email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestEmailRequest {
    /// Recipient of the test message.
    pub to_email: String,
}

/// Generic acknowledgement payload used by several mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

/// Response for the final subscribe call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscribeResponse {
    /// Human-readable acknowledgement.
    pub message: String,
    /// Whether the subscription was recorded.
    pub success: bool,
}

/// Liveness probe payload from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Fixed status label, `healthy` when the service is up.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::{ConfigUpdate, Paper, PaperPreview, PaperStatus};

    #[test]
    fn sparse_patch_serializes_only_set_fields() {
        let patch = ConfigUpdate {
            smtp_host: Some("mail.example.org".to_string()),
            smtp_port: Some(587),
            ..ConfigUpdate::default()
        };
        let value = serde_json::to_value(&patch).expect("patch serializes");
        let object = value.as_object().expect("patch is an object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["smtp_host"], "mail.example.org");
        assert_eq!(object["smtp_port"], 587);
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(ConfigUpdate::default().is_empty());
        let patch = ConfigUpdate {
            check_interval: Some(30),
            ..ConfigUpdate::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn unknown_status_degrades_instead_of_failing() {
        let paper: Paper = serde_json::from_value(serde_json::json!({
            "id": 7,
            "openreview_id": "abc123",
            "title": null,
            "venue": null,
            "status": "withdrawn",
            "last_checked": null,
            "created_at": "2025-01-01T00:00:00"
        }))
        .expect("paper decodes despite unknown status");
        assert_eq!(paper.status, PaperStatus::Unknown);
        assert_eq!(paper.status.as_str(), "unknown");
    }

    #[test]
    fn preview_tolerates_minimal_payload() {
        let preview: PaperPreview = serde_json::from_value(serde_json::json!({
            "openreview_id": "abc123",
            "title": "X",
            "venue": "NeurIPS"
        }))
        .expect("preview decodes without optional fields");
        assert_eq!(preview.submission_number, None);
        assert_eq!(preview.authors, None);
    }
}
