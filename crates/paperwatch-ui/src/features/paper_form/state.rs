//! Paper subscription form state machine.
//!
//! # Design
//! - Model the flow as an explicit step enum with transition methods instead
//!   of ad hoc field clearing, so illegal states stay unrepresentable.
//! - Keep form inputs as strings for lossless editing; convert to wire types
//!   only when a request is built.
//! - Invalidating a sent verification code on email change happens inside
//!   the transition, never in the view.

use paperwatch_api_models::{
    EmailVerificationRequest, PaperCreate, PaperPreview, PaperPreviewRequest,
};

/// Venue placeholder sent when the preview had none.
const UNKNOWN_VENUE: &str = "Unknown";

/// Visible step of the subscription flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Locator entry, with optional source-site credentials.
    Input,
    /// Metadata confirmation plus email verification.
    Preview,
    /// Subscription recorded.
    Success,
}

/// Mutable subscription form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperFormState {
    /// Current step.
    pub step: Step,
    /// Paper locator: forum URL or bare id.
    pub locator: String,
    /// Optional source-site username.
    pub username: String,
    /// Optional source-site password.
    pub password: String,
    /// Whether the credentials disclosure is open.
    pub show_credentials: bool,
    /// Subscriber email address.
    pub email: String,
    /// Preference: notify when reviews first appear.
    pub notify_on_review: bool,
    /// Preference: notify when existing reviews change.
    pub notify_on_review_modified: bool,
    /// Preference: notify when the final decision lands.
    pub notify_on_decision: bool,
    /// Metadata returned by the preview call.
    pub preview: Option<PaperPreview>,
    /// Whether a verification code was sent to the current email.
    pub verification_sent: bool,
    /// Code entered by the subscriber.
    pub verification_code: String,
    /// Minutes until the sent code expires, for display.
    pub verification_expires_in: Option<i64>,
}

impl Default for PaperFormState {
    fn default() -> Self {
        Self {
            step: Step::Input,
            locator: String::new(),
            username: String::new(),
            password: String::new(),
            show_credentials: false,
            email: String::new(),
            notify_on_review: true,
            notify_on_review_modified: true,
            notify_on_decision: true,
            preview: None,
            verification_sent: false,
            verification_code: String::new(),
            verification_expires_in: None,
        }
    }
}

impl PaperFormState {
    /// Build the preview request from current inputs.
    #[must_use]
    pub fn preview_request(&self) -> PaperPreviewRequest {
        PaperPreviewRequest {
            openreview_url: self.locator.trim().to_string(),
            openreview_username: optional(&self.username),
            openreview_password: optional(&self.password),
        }
    }

    /// Enter the preview step with freshly fetched metadata.
    ///
    /// Any previously sent verification code belongs to an older preview and
    /// is discarded.
    pub fn apply_preview(&mut self, preview: PaperPreview) {
        self.preview = Some(preview);
        self.step = Step::Preview;
        self.clear_verification();
    }

    /// Return to the locator step without dropping the fetched preview, so
    /// stepping forward again needs no refetch.
    pub const fn back_to_input(&mut self) {
        self.step = Step::Input;
    }

    /// Update the subscriber email. A code sent to the previous address is
    /// no longer valid client-side.
    pub fn set_email(&mut self, email: String) {
        let invalidate =
            self.email != email && (self.verification_sent || !self.verification_code.is_empty());
        self.email = email;
        if invalidate {
            self.clear_verification();
        }
    }

    /// Build the verification-code request for the current email.
    #[must_use]
    pub fn verification_request(&self) -> Option<EmailVerificationRequest> {
        let preview = self.preview.as_ref()?;
        if self.email.trim().is_empty() {
            return None;
        }
        Some(EmailVerificationRequest {
            email: self.email.trim().to_string(),
            openreview_id: preview.openreview_id.clone(),
        })
    }

    /// Record that a code was sent, with its advertised lifetime.
    pub const fn mark_code_sent(&mut self, expires_in_minutes: i64) {
        self.verification_sent = true;
        self.verification_expires_in = Some(expires_in_minutes);
    }

    /// Update the entered verification code.
    pub fn set_code(&mut self, code: String) {
        self.verification_code = code;
    }

    /// Whether the send-code action is available.
    #[must_use]
    pub fn can_request_code(&self) -> bool {
        !self.email.trim().is_empty() && self.preview.is_some()
    }

    /// Whether the final subscribe action is available: a code must have
    /// been requested and entered.
    #[must_use]
    pub fn can_subscribe(&self) -> bool {
        self.verification_sent
            && !self.verification_code.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Build the subscribe request from the confirmed preview.
    #[must_use]
    pub fn subscribe_request(&self) -> Option<PaperCreate> {
        let preview = self.preview.as_ref()?;
        if !self.can_subscribe() {
            return None;
        }
        Some(PaperCreate {
            openreview_id: preview.openreview_id.clone(),
            submission_number: preview.submission_number,
            title: preview
                .title
                .clone()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| preview.openreview_id.clone()),
            venue: preview
                .venue
                .clone()
                .filter(|venue| !venue.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_VENUE.to_string()),
            email: self.email.trim().to_string(),
            verification_code: self.verification_code.trim().to_string(),
            openreview_username: optional(&self.username),
            openreview_password: optional(&self.password),
            notify_on_review: self.notify_on_review,
            notify_on_review_modified: self.notify_on_review_modified,
            notify_on_decision: self.notify_on_decision,
        })
    }

    /// Enter the success step after the backend accepted the subscription.
    pub const fn complete(&mut self) {
        self.step = Step::Success;
    }

    /// Reset the whole flow back to a pristine locator step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_verification(&mut self) {
        self.verification_sent = false;
        self.verification_code.clear();
        self.verification_expires_in = None;
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{PaperFormState, Step};
    use paperwatch_api_models::PaperPreview;

    fn preview() -> PaperPreview {
        PaperPreview {
            openreview_id: "abc123".to_string(),
            submission_number: None,
            title: Some("X".to_string()),
            venue: Some("NeurIPS".to_string()),
            authors: Some(vec!["A".to_string(), "B".to_string()]),
        }
    }

    #[test]
    fn preview_enters_confirm_step_and_resets_verification() {
        let mut form = PaperFormState {
            verification_sent: true,
            verification_code: "123456".to_string(),
            verification_expires_in: Some(10),
            ..PaperFormState::default()
        };
        form.apply_preview(preview());
        assert_eq!(form.step, Step::Preview);
        assert_eq!(
            form.preview.as_ref().map(|p| p.openreview_id.as_str()),
            Some("abc123")
        );
        assert!(!form.verification_sent);
        assert!(form.verification_code.is_empty());
        assert_eq!(form.verification_expires_in, None);
    }

    #[test]
    fn subscribe_stays_disabled_until_code_requested_and_entered() {
        let mut form = PaperFormState::default();
        form.apply_preview(preview());
        form.set_email("reader@example.org".to_string());
        assert!(!form.can_subscribe());
        form.mark_code_sent(10);
        assert!(!form.can_subscribe());
        form.set_code("123456".to_string());
        assert!(form.can_subscribe());
    }

    #[test]
    fn changing_email_invalidates_a_sent_code() {
        let mut form = PaperFormState::default();
        form.apply_preview(preview());
        form.set_email("reader@example.org".to_string());
        form.mark_code_sent(10);
        form.set_code("123456".to_string());
        form.set_email("other@example.org".to_string());
        assert!(!form.verification_sent);
        assert!(form.verification_code.is_empty());
        assert!(!form.can_subscribe());
    }

    #[test]
    fn back_navigation_keeps_the_fetched_preview() {
        let mut form = PaperFormState::default();
        form.apply_preview(preview());
        form.back_to_input();
        assert_eq!(form.step, Step::Input);
        assert!(form.preview.is_some());
    }

    #[test]
    fn subscribe_request_falls_back_for_missing_metadata() {
        let mut form = PaperFormState::default();
        form.apply_preview(PaperPreview {
            title: None,
            venue: Some("  ".to_string()),
            ..preview()
        });
        form.set_email("reader@example.org".to_string());
        form.mark_code_sent(10);
        form.set_code(" 123456 ".to_string());
        let request = form.subscribe_request().expect("request is buildable");
        assert_eq!(request.title, "abc123");
        assert_eq!(request.venue, "Unknown");
        assert_eq!(request.verification_code, "123456");
        assert_eq!(request.openreview_username, None);
    }

    #[test]
    fn credentials_travel_only_when_present() {
        let mut form = PaperFormState {
            locator: " https://openreview.net/forum?id=abc123 ".to_string(),
            username: "user@example.org".to_string(),
            password: "hunter2".to_string(),
            ..PaperFormState::default()
        };
        let request = form.preview_request();
        assert_eq!(request.openreview_url, "https://openreview.net/forum?id=abc123");
        assert_eq!(request.openreview_username.as_deref(), Some("user@example.org"));
        form.username.clear();
        form.password.clear();
        assert_eq!(form.preview_request().openreview_username, None);
    }

    #[test]
    fn reset_returns_to_pristine_input() {
        let mut form = PaperFormState::default();
        form.apply_preview(preview());
        form.set_email("reader@example.org".to_string());
        form.mark_code_sent(10);
        form.complete();
        assert_eq!(form.step, Step::Success);
        form.reset();
        assert_eq!(form, PaperFormState::default());
    }
}
