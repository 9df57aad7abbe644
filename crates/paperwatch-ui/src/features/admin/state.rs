//! Admin dashboard state: subscriber grouping and the configuration form.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing; convert on save.
//! - Build the save payload by diffing against the loaded baseline so the
//!   patch carries only fields the admin actually changed.
//! - The SMTP password has no baseline; it travels only when entered.

use crate::core::logic::group_by_venue;
use crate::features::admin::logic::{parse_optional_f64, parse_optional_u16, parse_optional_u32};
use paperwatch_api_models::{AppConfig, ConfigUpdate, Subscriber};

/// Group subscribers by their paper's venue, first-seen order.
#[must_use]
pub fn subscriber_groups(
    subscribers: Vec<Subscriber>,
    fallback: &str,
) -> Vec<(String, Vec<Subscriber>)> {
    group_by_venue(subscribers, fallback, |subscriber| {
        subscriber.paper_venue.clone()
    })
}

/// Mutable configuration form state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ConfigFormState {
    /// Poll interval, minutes.
    pub check_interval: String,
    /// Review-modification check interval, minutes.
    pub review_mod_check_interval: String,
    /// Gap between review-modification requests, seconds.
    pub review_mod_request_gap_seconds: String,
    /// SMTP host.
    pub smtp_host: String,
    /// SMTP port.
    pub smtp_port: String,
    /// SMTP username.
    pub smtp_user: String,
    /// SMTP password; write-only, blank means "keep current".
    pub smtp_password: String,
    /// From address.
    pub from_email: String,
    /// From display name.
    pub from_name: String,
    baseline: Option<AppConfig>,
}

impl ConfigFormState {
    /// Populate the form from a freshly loaded configuration.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            check_interval: config.check_interval.to_string(),
            review_mod_check_interval: config.review_mod_check_interval.to_string(),
            review_mod_request_gap_seconds: config.review_mod_request_gap_seconds.to_string(),
            smtp_host: config.smtp_host.clone(),
            smtp_port: config.smtp_port.to_string(),
            smtp_user: config.smtp_user.clone(),
            smtp_password: String::new(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
            baseline: Some(config),
        }
    }

    /// Build the sparse patch for saving.
    ///
    /// # Errors
    /// Returns a field-naming message when a numeric input fails to parse.
    pub fn to_update(&self) -> Result<ConfigUpdate, String> {
        let baseline = self.baseline.as_ref();
        let check_interval = parse_optional_u32("Check interval", &self.check_interval)?
            .filter(|value| baseline.is_none_or(|config| config.check_interval != *value));
        let review_mod_check_interval = parse_optional_u32(
            "Review modify check interval",
            &self.review_mod_check_interval,
        )?
        .filter(|value| baseline.is_none_or(|config| config.review_mod_check_interval != *value));
        let review_mod_request_gap_seconds = parse_optional_f64(
            "Review modify request gap",
            &self.review_mod_request_gap_seconds,
        )?
        .filter(|value| {
            baseline.is_none_or(|config| {
                (config.review_mod_request_gap_seconds - *value).abs() > f64::EPSILON
            })
        });
        let smtp_port = parse_optional_u16("SMTP port", &self.smtp_port)?
            .filter(|value| baseline.is_none_or(|config| config.smtp_port != *value));

        let password = self.smtp_password.trim();
        Ok(ConfigUpdate {
            check_interval,
            review_mod_check_interval,
            review_mod_request_gap_seconds,
            smtp_host: changed_string(&self.smtp_host, baseline.map(|c| c.smtp_host.as_str())),
            smtp_port,
            smtp_user: changed_string(&self.smtp_user, baseline.map(|c| c.smtp_user.as_str())),
            smtp_password: if password.is_empty() {
                None
            } else {
                Some(password.to_string())
            },
            from_email: changed_string(&self.from_email, baseline.map(|c| c.from_email.as_str())),
            from_name: changed_string(&self.from_name, baseline.map(|c| c.from_name.as_str())),
        })
    }
}

fn changed_string(current: &str, baseline: Option<&str>) -> Option<String> {
    let trimmed = current.trim();
    match baseline {
        Some(previous) => {
            if trimmed == previous {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => {
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigFormState, subscriber_groups};
    use paperwatch_api_models::{AppConfig, Subscriber};

    fn config() -> AppConfig {
        AppConfig {
            check_interval: 30,
            review_mod_check_interval: 10,
            review_mod_request_gap_seconds: 1.5,
            smtp_host: "mail.example.org".to_string(),
            smtp_port: 587,
            smtp_user: "notifier".to_string(),
            from_email: "alerts@example.org".to_string(),
            from_name: "Paperwatch".to_string(),
        }
    }

    fn subscriber(id: i64, venue: Option<&str>) -> Subscriber {
        Subscriber {
            id,
            paper_id: 1,
            email: format!("reader{id}@example.org"),
            notify_on_review: true,
            notify_on_review_modified: false,
            notify_on_decision: true,
            notified_review: false,
            notified_decision: false,
            created_at: "2025-01-01T00:00:00".to_string(),
            paper_title: Some("Paper".to_string()),
            paper_venue: venue.map(ToString::to_string),
        }
    }

    #[test]
    fn untouched_form_produces_an_empty_patch() {
        let form = ConfigFormState::from_config(config());
        let patch = form.to_update().expect("form parses");
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_carries_only_edited_fields() {
        let mut form = ConfigFormState::from_config(config());
        form.check_interval = "15".to_string();
        form.smtp_host = "smtp.other.org".to_string();
        let patch = form.to_update().expect("form parses");
        assert_eq!(patch.check_interval, Some(15));
        assert_eq!(patch.smtp_host.as_deref(), Some("smtp.other.org"));
        assert_eq!(patch.smtp_port, None);
        assert_eq!(patch.from_email, None);
        assert_eq!(patch.review_mod_request_gap_seconds, None);
    }

    #[test]
    fn password_travels_only_when_entered() {
        let mut form = ConfigFormState::from_config(config());
        let patch = form.to_update().expect("form parses");
        assert_eq!(patch.smtp_password, None);
        form.smtp_password = "new-secret".to_string();
        let patch = form.to_update().expect("form parses");
        assert_eq!(patch.smtp_password.as_deref(), Some("new-secret"));
    }

    #[test]
    fn invalid_numbers_surface_field_errors() {
        let mut form = ConfigFormState::from_config(config());
        form.smtp_port = "notaport".to_string();
        let err = form.to_update().expect_err("port must fail");
        assert!(err.contains("SMTP port"));
    }

    #[test]
    fn subscribers_group_by_paper_venue() {
        let groups = subscriber_groups(
            vec![
                subscriber(1, Some("ICML")),
                subscriber(2, None),
                subscriber(3, Some("ICML")),
            ],
            "Unknown Venue",
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "ICML");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Unknown Venue");
    }
}
