//! Backend selector state.
//!
//! # Design
//! - Selecting "custom" only stages the choice; the active mode changes
//!   after a successful probe plus confirm, never on failure.
//! - Errors are carried as data and rendered through the bundle so inline
//!   messages follow the active locale.

use crate::core::api_base::{ApiBaseConfig, ApiMode, HealthStatus, normalize_api_base};
use crate::i18n::TranslationBundle;

/// Inline error shown under the custom-base input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The input did not normalize to a usable base URL.
    InvalidBase,
    /// The probe against the normalized base failed.
    Health(HealthStatus),
}

impl SelectorError {
    /// Locale-aware message for the error.
    #[must_use]
    pub fn message(self, bundle: &TranslationBundle) -> String {
        match self {
            Self::InvalidBase => bundle.text("backend.error_invalid_base"),
            Self::Health(status) => {
                let key = status
                    .error_key()
                    .unwrap_or("backend.error_unreachable");
                match status {
                    HealthStatus::HttpError(code) => {
                        bundle.format(key, &[("status", code.to_string())])
                    }
                    _ => bundle.text(key),
                }
            }
        }
    }
}

/// Mutable backend selector state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendSelectorState {
    /// Currently active configuration.
    pub config: ApiBaseConfig,
    /// Tab the user has selected; may differ from the active mode until a
    /// custom base is confirmed.
    pub selected: ApiMode,
    /// Raw custom-base input.
    pub custom_input: String,
    /// Inline error, if any.
    pub error: Option<SelectorError>,
    /// Whether a health probe is in flight.
    pub checking: bool,
}

impl BackendSelectorState {
    /// Build selector state from the active configuration.
    #[must_use]
    pub fn from_config(config: ApiBaseConfig) -> Self {
        Self {
            selected: config.mode,
            custom_input: config.custom_base.clone(),
            error: None,
            checking: false,
            config,
        }
    }

    /// Update the raw input, clearing any stale error.
    pub fn set_input(&mut self, value: String) {
        self.custom_input = value;
        self.error = None;
    }

    /// Stage a mode selection. Activating official is the caller's job (it
    /// needs persistence); this only moves the tab and clears errors.
    pub const fn select(&mut self, mode: ApiMode) {
        self.selected = mode;
        self.error = None;
    }

    /// Normalized form of the current input, for the preview line.
    #[must_use]
    pub fn normalized_preview(&self) -> Option<String> {
        normalize_api_base(&self.custom_input)
    }

    /// Start the probe-then-confirm sequence.
    ///
    /// Returns the normalized base to probe, or records an inline error and
    /// returns `None` without touching the active mode.
    pub fn begin_check(&mut self) -> Option<String> {
        match self.normalized_preview() {
            Some(normalized) => {
                self.error = None;
                self.checking = true;
                Some(normalized)
            }
            None => {
                self.error = Some(SelectorError::InvalidBase);
                None
            }
        }
    }

    /// Record the probe outcome. Returns `true` when the base may be
    /// committed; on failure the error is surfaced and the active mode is
    /// left untouched.
    pub const fn finish_check(&mut self, status: HealthStatus) -> bool {
        self.checking = false;
        match status {
            HealthStatus::Reachable => true,
            _ => {
                self.error = Some(SelectorError::Health(status));
                false
            }
        }
    }

    /// Adopt a freshly persisted configuration after a successful switch.
    pub fn refresh(&mut self, config: ApiBaseConfig) {
        self.selected = config.mode;
        self.custom_input = config.custom_base.clone();
        self.config = config;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{BackendSelectorState, SelectorError};
    use crate::core::api_base::{ApiBaseConfig, ApiMode, HealthStatus};
    use crate::i18n::{LocaleCode, TranslationBundle};

    fn state() -> BackendSelectorState {
        BackendSelectorState::from_config(ApiBaseConfig::default())
    }

    #[test]
    fn invalid_input_sets_error_and_keeps_mode() {
        let mut selector = state();
        selector.select(ApiMode::Custom);
        selector.set_input("   ".to_string());
        assert_eq!(selector.begin_check(), None);
        assert_eq!(selector.error, Some(SelectorError::InvalidBase));
        assert_eq!(selector.config.mode, ApiMode::Official);
    }

    #[test]
    fn probe_timeout_leaves_mode_unchanged_with_timeout_error() {
        let mut selector = state();
        selector.select(ApiMode::Custom);
        selector.set_input("backend.example.org".to_string());
        let normalized = selector.begin_check().expect("input normalizes");
        assert_eq!(normalized, "https://backend.example.org/api");
        assert!(selector.checking);
        assert!(!selector.finish_check(HealthStatus::TimedOut));
        assert!(!selector.checking);
        assert_eq!(
            selector.error,
            Some(SelectorError::Health(HealthStatus::TimedOut))
        );
        assert_eq!(selector.config.mode, ApiMode::Official);
    }

    #[test]
    fn reachable_probe_allows_commit() {
        let mut selector = state();
        selector.set_input("localhost:8000".to_string());
        selector.begin_check().expect("input normalizes");
        assert!(selector.finish_check(HealthStatus::Reachable));
        assert_eq!(selector.error, None);
    }

    #[test]
    fn editing_the_input_clears_the_error() {
        let mut selector = state();
        selector.set_input(String::new());
        selector.begin_check();
        assert!(selector.error.is_some());
        selector.set_input("example.com".to_string());
        assert_eq!(selector.error, None);
    }

    #[test]
    fn error_messages_follow_the_locale() {
        let en = TranslationBundle::new(LocaleCode::En);
        let zh = TranslationBundle::new(LocaleCode::Zh);
        let timeout = SelectorError::Health(HealthStatus::TimedOut);
        assert_ne!(timeout.message(&en), timeout.message(&zh));
        let http = SelectorError::Health(HealthStatus::HttpError(503));
        assert!(http.message(&en).contains("503"));
    }
}
