//! API-base selection and URL normalization.
//!
//! # Design
//! - Keep normalization pure so scheme inference and suffix handling are
//!   testable without a DOM.
//! - Resolve the effective base from raw stored values; persistence stays in
//!   the app shell.
//! - Classify health probes into a closed set so views map outcomes to
//!   locale-aware messages.

/// Compiled-in fallback when no official base is configured at build time.
pub const FALLBACK_BASE: &str = "/api";

const API_SUFFIX: &str = "/api";
const OFFICIAL_BASE_RAW: Option<&str> = option_env!("PAPERWATCH_OFFICIAL_API_BASE");

/// Which backend origin outbound calls are routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMode {
    /// The compiled-in default origin.
    Official,
    /// A user-supplied alternate origin.
    Custom,
}

impl ApiMode {
    /// Stable storage value for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Custom => "custom",
        }
    }
}

/// Resolved API-base selection, including both candidate bases for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseConfig {
    /// Active mode.
    pub mode: ApiMode,
    /// Effective base all requests go to.
    pub base: String,
    /// Compiled-in official base.
    pub official_base: String,
    /// Stored custom base, empty when never configured.
    pub custom_base: String,
}

impl Default for ApiBaseConfig {
    fn default() -> Self {
        resolve_config(None, None)
    }
}

/// The compiled-in official base, normalized.
#[must_use]
pub fn official_base() -> String {
    normalize_api_base(OFFICIAL_BASE_RAW.unwrap_or(FALLBACK_BASE))
        .unwrap_or_else(|| FALLBACK_BASE.to_string())
}

/// Normalize a user-supplied base URL.
///
/// Trims whitespace, rejects empty input, infers `http://` for loopback
/// hosts and `https://` otherwise when no scheme is given, strips trailing
/// slashes, and appends the `/api` segment if absent. Idempotent: feeding a
/// previously normalized value back returns it unchanged.
#[must_use]
pub fn normalize_api_base(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_scheme = normalize_scheme(trimmed);
    let stripped = with_scheme.trim_end_matches('/');
    if stripped.is_empty() {
        return None;
    }
    Some(with_api_suffix(stripped))
}

/// Join a base and an endpoint path with exactly one separating slash.
#[must_use]
pub fn build_api_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Resolve the active configuration from raw persisted values.
///
/// A stored `custom` mode only takes effect when a custom base is actually
/// stored; otherwise the official base stays active.
#[must_use]
pub fn resolve_config(stored_mode: Option<&str>, stored_custom: Option<&str>) -> ApiBaseConfig {
    let official_base = official_base();
    let custom_base = stored_custom.unwrap_or_default().to_string();
    let mode = if stored_mode == Some("custom") && !custom_base.is_empty() {
        ApiMode::Custom
    } else {
        ApiMode::Official
    };
    let base = match mode {
        ApiMode::Custom => custom_base.clone(),
        ApiMode::Official => official_base.clone(),
    };
    ApiBaseConfig {
        mode,
        base,
        official_base,
        custom_base,
    }
}

/// Whether moving from the previously active base to the next one crosses
/// an origin boundary, which must invalidate any held session token.
#[must_use]
pub fn base_change_invalidates_session(last_base: Option<&str>, next_base: &str) -> bool {
    last_base.is_some_and(|last| last != next_base)
}

/// Outcome of probing a candidate base's liveness endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    /// The probe returned 2xx.
    Reachable,
    /// The probe returned a non-2xx status.
    HttpError(u16),
    /// The probe was aborted by its timeout.
    TimedOut,
    /// The probe failed before any response arrived.
    Unreachable,
}

impl HealthStatus {
    /// Translation key for the failure message, `None` when reachable.
    #[must_use]
    pub const fn error_key(self) -> Option<&'static str> {
        match self {
            Self::Reachable => None,
            Self::HttpError(_) => Some("backend.error_health_failed"),
            Self::TimedOut => Some("backend.error_timeout"),
            Self::Unreachable => Some("backend.error_unreachable"),
        }
    }
}

fn normalize_scheme(value: &str) -> String {
    let lowered = value.to_ascii_lowercase();
    if value.starts_with('/') || lowered.starts_with("http://") || lowered.starts_with("https://") {
        return value.to_string();
    }
    let scheme = if lowered.starts_with("localhost") || lowered.starts_with("127.0.0.1") {
        "http://"
    } else {
        "https://"
    };
    format!("{scheme}{value}")
}

fn with_api_suffix(value: &str) -> String {
    if value.ends_with(API_SUFFIX) {
        value.to_string()
    } else {
        format!("{value}{API_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApiMode, HealthStatus, base_change_invalidates_session, build_api_url, normalize_api_base,
        official_base, resolve_config,
    };

    #[test]
    fn scheme_is_inferred_from_host() {
        assert_eq!(
            normalize_api_base("localhost:8000").as_deref(),
            Some("http://localhost:8000/api")
        );
        assert_eq!(
            normalize_api_base("127.0.0.1:8000").as_deref(),
            Some("http://127.0.0.1:8000/api")
        );
        assert_eq!(
            normalize_api_base("example.com").as_deref(),
            Some("https://example.com/api")
        );
    }

    #[test]
    fn explicit_scheme_and_relative_bases_are_kept() {
        assert_eq!(
            normalize_api_base("http://example.com").as_deref(),
            Some("http://example.com/api")
        );
        assert_eq!(normalize_api_base("/api").as_deref(), Some("/api"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize_api_base("example.com/").expect("valid base");
        let second = normalize_api_base(&first).expect("still valid");
        assert_eq!(first, second);
        assert!(second.ends_with("/api"));
        assert!(!second.ends_with("/api/api"));
    }

    #[test]
    fn empty_and_slash_only_inputs_are_rejected() {
        assert_eq!(normalize_api_base(""), None);
        assert_eq!(normalize_api_base("   "), None);
        assert_eq!(normalize_api_base("///"), None);
    }

    #[test]
    fn api_urls_join_with_single_slash() {
        assert_eq!(
            build_api_url("http://x/api", "/papers/preview"),
            "http://x/api/papers/preview"
        );
        assert_eq!(build_api_url("http://x/api/", "health"), "http://x/api/health");
    }

    #[test]
    fn custom_mode_requires_a_stored_base() {
        let config = resolve_config(Some("custom"), None);
        assert_eq!(config.mode, ApiMode::Official);
        assert_eq!(config.base, official_base());

        let config = resolve_config(Some("custom"), Some("https://alt.example.org/api"));
        assert_eq!(config.mode, ApiMode::Custom);
        assert_eq!(config.base, "https://alt.example.org/api");
        assert_eq!(config.official_base, official_base());
    }

    #[test]
    fn switching_to_a_different_origin_invalidates_the_session() {
        assert!(base_change_invalidates_session(
            Some("/api"),
            "https://alt.example.org/api"
        ));
        assert!(!base_change_invalidates_session(Some("/api"), "/api"));
        // First recorded base: nothing to invalidate yet.
        assert!(!base_change_invalidates_session(None, "/api"));
    }

    #[test]
    fn health_outcomes_map_to_message_keys() {
        assert_eq!(HealthStatus::Reachable.error_key(), None);
        assert_eq!(
            HealthStatus::HttpError(503).error_key(),
            Some("backend.error_health_failed")
        );
        assert_eq!(
            HealthStatus::TimedOut.error_key(),
            Some("backend.error_timeout")
        );
        assert_eq!(
            HealthStatus::Unreachable.error_key(),
            Some("backend.error_unreachable")
        );
    }
}
