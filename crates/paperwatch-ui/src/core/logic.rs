//! Pure view helpers shared across features.

use crate::i18n::LocaleCode;
use chrono::{DateTime, NaiveDateTime};

/// Group items by venue, preserving first-seen venue order and mapping a
/// missing venue to the given fallback label.
#[must_use]
pub fn group_by_venue<T, F>(items: Vec<T>, fallback: &str, venue_of: F) -> Vec<(String, Vec<T>)>
where
    F: Fn(&T) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let venue = venue_of(&item)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        match groups.iter_mut().find(|(label, _)| *label == venue) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((venue, vec![item])),
        }
    }
    groups
}

/// Error text for a non-2xx response: the server's `detail` field when
/// present, else a generic status-code message.
#[must_use]
pub fn server_error_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => detail.to_string(),
        _ => format!("HTTP error! status: {status}"),
    }
}

/// Public forum URL for a paper id.
#[must_use]
pub fn forum_url(openreview_id: &str) -> String {
    format!(
        "https://openreview.net/forum?id={}",
        urlencoding::encode(openreview_id)
    )
}

/// Render a backend timestamp for display.
///
/// The backend emits both offset and naive ISO datetimes; unparseable input
/// is shown verbatim rather than dropped.
#[must_use]
pub fn format_timestamp(raw: &str, locale: LocaleCode) -> String {
    let naive = DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"));
    let Ok(parsed) = naive else {
        return raw.to_string();
    };
    match locale {
        LocaleCode::En => parsed.format("%b %-d, %Y, %H:%M").to_string(),
        LocaleCode::Zh => parsed.format("%Y年%m月%d日 %H:%M").to_string(),
    }
}

/// Canonical URL for the current page in the given locale.
#[must_use]
pub fn canonical_url(origin: &str, path: &str, locale: LocaleCode) -> String {
    alternate_url(origin, path, locale.code())
}

/// Alternate-language URL for the current page.
#[must_use]
pub fn alternate_url(origin: &str, path: &str, lang: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!("{origin}{path}?lang={lang}")
}

/// Whether a route path belongs to the admin surface (kept out of indexes).
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    path.starts_with("/admin")
}

/// Extract the `lang` value from a location search string (`?a=b&lang=zh`).
#[must_use]
pub fn query_lang(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("lang="))
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Set or replace the `lang` parameter in a location search string,
/// preserving every other parameter. Returns the search without a leading
/// `?`.
#[must_use]
pub fn upsert_query_lang(search: &str, code: &str) -> String {
    let mut pairs: Vec<String> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty() && !pair.starts_with("lang="))
        .map(ToString::to_string)
        .collect();
    pairs.push(format!("lang={code}"));
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::{
        alternate_url, canonical_url, format_timestamp, forum_url, group_by_venue, is_admin_path,
        query_lang, server_error_message, upsert_query_lang,
    };
    use crate::i18n::LocaleCode;

    #[test]
    fn grouping_preserves_order_and_uses_fallback() {
        let items = vec![
            ("a", Some("NeurIPS")),
            ("b", None),
            ("c", Some("NeurIPS")),
            ("d", Some("  ")),
        ];
        let groups = group_by_venue(items, "Unknown Venue", |(_, venue)| {
            venue.map(ToString::to_string)
        });
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "NeurIPS");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Unknown Venue");
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn server_detail_wins_over_generic_message() {
        assert_eq!(server_error_message(500, Some("db down")), "db down");
        assert_eq!(
            server_error_message(500, Some("  ")),
            "HTTP error! status: 500"
        );
        assert_eq!(server_error_message(404, None), "HTTP error! status: 404");
    }

    #[test]
    fn forum_urls_encode_the_id() {
        assert_eq!(
            forum_url("abc123"),
            "https://openreview.net/forum?id=abc123"
        );
        assert!(forum_url("a b").contains("a%20b"));
    }

    #[test]
    fn timestamps_parse_offset_and_naive_forms() {
        let naive = format_timestamp("2025-03-02T09:30:00", LocaleCode::En);
        assert!(naive.contains("2025"));
        assert!(naive.contains("09:30"));
        let offset = format_timestamp("2025-03-02T09:30:00+00:00", LocaleCode::Zh);
        assert!(offset.contains("2025年03月02日"));
        assert_eq!(format_timestamp("garbage", LocaleCode::En), "garbage");
    }

    #[test]
    fn canonical_and_alternate_urls_carry_lang() {
        assert_eq!(
            canonical_url("https://x.example", "/", LocaleCode::Zh),
            "https://x.example/?lang=zh"
        );
        assert_eq!(
            alternate_url("", "/admin", "en"),
            "/admin?lang=en"
        );
    }

    #[test]
    fn admin_paths_are_flagged() {
        assert!(is_admin_path("/admin"));
        assert!(!is_admin_path("/"));
    }

    #[test]
    fn lang_parameter_round_trips_through_the_query() {
        assert_eq!(query_lang("?lang=zh"), Some("zh".to_string()));
        assert_eq!(query_lang("?a=b&lang=en"), Some("en".to_string()));
        assert_eq!(query_lang(""), None);
        assert_eq!(query_lang("?lang="), None);

        assert_eq!(upsert_query_lang("", "en"), "lang=en");
        assert_eq!(upsert_query_lang("?lang=en", "zh"), "lang=zh");
        assert_eq!(upsert_query_lang("?a=b&lang=en", "zh"), "a=b&lang=zh");
    }
}
