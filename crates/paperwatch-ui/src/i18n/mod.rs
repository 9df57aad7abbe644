//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Chinese (Simplified).
    Zh,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Zh]
    }

    /// Two-letter code used in storage and the `lang` query parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// BCP 47 tag for the document `lang` attribute.
    #[must_use]
    pub const fn lang_tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// Open Graph locale identifier.
    #[must_use]
    pub const fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Zh => "zh_CN",
        }
    }

    /// The locale a language toggle switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Map an arbitrary browser language tag to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to the English bundle and finally to the literal
    /// dotted path, so a typo never renders as an empty string.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback, then the
    /// literal path.
    #[must_use]
    pub fn text(&self, path: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| path.to_string())
    }

    /// Resolve a dotted path and substitute `{name}` placeholders.
    #[must_use]
    pub fn format(&self, path: &str, vars: &[(&str, String)]) -> String {
        interpolate(&self.text(path), vars)
    }
}

/// Substitute `{name}` placeholders against the provided variables.
///
/// Placeholders without a matching variable are left verbatim so a missing
/// argument is visible instead of silently dropped.
#[must_use]
pub fn interpolate(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Zh => include_str!("../../i18n/zh.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::{LocaleCode, TranslationBundle, interpolate};

    #[test]
    fn missing_key_falls_back_to_literal_path() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        assert_eq!(bundle.text("missing.key"), "missing.key");
    }

    #[test]
    fn zh_falls_back_to_english_per_key() {
        // A key present in English resolves even if a zh entry were dropped.
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        assert!(!bundle.text("common.error").is_empty());
    }

    #[test]
    fn interpolation_replaces_known_and_keeps_unknown() {
        let out = interpolate(
            "Step {current} of {total} ({missing})",
            &[
                ("current", "2".to_string()),
                ("total", "3".to_string()),
            ],
        );
        assert_eq!(out, "Step 2 of 3 ({missing})");
    }

    #[test]
    fn format_interpolates_bundle_text() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let out = bundle.format(
            "paper_form.verification_expires",
            &[("minutes", "10".to_string())],
        );
        assert!(out.contains("10"));
    }

    #[test]
    fn browser_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("zh-TW"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_lang_tag("en-GB"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
    }

    #[test]
    fn toggle_flips_between_locales() {
        assert_eq!(LocaleCode::En.toggled(), LocaleCode::Zh);
        assert_eq!(LocaleCode::Zh.toggled(), LocaleCode::En);
    }
}
