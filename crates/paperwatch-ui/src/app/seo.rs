//! Document-head synchronization for locale and route changes.
//!
//! Rewrites title, description, Open Graph/Twitter tags, canonical and
//! hreflang links, the admin robots directive, and the structured-data
//! node whenever the locale or route changes. Missing head nodes are
//! created on demand so the synchronizer works against a minimal shell
//! document.

use crate::core::logic::{alternate_url, canonical_url, is_admin_path, upsert_query_lang};
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Apply every locale- and route-dependent head mutation.
pub(crate) fn apply_head(bundle: &TranslationBundle, locale: LocaleCode) {
    let doc = document();
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", locale.lang_tag());
    }
    doc.set_title(&bundle.text("seo.title"));

    set_meta(&doc, "name", "description", &bundle.text("seo.description"));
    set_meta(&doc, "name", "keywords", &bundle.text("seo.keywords"));
    set_meta(&doc, "property", "og:title", &bundle.text("seo.og_title"));
    set_meta(
        &doc,
        "property",
        "og:description",
        &bundle.text("seo.og_description"),
    );
    set_meta(&doc, "property", "og:locale", locale.og_locale());
    set_meta(
        &doc,
        "name",
        "twitter:title",
        &bundle.text("seo.twitter_title"),
    );
    set_meta(
        &doc,
        "name",
        "twitter:description",
        &bundle.text("seo.twitter_description"),
    );

    let location = window().location();
    let origin = location.origin().unwrap_or_default();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let canonical = canonical_url(&origin, &path, locale);
    let image = format!("{origin}/og-image.png");

    set_meta(
        &doc,
        "name",
        "robots",
        if is_admin_path(&path) {
            "noindex,nofollow"
        } else {
            "index,follow"
        },
    );
    set_link(&doc, "link[rel=\"canonical\"]", &[("rel", "canonical")], &canonical);
    set_link(
        &doc,
        "link[rel=\"alternate\"][hreflang=\"en\"]",
        &[("rel", "alternate"), ("hreflang", "en")],
        &alternate_url(&origin, &path, "en"),
    );
    set_link(
        &doc,
        "link[rel=\"alternate\"][hreflang=\"zh-CN\"]",
        &[("rel", "alternate"), ("hreflang", "zh-CN")],
        &alternate_url(&origin, &path, "zh"),
    );
    set_link(
        &doc,
        "link[rel=\"alternate\"][hreflang=\"x-default\"]",
        &[("rel", "alternate"), ("hreflang", "x-default")],
        &alternate_url(&origin, &path, "en"),
    );
    set_meta(&doc, "property", "og:url", &canonical);
    set_meta(&doc, "property", "og:image", &image);
    set_meta(&doc, "name", "twitter:url", &canonical);
    set_meta(&doc, "name", "twitter:image", &image);

    apply_structured_data(&doc, bundle, locale, &canonical);
}

/// Keep the `lang` query parameter in step with the active locale without a
/// navigation.
pub(crate) fn sync_lang_query(locale: LocaleCode) {
    let window = window();
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let next = upsert_query_lang(&search, locale.code());
    if search.trim_start_matches('?') == next {
        return;
    }
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let url = format!("{path}?{next}");
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                console::error!("history replace failed", err);
            }
        }
        Err(err) => console::error!("history unavailable", err),
    }
}

fn apply_structured_data(
    doc: &Document,
    bundle: &TranslationBundle,
    locale: LocaleCode,
    canonical: &str,
) {
    let Some(node) = doc.get_element_by_id("structured-data") else {
        return;
    };
    let data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": "Paperwatch",
        "description": bundle.text("seo.description"),
        "url": canonical,
        "applicationCategory": "UtilitiesApplication",
        "operatingSystem": "Web",
        "inLanguage": locale.lang_tag(),
    });
    node.set_text_content(Some(&data.to_string()));
}

fn set_meta(doc: &Document, attr: &str, name: &str, content: &str) {
    let selector = format!("meta[{attr}=\"{name}\"]");
    if let Some(element) = ensure_element(doc, &selector, "meta", &[(attr, name)]) {
        let _ = element.set_attribute("content", content);
    }
}

fn set_link(doc: &Document, selector: &str, attrs: &[(&str, &str)], href: &str) {
    if let Some(element) = ensure_element(doc, selector, "link", attrs) {
        let _ = element.set_attribute("href", href);
    }
}

fn ensure_element(
    doc: &Document,
    selector: &str,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Option<Element> {
    if let Ok(Some(element)) = doc.query_selector(selector) {
        return Some(element);
    }
    let element = doc.create_element(tag).ok()?;
    for (name, value) in attrs {
        element.set_attribute(name, value).ok()?;
    }
    let head = doc.head()?;
    if let Err(err) = head.append_child(&element) {
        console::error!("head append failed", selector.to_string(), err);
        return None;
    }
    Some(element)
}
