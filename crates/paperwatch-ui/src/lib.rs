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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Paperwatch web UI.
//!
//! A Yew single-page front-end for the paper-tracking notification service:
//! subscribers confirm paper metadata and verify their email before signing
//! up for status-change alerts, and administrators manage monitored papers,
//! subscribers, and outbound-mail configuration. Everything stateful lives in
//! the external backend; this crate is presentation and request
//! orchestration only.

pub mod core;
pub mod features;
pub mod i18n;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        assert!(!bundle.text("nav.admin").is_empty());
        assert_eq!(bundle.text("nav.does_not_exist"), "nav.does_not_exist");
    }

    #[test]
    fn bundles_cover_both_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert!(!bundle.text("paper_form.title").is_empty());
        }
    }
}
