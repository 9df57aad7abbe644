//! Persistence and environment helpers for the app shell.

use crate::core::api_base::{self, ApiBaseConfig, ApiMode};
use crate::core::logic::query_lang;
use crate::core::session;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const API_MODE_KEY: &str = "paperwatch.api_mode";
pub(crate) const CUSTOM_BASE_KEY: &str = "paperwatch.api_custom_base";
pub(crate) const LAST_BASE_KEY: &str = "paperwatch.api_last_base";
pub(crate) const ADMIN_TOKEN_KEY: &str = "paperwatch.admin_token";
pub(crate) const LOCALE_KEY: &str = "paperwatch.locale";

pub(crate) fn load_api_config() -> ApiBaseConfig {
    let mode = LocalStorage::get::<String>(API_MODE_KEY).ok();
    let custom = LocalStorage::get::<String>(CUSTOM_BASE_KEY).ok();
    api_base::resolve_config(mode.as_deref(), custom.as_deref())
}

/// Persist an official/custom mode switch and return the new configuration.
pub(crate) fn set_api_mode(mode: ApiMode) -> ApiBaseConfig {
    set_storage(API_MODE_KEY, mode.as_str());
    let config = load_api_config();
    remember_active_base(&config.base);
    config
}

/// Persist a normalized custom base and activate custom mode.
///
/// Returns `None` without side effects when the input does not normalize.
pub(crate) fn set_custom_api_base(input: &str) -> Option<ApiBaseConfig> {
    let normalized = api_base::normalize_api_base(input)?;
    set_storage(CUSTOM_BASE_KEY, normalized);
    set_storage(API_MODE_KEY, ApiMode::Custom.as_str());
    let config = load_api_config();
    remember_active_base(&config.base);
    Some(config)
}

/// Hydrate the in-memory session holder from storage at boot.
pub(crate) fn hydrate_session() {
    if let Ok(token) = LocalStorage::get::<String>(ADMIN_TOKEN_KEY) {
        session::set_admin_token(&token);
    }
}

pub(crate) fn persist_admin_token(token: &str) {
    session::set_admin_token(token);
    set_storage(ADMIN_TOKEN_KEY, token);
}

pub(crate) fn clear_admin_token() {
    session::clear_admin_token();
    delete_storage(ADMIN_TOKEN_KEY);
}

pub(crate) fn load_locale() -> LocaleCode {
    let search = window().location().search().unwrap_or_default();
    if let Some(locale) = query_lang(&search)
        .as_deref()
        .and_then(LocaleCode::from_lang_tag)
    {
        return locale;
    }
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// Track the effective base. A change invalidates the stored admin token so
/// one backend's credentials are never replayed against another.
fn remember_active_base(base: &str) {
    let last = LocalStorage::get::<String>(LAST_BASE_KEY).ok();
    if api_base::base_change_invalidates_session(last.as_deref(), base) {
        clear_admin_token();
    }
    set_storage(LAST_BASE_KEY, base);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
