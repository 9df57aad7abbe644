//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Slices stay small: session presence and the active backend selection.
//!   View-local form state lives in the owning component.

use crate::core::api_base::ApiBaseConfig;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Admin session state.
    pub session: SessionSlice,
    /// Active backend selection, mirrored from persisted preferences.
    pub backend: ApiBaseConfig,
}

/// Shared admin session state for the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Whether an admin bearer token is currently held.
    pub logged_in: bool,
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use crate::core::api_base::ApiMode;

    #[test]
    fn default_store_is_logged_out_on_official_backend() {
        let store = AppStore::default();
        assert!(!store.session.logged_in);
        assert_eq!(store.backend.mode, ApiMode::Official);
        assert!(store.backend.custom_base.is_empty());
    }
}
