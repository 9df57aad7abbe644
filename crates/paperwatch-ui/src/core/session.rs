//! Process-wide admin session token holder.
//!
//! # Design
//! - Keep the holder as plain data with get/set/clear so callers decide when
//!   persistence happens.
//! - The runtime is single-threaded; a thread-local cell is the whole
//!   synchronization story.

use std::cell::RefCell;

thread_local! {
    static ADMIN_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Current admin bearer token, if one is held.
#[must_use]
pub fn admin_token() -> Option<String> {
    ADMIN_TOKEN.with(|cell| cell.borrow().clone())
}

/// Store an admin bearer token. Blank tokens clear the holder instead.
pub fn set_admin_token(token: &str) {
    let trimmed = token.trim();
    ADMIN_TOKEN.with(|cell| {
        *cell.borrow_mut() = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    });
}

/// Drop the held token.
pub fn clear_admin_token() {
    ADMIN_TOKEN.with(|cell| *cell.borrow_mut() = None);
}

/// Whether a usable token is currently held.
#[must_use]
pub fn is_logged_in() -> bool {
    ADMIN_TOKEN.with(|cell| cell.borrow().is_some())
}

#[cfg(test)]
mod tests {
    use super::{admin_token, clear_admin_token, is_logged_in, set_admin_token};

    #[test]
    fn token_round_trips_through_the_holder() {
        clear_admin_token();
        assert!(!is_logged_in());
        set_admin_token("secret-token");
        assert_eq!(admin_token().as_deref(), Some("secret-token"));
        assert!(is_logged_in());
        clear_admin_token();
        assert_eq!(admin_token(), None);
    }

    #[test]
    fn blank_tokens_clear_instead_of_storing() {
        set_admin_token("secret-token");
        set_admin_token("   ");
        assert!(!is_logged_in());
    }
}
