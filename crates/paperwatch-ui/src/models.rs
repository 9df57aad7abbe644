//! UI-local models shared across components.

/// Severity of a transient toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral acknowledgement.
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

/// A transient toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    /// Short headline, e.g. "Error" or "Success".
    pub title: String,
    /// Body text, usually a server-supplied or translated message.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

/// A toast emitted by a view, before the app shell assigns an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

impl ToastRequest {
    /// Convenience constructor for an error toast.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Convenience constructor for a success toast.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    /// Convenience constructor for a neutral toast.
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Info,
        }
    }
}
