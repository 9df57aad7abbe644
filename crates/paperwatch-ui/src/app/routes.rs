//! Route table for the SPA.

use yew_router::prelude::*;

/// Supported application routes.
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub(crate) enum Route {
    /// Landing page with the subscription flow.
    #[at("/")]
    Home,
    /// Admin dashboard.
    #[at("/admin")]
    Admin,
    /// Anything else falls back to the landing page.
    #[not_found]
    #[at("/404")]
    NotFound,
}
