//! Route guard for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`ProtectedRoute`] so
//! unauthenticated navigation is redirected to the login entry point with
//! the originally requested location preserved.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::children::ChildrenFn;
use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::util::session_store;

/// Login redirect target carrying the originally requested path.
///
/// The `from` parameter is advisory: the login flow lands users on its own
/// fixed destinations and does not resume it.
fn login_redirect_target(from: &str) -> String {
    format!("/login?from={from}")
}

/// Renders `children` only when a session token is persisted; otherwise
/// redirects to `/login`.
///
/// The stored record is re-read on every evaluation, so the decision always
/// reflects current storage rather than a cached authorization. Presence of
/// a token is the entire check; no expiry or signature validation happens
/// on the client.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let authorized = || session_store::load().is_some();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if !authorized() {
            let target = login_redirect_target(&location.pathname.get());
            navigate(&target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || {
        if authorized() {
            Either::Left(children())
        } else {
            Either::Right(view! { <p class="guard-redirect">"Redirecting to login..."</p> })
        }
    }
}
