//! Shared navigation bar for authenticated pages.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::dark_mode;

/// Label shown in the identity slot: display name, else email, else a
/// generic placeholder while the session is still loading.
fn identity_label(state: &SessionState) -> String {
    state
        .record
        .as_ref()
        .and_then(|record| record.display_name.clone().or_else(|| record.email.clone()))
        .unwrap_or_else(|| "Account".to_owned())
}

/// Top navigation bar with portal links, dark-mode toggle, and logout.
///
/// Logout clears every persisted session key, resets the session context,
/// and sends the browser to the login page.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dark = RwSignal::new(false);

    Effect::new(move || {
        dark.set(dark_mode::read_preference());
    });

    let on_logout = move |_| {
        crate::util::session_store::clear();
        session.update(|s| s.record = None);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">"MediCareAI"</a>

            <nav class="navbar__links">
                <a href="/health-dashboard">"Dashboard"</a>
                <a href="/symptom-checker">"Symptom Checker"</a>
                <a href="/appointments">"Appointments"</a>
                <a href="/medications">"Medications"</a>
                <a href="/market-insight">"Market Insights"</a>
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let next = dark_mode::toggle(dark.get());
                    dark.set(next);
                }
                title="Toggle dark mode"
            >
                {move || if dark.get() { "☀" } else { "☾" }}
            </button>

            <span class="navbar__identity">{move || identity_label(&session.get())}</span>

            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
