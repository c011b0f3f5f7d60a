//! Patient health dashboard.
//!
//! This is the authenticated landing route behind the guard; it greets the
//! signed-in user and links into the portal's features.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

fn greeting(state: &SessionState) -> String {
    match state
        .record
        .as_ref()
        .and_then(|record| record.display_name.clone())
    {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

/// Patient dashboard page.
#[component]
pub fn HealthDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="dashboard-page">
            <Navbar/>

            <main class="dashboard-page__main">
                <h1>{move || greeting(&session.get())}</h1>
                <p class="dashboard-page__subtitle">
                    "Here's a quick look at everything you can do today."
                </p>

                <div class="dashboard-page__cards">
                    <a href="/symptom-checker" class="feature-card">
                        <h2>"Check symptoms"</h2>
                        <p>"Get guidance before you book."</p>
                    </a>
                    <a href="/appointments" class="feature-card">
                        <h2>"Appointments"</h2>
                        <p>"View and book visits."</p>
                    </a>
                    <a href="/medications" class="feature-card">
                        <h2>"Medications"</h2>
                        <p>"Track what you're taking."</p>
                    </a>
                </div>
            </main>
        </div>
    }
}
