//! Public landing page.

use leptos::prelude::*;

/// Marketing entry point with links into the portal's features.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__nav">
                <span class="landing-page__brand">"MediCareAI"</span>
                <span class="landing-page__spacer"></span>
                <a href="/login" class="btn">"Sign in"</a>
                <a href="/signup" class="btn btn--primary">"Get started"</a>
            </header>

            <section class="landing-page__hero">
                <h1>"Your health, one dashboard"</h1>
                <p>
                    "Check symptoms, book appointments, and track medications — "
                    "all from a single patient portal."
                </p>
                <a href="/signup" class="btn btn--primary">"Create free account"</a>
            </section>

            <section class="landing-page__features">
                <a href="/symptom-checker" class="feature-card">
                    <h2>"AI Symptom Checker"</h2>
                    <p>"Describe your symptoms and get instant guidance."</p>
                </a>
                <a href="/appointments" class="feature-card">
                    <h2>"Appointments"</h2>
                    <p>"Book a visit with a specialist in seconds."</p>
                </a>
                <a href="/medications" class="feature-card">
                    <h2>"Medication Tracker"</h2>
                    <p>"Keep dosages and schedules in one place."</p>
                </a>
                <a href="/market-insight" class="feature-card">
                    <h2>"Market Insights"</h2>
                    <p>"Live market prices at a glance."</p>
                </a>
            </section>

            <footer class="landing-page__footer">
                <a href="/doctor/login">"Are you a doctor? Sign in here"</a>
            </footer>
        </div>
    }
}
