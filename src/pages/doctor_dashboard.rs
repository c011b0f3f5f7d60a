//! Doctor dashboard.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

/// Landing route for doctor-role sessions.
#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let doctor_name = move || {
        session
            .get()
            .record
            .and_then(|record| record.display_name)
            .unwrap_or_else(|| "Doctor".to_owned())
    };

    view! {
        <div class="dashboard-page dashboard-page--doctor">
            <Navbar/>

            <main class="dashboard-page__main">
                <h1>{doctor_name}</h1>
                <p class="dashboard-page__subtitle">
                    "Your upcoming appointments and patient requests appear here."
                </p>
            </main>
        </div>
    }
}
