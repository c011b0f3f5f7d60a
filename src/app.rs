//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, appointments::AppointmentsPage,
    dashboard::HealthDashboardPage, doctor_dashboard::DoctorDashboardPage,
    doctor_login::DoctorLoginPage, landing::LandingPage, login::LoginPage,
    market_insight::MarketInsightPage, medications::MedicationsPage, signup::SignupPage,
    symptom_checker::SymptomCheckerPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. Protected
/// routes are wrapped in [`ProtectedRoute`], which consults persisted
/// session storage on every navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Pick up any persisted session and theme once the browser is attached.
    // Effects do not run during server rendering, so SSR output stays
    // deterministic.
    Effect::new(move || {
        let record = crate::util::session_store::load();
        crate::util::dark_mode::apply(crate::util::dark_mode::read_preference());
        session.set(SessionState { record, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medicare-client.css"/>
        <Title text="MediCareAI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=(StaticSegment("doctor"), StaticSegment("login")) view=DoctorLoginPage/>
                <Route path=StaticSegment("symptom-checker") view=SymptomCheckerPage/>
                <Route path=StaticSegment("market-insight") view=MarketInsightPage/>
                <Route
                    path=StaticSegment("health-dashboard")
                    view=|| view! { <ProtectedRoute><HealthDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("appointments")
                    view=|| view! { <ProtectedRoute><AppointmentsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("medications")
                    view=|| view! { <ProtectedRoute><MedicationsPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("doctor"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute><DoctorDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute><AdminDashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
