//! Admin dashboard: aggregate stats plus patient and doctor tables.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::{AdminStats, DoctorSummary, PatientSummary};

fn currency(value: f64) -> String {
    format!("${value:.2}")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(feature = "hydrate")]
fn load_admin_data(
    stats: RwSignal<Option<AdminStats>>,
    patients: RwSignal<Vec<PatientSummary>>,
    doctors: RwSignal<Vec<DoctorSummary>>,
    error: RwSignal<String>,
) {
    leptos::task::spawn_local(async move {
        let token = crate::util::session_store::load()
            .map(|record| record.access_token)
            .unwrap_or_default();
        match crate::net::api::fetch_admin_stats(&token).await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(message) => error.set(message),
        }
        if let Ok(loaded) = crate::net::api::fetch_admin_patients(&token).await {
            patients.set(loaded);
        }
        if let Ok(loaded) = crate::net::api::fetch_admin_doctors(&token).await {
            doctors.set(loaded);
        }
    });
}

/// Admin dashboard page.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<AdminStats>);
    let patients = RwSignal::new(Vec::<PatientSummary>::new());
    let doctors = RwSignal::new(Vec::<DoctorSummary>::new());
    let error = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        load_admin_data(stats, patients, doctors, error);
    });

    view! {
        <div class="admin-page">
            <Navbar/>

            <main class="admin-page__main">
                <h1>"Admin Dashboard"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="banner banner--error">{move || error.get()}</p>
                </Show>

                <Show
                    when=move || stats.get().is_some()
                    fallback=move || view! { <p>"Loading stats..."</p> }
                >
                    {move || {
                        let s = stats.get().unwrap_or(AdminStats {
                            total_patients: 0,
                            total_doctors: 0,
                            total_appointments: 0,
                            total_revenue: 0.0,
                            pending_doctors: 0,
                            active_patients: 0,
                        });
                        view! {
                            <div class="admin-page__stats">
                                <div class="stat-tile">
                                    <span class="stat-tile__value">{s.total_patients}</span>
                                    <span class="stat-tile__label">"Patients"</span>
                                </div>
                                <div class="stat-tile">
                                    <span class="stat-tile__value">{s.total_doctors}</span>
                                    <span class="stat-tile__label">"Doctors"</span>
                                </div>
                                <div class="stat-tile">
                                    <span class="stat-tile__value">{s.total_appointments}</span>
                                    <span class="stat-tile__label">"Appointments"</span>
                                </div>
                                <div class="stat-tile">
                                    <span class="stat-tile__value">{currency(s.total_revenue)}</span>
                                    <span class="stat-tile__label">"Revenue"</span>
                                </div>
                                <div class="stat-tile">
                                    <span class="stat-tile__value">{s.pending_doctors}</span>
                                    <span class="stat-tile__label">"Pending doctors"</span>
                                </div>
                            </div>
                        }
                    }}
                </Show>

                <section class="admin-page__section">
                    <h2>"Patients"</h2>
                    <table class="admin-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Registered"</th>
                                <th>"Active"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                patients
                                    .get()
                                    .into_iter()
                                    .map(|patient| {
                                        view! {
                                            <tr>
                                                <td>
                                                    {patient.full_name.clone().unwrap_or_else(|| "—".to_owned())}
                                                </td>
                                                <td>{patient.email.clone()}</td>
                                                <td>{patient.created_at.clone()}</td>
                                                <td>{yes_no(patient.is_active)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="admin-page__section">
                    <h2>"Doctors"</h2>
                    <table class="admin-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Specialization"</th>
                                <th>"Experience"</th>
                                <th>"Verified"</th>
                                <th>"Rating"</th>
                                <th>"Fee"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                doctors
                                    .get()
                                    .into_iter()
                                    .map(|doctor| {
                                        view! {
                                            <tr>
                                                <td>{doctor.full_name.clone()}</td>
                                                <td>{doctor.specialization.clone()}</td>
                                                <td>{format!("{} yrs", doctor.experience_years)}</td>
                                                <td>{yes_no(doctor.is_verified)}</td>
                                                <td>{format!("{:.1}", doctor.rating)}</td>
                                                <td>{currency(doctor.consultation_fee)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>
            </main>
        </div>
    }
}
