//! Appointments page: list, book, and cancel visits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Doctors and existing appointments are fetched once on
//! mount; booking and cancelling refresh the list. Cancellation sits
//! behind a confirm dialog.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::{Appointment, AppointmentDraft, DoctorChoice};

/// Specialty shown for the selected doctor, empty when nothing is chosen.
fn specialty_for(doctors: &[DoctorChoice], name: &str) -> String {
    doctors
        .iter()
        .find(|doctor| doctor.name == name)
        .map(|doctor| doctor.specialty.clone())
        .unwrap_or_default()
}

/// Form-level validation beyond the `required` input attributes.
fn validate_booking(doctor: &str, date: &str, reason: &str) -> Result<(), &'static str> {
    if doctor.is_empty() || date.is_empty() || reason.trim().is_empty() {
        return Err("Select a doctor, date, and reason before booking.");
    }
    Ok(())
}

fn status_class(status: &str) -> &'static str {
    match status {
        "confirmed" => "status-badge status-badge--confirmed",
        "cancelled" => "status-badge status-badge--cancelled",
        _ => "status-badge status-badge--scheduled",
    }
}

#[cfg(feature = "hydrate")]
fn stored_token() -> String {
    crate::util::session_store::load()
        .map(|record| record.access_token)
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn load_doctors(doctors: RwSignal<Vec<DoctorChoice>>) {
    leptos::task::spawn_local(async move {
        if let Ok(list) = crate::net::api::fetch_doctors(&stored_token()).await {
            doctors.set(list.doctors);
        }
    });
}

#[cfg(feature = "hydrate")]
fn load_appointments(
    appointments: RwSignal<Vec<Appointment>>,
    error: RwSignal<String>,
    loading: RwSignal<bool>,
) {
    leptos::task::spawn_local(async move {
        loading.set(true);
        match crate::net::api::fetch_appointments(&stored_token()).await {
            Ok(items) => appointments.set(items),
            Err(message) => error.set(message),
        }
        loading.set(false);
    });
}

/// Appointments page.
#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let doctors = RwSignal::new(Vec::<DoctorChoice>::new());
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let doctor_name = RwSignal::new(String::new());
    let appointment_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let cancel_id = RwSignal::new(None::<i64>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        {
            load_doctors(doctors);
            load_appointments(appointments, error, loading);
        }
    });

    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let doctor_value = doctor_name.get();
        let date_value = appointment_date.get();
        let reason_value = reason.get();
        if let Err(message) = validate_booking(&doctor_value, &date_value, &reason_value) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        let notes_value = notes.get().trim().to_owned();
        let draft = AppointmentDraft {
            specialty: specialty_for(&doctors.get(), &doctor_value),
            doctor_name: doctor_value,
            appointment_date: date_value,
            reason: reason_value,
            notes: if notes_value.is_empty() { None } else { Some(notes_value) },
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::book_appointment(&stored_token(), &draft).await {
                Ok(()) => {
                    success.set(
                        "Appointment booked successfully! Check your email for confirmation."
                            .to_owned(),
                    );
                    doctor_name.set(String::new());
                    appointment_date.set(String::new());
                    reason.set(String::new());
                    notes.set(String::new());
                    load_appointments(appointments, error, loading);
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            busy.set(false);
        }
    };

    let on_cancel_dismiss = Callback::new(move |_| cancel_id.set(None));

    view! {
        <div class="appointments-page">
            <Navbar/>

            <main class="appointments-page__main">
                <h1>"Appointments"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="banner banner--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="banner banner--success">{move || success.get()}</p>
                </Show>

                <section class="appointments-page__book">
                    <h2>"Book an appointment"</h2>
                    <form class="appointments-page__form" on:submit=on_book>
                        <label>
                            "Doctor"
                            <select
                                required=true
                                prop:value=move || doctor_name.get()
                                on:change=move |ev| doctor_name.set(event_target_value(&ev))
                            >
                                <option value="">"Select a doctor"</option>
                                {move || {
                                    doctors
                                        .get()
                                        .into_iter()
                                        .map(|doctor| {
                                            let label =
                                                format!("{} — {}", doctor.name, doctor.specialty);
                                            view! {
                                                <option value=doctor.name.clone()>{label}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                        <label>
                            "Specialty"
                            <input
                                type="text"
                                readonly=true
                                prop:value=move || specialty_for(&doctors.get(), &doctor_name.get())
                            />
                        </label>
                        <label>
                            "Date and time"
                            <input
                                type="datetime-local"
                                required=true
                                prop:value=move || appointment_date.get()
                                on:input=move |ev| appointment_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Reason"
                            <input
                                type="text"
                                required=true
                                placeholder="Annual checkup"
                                prop:value=move || reason.get()
                                on:input=move |ev| reason.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Notes"
                            <textarea
                                rows="2"
                                prop:value=move || notes.get()
                                on:input=move |ev| notes.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Booking..." } else { "Book appointment" }}
                        </button>
                    </form>
                </section>

                <section class="appointments-page__list">
                    <h2>"My appointments"</h2>
                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <p>"Loading appointments..."</p> }
                    >
                        <Show
                            when=move || !appointments.get().is_empty()
                            fallback=move || view! { <p>"No appointments yet."</p> }
                        >
                            <ul class="appointments-page__items">
                                {move || {
                                    appointments
                                        .get()
                                        .into_iter()
                                        .map(|appt| {
                                            let id = appt.id;
                                            view! {
                                                <li class="appointment-card">
                                                    <span class="appointment-card__doctor">
                                                        {appt.doctor_name.clone()}
                                                    </span>
                                                    <span class="appointment-card__specialty">
                                                        {appt.specialty.clone()}
                                                    </span>
                                                    <span class="appointment-card__date">
                                                        {appt.appointment_date.clone()}
                                                    </span>
                                                    <span class=status_class(&appt.status)>
                                                        {appt.status.clone()}
                                                    </span>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| cancel_id.set(Some(id))
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </Show>
                </section>

                <Show when=move || cancel_id.get().is_some()>
                    <CancelAppointmentDialog
                        appointment_id=cancel_id
                        on_cancel=on_cancel_dismiss
                        appointments=appointments
                        error=error
                        loading=loading
                    />
                </Show>
            </main>
        </div>
    }
}

/// Modal confirm dialog for cancelling an appointment.
#[component]
fn CancelAppointmentDialog(
    appointment_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    appointments: RwSignal<Vec<Appointment>>,
    error: RwSignal<String>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    let submit = Callback::new(move |_| {
        let Some(id) = appointment_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_appointment(&stored_token(), id).await {
                Ok(()) => load_appointments(appointments, error, loading),
                Err(message) => error.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, appointments, error, loading);
        }
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Cancel Appointment"</h2>
                <p class="dialog__danger">"Are you sure you want to cancel this appointment?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Keep it"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Cancel appointment"
                    </button>
                </div>
            </div>
        </div>
    }
}
