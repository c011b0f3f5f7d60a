//! Medication tracker page: list, add, edit, and delete medications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. The same form serves create and update; which request is
//! issued depends on whether an existing medication is being edited.
//! Deletion sits behind a confirm dialog.

#[cfg(test)]
#[path = "medications_test.rs"]
mod medications_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::{Medication, MedicationDraft};

/// Form-level validation beyond the `required` input attributes.
fn validate_medication(name: &str, dosage: &str, frequency: &str, start_date: &str) -> Result<(), &'static str> {
    if name.trim().is_empty()
        || dosage.trim().is_empty()
        || frequency.trim().is_empty()
        || start_date.is_empty()
    {
        return Err("Name, dosage, frequency, and start date are required.");
    }
    Ok(())
}

fn draft_from_fields(name: &str, dosage: &str, frequency: &str, start_date: &str, notes: &str) -> MedicationDraft {
    let notes = notes.trim();
    MedicationDraft {
        medication_name: name.trim().to_owned(),
        dosage: dosage.trim().to_owned(),
        frequency: frequency.trim().to_owned(),
        start_date: start_date.to_owned(),
        notes: if notes.is_empty() { None } else { Some(notes.to_owned()) },
    }
}

#[cfg(feature = "hydrate")]
fn stored_token() -> String {
    crate::util::session_store::load()
        .map(|record| record.access_token)
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn load_medications(
    medications: RwSignal<Vec<Medication>>,
    error: RwSignal<String>,
    loading: RwSignal<bool>,
) {
    leptos::task::spawn_local(async move {
        loading.set(true);
        match crate::net::api::fetch_medications(&stored_token()).await {
            Ok(items) => {
                medications.set(items);
                error.set(String::new());
            }
            Err(message) => error.set(message),
        }
        loading.set(false);
    });
}

/// Medication tracker page.
#[component]
pub fn MedicationsPage() -> impl IntoView {
    let medications = RwSignal::new(Vec::<Medication>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // `Some(id)` while editing an existing medication.
    let editing = RwSignal::new(None::<i64>);
    let show_form = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let dosage = RwSignal::new(String::new());
    let frequency = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let delete_id = RwSignal::new(None::<i64>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        load_medications(medications, error, loading);
    });

    let reset_form = move || {
        editing.set(None);
        show_form.set(false);
        name.set(String::new());
        dosage.set(String::new());
        frequency.set(String::new());
        start_date.set(String::new());
        notes.set(String::new());
    };

    let on_add = move |_| {
        reset_form();
        show_form.set(true);
        error.set(String::new());
    };

    let on_edit = move |med: Medication| {
        editing.set(Some(med.id));
        name.set(med.medication_name);
        dosage.set(med.dosage);
        frequency.set(med.frequency);
        start_date.set(med.start_date);
        notes.set(med.notes.unwrap_or_default());
        show_form.set(true);
        error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let name_value = name.get();
        let dosage_value = dosage.get();
        let frequency_value = frequency.get();
        let start_value = start_date.get();
        if let Err(message) =
            validate_medication(&name_value, &dosage_value, &frequency_value, &start_value)
        {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        let draft =
            draft_from_fields(&name_value, &dosage_value, &frequency_value, &start_value, &notes.get());
        let editing_id = editing.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::api::update_medication(&stored_token(), id, &draft).await,
                None => crate::net::api::create_medication(&stored_token(), &draft).await,
            };
            match result {
                Ok(()) => {
                    success.set(if editing_id.is_some() {
                        "Medication updated successfully!".to_owned()
                    } else {
                        "Medication added successfully!".to_owned()
                    });
                    reset_form();
                    load_medications(medications, error, loading);
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, editing_id);
            busy.set(false);
        }
    };

    let on_delete_dismiss = Callback::new(move |_| delete_id.set(None));

    view! {
        <div class="medications-page">
            <Navbar/>

            <main class="medications-page__main">
                <header class="medications-page__header">
                    <h1>"Medication Tracker"</h1>
                    <button class="btn btn--primary" on:click=on_add>
                        "+ Add medication"
                    </button>
                </header>

                <Show when=move || !error.get().is_empty()>
                    <p class="banner banner--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="banner banner--success">{move || success.get()}</p>
                </Show>

                <Show when=move || show_form.get()>
                    <form class="medications-page__form" on:submit=on_submit>
                        <h2>
                            {move || if editing.get().is_some() { "Edit medication" } else { "New medication" }}
                        </h2>
                        <label>
                            "Medication name"
                            <input
                                type="text"
                                required=true
                                placeholder="Metformin"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Dosage"
                            <input
                                type="text"
                                required=true
                                placeholder="500mg"
                                prop:value=move || dosage.get()
                                on:input=move |ev| dosage.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Frequency"
                            <input
                                type="text"
                                required=true
                                placeholder="Twice daily"
                                prop:value=move || frequency.get()
                                on:input=move |ev| frequency.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Start date"
                            <input
                                type="date"
                                required=true
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
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
                        <div class="medications-page__form-actions">
                            <button class="btn" type="button" on:click=move |_| reset_form()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading medications..."</p> }
                >
                    <Show
                        when=move || !medications.get().is_empty()
                        fallback=move || view! { <p>"No medications tracked yet."</p> }
                    >
                        <ul class="medications-page__items">
                            {move || {
                                medications
                                    .get()
                                    .into_iter()
                                    .map(|med| {
                                        let id = med.id;
                                        let med_for_edit = med.clone();
                                        view! {
                                            <li class="medication-card">
                                                <span class="medication-card__name">
                                                    {med.medication_name.clone()}
                                                </span>
                                                <span class="medication-card__dosage">
                                                    {med.dosage.clone()} " · " {med.frequency.clone()}
                                                </span>
                                                <span class="medication-card__since">
                                                    "Since " {med.start_date.clone()}
                                                </span>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_edit(med_for_edit.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_id.set(Some(id))
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>

                <Show when=move || delete_id.get().is_some()>
                    <DeleteMedicationDialog
                        medication_id=delete_id
                        on_cancel=on_delete_dismiss
                        medications=medications
                        error=error
                        success=success
                        loading=loading
                    />
                </Show>
            </main>
        </div>
    }
}

/// Modal confirm dialog for deleting a medication.
#[component]
fn DeleteMedicationDialog(
    medication_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    medications: RwSignal<Vec<Medication>>,
    error: RwSignal<String>,
    success: RwSignal<String>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    let submit = Callback::new(move |_| {
        let Some(id) = medication_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_medication(&stored_token(), id).await {
                Ok(()) => {
                    success.set("Medication deleted successfully!".to_owned());
                    load_medications(medications, error, loading);
                }
                Err(message) => error.set(message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, medications, error, success, loading);
        }
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Medication"</h2>
                <p class="dialog__danger">"This will remove the medication from your tracker."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
