//! Doctor login page: JSON credential submission against the doctor
//! endpoint, producing a doctor-role session.

#[cfg(test)]
#[path = "doctor_login_test.rs"]
mod doctor_login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::DoctorLoginResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::{Role, SessionRecord};
use crate::state::session::SessionState;

/// Session record for a successful doctor login.
#[cfg(any(test, feature = "hydrate"))]
fn doctor_session(resp: DoctorLoginResponse) -> SessionRecord {
    SessionRecord {
        access_token: resp.access_token,
        role: Role::Doctor,
        user_id: Some(resp.doctor_id.to_string()),
        email: Some(resp.email),
        display_name: Some(resp.full_name),
    }
}

/// Doctor login page.
#[component]
pub fn DoctorLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let email_value = email.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::doctor_login(&email_value, &password_value).await {
                Ok(resp) => {
                    let record = doctor_session(resp);
                    crate::util::session_store::save(&record);
                    session.update(|s| s.record = Some(record));
                    busy.set(false);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/doctor/dashboard");
                    }
                }
                Err(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page login-page--doctor">
            <div class="login-card">
                <h1>"Doctor Portal"</h1>
                <p class="login-card__subtitle">"Sign in to manage your appointments and patients"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="login-error">
                        <p class="login-error__detail">{move || error.get()}</p>
                    </div>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email address"
                        <input
                            class="login-input"
                            type="email"
                            required=true
                            autocomplete="email"
                            placeholder="doctor@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required=true
                            autocomplete="current-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-divider"></div>
                <a href="/login" class="login-card__switch">
                    "Patient Login →"
                </a>
            </div>
        </div>
    }
}
