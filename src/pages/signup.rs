//! Patient signup page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::SignupRequest;

/// Patient registration form. On success the browser is sent to the login
/// page; the account is not logged in automatically.
#[component]
pub fn SignupPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
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
        let name_value = full_name.get().trim().to_owned();
        let email_value = email.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = SignupRequest {
                email: email_value,
                full_name: if name_value.is_empty() { None } else { Some(name_value) },
                password: password_value,
            };
            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
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
            let _ = (name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__brand">"MediCareAI"</a>
                <h1>"Create your account"</h1>

                <Show when=move || !error.get().is_empty()>
                    <div class="login-error">
                        <p class="login-error__detail">{move || error.get()}</p>
                    </div>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Full name"
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="name"
                            placeholder="Pat Doe"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Email address"
                        <input
                            class="login-input"
                            type="email"
                            required=true
                            autocomplete="email"
                            placeholder="you@example.com"
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
                            autocomplete="new-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-divider"></div>
                <a href="/login" class="login-card__switch">
                    "Already have an account? Sign in"
                </a>
            </div>
        </div>
    }
}
