//! Patient login page: the privileged admin short-circuit plus the
//! standard OAuth2 password form flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place a session record is created for patients and
//! admins. Empty fields never reach the handler (form `required`
//! semantics); every other failure mode collapses into [`LoginOutcome`] so
//! the exit paths stay enumerable: privileged success, standard success,
//! or a single user-facing failure message. The busy flag is released on
//! every path, and persisted state is only touched on success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::INVALID_RESPONSE_MESSAGE;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{AdminLoginResponse, LoginResponse};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::{Role, SessionRecord};
use crate::state::session::SessionState;

// The privileged pair ships in client code, mirroring the deployed portal.
// Role determination really belongs to the server; see DESIGN.md.
#[cfg(any(test, feature = "hydrate"))]
const ADMIN_EMAIL: &str = "admin@gmail.com";
#[cfg(any(test, feature = "hydrate"))]
const ADMIN_PASSWORD: &str = "admin";

/// Where each completed login flow ends up.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
enum LoginOutcome {
    /// Privileged path succeeded; the session carries the admin role.
    Admin(SessionRecord),
    /// Standard path succeeded; the session carries the user role.
    Standard(SessionRecord),
    /// Rejection, malformed success response, or transport failure.
    Failed(String),
}

#[cfg(any(test, feature = "hydrate"))]
impl LoginOutcome {
    /// Navigation target of a successful flow.
    fn redirect_target(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::Admin(_) => Some("/admin/dashboard"),
            LoginOutcome::Standard(_) => Some("/"),
            LoginOutcome::Failed(_) => None,
        }
    }
}

/// Does the input match the fixed privileged pair?
#[cfg(any(test, feature = "hydrate"))]
fn is_admin_credentials(email: &str, password: &str) -> bool {
    email == ADMIN_EMAIL && password == ADMIN_PASSWORD
}

/// Session record for a successful privileged login. The admin endpoint
/// returns no identity fields beyond the token.
#[cfg(any(test, feature = "hydrate"))]
fn admin_session(resp: AdminLoginResponse) -> SessionRecord {
    SessionRecord {
        access_token: resp.access_token,
        role: Role::Admin,
        user_id: None,
        email: None,
        display_name: None,
    }
}

/// Session record for a successful standard login.
///
/// Transport success does not imply semantic success: a body without a
/// `user_id` is rejected here and never persisted.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_login(resp: LoginResponse) -> Result<SessionRecord, String> {
    let Some(user_id) = resp.user_id else {
        return Err(INVALID_RESPONSE_MESSAGE.to_owned());
    };
    Ok(SessionRecord {
        access_token: resp.access_token,
        role: Role::User,
        user_id: Some(user_id.to_string()),
        email: resp.email,
        display_name: resp.full_name,
    })
}

/// Run the whole credential submission flow to a single outcome.
#[cfg(feature = "hydrate")]
async fn run_login(email: &str, password: &str) -> LoginOutcome {
    use crate::net::api;

    if is_admin_credentials(email, password) {
        // A rejected or unreachable privileged path falls through to the
        // standard path instead of failing the whole flow.
        if let Ok(resp) = api::admin_login(email, password).await {
            return LoginOutcome::Admin(admin_session(resp));
        }
    }

    match api::login(email, password).await {
        Ok(resp) => match session_from_login(resp) {
            Ok(record) => LoginOutcome::Standard(record),
            Err(message) => LoginOutcome::Failed(message),
        },
        Err(message) => LoginOutcome::Failed(message),
    }
}

/// Patient login page.
#[component]
pub fn LoginPage() -> impl IntoView {
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
            let outcome = run_login(&email_value, &password_value).await;
            match &outcome {
                LoginOutcome::Admin(record) | LoginOutcome::Standard(record) => {
                    crate::util::session_store::save(record);
                    session.update(|s| s.record = Some(record.clone()));
                }
                LoginOutcome::Failed(message) => error.set(message.clone()),
            }
            busy.set(false);
            if let Some(target) = outcome.redirect_target() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(target);
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
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__brand">"MediCareAI"</a>
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to access your health dashboard"</p>

                <form class="login-form" on:submit=on_submit>
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
                            autocomplete="current-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <div class="login-error">
                            <p class="login-error__title">"Login Failed"</p>
                            <p class="login-error__detail">{move || error.get()}</p>
                        </div>
                    </Show>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-divider"></div>
                <p class="login-card__subtitle">"New to MediCareAI?"</p>
                <a href="/signup" class="login-button login-button--secondary">
                    "Create new account"
                </a>
                <a href="/doctor/login" class="login-card__switch">
                    "Doctor Login →"
                </a>

                <p class="login-card__hint">
                    "Admin? Use " <code>"admin@gmail.com"</code> " / " <code>"admin"</code>
                </p>
            </div>
        </div>
    }
}
