//! REST API helpers for communicating with the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<T, String>` where the error is already a
//! user-facing message: server rejections surface the response `detail`
//! when one is present, transport failures collapse to a generic retry
//! message. Nothing here panics or propagates a raw transport error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminLoginResponse, AdminStats, Appointment, AppointmentDraft, DoctorLoginResponse,
    DoctorSummary, DoctorsList, LoginResponse, Medication, MedicationDraft, PatientSummary,
    SignupRequest, SymptomCheckRequest, SymptomCheckResponse,
};
#[cfg(feature = "hydrate")]
use super::types::ErrorBody;

/// Base URL of the backend service.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "http://localhost:8000";

/// Message used whenever the transport layer itself fails.
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Message used when an HTTP-success body cannot be used as a session.
pub const INVALID_RESPONSE_MESSAGE: &str =
    "Login failed: Invalid response from server. Please try again or contact support.";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// OAuth2 password-grant form body for the standard login endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> String {
    serde_urlencoded::to_string(&[("username", email), ("password", password)])
        .unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn medication_endpoint(id: i64) -> String {
    format!("/api/medications/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn appointment_endpoint(id: i64) -> String {
    format!("/api/appointments/{id}")
}

/// Extract the server's `detail` message from a rejection, if present.
#[cfg(feature = "hydrate")]
async fn rejection_message(resp: gloo_net::http::Response, fallback: &str) -> String {
    resp.json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| fallback.to_owned())
}

/// Standard login via form-encoded `POST /auth/login`.
///
/// # Errors
///
/// Returns the server's `detail` (fallback: "Invalid credentials") on
/// rejection, or a generic message on transport failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(email, password))
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp, "Invalid credentials").await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| INVALID_RESPONSE_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Privileged login via JSON `POST /admin/login`.
///
/// # Errors
///
/// Returns an error on any rejection or transport failure; the caller is
/// expected to fall through to the standard path rather than surface it.
pub async fn admin_login(email: &str, password: &str) -> Result<AdminLoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&api_url("/admin/login"))
            .json(&payload)
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp, "Invalid admin credentials").await);
        }
        resp.json::<AdminLoginResponse>()
            .await
            .map_err(|_| INVALID_RESPONSE_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Doctor login via JSON `POST /api/doctors/login`.
pub async fn doctor_login(email: &str, password: &str) -> Result<DoctorLoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&api_url("/api/doctors/login"))
            .json(&payload)
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp, "Login failed. Please try again.").await);
        }
        resp.json::<DoctorLoginResponse>()
            .await
            .map_err(|_| INVALID_RESPONSE_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create a patient account via `POST /auth/signup`.
pub async fn signup(request: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/auth/signup"))
            .json(request)
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp, "Signup failed. Please try again.").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Analyze symptoms via `POST /api/symptoms/check`.
pub async fn check_symptoms(
    request: &SymptomCheckRequest,
) -> Result<SymptomCheckResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/api/symptoms/check"))
            .json(request)
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err("Failed to analyze symptoms".to_owned());
        }
        resp.json::<SymptomCheckResponse>()
            .await
            .map_err(|_| "Failed to analyze symptoms".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's medications from `GET /api/medications`.
pub async fn fetch_medications(token: &str) -> Result<Vec<Medication>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/api/medications"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to load medications. Please try again.".to_owned())?;
        if !resp.ok() {
            return Err("Failed to load medications. Please try again.".to_owned());
        }
        resp.json::<Vec<Medication>>()
            .await
            .map_err(|_| "Failed to load medications. Please try again.".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Create a medication via `POST /api/medications`.
pub async fn create_medication(token: &str, draft: &MedicationDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/api/medications"))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|_| "Failed to add medication.".to_owned())?
            .send()
            .await
            .map_err(|_| "Failed to add medication.".to_owned())?;
        if !resp.ok() {
            return Err("Failed to add medication.".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err("not available on server".to_owned())
    }
}

/// Update a medication via `PUT /api/medications/{id}`.
pub async fn update_medication(
    token: &str,
    id: i64,
    draft: &MedicationDraft,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&api_url(&medication_endpoint(id)))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|_| "Failed to update medication.".to_owned())?
            .send()
            .await
            .map_err(|_| "Failed to update medication.".to_owned())?;
        if !resp.ok() {
            return Err("Failed to update medication.".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, draft);
        Err("not available on server".to_owned())
    }
}

/// Delete a medication via `DELETE /api/medications/{id}`.
pub async fn delete_medication(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&medication_endpoint(id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to delete medication.".to_owned())?;
        if !resp.ok() {
            return Err("Failed to delete medication.".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the bookable doctors from `GET /api/appointments/doctors/list`.
pub async fn fetch_doctors(token: &str) -> Result<DoctorsList, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/api/appointments/doctors/list"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to fetch doctors".to_owned())?;
        if !resp.ok() {
            return Err("Failed to fetch doctors".to_owned());
        }
        resp.json::<DoctorsList>()
            .await
            .map_err(|_| "Failed to fetch doctors".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's appointments from `GET /api/appointments`.
pub async fn fetch_appointments(token: &str) -> Result<Vec<Appointment>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/api/appointments"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to fetch appointments".to_owned())?;
        if !resp.ok() {
            return Err("Failed to fetch appointments".to_owned());
        }
        resp.json::<Vec<Appointment>>()
            .await
            .map_err(|_| "Failed to fetch appointments".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Book an appointment via `POST /api/appointments`.
///
/// # Errors
///
/// Returns the server's `detail` when the booking is rejected (slot taken,
/// past date), a generic message otherwise.
pub async fn book_appointment(token: &str, draft: &AppointmentDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/api/appointments"))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp, "Failed to book appointment").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err("not available on server".to_owned())
    }
}

/// Cancel an appointment via `DELETE /api/appointments/{id}`.
pub async fn cancel_appointment(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&appointment_endpoint(id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to cancel appointment".to_owned())?;
        if !resp.ok() {
            return Err("Failed to cancel appointment".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate counters from `GET /admin/stats`.
pub async fn fetch_admin_stats(token: &str) -> Result<AdminStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/admin/stats"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to load admin stats".to_owned())?;
        if !resp.ok() {
            return Err("Failed to load admin stats".to_owned());
        }
        resp.json::<AdminStats>()
            .await
            .map_err(|_| "Failed to load admin stats".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch registered patients from `GET /admin/users`.
pub async fn fetch_admin_patients(token: &str) -> Result<Vec<PatientSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/admin/users"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to load patients".to_owned())?;
        if !resp.ok() {
            return Err("Failed to load patients".to_owned());
        }
        resp.json::<Vec<PatientSummary>>()
            .await
            .map_err(|_| "Failed to load patients".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch registered doctors from `GET /admin/doctors`.
pub async fn fetch_admin_doctors(token: &str) -> Result<Vec<DoctorSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/admin/doctors"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| "Failed to load doctors".to_owned())?;
        if !resp.ok() {
            return Err("Failed to load doctors".to_owned());
        }
        resp.json::<Vec<DoctorSummary>>()
            .await
            .map_err(|_| "Failed to load doctors".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
