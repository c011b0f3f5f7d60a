//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! Field sets mirror the backend's response schemas so serde can decode
//! responses without lossy adapters. Fields the backend may omit are
//! `Option` with serde defaults. In particular `LoginResponse::user_id`
//! may be absent on an otherwise successful login, and that absence must
//! be representable so the login flow can reject the response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success body of the standard `POST /auth/login` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Account identifier. Required for a usable session, but decoded as
    /// optional: transport success does not imply semantic success.
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Success body of the privileged `POST /admin/login` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Success body of `POST /api/doctors/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorLoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub doctor_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

/// Error body shape shared by every endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Request body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub password: String,
}

/// Request body for `POST /api/symptoms/check`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomCheckRequest {
    pub symptoms: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
}

/// Analysis returned by the symptom checker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomCheckResponse {
    pub possible_conditions: Vec<String>,
    pub recommendations: String,
    /// `"low"`, `"medium"`, or `"high"`; anything else renders as medium.
    pub severity: String,
}

/// A tracked medication as returned by `GET /api/medications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub user_id: i64,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    /// ISO 8601 date string; displayed as-is.
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// Create/update payload for a medication.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationDraft {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A booked appointment as returned by `GET /api/appointments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub doctor_name: String,
    pub specialty: String,
    /// ISO 8601 timestamp; displayed as-is.
    pub appointment_date: String,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Booking payload for `POST /api/appointments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub doctor_name: String,
    pub specialty: String,
    pub appointment_date: String,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One selectable doctor in the booking form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorChoice {
    pub name: String,
    pub specialty: String,
}

/// Response of `GET /api/appointments/doctors/list`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorsList {
    #[serde(default)]
    pub doctors: Vec<DoctorChoice>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Aggregate counters for the admin overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_patients: i64,
    pub total_doctors: i64,
    pub total_appointments: i64,
    pub total_revenue: f64,
    pub pending_doctors: i64,
    pub active_patients: i64,
}

/// One patient row in the admin tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    pub created_at: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// One doctor row in the admin tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub specialization: String,
    pub experience_years: i64,
    pub is_verified: bool,
    pub rating: f64,
    pub consultation_fee: f64,
    pub created_at: String,
}

fn default_true() -> bool {
    true
}
