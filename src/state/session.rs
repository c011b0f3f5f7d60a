//! Session model for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The persisted form of a
//! [`SessionRecord`] lives in `util::session_store`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Role attached to a session when it was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// Ordinary patient account, created by the standard login path.
    #[default]
    User,
    /// Doctor account, created by the doctor login page.
    Doctor,
    /// Admin account, created by the privileged login short-circuit.
    Admin,
}

impl Role {
    /// Storage representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored role string. Unknown values are rejected so callers
    /// can decide on a fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "doctor" => Some(Role::Doctor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Client-persisted proof of authentication.
///
/// No expiry or signature validation happens on the client; a record is
/// trusted for as long as it sits in storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    /// Bearer token returned by the login endpoint.
    pub access_token: String,
    /// Role the session was created with.
    pub role: Role,
    /// Server-side account identifier, when the login path supplies one.
    pub user_id: Option<String>,
    /// Account email, when supplied.
    pub email: Option<String>,
    /// Display name, when supplied.
    pub display_name: Option<String>,
}

impl SessionRecord {
    /// A session counts as present iff its token is a non-empty string.
    pub fn is_present(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Session state provided via context to all routes.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub record: Option<SessionRecord>,
    pub loading: bool,
}
