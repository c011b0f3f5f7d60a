//! Persisted session storage over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! All reads and writes of the persisted session go through this module so
//! pages never touch storage keys directly. The route guard calls [`load`]
//! on every protected navigation; the login pages call [`save`]; logout
//! calls [`clear`]. Values are plain strings, never encrypted or signed.
//!
//! The key set is shared with the previous React client so existing
//! browser sessions keep working.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::session::{Role, SessionRecord};

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "user_role";
const USER_ID_KEY: &str = "userId";
const EMAIL_KEY: &str = "userEmail";
const NAME_KEY: &str = "userName";

#[cfg(any(test, feature = "hydrate"))]
const ALL_KEYS: [&str; 5] = [TOKEN_KEY, ROLE_KEY, USER_ID_KEY, EMAIL_KEY, NAME_KEY];

/// Flatten a record into storage key/value pairs.
///
/// Missing identity fields are written as empty strings rather than
/// omitted, the same shape the previous client left in storage.
pub fn record_to_pairs(record: &SessionRecord) -> Vec<(&'static str, String)> {
    vec![
        (TOKEN_KEY, record.access_token.clone()),
        (ROLE_KEY, record.role.as_str().to_owned()),
        (USER_ID_KEY, record.user_id.clone().unwrap_or_default()),
        (EMAIL_KEY, record.email.clone().unwrap_or_default()),
        (NAME_KEY, record.display_name.clone().unwrap_or_default()),
    ]
}

/// Rebuild a record from a key lookup.
///
/// Returns `None` unless a non-empty token is stored, which is the
/// presence invariant for the whole session model. Empty identity fields
/// collapse back to `None`; an unknown role falls back to `user`.
pub fn record_from_pairs(get: impl Fn(&str) -> Option<String>) -> Option<SessionRecord> {
    let access_token = get(TOKEN_KEY)?;
    if access_token.is_empty() {
        return None;
    }
    let role = get(ROLE_KEY)
        .as_deref()
        .and_then(Role::parse)
        .unwrap_or_default();
    let non_empty = |key: &str| get(key).filter(|value| !value.is_empty());
    Some(SessionRecord {
        access_token,
        role,
        user_id: non_empty(USER_ID_KEY),
        email: non_empty(EMAIL_KEY),
        display_name: non_empty(NAME_KEY),
    })
}

/// Read the persisted session, if any. Always `None` on the server.
pub fn load() -> Option<SessionRecord> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        record_from_pairs(|key| storage.get_item(key).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session record, replacing whatever was stored before.
pub fn save(record: &SessionRecord) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        for (key, value) in record_to_pairs(record) {
            let _ = storage.set_item(key, &value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
    }
}

/// Remove every session key. Used by logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        for key in ALL_KEYS {
            let _ = storage.remove_item(key);
        }
    }
}
