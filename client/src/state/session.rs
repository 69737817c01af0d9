//! Local identity: who the user is and whether they have joined the room.
//!
//! DESIGN
//! ======
//! Login state is a single tagged value so "logged in without a name" cannot
//! be represented. Persistence goes through the [`SessionStore`] trait; the
//! browser build plugs in `localStorage` and tests use [`MemoryStore`].
//! There is no logout: a session ends only when storage is cleared.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::transport::ChatConnection;
use crate::net::types::{JoinNotice, OutboundEvent};

pub const USERNAME_KEY: &str = "chat_username";
pub const AVATAR_KEY: &str = "chat_avatar";

/// Current identity of the local user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        username: String,
        avatar: Option<String>,
    },
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { username, .. } => Some(username),
            Self::LoggedOut => None,
        }
    }

    pub fn avatar(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { avatar, .. } => avatar.as_deref(),
            Self::LoggedOut => None,
        }
    }

    /// Whether `name` is the local user.
    pub fn is_self(&self, name: &str) -> bool {
        self.username() == Some(name)
    }
}

/// Durable string key/value storage for the persisted identity.
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory store. Clones share the same entries, which lets tests
/// simulate a page reload by restoring from a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Rebuild the session from storage without contacting the server.
pub fn restore_session(store: &impl SessionStore) -> Session {
    let Some(username) = store
        .load(USERNAME_KEY)
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
    else {
        return Session::LoggedOut;
    };
    let avatar = store.load(AVATAR_KEY).filter(|a| !a.is_empty());
    Session::LoggedIn { username, avatar }
}

/// Normalize a login name; `None` when nothing but whitespace was entered.
pub fn validate_username(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Join the room as `username`.
///
/// Blank names are a silent no-op (`None`). Otherwise both identity fields
/// are persisted, `userJoined` is emitted and the new session is returned.
pub fn login(
    store: &impl SessionStore,
    conn: &ChatConnection,
    username: &str,
    avatar: Option<String>,
) -> Option<Session> {
    let username = validate_username(username)?;
    let avatar = avatar.filter(|a| !a.is_empty());

    store.save(USERNAME_KEY, &username);
    store.save(AVATAR_KEY, avatar.as_deref().unwrap_or_default());

    conn.emit(&OutboundEvent::UserJoined(JoinNotice { username: username.clone(), avatar: avatar.clone() }));

    Some(Session::LoggedIn { username, avatar })
}
