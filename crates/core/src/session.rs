//! Session state and its durable token storage

use crate::config::SessionConfig;
use std::cell::RefCell;
use std::rc::Rc;

/// Durable key/value storage for the session token
pub trait TokenStore {
    /// Read the persisted token, if any
    fn load(&self) -> Option<String>;

    /// Persist the token, replacing any previous one
    fn save(&self, token: &str);

    /// Remove the persisted token. Removing a missing token is a no-op.
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory token store.
///
/// Clones share the same slot, so a test can hand one clone to a
/// [`SessionStore`] and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    /// The currently persisted token
    pub fn stored(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Who is logged in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub is_loading: bool,
}

/// Session transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Pick up a token persisted by an earlier visit
    Restore,
    Login(String),
    Logout,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            is_loading: true, // Until storage has been checked
        }
    }
}

impl Session {
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Apply a transition, writing through to `store` before the new state
    /// is returned.
    #[must_use]
    pub fn apply<S: TokenStore>(&self, action: SessionAction, store: &S) -> Self {
        match action {
            SessionAction::Restore => {
                let token = store.load().filter(|token| !token.is_empty());
                tracing::debug!(
                    restored = token.is_some(),
                    key = SessionConfig::TOKEN_STORAGE_KEY,
                    "Session restored from storage"
                );
                Self {
                    token,
                    is_loading: false,
                }
            }
            SessionAction::Login(token) => {
                store.save(&token);
                tracing::debug!("Session token stored");
                Self {
                    token: Some(token),
                    is_loading: false,
                }
            }
            SessionAction::Logout => {
                store.clear();
                tracing::debug!("Session token cleared");
                Self {
                    token: None,
                    is_loading: false,
                }
            }
        }
    }
}

/// Owns a [`Session`] together with the storage backing it
#[derive(Debug)]
pub struct SessionStore<S: TokenStore> {
    store: S,
    session: Session,
    initialized: bool,
}

impl<S: TokenStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::default(),
            initialized: false,
        }
    }

    /// Restore the persisted token. Only the first call reads storage.
    pub fn initialize(&mut self) -> &Session {
        if !self.initialized {
            self.initialized = true;
            self.session = self.session.apply(SessionAction::Restore, &self.store);
        }
        &self.session
    }

    pub fn login(&mut self, token: impl Into<String>) {
        self.session = self
            .session
            .apply(SessionAction::Login(token.into()), &self.store);
    }

    pub fn logout(&mut self) {
        self.session = self.session.apply(SessionAction::Logout, &self.store);
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub const fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_loading_and_anonymous() {
        let store = SessionStore::new(MemoryTokenStore::new());
        assert!(store.is_loading());
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_initialize_without_token() {
        let mut store = SessionStore::new(MemoryTokenStore::new());
        let session = store.initialize();
        assert!(!session.is_loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_initialize_restores_persisted_token() {
        let mut store = SessionStore::new(MemoryTokenStore::with_token("xyz"));
        store.initialize();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("xyz"));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_initialize_ignores_empty_token() {
        let mut store = SessionStore::new(MemoryTokenStore::with_token(""));
        store.initialize();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_initialize_runs_once() {
        let storage = MemoryTokenStore::new();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();

        storage.save("written-later");
        store.initialize();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_logout_round_trip() {
        let storage = MemoryTokenStore::new();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();

        store.login("abc");
        assert!(store.is_authenticated());
        assert_eq!(storage.stored().as_deref(), Some("abc"));
        assert_eq!(store.token(), storage.stored().as_deref());

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(storage.stored(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MemoryTokenStore::new();
        let mut store = SessionStore::new(storage.clone());
        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(storage.stored(), None);
    }

    #[test]
    fn test_last_login_wins() {
        let storage = MemoryTokenStore::new();
        let mut store = SessionStore::new(storage.clone());
        store.login("first");
        store.login("second");
        assert_eq!(store.token(), Some("second"));
        assert_eq!(storage.stored().as_deref(), Some("second"));
    }

    #[test]
    fn test_apply_is_pure_over_previous_state() {
        let storage = MemoryTokenStore::new();
        let before = Session::default();
        let after = before.apply(SessionAction::Login("tok".into()), &storage);

        assert_eq!(before, Session::default());
        assert_eq!(after.token(), Some("tok"));
        assert!(!after.is_loading);
    }
}
