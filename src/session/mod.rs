//! Session store: at most one logged-in identity, persisted to durable
//! storage under a fixed key and rehydrated once when the store opens.
//!
//! The store is the only process-wide mutable state. It is constructed once
//! and handed to the shell and every screen; observers subscribe to changes
//! through a `watch` channel.

pub mod auth;
pub mod storage;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

pub use auth::{Authenticator, MockAuthenticator};
pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::prompt::Notifier;

/// Durable storage key of the persisted session
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: String,
}

/// Access request submitted from the register screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let required = [
            ("Full Name", &self.name),
            ("Email Address", &self.email),
            ("Password", &self.password),
            ("Confirm Password", &self.confirm_password),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField(label));
            }
        }

        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        Ok(())
    }
}

pub struct SessionStore {
    authenticator: Arc<dyn Authenticator>,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    current: watch::Sender<Option<Session>>,
}

impl SessionStore {
    /// Build the store and rehydrate any persisted session
    pub fn open(
        authenticator: Arc<dyn Authenticator>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let restored = rehydrate(storage.as_ref());
        let (current, _) = watch::channel(restored);

        Self {
            authenticator,
            storage,
            notifier,
            current,
        }
    }

    pub fn current_user(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Receiver notified on every login and logout
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }

    pub fn login(&self, email: &str, password: &str) -> bool {
        let Some(session) = self.authenticator.authenticate(email, password) else {
            tracing::warn!("Login rejected for {}", email);
            return false;
        };

        match serde_json::to_string(&session) {
            Ok(json) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &json) {
                    tracing::error!("Failed to persist session for {}: {}", email, e);
                }
            }
            Err(e) => tracing::error!("Failed to encode session for {}: {}", email, e),
        }

        tracing::info!("Logged in as {} ({})", session.email, session.role);
        self.current.send_replace(Some(session));
        true
    }

    pub fn logout(&self) {
        if let Some(session) = self.current.send_replace(None) {
            self.authenticator.revoke(&session);
            tracing::info!("Logged out {}", session.email);
        }

        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::error!("Failed to clear persisted session: {}", e);
        }
    }

    /// Record an access request. Always acknowledged; never provisions a
    /// credential, so the requester still cannot log in.
    pub fn register(&self, details: &RegistrationRequest) -> bool {
        tracing::info!("Registration attempt: {} <{}>", details.name, details.email);
        self.notifier.notify(&format!(
            "Request sent to Admin! Credentials for {} have been mailed for review. You cannot login until approved.",
            details.email
        ));
        true
    }
}

fn rehydrate(storage: &dyn Storage) -> Option<Session> {
    let stored = match storage.get(SESSION_KEY) {
        Ok(stored) => stored?,
        Err(e) => {
            tracing::warn!("Could not read persisted session: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<Session>(&stored) {
        Ok(session) => {
            tracing::debug!("Restored session for {}", session.email);
            Some(session)
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable persisted session: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    fn store_with(storage: Arc<MemoryStorage>) -> (SessionStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let store = SessionStore::open(Arc::new(MockAuthenticator::new()), storage, notifier.clone());
        (store, notifier)
    }

    #[test]
    fn login_with_fixed_credentials_establishes_admin_session() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());

        assert!(store.login("admin@example.com", "admin123"));
        assert_eq!(
            store.current_user(),
            Some(Session {
                email: "admin@example.com".into(),
                role: "admin".into()
            })
        );
        assert_eq!(
            storage.get(SESSION_KEY).unwrap().as_deref(),
            Some(r#"{"email":"admin@example.com","role":"admin"}"#)
        );
    }

    #[test]
    fn failed_login_leaves_session_unchanged() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());

        assert!(!store.login("x@y.com", "wrong"));
        assert_eq!(store.current_user(), None);
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);

        assert!(store.login("admin@example.com", "admin123"));
        let before = store.current_user();
        assert!(!store.login("x@y.com", "wrong"));
        assert_eq!(store.current_user(), before);
    }

    #[test]
    fn session_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());
        assert!(store.login("admin@example.com", "admin123"));
        let before = store.current_user();
        drop(store);

        let (reloaded, _) = store_with(storage);
        assert_eq!(reloaded.current_user(), before);
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store_with(storage.clone());
        store.login("admin@example.com", "admin123");

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_persisted_session_is_ignored() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SESSION_KEY, "{not json").unwrap();
        let (store, _) = store_with(storage);
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn register_acknowledges_but_never_grants_access() {
        let storage = Arc::new(MemoryStorage::new());
        let (store, notifier) = store_with(storage);
        let request = RegistrationRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        };

        assert!(store.register(&request));
        assert!(!store.is_authenticated());
        assert!(!store.login("jane@example.com", "secret"));

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("jane@example.com"));
        assert!(!messages[0].contains("secret"));
    }

    #[test]
    fn subscribers_see_login_and_logout() {
        let (store, _) = store_with(Arc::new(MemoryStorage::new()));
        let mut rx = store.subscribe();

        store.login("admin@example.com", "admin123");
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_some());

        store.logout();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());
    }

    #[test]
    fn registration_requires_matching_passwords() {
        let mut request = RegistrationRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "a".into(),
            confirm_password: "b".into(),
        };
        assert_eq!(request.validate(), Err(RegistrationError::PasswordMismatch));

        request.confirm_password = "a".into();
        assert_eq!(request.validate(), Ok(()));

        request.name.clear();
        assert_eq!(request.validate(), Err(RegistrationError::MissingField("Full Name")));
    }
}
