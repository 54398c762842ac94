mod common;

use std::sync::Arc;

use anyhow::Result;
use portfolio_rust::session::{FileStorage, MockAuthenticator, RegistrationRequest, SessionStore, Storage, SESSION_KEY};

fn open_store(dir: &std::path::Path, notes: Arc<common::Notifications>) -> SessionStore {
    SessionStore::open(
        Arc::new(MockAuthenticator::new()),
        Arc::new(FileStorage::new(dir)),
        notes,
    )
}

#[test]
fn login_persists_exactly_email_and_role() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = open_store(dir.path(), Arc::default());

    assert!(store.login("admin@example.com", "admin123"));

    let raw = std::fs::read_to_string(dir.path().join("user.json"))?;
    let stored: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(stored, serde_json::json!({ "email": "admin@example.com", "role": "admin" }));
    Ok(())
}

#[test]
fn session_is_rehydrated_by_the_next_process() -> Result<()> {
    let dir = tempfile::tempdir()?;
    {
        let store = open_store(dir.path(), Arc::default());
        assert!(store.login("admin@example.com", "admin123"));
    }

    let reopened = open_store(dir.path(), Arc::default());
    let user = reopened.current_user().expect("session should be restored");
    assert_eq!(user.email, "admin@example.com");
    assert_eq!(user.role, "admin");
    Ok(())
}

#[test]
fn logout_removes_the_stored_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = open_store(dir.path(), Arc::default());
    assert!(store.login("admin@example.com", "admin123"));

    store.logout();

    assert!(!dir.path().join("user.json").exists());
    assert!(!open_store(dir.path(), Arc::default()).is_authenticated());
    Ok(())
}

#[test]
fn wrong_password_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = open_store(dir.path(), Arc::default());

    assert!(!store.login("admin@example.com", "wrong"));
    assert!(store.current_user().is_none());
    assert_eq!(FileStorage::new(dir.path()).get(SESSION_KEY)?, None);
    Ok(())
}

#[test]
fn corrupt_session_file_counts_as_logged_out() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("user.json"), "{not json")?;

    let store = open_store(dir.path(), Arc::default());
    assert!(!store.is_authenticated());
    Ok(())
}

#[test]
fn registered_credentials_still_cannot_log_in() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let notes = Arc::new(common::Notifications::default());
    let store = open_store(dir.path(), notes.clone());

    let request = RegistrationRequest {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
    };
    assert!(request.validate().is_ok());
    assert!(store.register(&request));

    assert!(!store.login("jo@example.com", "secret1"));
    assert_eq!(
        notes.messages(),
        vec!["Request sent to Admin! Credentials for jo@example.com have been mailed for review. You cannot login until approved."]
    );
    Ok(())
}
