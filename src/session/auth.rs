use super::Session;

pub const ADMIN_ROLE: &str = "admin";

/// Pluggable credential check behind [`super::SessionStore::login`].
///
/// A token-based, server-verified implementation can replace the mock
/// without changing any caller.
pub trait Authenticator: Send + Sync {
    /// The session to establish for these credentials, if they are valid
    fn authenticate(&self, email: &str, password: &str) -> Option<Session>;

    /// Called when a session ends
    fn revoke(&self, _session: &Session) {}
}

/// Hard-coded single admin account. Placeholder for a real backend.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    email: String,
    password: String,
}

impl MockAuthenticator {
    pub const DEFAULT_EMAIL: &'static str = "admin@example.com";
    pub const DEFAULT_PASSWORD: &'static str = "admin123";

    pub fn new() -> Self {
        Self {
            email: Self::DEFAULT_EMAIL.to_string(),
            password: Self::DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Hint shown after a failed login
    pub fn hint(&self) -> String {
        format!("Invalid credentials. Try {} / {}", self.email, self.password)
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> Option<Session> {
        if email == self.email && password == self.password {
            Some(Session {
                email: email.to_string(),
                role: ADMIN_ROLE.to_string(),
            })
        } else {
            None
        }
    }
}
