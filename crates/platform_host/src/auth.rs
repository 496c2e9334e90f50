//! Admin password gate and the session cookie it hands out.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Salt mixed into the admin password hash.
pub const DEFAULT_ADMIN_SALT: &str = "retro-desktop";
/// Hex SHA-256 of `"{salt}:{password}"` for the built-in admin account.
pub const DEFAULT_ADMIN_PASSWORD_HASH: &str =
    "eb7b958784ea48d03bc77f37c5b545f7ebdbedbc016255ac104546141eb09ac4";

/// Opaque session cookie proving a successful admin login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Wraps a raw cookie value, e.g. one read back from a jar.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw cookie value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Salted password hash for the single admin account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    salt: String,
    password_hash: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::from_hash(DEFAULT_ADMIN_SALT, DEFAULT_ADMIN_PASSWORD_HASH)
    }
}

impl AdminCredentials {
    /// Builds credentials from a salt and an already-hashed password (lowercase hex).
    pub fn from_hash(salt: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            password_hash: password_hash.into().to_ascii_lowercase(),
        }
    }

    /// Builds credentials by hashing `password` with `salt`.
    pub fn from_password(salt: impl Into<String>, password: &str) -> Self {
        let salt = salt.into();
        let password_hash = salted_hash(&salt, password);
        Self {
            salt,
            password_hash,
        }
    }

    /// Returns whether `candidate` hashes to the stored password hash.
    pub fn verify(&self, candidate: &str) -> bool {
        constant_time_eq(
            salted_hash(&self.salt, candidate).as_bytes(),
            self.password_hash.as_bytes(),
        )
    }

    /// Returns the session cookie derived from the stored password hash.
    ///
    /// The cookie changes whenever the password changes, which invalidates old sessions.
    pub fn session_cookie(&self) -> SessionCookie {
        SessionCookie(sha256_hex(format!("session:{}", self.password_hash).as_bytes()))
    }

    /// Returns whether `cookie` was issued for the current password.
    pub fn accepts(&self, cookie: &SessionCookie) -> bool {
        constant_time_eq(
            cookie.as_str().as_bytes(),
            self.session_cookie().as_str().as_bytes(),
        )
    }
}

fn salted_hash(salt: &str, password: &str) -> String {
    sha256_hex(format!("{salt}:{password}").as_bytes())
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[derive(Debug, Clone, Default)]
/// Page-local holder for the admin session cookie.
pub struct CookieJar {
    inner: Rc<RefCell<Option<SessionCookie>>>,
}

impl CookieJar {
    /// Returns the stored cookie, if any.
    pub fn get(&self) -> Option<SessionCookie> {
        self.inner.borrow().clone()
    }

    /// Stores `cookie`, replacing any previous one.
    pub fn set(&self, cookie: SessionCookie) {
        *self.inner.borrow_mut() = Some(cookie);
    }

    /// Drops the stored cookie.
    pub fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}

thread_local! {
    static GLOBAL_COOKIE_JAR: CookieJar = CookieJar::default();
}

/// Returns the page-local cookie jar.
pub fn cookie_jar() -> CookieJar {
    GLOBAL_COOKIE_JAR.with(|jar| jar.clone())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_credentials_accept_builtin_password_only() {
        let credentials = AdminCredentials::default();
        assert!(credentials.verify("letmein"));
        assert!(!credentials.verify("LetMeIn"));
        assert!(!credentials.verify(""));
    }

    #[test]
    fn hashing_from_password_matches_published_hash() {
        let credentials = AdminCredentials::from_password(DEFAULT_ADMIN_SALT, "letmein");
        assert_eq!(credentials, AdminCredentials::default());
    }

    #[test]
    fn session_cookie_is_bound_to_password() {
        let first = AdminCredentials::from_password("salt", "one");
        let second = AdminCredentials::from_password("salt", "two");

        assert!(first.accepts(&first.session_cookie()));
        assert!(!first.accepts(&second.session_cookie()));
        assert!(!first.accepts(&SessionCookie::from_raw("forged")));
    }

    #[test]
    fn cookie_jar_clones_share_storage() {
        let jar = CookieJar::default();
        let alias = jar.clone();
        jar.set(SessionCookie::from_raw("abc"));
        assert_eq!(alias.get(), Some(SessionCookie::from_raw("abc")));
        alias.clear();
        assert_eq!(jar.get(), None);
    }
}
