/// Account store and session tracking.
///
/// Auth here is deliberately a non-cryptographic local-storage stub: the
/// password is never stored or checked beyond being non-empty. The session
/// is a single serialized user record under the `current-user` key.
use chrono::Utc;
use leptos::logging::log;
use leptos::{create_rw_signal, use_context, RwSignal, SignalGet, SignalSet, SignalWith};
use thiserror::Error;
use uuid::Uuid;

use crate::models::user::User;
use crate::storage::{
    read_collection, write_collection, StorageBackend, StorageError, SESSION_KEY, USERS_KEY,
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("an account with this email already exists, please log in instead")]
    EmailTaken,
    #[error("username, email and password are all required")]
    MissingFields,
    #[error("email and password are required")]
    MissingCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The user-account store. Backed by a JSON array of accounts plus the
/// session pointer; all operations are synchronous reads/writes.
pub struct Accounts<S> {
    backend: S,
}

impl<S: StorageBackend> Accounts<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn users(&self) -> Result<Vec<User>, StorageError> {
        read_collection(&self.backend, USERS_KEY)
    }

    // Upsert keyed by email, so re-registering an email never duplicates it.
    fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let mut users = self.users()?;
        match users.iter_mut().find(|u| u.email == user.email) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        write_collection(&self.backend, USERS_KEY, &users)
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users()?.into_iter().find(|u| u.email == email))
    }

    pub fn is_email_registered(&self, email: &str) -> Result<bool, StorageError> {
        Ok(self.find_by_email(email)?.is_some())
    }

    pub fn user_exists(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.users()?.iter().any(|u| u.id == id))
    }

    /// The active session's user record, if any.
    pub fn current_user(&self) -> Result<Option<User>, StorageError> {
        match self.backend.read(SESSION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: SESSION_KEY.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set_current(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|source| StorageError::Encode {
            key: SESSION_KEY.to_string(),
            source,
        })?;
        self.backend.write(SESSION_KEY, &raw)
    }

    /// Creates an account and logs it in. Fails when the email is already
    /// registered or any field is blank.
    pub fn signup(&self, email: &str, password: &str, username: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() || password.is_empty() || username.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }
        if self.is_email_registered(email)? {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            created_at: Utc::now(),
        };
        self.save_user(&user)?;
        self.set_current(&user)?;
        log!("[AUTH] Signed up {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Logs in by email. A known email logs straight in; an unknown one
    /// creates an account on the fly, named after the email's local part.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        if let Some(user) = self.find_by_email(email.trim())? {
            self.set_current(&user)?;
            log!("[AUTH] Logged in {} ({})", user.username, user.id);
            return Ok(user);
        }

        let email = email.trim();
        let username = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: Uuid::new_v4().to_string(),
            username,
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.save_user(&user)?;
        self.set_current(&user)?;
        log!("[AUTH] Created account for {} on first login", user.email);
        Ok(user)
    }

    /// Drops the session pointer. The account itself is untouched.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.backend.remove(SESSION_KEY)?;
        log!("[AUTH] Logged out");
        Ok(())
    }
}

/// Reactive handle on the active session, provided as context by `App` so
/// the header and guarded pages re-render on login/logout.
#[derive(Clone, Copy)]
pub struct Session(RwSignal<Option<User>>);

impl Session {
    pub fn new(user: Option<User>) -> Self {
        Self(create_rw_signal(user))
    }

    pub fn user(&self) -> Option<User> {
        self.0.get()
    }

    pub fn set(&self, user: Option<User>) {
        self.0.set(user);
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.with(|u| u.is_some())
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session context should be provided by App")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn accounts() -> Accounts<MemoryStorage> {
        Accounts::new(MemoryStorage::new())
    }

    #[test]
    fn signup_creates_account_and_session() {
        let accounts = accounts();
        let user = accounts.signup("ada@example.com", "pw", "ada").unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert!(accounts.is_email_registered("ada@example.com").unwrap());
        assert!(accounts.user_exists(&user.id).unwrap());
        assert_eq!(accounts.current_user().unwrap(), Some(user));
    }

    #[test]
    fn signup_rejects_registered_email() {
        let accounts = accounts();
        accounts.signup("ada@example.com", "pw", "ada").unwrap();

        let err = accounts.signup("ada@example.com", "pw2", "other");
        assert!(matches!(err, Err(AuthError::EmailTaken)));
        assert_eq!(accounts.users().unwrap().len(), 1);
    }

    #[test]
    fn signup_rejects_blank_fields() {
        let accounts = accounts();
        assert!(matches!(
            accounts.signup("", "pw", "ada"),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            accounts.signup("ada@example.com", "", "ada"),
            Err(AuthError::MissingFields)
        ));
        assert!(accounts.users().unwrap().is_empty());
    }

    #[test]
    fn login_finds_existing_account_by_email() {
        let accounts = accounts();
        let created = accounts.signup("ada@example.com", "pw", "ada").unwrap();
        accounts.logout().unwrap();
        assert_eq!(accounts.current_user().unwrap(), None);

        let logged_in = accounts.login("ada@example.com", "pw").unwrap();
        assert_eq!(logged_in.id, created.id);
        assert_eq!(accounts.current_user().unwrap(), Some(logged_in));
    }

    #[test]
    fn login_creates_account_for_unknown_email() {
        let accounts = accounts();
        let user = accounts.login("grace@example.com", "pw").unwrap();

        assert_eq!(user.username, "grace");
        assert!(accounts.is_email_registered("grace@example.com").unwrap());
    }

    #[test]
    fn login_requires_credentials() {
        let accounts = accounts();
        assert!(matches!(
            accounts.login("", "pw"),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            accounts.login("ada@example.com", ""),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn logout_clears_only_the_session() {
        let accounts = accounts();
        accounts.signup("ada@example.com", "pw", "ada").unwrap();
        accounts.logout().unwrap();

        assert_eq!(accounts.current_user().unwrap(), None);
        assert_eq!(accounts.users().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_session_record_is_an_error() {
        let storage = MemoryStorage::new();
        storage.write(SESSION_KEY, "{broken").unwrap();

        let accounts = Accounts::new(storage);
        assert!(matches!(
            accounts.current_user(),
            Err(StorageError::Corrupt { .. })
        ));
    }
}
