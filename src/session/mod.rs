pub mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::error::{RentifyError, Result};
use crate::filters::Viewer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

pub const USER_KEY: &str = "rentify-user";
pub const ROLE_KEY: &str = "rentify-role";
pub const LANGUAGE_KEY: &str = "rentify-language";

/// Owner record a signed-in owner acts as. The session only carries a name
/// and a role, so every owner login maps onto this seed owner.
pub const DEMO_OWNER_ID: &str = "owner-1";

const ADMIN_EMAIL: &str = "admin@rentify.com";
const ADMIN_PASSWORD: &str = "adminpassword";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Renter,
    Owner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Renter => "renter",
            Role::Owner => "owner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RentifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "renter" => Ok(Role::Renter),
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            other => Err(RentifyError::Storage(format!("unknown role '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

/// Who is signed in, if anyone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub role: Option<Role>,
    pub language: Language,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn viewer(&self) -> Viewer {
        match self.role {
            None => Viewer::Guest,
            Some(Role::Renter) => Viewer::Renter,
            Some(Role::Admin) => Viewer::Admin,
            Some(Role::Owner) => Viewer::Owner {
                owner_id: DEMO_OWNER_ID.to_string(),
            },
        }
    }
}

/// Placeholder credential check: a fixed admin pair, otherwise an email
/// prefix that matches the requested login tab. Not a security boundary.
pub fn authenticate(email: &str, password: &str, tab: Role) -> Option<(&'static str, Role)> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        return Some(("Admin", Role::Admin));
    }
    match tab {
        Role::Renter if email.starts_with("renter") => Some(("Renter", Role::Renter)),
        Role::Owner if email.starts_with("owner") => Some(("Property Owner", Role::Owner)),
        _ => None,
    }
}

/// Session state mirrored into a key-value storage backend
pub struct SessionManager<S: SessionStorage> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionManager<S> {
    /// Read the stored session once. Unreadable entries are cleared rather
    /// than surfaced.
    pub fn restore(mut storage: S) -> Self {
        let mut session = Session::default();

        match Self::read_user(&storage) {
            Ok(Some((user, role))) => {
                info!("Restored session for {} ({})", user.name, role);
                session.user = Some(user);
                session.role = Some(role);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Could not parse stored session, clearing it: {}", e);
                for key in [USER_KEY, ROLE_KEY] {
                    if let Err(e) = storage.remove(key) {
                        warn!("Could not clear stored {}: {}", key, e);
                    }
                }
            }
        }

        if let Ok(Some(raw)) = storage.get(LANGUAGE_KEY) {
            session.language = Language::parse(&raw).unwrap_or_default();
        }

        Self { storage, session }
    }

    fn read_user(storage: &S) -> Result<Option<(User, Role)>> {
        let user = storage.get(USER_KEY)?;
        let role = storage.get(ROLE_KEY)?;
        match (user, role) {
            (Some(user), Some(role)) => {
                let user: User = serde_json::from_str(&user)
                    .map_err(|e| RentifyError::Storage(e.to_string()))?;
                Ok(Some((user, role.parse()?)))
            }
            _ => Ok(None),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn login(&mut self, email: &str, password: &str, tab: Role) -> Result<&Session> {
        let (name, role) = authenticate(email.trim(), password, tab).ok_or_else(|| {
            RentifyError::validation("email", "Invalid credentials for the selected account type")
        })?;
        self.store_user(name, role)?;
        Ok(&self.session)
    }

    pub fn signup(&mut self, name: &str, email: &str, password: &str, role: Role) -> Result<&Session> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(RentifyError::MissingPrecondition(
                "Please fill in your name, email and password.".to_string(),
            ));
        }
        if role == Role::Admin {
            return Err(RentifyError::validation("role", "admin accounts cannot be created"));
        }
        self.store_user(name.trim(), role)?;
        Ok(&self.session)
    }

    fn store_user(&mut self, name: &str, role: Role) -> Result<()> {
        let user = User {
            name: name.to_string(),
        };
        let json = serde_json::to_string(&user).map_err(|e| RentifyError::Storage(e.to_string()))?;
        self.storage.set(USER_KEY, &json)?;
        self.storage.set(ROLE_KEY, role.as_str())?;

        info!("Signed in as {} ({})", user.name, role);
        self.session.user = Some(user);
        self.session.role = Some(role);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.user = None;
        self.session.role = None;
        self.storage.remove(USER_KEY)?;
        self.storage.remove(ROLE_KEY)?;
        info!("Signed out");
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.storage.set(LANGUAGE_KEY, language.as_str())?;
        self.session.language = language;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_must_match_tab() {
        assert_eq!(authenticate("renter1@x.com", "pw", Role::Renter), Some(("Renter", Role::Renter)));
        assert_eq!(authenticate("renter1@x.com", "pw", Role::Owner), None);
        assert_eq!(
            authenticate("owner.jane@x.com", "pw", Role::Owner),
            Some(("Property Owner", Role::Owner))
        );
        assert_eq!(authenticate("someone@x.com", "pw", Role::Renter), None);
    }

    #[test]
    fn admin_pair_wins_on_any_tab() {
        assert_eq!(
            authenticate("admin@rentify.com", "adminpassword", Role::Renter),
            Some(("Admin", Role::Admin))
        );
        assert_eq!(authenticate("admin@rentify.com", "wrong", Role::Renter), None);
    }

    #[test]
    fn login_survives_restore_and_logout_clears() {
        let mut manager = SessionManager::restore(MemoryStorage::default());
        assert!(!manager.session().is_authenticated());

        manager.login("owner@rentify.com", "x", Role::Owner).unwrap();
        assert_eq!(manager.storage().get(ROLE_KEY).unwrap().as_deref(), Some("owner"));

        let restored = SessionManager::restore(manager.storage().clone());
        assert_eq!(restored.session().role, Some(Role::Owner));
        assert_eq!(restored.session().user.as_ref().unwrap().name, "Property Owner");
        assert_eq!(
            restored.session().viewer(),
            Viewer::Owner {
                owner_id: DEMO_OWNER_ID.to_string()
            }
        );

        manager.logout().unwrap();
        assert!(manager.storage().get(USER_KEY).unwrap().is_none());
        assert_eq!(manager.session().viewer(), Viewer::Guest);
    }

    #[test]
    fn corrupt_user_entry_is_cleared() {
        let mut storage = MemoryStorage::default();
        storage.set(USER_KEY, "{not json").unwrap();
        storage.set(ROLE_KEY, "renter").unwrap();

        let manager = SessionManager::restore(storage);
        assert!(!manager.session().is_authenticated());
        assert!(manager.storage().get(USER_KEY).unwrap().is_none());
        assert!(manager.storage().get(ROLE_KEY).unwrap().is_none());
    }

    /// Reads work, every write fails
    struct ReadOnlyStorage(MemoryStorage);

    impl SessionStorage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(RentifyError::Storage(format!("{} is read-only", key)))
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            Err(RentifyError::Storage(format!("{} is read-only", key)))
        }
    }

    #[test]
    fn corrupt_entry_that_cannot_be_cleared_still_restores_a_guest() {
        let mut inner = MemoryStorage::default();
        inner.set(USER_KEY, "{not json").unwrap();
        inner.set(ROLE_KEY, "renter").unwrap();

        let manager = SessionManager::restore(ReadOnlyStorage(inner));
        assert!(!manager.session().is_authenticated());
        assert_eq!(manager.session().viewer(), Viewer::Guest);
        assert_eq!(
            manager.storage().get(USER_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn failed_login_changes_nothing() {
        let mut manager = SessionManager::restore(MemoryStorage::default());
        assert!(manager.login("nobody@x.com", "pw", Role::Renter).is_err());
        assert!(manager.session().user.is_none());
    }

    #[test]
    fn signup_requires_every_field() {
        let mut manager = SessionManager::restore(MemoryStorage::default());
        assert!(matches!(
            manager.signup("", "a@b.c", "pw", Role::Renter),
            Err(RentifyError::MissingPrecondition(_))
        ));
        let session = manager.signup("Maria", "maria@x.com", "pw", Role::Renter).unwrap();
        assert_eq!(session.user.as_ref().unwrap().name, "Maria");
    }

    #[test]
    fn language_preference_persists() {
        let mut manager = SessionManager::restore(MemoryStorage::default());
        manager.set_language(Language::Ar).unwrap();
        let restored = SessionManager::restore(manager.storage().clone());
        assert_eq!(restored.session().language, Language::Ar);
    }
}
