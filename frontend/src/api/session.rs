use std::cell::RefCell;
use std::rc::Rc;

use super::types::{Session, User};
use crate::utils::storage as storage_utils;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Where the bearer token and the signed-in user survive page reloads.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn save(&self, session: &Session) -> Result<(), String>;
    fn clear(&self);
}

/// `localStorage`-backed store used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        let storage = storage_utils::local_storage().ok()?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn user(&self) -> Option<User> {
        let storage = storage_utils::local_storage().ok()?;
        let raw = storage.get_item(USER_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("Discarding unreadable stored user: {}", err);
                let _ = storage.remove_item(USER_KEY);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), String> {
        let storage = storage_utils::local_storage()?;
        storage
            .set_item(TOKEN_KEY, &session.token)
            .map_err(|_| "Failed to store token")?;
        let user_json =
            serde_json::to_string(&session.user).map_err(|_| "Failed to serialize user profile")?;
        storage
            .set_item(USER_KEY, &user_json)
            .map_err(|_| "Failed to store user profile")?;
        Ok(())
    }

    fn clear(&self) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// In-memory store for host builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    session: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Rc::new(RefCell::new(Some(session))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }

    fn user(&self) -> Option<User> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    fn save(&self, session: &Session) -> Result<(), String> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}
