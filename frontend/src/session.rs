//! Browser-backed session storage.

use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

use common::session::{slot_value, Session, SessionStore};

use crate::config::SESSION_KEY;

/// Keeps the session identifier in `localStorage` under [`SESSION_KEY`] as
/// plain text, exactly as `localStorage.setItem` would write it.
///
/// Storage errors (private browsing, quota) are logged and treated as
/// "no session".
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(SESSION_KEY) {
            Ok(raw) => slot_value(raw),
            Err(err) => {
                log::warn!("unreadable session slot: {:?}", err);
                None
            }
        }
    }

    fn save(&self, user_id: &str) {
        if let Err(err) = LocalStorage::raw().set_item(SESSION_KEY, user_id) {
            log::error!("could not persist session: {:?}", err);
        }
    }

    fn clear(&self) {
        if let Err(err) = LocalStorage::raw().remove_item(SESSION_KEY) {
            log::warn!("could not clear session slot: {:?}", err);
        }
    }
}

pub fn browser_session() -> Session {
    Session::new(Rc::new(LocalSessionStore))
}
