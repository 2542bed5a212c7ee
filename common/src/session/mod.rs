//! Session handling.
//!
//! The session is a single opaque user identifier. It lives in a
//! [`SessionStore`] (browser local storage in the app, memory in tests) and
//! is reached through a cloneable [`Session`] handle that the app hands down
//! via context instead of touching global storage from every page.

mod guard;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub use guard::{GuardCommand, GuardState, SessionGuard};

/// Persistent slot holding the current user identifier.
///
/// The slot holds the bare identifier text, never an encoded form of it, so
/// other code reading the same storage key sees the id itself.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, user_id: &str);
    fn clear(&self);
}

/// In-memory store, used by tests and as a fallback when browser storage is
/// unavailable.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_user(user_id: &str) -> Self {
        Self {
            slot: RefCell::new(Some(user_id.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, user_id: &str) {
        *self.slot.borrow_mut() = Some(user_id.to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Shared handle to the session store.
///
/// Equality is identity of the underlying store, which is what a Yew
/// context provider needs to decide whether consumers must re-render.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemorySessionStore::default()))
    }

    /// Stored identifier; blank values count as signed out.
    pub fn user_id(&self) -> Option<String> {
        slot_value(self.store.load())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id().is_some()
    }

    pub fn sign_in(&self, user_id: &str) {
        log::debug!("session stored for user {}", user_id);
        self.store.save(user_id);
    }

    pub fn sign_out(&self) {
        log::debug!("session cleared");
        self.store.clear();
    }
}

/// Reads a raw storage slot: the text is the identifier as stored, and a
/// missing or blank slot means no session.
pub fn slot_value(raw: Option<String>) -> Option<String> {
    raw.filter(|id| !id.trim().is_empty())
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_then_out() {
        let session = Session::in_memory();
        assert!(!session.is_signed_in());
        session.sign_in("abc123");
        assert_eq!(session.user_id().as_deref(), Some("abc123"));
        session.sign_out();
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn blank_identifier_is_signed_out() {
        let session = Session::new(Rc::new(MemorySessionStore::with_user("  ")));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn clones_share_the_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.sign_in("u1");
        assert_eq!(other.user_id().as_deref(), Some("u1"));
        assert_eq!(session, other);
        assert_ne!(session, Session::in_memory());
    }

    #[test]
    fn slot_text_is_the_identifier_verbatim() {
        assert_eq!(
            slot_value(Some("665f1c2ab3e4".to_string())).as_deref(),
            Some("665f1c2ab3e4")
        );
        assert_eq!(
            slot_value(Some("\"665f1c2ab3e4\"".to_string())).as_deref(),
            Some("\"665f1c2ab3e4\"")
        );
        assert_eq!(slot_value(Some(String::new())), None);
        assert_eq!(slot_value(None), None);
    }
}
