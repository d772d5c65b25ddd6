//! Session persistence over two interchangeable storage scopes. The browser
//! backend maps the durable scope to `localStorage` and the tab scope to
//! `sessionStorage`; native builds and tests use in-process slots. Writes are
//! best effort: an unavailable scope is logged and skipped, never an error
//! the caller must handle.

use crate::features::auth::types::SessionRecord;
use std::sync::{Arc, Mutex};

/// Storage key shared by both scopes.
pub const SESSION_KEY: &str = "user";

/// Which browser scope a store is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives browser restarts (`localStorage`).
    Durable,
    /// Lives with the current tab (`sessionStorage`).
    Ephemeral,
}

/// One storage scope holding at most one session record.
pub trait SessionStore {
    fn get(&self) -> Option<SessionRecord>;
    fn set(&self, record: &SessionRecord);
    fn delete(&self);
}

/// Store bound to one of the browser's Web Storage scopes. The scope handle
/// is looked up per call; nothing is cached across the page lifetime.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    scope: StorageScope,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new(scope: StorageScope) -> Self {
        Self { scope }
    }

    fn raw(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            StorageScope::Durable => window.local_storage().ok().flatten(),
            StorageScope::Ephemeral => window.session_storage().ok().flatten(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStore {
    fn get(&self) -> Option<SessionRecord> {
        let raw = self.raw()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("discarding unreadable session record: {err}");
                None
            }
        }
    }

    fn set(&self, record: &SessionRecord) {
        let Some(storage) = self.raw() else {
            log::warn!("browser storage unavailable; session not persisted");
            return;
        };
        match serde_json::to_string(record) {
            Ok(payload) => {
                let _ = storage.set_item(SESSION_KEY, &payload);
            }
            Err(err) => log::warn!("failed to encode session record: {err}"),
        }
    }

    fn delete(&self) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// In-process store used on native targets and in tests.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<SessionRecord>>,
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<SessionRecord> {
        self.slot.lock().map_or(None, |slot| slot.clone())
    }

    fn set(&self, record: &SessionRecord) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(record.clone());
        }
    }

    fn delete(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// The two storage scopes treated as alternates, selected by caller intent.
/// Constructed once per page load and shared through the auth context.
#[derive(Clone)]
pub struct SessionVault {
    durable: Arc<dyn SessionStore + Send + Sync>,
    ephemeral: Arc<dyn SessionStore + Send + Sync>,
}

impl SessionVault {
    pub fn new(
        durable: Arc<dyn SessionStore + Send + Sync>,
        ephemeral: Arc<dyn SessionStore + Send + Sync>,
    ) -> Self {
        Self { durable, ephemeral }
    }

    /// Vault over the browser's `localStorage` and `sessionStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(
            Arc::new(BrowserStore::new(StorageScope::Durable)),
            Arc::new(BrowserStore::new(StorageScope::Ephemeral)),
        )
    }

    /// Vault over two in-process slots, for native builds and tests.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::default()),
            Arc::new(MemoryStore::default()),
        )
    }

    /// Writes the record to the single scope selected by `record.remember`.
    /// The other scope is left untouched, so a record written there earlier
    /// survives repeated logins with a different choice.
    pub fn persist(&self, record: &SessionRecord) {
        if record.remember {
            self.durable.set(record);
        } else {
            self.ephemeral.set(record);
        }
    }

    /// Reads the durable scope first, then the tab scope.
    pub fn restore(&self) -> Option<SessionRecord> {
        self.durable.get().or_else(|| self.ephemeral.get())
    }

    /// Removes the record from both scopes. Safe to call with nothing stored.
    pub fn clear(&self) {
        self.durable.delete();
        self.ephemeral.delete();
    }

    pub fn durable(&self) -> &dyn SessionStore {
        self.durable.as_ref()
    }

    pub fn ephemeral(&self) -> &dyn SessionStore {
        self.ephemeral.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str, remember: bool) -> SessionRecord {
        SessionRecord {
            email: email.to_string(),
            login_time: "2026-08-06T10:00:00.000Z".to_string(),
            remember,
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get(), None);

        store.set(&record("a@b.co", false));
        assert_eq!(store.get().map(|r| r.email), Some("a@b.co".to_string()));

        store.delete();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn persist_with_remember_writes_durable_scope_only() {
        let vault = SessionVault::in_memory();
        vault.persist(&record("a@b.co", true));

        assert_eq!(vault.durable().get().map(|r| r.email), Some("a@b.co".to_string()));
        assert_eq!(vault.ephemeral().get(), None);
    }

    #[test]
    fn persist_without_remember_writes_tab_scope_only() {
        let vault = SessionVault::in_memory();
        vault.persist(&record("a@b.co", false));

        assert_eq!(vault.durable().get(), None);
        assert_eq!(vault.ephemeral().get().map(|r| r.email), Some("a@b.co".to_string()));
    }

    #[test]
    fn restore_prefers_durable_scope() {
        let vault = SessionVault::in_memory();
        vault.persist(&record("tab@b.co", false));
        vault.persist(&record("kept@b.co", true));

        assert_eq!(vault.restore().map(|r| r.email), Some("kept@b.co".to_string()));
    }

    #[test]
    fn restore_falls_back_to_tab_scope() {
        let vault = SessionVault::in_memory();
        assert_eq!(vault.restore(), None);

        vault.persist(&record("tab@b.co", false));
        assert_eq!(vault.restore().map(|r| r.email), Some("tab@b.co".to_string()));
    }

    #[test]
    fn clear_empties_both_scopes_and_is_idempotent() {
        let vault = SessionVault::in_memory();
        vault.persist(&record("tab@b.co", false));
        vault.persist(&record("kept@b.co", true));

        vault.clear();
        assert_eq!(vault.durable().get(), None);
        assert_eq!(vault.ephemeral().get(), None);

        vault.clear();
        assert_eq!(vault.restore(), None);
    }

    // Persisting never clears the other scope, so switching the "remember"
    // choice leaves a stale record behind and restore still prefers the
    // durable one. Known inconsistency; see DESIGN.md.
    #[test]
    fn switching_remember_choice_leaves_stale_record() {
        let vault = SessionVault::in_memory();
        vault.persist(&record("first@b.co", true));
        vault.persist(&record("second@b.co", false));

        assert_eq!(vault.durable().get().map(|r| r.email), Some("first@b.co".to_string()));
        assert_eq!(vault.ephemeral().get().map(|r| r.email), Some("second@b.co".to_string()));
        assert_eq!(vault.restore().map(|r| r.email), Some("first@b.co".to_string()));
    }

    #[test]
    fn session_key_matches_stored_layout() {
        assert_eq!(SESSION_KEY, "user");
    }
}
