//! Auth session state and context for the frontend. The provider builds the
//! storage-backed vault once per page load, restores any persisted record
//! into a signal, and exposes derived auth state for routes. Restore is a UI
//! convenience: no validity or expiry is checked.

use crate::features::auth::session;
use crate::features::auth::store::SessionVault;
use crate::features::auth::types::SessionRecord;
use leptos::prelude::*;

#[derive(Clone)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<SessionRecord>>,
    pub is_authenticated: Signal<bool>,
    vault: SessionVault,
}

impl AuthContext {
    /// Builds a context around the provided session signal and vault.
    fn new(session: RwSignal<Option<SessionRecord>>, vault: SessionVault) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
            vault,
        }
    }

    pub fn vault(&self) -> &SessionVault {
        &self.vault
    }

    /// Updates the in-memory session after login.
    pub fn set_session(&self, record: SessionRecord) {
        self.session.set(Some(record));
    }

    /// Clears the persisted record from both scopes and the in-memory state.
    pub fn sign_out(&self) {
        session::logout(&self.vault);
        self.session.set(None);
    }
}

/// Provides auth context and restores any persisted session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let vault = SessionVault::browser();
    let session = RwSignal::new(vault.restore());
    if let Some(record) = session.get_untracked() {
        log::info!("existing session found for {}", record.email);
    }
    provide_context(AuthContext::new(session, vault));

    view! { {children()} }
}

/// Returns the current auth context or a detached in-memory fallback.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(None), SessionVault::in_memory()))
}
