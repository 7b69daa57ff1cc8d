//! Session view-model for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a single owned value provided through Leptos context. Route
//! guards read it on every navigation; login and logout mutate it and write
//! through to the flag store before returning, so memory and storage never
//! disagree after a transition.
//!
//! TRADE-OFFS
//! ==========
//! There is no identity, token, or expiry. The flag only gates which pages
//! render on this browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::flag_store::{BrowserFlagStore, FlagStore};

/// Session type provided to the component tree as `RwSignal<BrowserSession>`.
pub type BrowserSession = Session<BrowserFlagStore>;

/// Two-valued session status.
///
/// Serialized as a JSON boolean so the stored representation stays the literal
/// `true` the site has always written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum AuthState {
    Authenticated,
    #[default]
    Unauthenticated,
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Decode a raw stored value. Anything other than JSON `true` (including a
    /// missing value) maps to `Unauthenticated`.
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str::<Self>(raw).ok())
            .unwrap_or_default()
    }

    /// Encode for storage. `Unauthenticated` has no stored form: the key is
    /// removed instead.
    #[must_use]
    pub fn encode(self) -> Option<String> {
        match self {
            Self::Authenticated => serde_json::to_string(&self).ok(),
            Self::Unauthenticated => None,
        }
    }
}

impl From<bool> for AuthState {
    fn from(value: bool) -> Self {
        if value { Self::Authenticated } else { Self::Unauthenticated }
    }
}

impl From<AuthState> for bool {
    fn from(value: AuthState) -> Self {
        value.is_authenticated()
    }
}

/// In-memory session bound to a flag store.
///
/// Starts out unrestored so server rendering and the first hydrated frame
/// agree; `initialize` performs the single startup read.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    state: AuthState,
    restored: bool,
}

impl<S: FlagStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: AuthState::Unauthenticated,
            restored: false,
        }
    }

    /// Read the persisted flag once and adopt it as the in-memory state.
    pub fn initialize(&mut self) -> AuthState {
        self.state = self.store.read();
        self.restored = true;
        self.state
    }

    pub fn login(&mut self) {
        self.state = AuthState::Authenticated;
        self.store.write(AuthState::Authenticated);
    }

    pub fn logout(&mut self) {
        self.state = AuthState::Unauthenticated;
        self.store.clear();
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// `false` until `initialize` has run. Guards hold rendering until then.
    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

/// Run the startup read against the shared session signal. Called once, after
/// hydration, so the server never touches browser storage.
pub fn restore_session<S>(session: RwSignal<Session<S>>) -> AuthState
where
    S: FlagStore + Send + Sync + 'static,
{
    let restored = session.try_update(Session::initialize).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    log::debug!("session restored: {restored:?}");
    restored
}
