//! Persistence boundary for the session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserFlagStore` keeps one key in `localStorage`, which survives reloads
//! but not an explicit storage clear. `MemoryFlagStore` backs tests and any
//! host without a browser window.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort. A full quota or a disabled storage area is
//! swallowed; the in-memory session still transitions.

#[cfg(test)]
#[path = "flag_store_test.rs"]
mod flag_store_test;

use std::sync::{Arc, Mutex};

use crate::state::auth::AuthState;

/// Storage key used by the site since its first release.
pub const STORAGE_KEY: &str = "isAuthenticated";

/// Read/write access to the persisted session flag.
pub trait FlagStore {
    /// Fetch the stored state. Missing or malformed values read as
    /// `Unauthenticated`.
    fn read(&self) -> AuthState;

    /// Persist `state`. Failures are not reported.
    fn write(&self, state: AuthState);

    /// Remove the stored value.
    fn clear(&self);
}

/// Flag store over `window.localStorage`.
///
/// Outside the `hydrate` build (server rendering, native tests) there is no
/// storage area: reads return `Unauthenticated` and writes are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserFlagStore {
    key: &'static str,
}

impl BrowserFlagStore {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl Default for BrowserFlagStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FlagStore for BrowserFlagStore {
    fn read(&self) -> AuthState {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage().and_then(|storage| storage.get_item(self.key).ok().flatten());
            AuthState::decode(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            AuthState::Unauthenticated
        }
    }

    fn write(&self, state: AuthState) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            match state.encode() {
                Some(raw) => {
                    if storage.set_item(self.key, &raw).is_err() {
                        log::warn!("session flag write failed for key {}", self.key);
                    }
                }
                None => {
                    let _ = storage.remove_item(self.key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = state;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process flag store holding the raw stored string.
///
/// Clones share the same slot, so a clone handed to a fresh `Session` behaves
/// like a page reload against the same browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryFlagStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an arbitrary raw value, as if another writer had
    /// stored it.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// Current raw contents, `None` when the key is absent.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl FlagStore for MemoryFlagStore {
    fn read(&self) -> AuthState {
        AuthState::decode(self.raw().as_deref())
    }

    fn write(&self, state: AuthState) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = state.encode();
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
