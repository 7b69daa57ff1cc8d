use super::*;

// =============================================================
// MemoryFlagStore
// =============================================================

#[test]
fn empty_store_reads_unauthenticated() {
    let store = MemoryFlagStore::new();
    assert_eq!(store.read(), AuthState::Unauthenticated);
    assert_eq!(store.raw(), None);
}

#[test]
fn write_authenticated_stores_literal_true() {
    let store = MemoryFlagStore::new();
    store.write(AuthState::Authenticated);
    assert_eq!(store.raw().as_deref(), Some("true"));
    assert_eq!(store.read(), AuthState::Authenticated);
}

#[test]
fn write_unauthenticated_removes_value() {
    let store = MemoryFlagStore::with_raw("true");
    store.write(AuthState::Unauthenticated);
    assert_eq!(store.raw(), None);
    assert_eq!(store.read(), AuthState::Unauthenticated);
}

#[test]
fn clear_removes_value() {
    let store = MemoryFlagStore::with_raw("true");
    store.clear();
    assert_eq!(store.raw(), None);
}

#[test]
fn malformed_values_read_unauthenticated() {
    for raw in ["", "yes", "1", "\"true\"", "{", "null", "false", "TRUE", "[true]"] {
        let store = MemoryFlagStore::with_raw(raw);
        assert_eq!(store.read(), AuthState::Unauthenticated, "raw value {raw:?}");
    }
}

#[test]
fn clones_share_one_slot() {
    let store = MemoryFlagStore::new();
    let reloaded = store.clone();
    store.write(AuthState::Authenticated);
    assert_eq!(reloaded.read(), AuthState::Authenticated);
}

// =============================================================
// BrowserFlagStore outside the browser
// =============================================================

#[test]
fn browser_store_uses_site_key() {
    assert_eq!(BrowserFlagStore::default().key(), "isAuthenticated");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_without_window() {
    let store = BrowserFlagStore::default();
    store.write(AuthState::Authenticated);
    assert_eq!(store.read(), AuthState::Unauthenticated);
    store.clear();
}
