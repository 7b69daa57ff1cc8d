use leptos::prelude::*;

use super::*;
use crate::state::auth::restore_session;
use crate::util::flag_store::MemoryFlagStore;

fn restored(store: MemoryFlagStore) -> Session<MemoryFlagStore> {
    let mut session = Session::new(store);
    session.initialize();
    session
}

const PROTECTED: [Page; 4] = [Page::Home, Page::About, Page::DataPlans, Page::Contact];
const PUBLIC: [Page; 3] = [Page::Login, Page::Register, Page::ForgotPassword];

// =============================================================
// Page table
// =============================================================

#[test]
fn protection_matches_page_sets() {
    assert!(PROTECTED.iter().all(|page| page.is_protected()));
    assert!(PUBLIC.iter().all(|page| !page.is_protected()));
}

#[test]
fn paths_are_distinct() {
    let mut paths = PROTECTED.iter().chain(PUBLIC.iter()).map(|page| page.path()).collect::<Vec<_>>();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), 7);
}

#[test]
fn segments_drop_leading_slash() {
    assert_eq!(Page::Home.segment(), "");
    assert_eq!(Page::ForgotPassword.segment(), "forgot-password");
}

// =============================================================
// resolve
// =============================================================

#[test]
fn protected_pages_render_when_authenticated() {
    for page in PROTECTED {
        assert_eq!(resolve(page, AuthState::Authenticated), RenderDecision::RenderPage(page));
    }
}

#[test]
fn protected_pages_redirect_to_login_when_unauthenticated() {
    for page in PROTECTED {
        assert_eq!(
            resolve(page, AuthState::Unauthenticated),
            RenderDecision::RedirectTo(Page::Login)
        );
    }
}

#[test]
fn public_pages_render_under_both_states() {
    for page in PUBLIC {
        for state in [AuthState::Authenticated, AuthState::Unauthenticated] {
            assert_eq!(resolve(page, state), RenderDecision::RenderPage(page));
        }
    }
}

// =============================================================
// resolve_session
// =============================================================

#[test]
fn unrestored_session_has_no_decision() {
    let session = Session::new(MemoryFlagStore::with_raw("true"));
    assert_eq!(resolve_session(Page::Home, &session), None);
    assert_eq!(resolve_session(Page::Login, &session), None);
}

#[test]
fn login_then_logout_flips_protected_decision() {
    let mut session = restored(MemoryFlagStore::new());
    assert_eq!(
        resolve_session(Page::Contact, &session),
        Some(RenderDecision::RedirectTo(Page::Login))
    );

    session.login();
    for page in PROTECTED {
        assert_eq!(resolve_session(page, &session), Some(RenderDecision::RenderPage(page)));
    }

    session.logout();
    for page in PROTECTED {
        assert_eq!(
            resolve_session(page, &session),
            Some(RenderDecision::RedirectTo(Page::Login))
        );
    }
}

// =============================================================
// Signal wiring: restore, then redirect
// =============================================================

#[test]
fn redirect_waits_for_restore() {
    // Signals need an active reactive owner when `sandboxed-arenas` is enabled.
    let owner = Owner::new();
    owner.set();
    let session = RwSignal::new(Session::new(MemoryFlagStore::new()));
    assert_eq!(session.with(|s| redirect_path(Page::Home, s)), None);

    assert_eq!(restore_session(session), AuthState::Unauthenticated);
    assert_eq!(session.with(|s| redirect_path(Page::Home, s)), Some("/login"));
}

#[test]
fn logout_redirects_protected_page_and_settles_on_login() {
    // Signals need an active reactive owner when `sandboxed-arenas` is enabled.
    let owner = Owner::new();
    owner.set();
    let session = RwSignal::new(Session::new(MemoryFlagStore::with_raw("true")));
    assert_eq!(restore_session(session), AuthState::Authenticated);
    assert_eq!(session.with(|s| redirect_path(Page::Contact, s)), None);

    session.update(Session::logout);
    assert_eq!(session.with(|s| redirect_path(Page::Contact, s)), Some("/login"));
    // Landing on the login page does not trigger a second navigation.
    assert_eq!(session.with(|s| redirect_path(Page::Login, s)), None);
}

#[test]
fn login_after_restore_admits_protected_pages() {
    // Signals need an active reactive owner when `sandboxed-arenas` is enabled.
    let owner = Owner::new();
    owner.set();
    let session = RwSignal::new(Session::new(MemoryFlagStore::new()));
    restore_session(session);
    session.update(Session::login);
    for page in PROTECTED {
        assert_eq!(session.with(|s| redirect_path(page, s)), None);
    }
    assert_eq!(session.with(|s| s.state()), AuthState::Authenticated);
}
