//! Route table and the render-or-redirect decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page passes through `resolve`. Protected pages render only for
//! an authenticated session; public pages always render. The `Guarded`
//! component applies the decision to the live session signal.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Session};
use crate::util::flag_store::FlagStore;

/// Every page the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    DataPlans,
    Contact,
    Login,
    Register,
    ForgotPassword,
}

/// Where unauthenticated visitors are sent.
pub const LOGIN_PAGE: Page = Page::Login;

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::DataPlans => "/data-plans",
            Page::Contact => "/contact",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::ForgotPassword => "/forgot-password",
        }
    }

    /// Router segment: the path without its leading slash.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::DataPlans => "Data Plans",
            Page::Contact => "Contact Us",
            Page::Login => "Login",
            Page::Register => "Registration",
            Page::ForgotPassword => "Forgot Password",
        }
    }

    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Page::Home | Page::About | Page::DataPlans | Page::Contact)
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    RenderPage(Page),
    RedirectTo(Page),
}

/// Decide whether `requested` renders under `state`.
#[must_use]
pub fn resolve(requested: Page, state: AuthState) -> RenderDecision {
    if requested.is_protected() && !state.is_authenticated() {
        RenderDecision::RedirectTo(LOGIN_PAGE)
    } else {
        RenderDecision::RenderPage(requested)
    }
}

/// Guard check against a live session. `None` while the session has not yet
/// been restored from storage.
#[must_use]
pub fn resolve_session<S: FlagStore>(requested: Page, session: &Session<S>) -> Option<RenderDecision> {
    session.is_restored().then(|| resolve(requested, session.state()))
}

/// Path to leave `page` for, if the restored session does not admit it.
#[must_use]
pub fn redirect_path<S: FlagStore>(page: Page, session: &Session<S>) -> Option<&'static str> {
    match resolve_session(page, session)? {
        RenderDecision::RedirectTo(target) => Some(target.path()),
        RenderDecision::RenderPage(_) => None,
    }
}

/// Navigate away whenever the restored session no longer admits `page`.
///
/// This is the only navigation that follows a logout.
pub fn install_guard_redirect<S, F>(session: RwSignal<Session<S>>, page: Page, navigate: F)
where
    S: FlagStore + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = session.with(|s| redirect_path(page, s)) {
            #[cfg(feature = "hydrate")]
            log::info!("guard redirect {} -> {target}", page.path());
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
