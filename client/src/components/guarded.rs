//! Route wrapper applying the session guard to a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app` renders through `Guarded`. Nothing is shown until the
//! session has been restored in the browser, so server output and the first
//! hydrated frame match.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::content::COMPANY_NAME;
use crate::state::auth::BrowserSession;
use crate::util::guard::{Page, RenderDecision, install_guard_redirect, resolve_session};

#[component]
pub fn Guarded(page: Page, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    install_guard_redirect(session, page, use_navigate());

    let admitted = move || {
        session.with(|s| matches!(resolve_session(page, s), Some(RenderDecision::RenderPage(_))))
    };

    view! {
        <Title text=format!("{} | {COMPANY_NAME}", page.title())/>
        <Show when=admitted fallback=|| view! { <div class="route-pending" aria-busy="true"></div> }>
            {children()}
        </Show>
    }
}
