//! Top bar with the search box and the logout action.

use leptos::prelude::*;

use crate::state::auth::BrowserSession;

/// Logout only flips the session; the page's guard performs the redirect.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let search = RwSignal::new(String::new());

    let on_logout = move |_| {
        session.update(BrowserSession::logout);
        #[cfg(feature = "hydrate")]
        log::info!("session logged out");
    };

    view! {
        <header class="navbar d-flex justify-content-between align-items-center p-3">
            <input
                type="text"
                class="form-control w-25"
                placeholder="You can search here.."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <button class="btn btn-primary logout-btn" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
