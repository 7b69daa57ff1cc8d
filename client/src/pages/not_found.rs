use leptos::prelude::*;

use crate::util::guard::LOGIN_PAGE;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <p>"Page not found."</p>
            <a href=LOGIN_PAGE.path()>"Back to login"</a>
        </div>
    }
}
