//! Shared chrome for the protected pages: navbar on top, sidebar on the left.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::util::guard::Page;

fn container_class(page: Page) -> &'static str {
    match page {
        Page::Home => "home-container",
        Page::About => "about-container",
        Page::DataPlans => "data-plans-container",
        Page::Contact => "contact-container",
        Page::Login | Page::Register | Page::ForgotPassword => "page-container",
    }
}

#[component]
pub fn SiteLayout(
    current: Page,
    #[prop(optional)] main_style: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=container_class(current)>
            <Navbar/>
            <div class="content d-flex">
                <Sidebar current=current/>
                <main class="main-content col-md-9 col-lg-10 p-4" style=main_style>
                    {children()}
                </main>
            </div>
        </div>
    }
}
