//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::content::COMPANY_NAME;
use crate::pages::{
    about::AboutPage, contact::ContactPage, data_plans::DataPlansPage, forgot_password::ForgotPasswordPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::auth::{BrowserSession, Session, restore_session};
use crate::util::flag_store::BrowserFlagStore;
use crate::util::guard::Page;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The session
/// is restored from storage once, after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: RwSignal<BrowserSession> = RwSignal::new(Session::new(BrowserFlagStore::default()));
    provide_context(session);

    Effect::new(move || {
        restore_session(session);
    });

    view! {
        <Title text=COMPANY_NAME/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment(Page::Home.segment())
                    view=|| view! { <Guarded page=Page::Home><HomePage/></Guarded> }
                />
                <Route
                    path=StaticSegment(Page::About.segment())
                    view=|| view! { <Guarded page=Page::About><AboutPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(Page::DataPlans.segment())
                    view=|| view! { <Guarded page=Page::DataPlans><DataPlansPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(Page::Contact.segment())
                    view=|| view! { <Guarded page=Page::Contact><ContactPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(Page::Login.segment())
                    view=|| view! { <Guarded page=Page::Login><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(Page::Register.segment())
                    view=|| view! { <Guarded page=Page::Register><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(Page::ForgotPassword.segment())
                    view=|| view! { <Guarded page=Page::ForgotPassword><ForgotPasswordPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
