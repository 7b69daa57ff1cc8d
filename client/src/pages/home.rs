use leptos::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::components::typing_effect::TypingEffect;
use crate::content::GREETING_USER;
use crate::util::guard::Page;

/// Landing page: the typed greeting.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteLayout current=Page::Home main_style="font-size: 75px;">
            <TypingEffect user_name=GREETING_USER/>
        </SiteLayout>
    }
}
