use leptos::prelude::*;

use crate::components::our_partners::OurPartners;
use crate::components::our_story::OurStory;
use crate::components::site_layout::SiteLayout;
use crate::content::PARTNERS;
use crate::util::guard::Page;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SiteLayout current=Page::About>
            <OurStory/>
            <br/>
            <OurPartners partners=PARTNERS/>
        </SiteLayout>
    }
}
