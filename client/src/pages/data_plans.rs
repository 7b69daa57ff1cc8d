use leptos::prelude::*;

use crate::components::plan_card::PlanCard;
use crate::components::site_layout::SiteLayout;
use crate::content::PLANS;
use crate::util::guard::Page;

/// Plan catalog, one card per plan.
#[component]
pub fn DataPlansPage() -> impl IntoView {
    view! {
        <SiteLayout current=Page::DataPlans>
            <h1>"Our Data Plans"</h1>
            <div class="row row-cols-1 row-cols-md-2 row-cols-lg-4 g-4">
                {PLANS
                    .iter()
                    .copied()
                    .map(|plan| {
                        view! {
                            <div class="col">
                                <PlanCard plan=plan/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SiteLayout>
    }
}
