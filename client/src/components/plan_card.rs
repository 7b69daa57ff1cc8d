//! Bordered card for one data plan.

use leptos::prelude::*;

use crate::content::Plan;

#[component]
pub fn PlanCard(plan: Plan) -> impl IntoView {
    view! {
        <div class="card" style=format!("border: 4px solid {}; border-radius: 10px;", plan.border_color)>
            <img src=plan.image class="card-img-top" alt=format!("{} Plan", plan.title)/>
            <div class="card-body">
                <h5 class="card-title">{plan.title}</h5>
                <p class="card-text">{plan.description}</p>
            </div>
            <ul class="list-group list-group-flush">
                {plan
                    .details
                    .iter()
                    .map(|detail| {
                        view! {
                            <li class="list-group-item">
                                <strong>{format!("{}:", detail.label)}</strong>
                                " "
                                {detail.value}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="card-body">
                <a href="#" class="card-link">"Learn More"</a>
            </div>
        </div>
    }
}
