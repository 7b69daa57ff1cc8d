use leptos::prelude::*;

use crate::content::Partner;

/// Strip of partner logos.
#[component]
pub fn OurPartners(partners: &'static [Partner]) -> impl IntoView {
    view! {
        <section class="our-partners">
            <h5>"Our Partners:"</h5>
            <div class="rectangle-container d-flex gap-3 justify-content-between align-items-center">
                {partners
                    .iter()
                    .map(|partner| {
                        view! {
                            <img
                                src=partner.image
                                alt=partner.name
                                class="img-fluid"
                                style="max-height: 80px; object-fit: cover;"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
