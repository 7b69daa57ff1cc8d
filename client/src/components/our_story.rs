use leptos::prelude::*;

use crate::content::story_markdown;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn OurStory() -> impl IntoView {
    let rendered = render_markdown_html(&story_markdown());

    view! {
        <section class="our-story">
            <h1>"Our Story"</h1>
            <div class="our-story__body" inner_html=rendered></div>
        </section>
    }
}
