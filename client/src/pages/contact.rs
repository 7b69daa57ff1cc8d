//! Contact form. Submission always succeeds and clears the form.

use leptos::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::state::forms::{CONTACT_SENT_MESSAGE, ContactField, ContactForm};
use crate::util::dialog;
use crate::util::guard::Page;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dialog::alert(CONTACT_SENT_MESSAGE);
        form.update(ContactForm::reset);
    };

    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_owned());
    let on_input =
        move |field: ContactField| move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    view! {
        <SiteLayout current=Page::Contact>
            <section class="text-center mb-5">
                <h1 class="display-4 text-dark">"We'd Love to Hear From You 😊"</h1>
                <p class="lead text-muted">
                    "Got a question, suggestion, or need help?"
                    <br/>
                    " Drop us a message, and we'll get back to you as soon as possible."
                </p>
            </section>
            <div class="row justify-content-center">
                <div class="col-md-10 col-lg-8">
                    <form class="shadow-lg p-4 rounded bg-light" on:submit=on_submit>
                        <div class="mb-4">
                            <label for=ContactField::Name.id() class="form-label text-primary fw-bold">"Full Name"</label>
                            <input
                                id=ContactField::Name.id()
                                type="text"
                                class="form-control"
                                placeholder="Your Full Name"
                                required
                                prop:value=value(ContactField::Name)
                                on:input=on_input(ContactField::Name)
                            />
                        </div>
                        <div class="mb-4">
                            <label for=ContactField::Email.id() class="form-label text-primary fw-bold">"Email Address"</label>
                            <input
                                id=ContactField::Email.id()
                                type="email"
                                class="form-control"
                                placeholder="Your Email Address"
                                required
                                prop:value=value(ContactField::Email)
                                on:input=on_input(ContactField::Email)
                            />
                        </div>
                        <div class="mb-4">
                            <label for=ContactField::Message.id() class="form-label text-primary fw-bold">"Your Message"</label>
                            <textarea
                                id=ContactField::Message.id()
                                class="form-control"
                                rows="5"
                                placeholder="Write your message here..."
                                required
                                prop:value=value(ContactField::Message)
                                on:input=on_input(ContactField::Message)
                            ></textarea>
                        </div>
                        <div class="text-center">
                            <button class="btn btn-success btn-lg w-100" type="submit">
                                "Send Message"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </SiteLayout>
    }
}
