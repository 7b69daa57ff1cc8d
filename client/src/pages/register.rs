//! Registration page. Details are held in the form only; submitting sends the
//! visitor to log in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::forms::{Gender, REGISTRATION_RECEIVED_MESSAGE, RegisterField, RegisterForm};
use crate::util::dialog;
use crate::util::guard::LOGIN_PAGE;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let navigate = use_navigate();

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dialog::alert(REGISTRATION_RECEIVED_MESSAGE);
        form.set(RegisterForm::default());
        navigate_submit(LOGIN_PAGE.path(), NavigateOptions::default());
    };

    let fields = RegisterField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="input-box">
                    <span class="details">{field.label()}</span>
                    <input
                        type=field.input_type()
                        placeholder=field.placeholder()
                        required
                        prop:value=move || form.with(|f| f.get(field).to_owned())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect_view();

    let genders = Gender::ALL
        .into_iter()
        .map(|gender| {
            view! {
                <label for=gender.input_id()>
                    <input
                        type="radio"
                        name="gender"
                        id=gender.input_id()
                        prop:checked=move || form.with(|f| f.gender == Some(gender))
                        on:change=move |_| form.update(|f| f.gender = Some(gender))
                    />
                    <span class="gender">{gender.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="registration-page">
            <div class="container">
                <div class="title">"Registration"</div>
                <div class="content">
                    <form on:submit=on_submit>
                        <div class="user-details">{fields}</div>
                        <div class="validBox">
                            <label class="checkbox-container">
                                <input
                                    type="checkbox"
                                    required
                                    prop:checked=move || form.with(|f| f.accepted_terms)
                                    on:change=move |ev| form.update(|f| f.accepted_terms = event_target_checked(&ev))
                                />
                                <span class="details">"Click here to accept terms of use"</span>
                            </label>
                        </div>
                        <div class="gender-details">
                            <span class="gender-title">"Gender"</span>
                            <div class="category">{genders}</div>
                        </div>
                        <div class="subButton">
                            <input type="submit" value="Register"/>
                        </div>
                        <div class="logButton">
                            <input
                                type="button"
                                value="Already registered? Back to login"
                                on:click=move |_| navigate(LOGIN_PAGE.path(), NavigateOptions::default())
                            />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
