use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::forms::{ForgotPasswordForm, RESET_LINK_SENT_MESSAGE};
use crate::util::dialog;
use crate::util::guard::LOGIN_PAGE;

/// Reset-link request. Nothing is sent; the visitor is told it was and is
/// returned to the login page.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let form = RwSignal::new(ForgotPasswordForm::default());
    let navigate = use_navigate();

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dialog::alert(RESET_LINK_SENT_MESSAGE);
        form.set(ForgotPasswordForm::default());
        navigate_submit(LOGIN_PAGE.path(), NavigateOptions::default());
    };

    view! {
        <div class="forgot-password-page">
            <div class="container">
                <div class="title">"Forgot Password"</div>
                <div class="content">
                    <form on:submit=on_submit>
                        <div class="user-details">
                            <div class="input-box">
                                <span class="details">"Email"</span>
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    required
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="subButton">
                            <input type="submit" value="Send Reset Link"/>
                        </div>
                        <div class="logButton">
                            <input
                                type="button"
                                value="Back to login"
                                on:click=move |_| navigate(LOGIN_PAGE.path(), NavigateOptions::default())
                            />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
