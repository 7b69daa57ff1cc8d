//! Login page. Any username/password pair signs the visitor in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::BrowserSession;
use crate::state::forms::LoginForm;
use crate::util::guard::Page;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.update(BrowserSession::login);
        #[cfg(feature = "hydrate")]
        log::info!("session logged in (remember_me={})", form.with_untracked(|f| f.remember_me));
        navigate_home(Page::Home.path(), NavigateOptions::default());
    };

    let navigate_forgot = navigate.clone();
    let navigate_register = navigate;

    view! {
        <div class="login-page">
            <div class="container">
                <div class="title">"Login"</div>
                <div class="content">
                    <form on:submit=on_submit>
                        <div class="user-details">
                            <div class="input-box">
                                <span class="details">"Username"</span>
                                <input
                                    type="text"
                                    placeholder="Enter your username"
                                    required
                                    prop:value=move || form.with(|f| f.username.clone())
                                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                />
                            </div>
                            <div class="input-box">
                                <span class="details">"Password"</span>
                                <input
                                    type="password"
                                    placeholder="Enter your password"
                                    required
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="validBox">
                            <label class="checkbox-container">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.remember_me)
                                    on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                                />
                                <span class="details">"Remember me"</span>
                            </label>
                        </div>
                        <div class="subButton">
                            <input type="submit" value="Login"/>
                        </div>
                        <div class="logButton">
                            <input
                                type="button"
                                value="Forgot Password?"
                                on:click=move |_| navigate_forgot(Page::ForgotPassword.path(), NavigateOptions::default())
                            />
                        </div>
                        <div class="logButton">
                            <input
                                type="button"
                                value="Don't have an account? Register here"
                                on:click=move |_| navigate_register(Page::Register.path(), NavigateOptions::default())
                            />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
