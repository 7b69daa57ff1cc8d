//! Left navigation with the company logo and collapsible menu groups.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::content::{COMPANY_NAME, LOGO_SRC, MENU, MenuLink, MenuTarget};
use crate::util::guard::Page;

/// Open `index`, or close it if it is already the open group.
fn toggle_group(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

fn is_active(link: &MenuLink, current: Page) -> bool {
    matches!(link.target, MenuTarget::Page(page) if page == current)
}

/// Highlight for the link to the page being shown.
fn link_style(active: bool) -> Option<&'static str> {
    active.then_some("font-weight: bold; background-color: var(--color-dark-forest, #1f3b2d)")
}

#[component]
pub fn Sidebar(current: Page) -> impl IntoView {
    let open_group = RwSignal::new(None::<usize>);

    let items = MENU
        .iter()
        .copied()
        .enumerate()
        .map(|(index, link)| {
            if link.children().is_empty() {
                let active = is_active(&link, current);
                return view! {
                    <li class="nav-item mt-2">
                        <a href=link.href() class="nav-link text-white" class:nav-link--active=active style=link_style(active)>
                            {link.title}
                        </a>
                    </li>
                }
                .into_any();
            }

            let submenu_id = format!("submenu-{index}");
            let panel_id = submenu_id.clone();
            let expanded = move || open_group.get() == Some(index);
            let on_toggle = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                open_group.update(|open| *open = toggle_group(*open, index));
            };
            view! {
                <li class="nav-item mt-2">
                    <a
                        href=format!("#{submenu_id}")
                        class="nav-link text-white"
                        role="button"
                        aria-expanded=move || expanded().to_string()
                        aria-controls=submenu_id.clone()
                        on:click=on_toggle
                    >
                        {link.title}
                    </a>
                    <Show when=expanded>
                        <ul class="nav flex-column ms-3" id=panel_id.clone()>
                            {link
                                .children()
                                .iter()
                                .map(|sub| {
                                    view! {
                                        <li class="nav-item">
                                            <a href=sub.href() class="nav-link text-white">
                                                {sub.title}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </li>
            }
            .into_any()
        })
        .collect_view();

    view! {
        <nav id="sidebar" class="col-md-3 col-lg-2 text-white d-flex flex-column vh-100">
            <img src=LOGO_SRC alt="Company logo" class="logo img-fluid p-3 mt-4" style="max-height: 250px"/>
            <h6 class="h6 text-center">{COMPANY_NAME}</h6>
            <h6 class="h6 text-center">"_______________________________"</h6>
            <ul class="nav flex-column p-3">{items}</ul>
        </nav>
    }
}
