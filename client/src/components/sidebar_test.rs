use super::*;

#[test]
fn toggle_opens_closed_group() {
    assert_eq!(toggle_group(None, 3), Some(3));
}

#[test]
fn toggle_closes_open_group() {
    assert_eq!(toggle_group(Some(3), 3), None);
}

#[test]
fn toggle_switches_between_groups() {
    assert_eq!(toggle_group(Some(3), 4), Some(4));
}

#[test]
fn only_matching_leaf_is_active() {
    let active = MENU.iter().filter(|link| is_active(link, Page::DataPlans)).collect::<Vec<_>>();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Data Plans");
}

#[test]
fn no_entry_active_on_public_pages() {
    assert!(MENU.iter().all(|link| !is_active(link, Page::Login)));
}

#[test]
fn active_link_is_styled() {
    let style = link_style(true).unwrap_or_default();
    assert!(style.contains("font-weight: bold"));
    assert!(style.contains("--color-dark-forest"));
}

#[test]
fn inactive_link_has_no_style() {
    assert_eq!(link_style(false), None);
}
