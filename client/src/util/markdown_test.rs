use super::*;
use crate::content::{STORY, story_markdown};

#[test]
fn strong_markers_render_strong() {
    assert_eq!(render_markdown_html("At **Acme**, we ship."), "<p>At <strong>Acme</strong>, we ship.</p>\n");
}

#[test]
fn unpaired_or_spaced_markers_stay_literal() {
    assert_eq!(render_markdown_html("2 ** 3"), "<p>2 ** 3</p>\n");
    assert_eq!(render_markdown_html("a**b"), "<p>a**b</p>\n");
}

#[test]
fn raw_html_is_dropped() {
    let inline = render_markdown_html("hi <b>there</b>");
    assert!(inline.contains("hi there"));
    assert!(!inline.contains("<b>"));

    let block = render_markdown_html("<script>alert(1)</script>\n\ntext");
    assert!(!block.contains("<script"));
    assert!(block.contains("<p>text</p>"));
}

#[test]
fn story_renders_as_one_paragraph_with_breaks() {
    let rendered = render_markdown_html(&story_markdown());
    assert_eq!(rendered.matches("<p>").count(), 1);
    assert_eq!(rendered.matches("<br />").count(), STORY.len() - 1);
    assert_eq!(rendered.matches("<strong>Communication LTD</strong>").count(), 2);
    assert!(!rendered.contains("**"));
}
