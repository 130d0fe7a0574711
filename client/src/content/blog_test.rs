use super::*;

#[test]
fn posts_are_newest_first() {
    let list = posts();
    assert_eq!(list.len(), POSTS.len());
    assert!(list.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn slugs_are_unique_and_url_safe() {
    let mut slugs = POSTS.iter().map(|p| p.slug).collect::<Vec<_>>();
    assert!(
        slugs
            .iter()
            .all(|s| s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
    );
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), POSTS.len());
}

#[test]
fn find_post_by_slug() {
    assert_eq!(find_post("testing-timers").map(|p| p.title), Some("Testing timer code without sleeping"));
    assert!(find_post("missing-post").is_none());
}

#[test]
fn reading_minutes_is_at_least_one() {
    for p in POSTS {
        assert!(p.reading_minutes() >= 1);
    }
}

#[test]
fn render_markdown_emits_headings_and_code() {
    let html = render_markdown("# Title\n\n```rust\nlet x = 1;\n```\n");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<code class=\"language-rust\">"));
}

#[test]
fn render_markdown_drops_raw_html() {
    let html = render_markdown("hello <script>alert(1)</script>\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
}
