use super::*;

#[test]
fn only_dark_highlight_stylesheet_starts_disabled() {
    let html = view! { <HighlightStylesheets/> }.to_html();
    let links = html.split("<link").filter(|tag| !tag.is_empty()).collect::<Vec<_>>();
    assert_eq!(links.len(), 2, "{html}");

    let light = links.iter().find(|tag| tag.contains("id=\"highlight-light\"")).copied();
    let dark = links.iter().find(|tag| tag.contains("id=\"highlight-dark\"")).copied();
    assert!(light.is_some_and(|tag| !tag.contains("disabled")), "{html}");
    assert!(dark.is_some_and(|tag| tag.contains("disabled")), "{html}");
}
