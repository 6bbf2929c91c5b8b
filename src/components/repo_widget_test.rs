use super::*;

#[test]
fn repo_title_falls_back_for_empty_names() {
    assert_eq!(repo_title("hello-world"), "hello-world");
    assert_eq!(repo_title(""), UNTITLED_REPO);
}

#[test]
fn description_text_falls_back_for_missing_or_empty_descriptions() {
    assert_eq!(description_text(Some("A fine repo")), "A fine repo");
    assert_eq!(description_text(Some("")), NO_DESCRIPTION);
    assert_eq!(description_text(None), NO_DESCRIPTION);
}

#[test]
fn segment_style_carries_width_and_color() {
    assert_eq!(
        segment_style(50.0, "#dea584"),
        "width:50%;background-color:#dea584"
    );
}

#[test]
fn color_box_style_carries_only_the_color() {
    assert_eq!(color_box_style("#cccccc"), "background-color:#cccccc");
}

#[test]
fn error_title_is_distinct_from_any_repo_title() {
    assert_eq!(ERROR_TITLE, "Failed to load repository data");
    assert_ne!(ERROR_TITLE, UNTITLED_REPO);
}
