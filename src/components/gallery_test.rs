use super::*;

#[test]
fn indicator_class_marks_only_the_current_dot() {
    assert_eq!(indicator_class(2, 2), "active");
    assert_eq!(indicator_class(0, 2), "");
    assert_eq!(indicator_class(3, 2), "");
}

#[test]
fn image_display_shows_exactly_the_current_image() {
    assert_eq!(image_display(1, 1), "display:block");
    assert_eq!(image_display(0, 1), "display:none");
    assert_eq!(image_display(2, 1), "display:none");
}
