use super::*;

#[test]
fn step_forward_wraps_from_last_to_first() {
    let mut state = GalleryState::default();
    state.activate("python");
    state.jump("python", 4, 5);
    state.step("python", 1, 5);
    assert_eq!(state.current_index("python"), 0);
}

#[test]
fn step_backward_wraps_from_first_to_last() {
    let mut state = GalleryState::default();
    state.activate("python");
    state.step("python", -1, 5);
    assert_eq!(state.current_index("python"), 4);
}

#[test]
fn step_moves_one_image_at_a_time() {
    let mut state = GalleryState::default();
    state.activate("go");
    state.step("go", 1, 3);
    assert_eq!(state.current_index("go"), 1);
    state.step("go", 1, 3);
    assert_eq!(state.current_index("go"), 2);
    state.step("go", -1, 3);
    assert_eq!(state.current_index("go"), 1);
}

#[test]
fn activate_always_resets_the_index() {
    let mut state = GalleryState::default();
    state.activate("python");
    state.jump("python", 3, 5);
    assert_eq!(state.current_index("python"), 3);

    state.activate("python");
    assert_eq!(state.current_index("python"), 0);
}

#[test]
fn at_most_one_gallery_is_active() {
    let mut state = GalleryState::default();
    state.activate("python");
    state.activate("go");
    assert!(!state.is_active("python"));
    assert!(state.is_active("go"));
    assert_eq!(state.active_gallery(), Some("go"));
}

#[test]
fn galleries_track_positions_independently() {
    let mut state = GalleryState::default();
    state.activate("python");
    state.step("python", 1, 5);
    state.activate("go");
    state.step("go", 1, 3);
    state.step("go", 1, 3);

    assert_eq!(state.current_index("python"), 1);
    assert_eq!(state.current_index("go"), 2);
}

#[test]
fn empty_galleries_never_move() {
    let mut state = GalleryState::default();
    state.activate("empty");
    state.step("empty", 1, 0);
    state.step("empty", -1, 0);
    state.jump("empty", 7, 0);
    assert_eq!(state.current_index("empty"), 0);
}

#[test]
fn jump_clamps_out_of_range_indices() {
    let mut state = GalleryState::default();
    state.jump("python", 99, 5);
    assert_eq!(state.current_index("python"), 4);
}

#[test]
fn unseen_galleries_report_index_zero() {
    let state = GalleryState::default();
    assert_eq!(state.current_index("never-activated"), 0);
    assert!(!state.is_active("never-activated"));
}
