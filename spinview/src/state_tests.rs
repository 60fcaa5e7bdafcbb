use crate::{CanvasSize, DragMove, Step, ViewerState, wrap_index};

fn dragging(frame_count: usize, x: i32) -> ViewerState {
    let mut state = ViewerState::new(frame_count);
    state.drag_start(x);
    state
}

#[test]
fn wrap_index_handles_negative_and_overflowing_values() {
    assert_eq!(wrap_index(-1, 36), 35);
    assert_eq!(wrap_index(36, 36), 0);
    assert_eq!(wrap_index(-37, 36), 35);
    assert_eq!(wrap_index(73, 36), 1);
    assert_eq!(wrap_index(-1, 1), 0);
    assert_eq!(wrap_index(5, 0), 0);
}

#[test]
fn moves_are_ignored_until_drag_starts() {
    let mut state = ViewerState::new(36);
    assert_eq!(state.drag_move(10), DragMove::Inactive);
    assert_eq!(state.frame_index(), 0);
}

#[test]
fn drag_left_wraps_to_last_frame_then_right_back_to_first() {
    let mut state = dragging(36, 100);

    let moved = state.drag_move(80);
    assert_eq!(
        moved,
        DragMove::Moved {
            step: Some(Step::Backward),
            frame_index: 35
        }
    );
    assert_eq!(state.frame_index(), 35);

    state.drag_move(90);
    assert_eq!(state.frame_index(), 0);
}

#[test]
fn step_size_ignores_distance() {
    let mut state = dragging(36, 0);
    state.drag_move(1);
    assert_eq!(state.frame_index(), 1);
    state.drag_move(5_000);
    assert_eq!(state.frame_index(), 2);
}

#[test]
fn equal_coordinate_is_absorbed() {
    let mut state = dragging(36, 50);
    let moved = state.drag_move(50);
    assert_eq!(
        moved,
        DragMove::Moved {
            step: None,
            frame_index: 0
        }
    );
    assert!(moved.needs_redraw());
    assert_eq!(state.frame_index(), 0);
}

#[test]
fn anchor_follows_the_last_observed_point() {
    let mut state = dragging(36, 100);
    state.drag_move(120);
    assert_eq!(state.drag().anchor_x, 120);
    // 110 is right of the original start but left of the new anchor.
    state.drag_move(110);
    assert_eq!(state.frame_index(), 0);
}

#[test]
fn balanced_moves_return_to_start() {
    let mut state = dragging(7, 0);
    let xs: [i32; 10] = [3, 9, 4, 2, 8, 1, 0, 6, 5, 5];
    let mut net = 0isize;
    let mut prev: i32 = 0;
    for x in xs {
        net += (x - prev).signum() as isize;
        prev = x;
        state.drag_move(x);
    }
    assert_eq!(net, -1);
    state.drag_move(6);
    assert_eq!(state.frame_index(), 0);
}

#[test]
fn index_stays_in_range_for_every_ring_size() {
    // Deterministic pseudo-random walk, several ring sizes.
    for frame_count in [1usize, 2, 3, 36, 100] {
        let mut state = dragging(frame_count, 0);
        let mut seed: u32 = 0x2545_f491;
        let mut x = 0i32;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            x += (seed % 41) as i32 - 20;
            state.drag_move(x);
            assert!(state.frame_index() < frame_count);
        }
    }
}

#[test]
fn drag_end_keeps_index_and_anchor() {
    let mut state = dragging(36, 10);
    state.drag_move(20);
    state.drag_end();
    assert!(!state.is_dragging());
    assert_eq!(state.frame_index(), 1);
    assert_eq!(state.drag().anchor_x, 20);
    assert_eq!(state.drag_move(0), DragMove::Inactive);
    assert_eq!(state.frame_index(), 1);
}

#[test]
fn canvas_size_is_viewport_over_divisor() {
    let size = CanvasSize::from_viewport(1200.0, 600.0, 1.2);
    assert!((size.width - 1000.0).abs() < 1e-9);
    assert!((size.height - 500.0).abs() < 1e-9);

    let size = CanvasSize::from_viewport(1000.0, 701.0, 1.2);
    assert_eq!(size.pixel_width(), 833);
    assert_eq!(size.pixel_height(), 584);
}
