//! Tests for the pagination engine.

use super::PageMarker::{LeadingEllipsis, Page, TrailingEllipsis};
use super::*;

fn size(n: usize) -> PageSize {
    PageSize::new(n).expect("positive page size")
}

fn numbers(markers: &[PageMarker]) -> Vec<Option<usize>> {
    markers.iter().map(|m| m.page()).collect()
}

// ===== PageSize =====

#[test]
fn page_size_rejects_zero() {
    assert_eq!(PageSize::new(0), Err(PaginationError::InvalidPageSize(0)));
}

#[test]
fn page_size_rejects_negative() {
    assert_eq!(
        PageSize::try_from(-3),
        Err(PaginationError::InvalidPageSize(-3))
    );
    assert_eq!(
        PageSize::try_from(0_i64),
        Err(PaginationError::InvalidPageSize(0))
    );
}

#[test]
fn page_size_accepts_positive() {
    assert_eq!(PageSize::try_from(25_i64).map(PageSize::get), Ok(25));
}

// ===== Slicing =====

#[test]
fn third_page_of_twenty_three_items() {
    let items: Vec<u32> = (1..=23).collect();

    let state = paginate(&items, size(5), 3);

    assert_eq!(state.current_items(), &[11, 12, 13, 14, 15]);
    assert_eq!(state.total_pages(), 5);
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.item_range(), Some((11, 15)));
}

#[test]
fn last_page_is_truncated() {
    let items: Vec<u32> = (1..=23).collect();

    let state = paginate(&items, size(5), 5);

    assert_eq!(state.current_items(), &[21, 22, 23]);
    assert_eq!(state.item_range(), Some((21, 23)));
    assert!(!state.has_next());
}

#[test]
fn empty_collection_has_one_empty_page() {
    let items: Vec<u32> = Vec::new();

    let state = paginate(&items, size(10), 4);

    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.current_page(), 1);
    assert!(state.current_items().is_empty());
    assert_eq!(state.item_range(), None);
    assert_eq!(state.page_numbers(), &[Page(1)]);
}

#[test]
fn exact_multiple_has_no_trailing_empty_page() {
    let items: Vec<u32> = (1..=20).collect();
    assert_eq!(paginate(&items, size(5), 1).total_pages(), 4);
}

// ===== Clamping =====

#[test]
fn request_beyond_last_page_clamps_to_last() {
    let items: Vec<u32> = (1..=23).collect();
    let state = paginate(&items, size(5), 99);
    assert_eq!(state.current_page(), 5);
}

#[test]
fn request_below_one_clamps_to_first() {
    let items: Vec<u32> = (1..=23).collect();
    assert_eq!(paginate(&items, size(5), 0).current_page(), 1);
    assert_eq!(paginate(&items, size(5), -7).current_page(), 1);
    assert_eq!(paginate(&items, size(5), i64::MIN).current_page(), 1);
}

#[test]
fn clamp_page_handles_extremes() {
    assert_eq!(clamp_page(i64::MAX, 3), 3);
    assert_eq!(clamp_page(2, 0), 1);
}

// ===== Navigation =====

#[test]
fn next_and_prev_move_one_page() {
    let items: Vec<u32> = (1..=23).collect();
    let state = paginate(&items, size(5), 2);

    assert_eq!(state.next_page().current_page(), 3);
    assert_eq!(state.prev_page().current_page(), 1);
}

#[test]
fn next_and_prev_stop_at_boundaries() {
    let items: Vec<u32> = (1..=23).collect();

    let first = paginate(&items, size(5), 1);
    assert!(!first.has_prev());
    assert_eq!(first.prev_page().current_page(), 1);

    let last = paginate(&items, size(5), 5);
    assert_eq!(last.next_page().current_page(), 5);
}

#[test]
fn go_to_page_recomputes_and_clamps() {
    let items: Vec<u32> = (1..=23).collect();
    let state = paginate(&items, size(5), 1);

    let moved = state.go_to_page(4);
    assert_eq!(moved.current_items(), &[16, 17, 18, 19, 20]);
    assert_eq!(state.go_to_page(42).current_page(), 5);
    // the original state is untouched
    assert_eq!(state.current_page(), 1);
}

// ===== Page-number index =====

#[test]
fn few_pages_list_everything() {
    for current in 1..=4 {
        assert_eq!(
            page_numbers(4, current),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }
}

#[test]
fn five_pages_list_everything() {
    assert_eq!(numbers(&page_numbers(5, 3)), vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

#[test]
fn middle_page_has_both_ellipses() {
    assert_eq!(
        page_numbers(10, 6),
        vec![
            Page(1),
            LeadingEllipsis,
            Page(5),
            Page(6),
            Page(7),
            TrailingEllipsis,
            Page(10)
        ]
    );
}

#[test]
fn window_near_start_is_two_to_four() {
    for current in 1..=3 {
        assert_eq!(
            page_numbers(10, current),
            vec![Page(1), Page(2), Page(3), Page(4), TrailingEllipsis, Page(10)],
            "current page {current}"
        );
    }
}

#[test]
fn window_near_end_is_last_three_before_final() {
    for current in 8..=10 {
        assert_eq!(
            page_numbers(10, current),
            vec![Page(1), LeadingEllipsis, Page(7), Page(8), Page(9), Page(10)],
            "current page {current}"
        );
    }
}

#[test]
fn six_pages_never_show_both_ellipses() {
    assert_eq!(
        page_numbers(6, 4),
        vec![Page(1), LeadingEllipsis, Page(3), Page(4), Page(5), Page(6)]
    );
    assert_eq!(
        page_numbers(6, 3),
        vec![Page(1), Page(2), Page(3), Page(4), TrailingEllipsis, Page(6)]
    );
}

#[test]
fn ellipses_are_distinct_markers() {
    assert_ne!(LeadingEllipsis, TrailingEllipsis);
    assert!(LeadingEllipsis.is_ellipsis());
    assert!(!Page(1).is_ellipsis());
    assert_eq!(LeadingEllipsis.to_string(), "…");
    assert_eq!(Page(12).to_string(), "12");
}

#[test]
fn state_page_numbers_track_current_page() {
    let items: Vec<u32> = (1..=50).collect();
    let state = paginate(&items, size(5), 6);
    assert_eq!(state.page_numbers(), page_numbers(10, 6).as_slice());
}
