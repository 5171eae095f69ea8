use staffdeck_lib::pagination::{Pager, PageItem, advance, retreat, visible_pages};

fn pages_of(items: &[PageItem]) -> Vec<u32> {
    items
        .iter()
        .filter_map(|item| match item {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        })
        .collect()
}

fn ellipsis_count(items: &[PageItem]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item, PageItem::Ellipsis))
        .count()
}

#[test]
fn test_single_page() {
    assert_eq!(visible_pages(1, 1), vec![PageItem::Page(1)]);
}

#[test]
fn test_zero_total_pages() {
    assert_eq!(visible_pages(1, 0), vec![PageItem::Page(1)]);
}

#[test]
fn test_small_range_has_no_ellipsis() {
    assert_eq!(
        visible_pages(2, 3),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[test]
fn test_large_range_has_ellipsis() {
    let items = visible_pages(5, 20);
    let pages = pages_of(&items);
    assert!(pages.contains(&1));
    assert!(pages.contains(&5));
    assert!(pages.contains(&20));
    assert!(ellipsis_count(&items) >= 1);
}

#[test]
fn test_middle_page_keeps_both_ellipses() {
    let items = visible_pages(10, 20);
    assert_eq!(ellipsis_count(&items), 2);
    assert_eq!(pages_of(&items), vec![1, 8, 9, 10, 11, 12, 20]);
}

#[test]
fn test_current_page_at_beginning() {
    let items = visible_pages(1, 10);
    assert_eq!(items[0], PageItem::Page(1));
    let pages = pages_of(&items);
    assert!(pages.contains(&10));
    // Window widens to the full five pages at the left edge.
    assert_eq!(pages, vec![1, 2, 3, 4, 5, 10]);
}

#[test]
fn test_current_page_at_end() {
    let items = visible_pages(10, 10);
    assert_eq!(items.last(), Some(&PageItem::Page(10)));
    assert_eq!(pages_of(&items), vec![1, 6, 7, 8, 9, 10]);
}

#[test]
fn test_near_end_shows_last_pages() {
    let pages = pages_of(&visible_pages(19, 20));
    assert!(pages.contains(&18));
    assert!(pages.contains(&19));
    assert!(pages.contains(&20));
}

#[test]
fn test_window_invariants_hold_for_all_small_inputs() {
    for total in 0..=200u32 {
        for current in 1..=total.max(1) {
            let items = visible_pages(current, total);
            let pages = pages_of(&items);

            assert_eq!(pages[0], 1, "page 1 missing for {current}/{total}");
            if total > 1 {
                assert!(
                    pages.contains(&total),
                    "last page missing for {current}/{total}"
                );
            }

            let mut unique = pages.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), pages.len(), "duplicate page in {current}/{total}");

            assert!(items.len() <= 9, "window too long for {current}/{total}");
            assert!(ellipsis_count(&items) <= 2);
        }
    }
}

#[test]
fn test_out_of_range_current_page_is_accepted() {
    // Degenerate but defined: the window is computed from the given value.
    let items = visible_pages(50, 10);
    assert_eq!(items[0], PageItem::Page(1));
    assert!(pages_of(&items).contains(&10));
}

#[test]
fn test_advance_clamps_at_total() {
    assert_eq!(advance(3, 5), 4);
    assert_eq!(advance(5, 5), 5);
    assert_eq!(advance(10, 5), 10);
}

#[test]
fn test_retreat_clamps_at_one() {
    assert_eq!(retreat(3), 2);
    assert_eq!(retreat(1), 1);
}

#[test]
fn test_pager_notifies_on_advance_and_retreat() {
    let mut pager = Pager::new(5);
    let mut rx = pager.subscribe();

    assert_eq!(pager.advance(), 2);
    assert_eq!(rx.try_recv(), Some(2));

    assert_eq!(pager.retreat(), 1);
    assert_eq!(rx.try_recv(), Some(1));
}

#[test]
fn test_pager_boundary_moves_do_not_notify() {
    let mut pager = Pager::new(3);
    let mut rx = pager.subscribe();

    assert_eq!(pager.retreat(), 1);
    assert_eq!(rx.try_recv(), None);

    pager.jump_to(3);
    let _ = rx.try_recv();
    assert_eq!(pager.advance(), 3);
    assert_eq!(rx.try_recv(), None);
}

#[test]
fn test_pager_jump_is_verbatim_and_always_notifies() {
    let mut pager = Pager::new(5);
    let mut rx = pager.subscribe();

    assert_eq!(pager.jump_to(4), 4);
    assert_eq!(rx.try_recv(), Some(4));

    // No bounds validation at this layer.
    assert_eq!(pager.jump_to(99), 99);
    assert_eq!(rx.try_recv(), Some(99));
}

#[test]
fn test_pager_visible_follows_current_page() {
    let mut pager = Pager::new(20);
    pager.jump_to(10);
    assert_eq!(pager.visible(), visible_pages(10, 20));
}
