use staffdeck_lib::selection::{HeaderState, Selection};

#[test]
fn test_empty_loaded_slice_is_never_all_selected() {
    let mut selection = Selection::new();
    selection.toggle_one(1, true);
    selection.toggle_one(2, true);

    assert!(!selection.is_all_selected(&[]));
    assert_eq!(selection.header_state(&[]), HeaderState::Disabled);
}

#[test]
fn test_toggle_all_selects_exactly_the_loaded_rows() {
    let mut selection = Selection::new();
    selection.toggle_all(&[1, 2, 3], true);

    assert!(selection.is_all_selected(&[1, 2, 3]));
    assert_eq!(selection.ids(), vec![1, 2, 3]);
}

#[test]
fn test_toggle_all_unchecked_clears_everything() {
    let mut selection = Selection::new();
    selection.toggle_all(&[1, 2, 3], true);
    selection.toggle_all(&[1, 2, 3], false);

    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_replaces_prior_selection() {
    // Last-write-wins: selecting all on one page discards selections made
    // while viewing another page.
    let mut selection = Selection::new();
    selection.toggle_all(&[1, 2, 3], true);
    selection.toggle_all(&[4, 5], true);

    assert_eq!(selection.ids(), vec![4, 5]);
    assert!(!selection.is_selected(1));
}

#[test]
fn test_toggle_one_is_idempotent() {
    let mut selection = Selection::new();

    selection.toggle_one(7, true);
    selection.toggle_one(7, true);
    assert_eq!(selection.len(), 1);

    selection.toggle_one(7, false);
    selection.toggle_one(7, false);
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_one_leaves_other_rows_alone() {
    let mut selection = Selection::new();
    selection.toggle_all(&[1, 2, 3], true);
    selection.toggle_one(2, false);

    assert_eq!(selection.ids(), vec![1, 3]);
}

#[test]
fn test_partial_selection_collapses_to_unchecked() {
    let mut selection = Selection::new();
    selection.toggle_one(1, true);

    assert_eq!(selection.header_state(&[1, 2]), HeaderState::NoneSelected);
    assert!(!selection.is_all_selected(&[1, 2]));
}

#[test]
fn test_full_selection_checks_the_header() {
    let mut selection = Selection::new();
    selection.toggle_one(1, true);
    selection.toggle_one(2, true);

    assert_eq!(selection.header_state(&[1, 2]), HeaderState::AllSelected);
}

#[test]
fn test_selection_survives_ids_outside_the_loaded_slice() {
    // Off-page ids stay in the set; they just never match the slice.
    let mut selection = Selection::new();
    selection.toggle_one(99, true);

    assert_eq!(selection.header_state(&[1, 2]), HeaderState::NoneSelected);
    assert!(selection.is_selected(99));
}

#[test]
fn test_set_replaces_wholesale() {
    let mut selection = Selection::new();
    selection.toggle_one(1, true);
    selection.set(vec![5, 4, 5]);

    assert_eq!(selection.ids(), vec![4, 5]);
}
