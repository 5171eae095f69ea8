use std::sync::Arc;

use chrono::NaiveDate;
use staffdeck_lib::controller::{DEFAULT_PAGE_SIZE, PageController};
use staffdeck_lib::grid::GridRow;
use staffdeck_lib::model::{Department, EmployeeDraft, Position};
use staffdeck_lib::pagination::PageItem;
use staffdeck_lib::prefs::{MemoryPrefsBackend, PrefsProvider};
use staffdeck_lib::store::{EmployeeStore, MemoryEmployeeBackend};

fn draft(n: u32) -> EmployeeDraft {
    EmployeeDraft {
        first_name: format!("First{n}"),
        last_name: format!("Last{n}"),
        employment_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        phone: format!("+90 555 444 {:02} {:02}", n / 100, n % 100),
        email: format!("person{n}@example.com"),
        department: Department::Analytics,
        position: Position::Medior,
    }
}

async fn store_with(count: u32) -> EmployeeStore {
    let backend = Arc::new(MemoryEmployeeBackend::new());
    let prefs = PrefsProvider::new(MemoryPrefsBackend::new());
    let mut store = EmployeeStore::open(backend, prefs).await.unwrap();
    for n in 1..=count {
        store.add(draft(n)).await.unwrap();
    }
    store
}

#[test]
fn test_total_pages_rounds_up() {
    let controller = PageController::new(10);
    assert_eq!(controller.total_pages(0), 0);
    assert_eq!(controller.total_pages(10), 1);
    assert_eq!(controller.total_pages(23), 3);
}

#[test]
fn test_page_slice_windows_the_items() {
    let items: Vec<u32> = (0..23).collect();
    let mut controller = PageController::new(10);

    assert_eq!(controller.page_slice(&items).len(), 10);

    controller.set_page(3, items.len());
    assert_eq!(controller.page_slice(&items), &[20, 21, 22]);
}

#[test]
fn test_set_page_clamps_out_of_range_targets() {
    let mut controller = PageController::new(10);

    controller.set_page(7, 23);
    assert_eq!(controller.current_page(), 3);

    controller.set_page(0, 23);
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn test_reclamp_after_shrinking_data() {
    let mut controller = PageController::new(10);
    controller.set_page(3, 23);

    // Deleting down to 1 page pulls the current page back in range.
    controller.reclamp(5);
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn test_empty_data_slices_to_nothing_on_page_one() {
    let mut controller = PageController::new(10);
    controller.set_page(1, 0);

    let items: Vec<u32> = Vec::new();
    assert!(controller.page_slice(&items).is_empty());
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn test_visible_pages_come_from_the_item_count() {
    let mut controller = PageController::new(10);
    controller.set_page(2, 23);

    assert_eq!(
        controller.visible_pages(23),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[tokio::test]
async fn test_select_all_then_repeat_on_next_page_replaces_selection() {
    // 23 employees at page size 10: three pages. Selecting all on page 1,
    // moving to page 2, and selecting all again must leave exactly page 2's
    // ten ids selected.
    let mut store = store_with(23).await;
    let mut controller = PageController::new(DEFAULT_PAGE_SIZE);

    assert_eq!(controller.total_pages(store.len()), 3);

    let page1: Vec<_> = controller
        .page_slice(store.employees())
        .iter()
        .map(|e| e.id())
        .collect();
    store.toggle_all(&page1, true);
    assert_eq!(store.selected_count(), 10);

    controller.set_page(2, store.len());
    let page2: Vec<_> = controller
        .page_slice(store.employees())
        .iter()
        .map(|e| e.id())
        .collect();
    store.toggle_all(&page2, true);

    assert_eq!(store.selected_ids(), page2);
    for id in page1 {
        assert!(!store.is_selected(id));
    }
}
