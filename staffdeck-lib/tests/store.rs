use std::sync::Arc;

use chrono::NaiveDate;
use staffdeck_lib::error::StoreError;
use staffdeck_lib::locale::Locale;
use staffdeck_lib::model::{Department, EmployeeDraft, Position};
use staffdeck_lib::prefs::{MemoryPrefsBackend, PrefsProvider};
use staffdeck_lib::store::{EmployeeStore, MemoryEmployeeBackend, StoreEvent};

fn draft(n: u32) -> EmployeeDraft {
    EmployeeDraft {
        first_name: format!("First{n}"),
        last_name: format!("Last{n}"),
        employment_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        phone: format!("+90 555 444 {:02} {:02}", n / 100, n % 100),
        email: format!("person{n}@example.com"),
        department: Department::Tech,
        position: Position::Junior,
    }
}

async fn open_store() -> EmployeeStore {
    let backend = Arc::new(MemoryEmployeeBackend::new());
    let prefs = PrefsProvider::new(MemoryPrefsBackend::new());
    EmployeeStore::open(backend, prefs).await.unwrap()
}

#[tokio::test]
async fn test_add_and_query() {
    let mut store = open_store().await;

    let id = store.add(draft(1)).await.unwrap();

    assert_eq!(store.len(), 1);
    let found = store.find_by_id(id).unwrap();
    assert_eq!(found.first_name, "First1");
    assert!(store.find_by_email("person1@example.com").is_some());
    assert!(store.find_by_phone("+90 555 444 00 01").is_some());
}

#[tokio::test]
async fn test_assigned_ids_are_unique() {
    let mut store = open_store().await;

    let a = store.add(draft(1)).await.unwrap();
    let b = store.add(draft(2)).await.unwrap();

    assert_ne!(a, b);
    assert!(store.employees().windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_add_rejects_duplicate_email() {
    let mut store = open_store().await;
    store.add(draft(1)).await.unwrap();

    let mut dup = draft(2);
    dup.email = "person1@example.com".into();

    assert!(matches!(
        store.add(dup).await,
        Err(StoreError::DuplicateEmail)
    ));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_add_rejects_duplicate_phone() {
    let mut store = open_store().await;
    store.add(draft(1)).await.unwrap();

    let mut dup = draft(2);
    dup.phone = "+90 555 444 00 01".into();

    assert!(matches!(
        store.add(dup).await,
        Err(StoreError::DuplicatePhone)
    ));
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let mut store = open_store().await;
    let id = store.add(draft(1)).await.unwrap();

    let mut updated = draft(1);
    updated.first_name = "Renamed".into();
    updated.position = Position::Senior;
    store.update(id, updated).await.unwrap();

    let found = store.find_by_id(id).unwrap();
    assert_eq!(found.first_name, "Renamed");
    assert_eq!(found.position, Position::Senior);
}

#[tokio::test]
async fn test_update_allows_keeping_own_email_and_phone() {
    let mut store = open_store().await;
    let id = store.add(draft(1)).await.unwrap();

    // Unchanged contact details must not count as duplicates of itself.
    store.update(id, draft(1)).await.unwrap();
}

#[tokio::test]
async fn test_update_rejects_another_records_email() {
    let mut store = open_store().await;
    store.add(draft(1)).await.unwrap();
    let id = store.add(draft(2)).await.unwrap();

    let mut stolen = draft(2);
    stolen.email = "person1@example.com".into();

    assert!(matches!(
        store.update(id, stolen).await,
        Err(StoreError::DuplicateEmail)
    ));
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let mut store = open_store().await;

    assert!(matches!(
        store.update(42, draft(1)).await,
        Err(StoreError::NotFound(42))
    ));
}

#[tokio::test]
async fn test_delete_removes_record_and_tolerates_absent_ids() {
    let mut store = open_store().await;
    let id = store.add(draft(1)).await.unwrap();

    store.delete(id).await.unwrap();
    assert!(store.is_empty());

    store.delete(id).await.unwrap();
}

#[tokio::test]
async fn test_delete_selected_clears_selection() {
    let mut store = open_store().await;
    let a = store.add(draft(1)).await.unwrap();
    let b = store.add(draft(2)).await.unwrap();
    store.add(draft(3)).await.unwrap();

    store.toggle_selected(a, true);
    store.toggle_selected(b, true);

    let removed = store.delete_selected().await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.len(), 1);
    assert_eq!(store.selected_count(), 0);
}

#[tokio::test]
async fn test_delete_selected_with_empty_selection_is_a_noop() {
    let mut store = open_store().await;
    store.add(draft(1)).await.unwrap();

    assert_eq!(store.delete_selected().await.unwrap(), 0);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_writes_survive_reopening_the_store() {
    let backend = Arc::new(MemoryEmployeeBackend::new());
    let prefs = PrefsProvider::new(MemoryPrefsBackend::new());

    let id = {
        let mut store = EmployeeStore::open(backend.clone(), prefs.clone())
            .await
            .unwrap();
        store.add(draft(1)).await.unwrap()
    };

    let store = EmployeeStore::open(backend, prefs).await.unwrap();
    assert!(store.find_by_id(id).is_some());
}

#[tokio::test]
async fn test_locale_round_trips_through_prefs() {
    let backend = Arc::new(MemoryEmployeeBackend::new());
    let prefs = PrefsProvider::new(MemoryPrefsBackend::new());

    {
        let mut store = EmployeeStore::open(backend.clone(), prefs.clone())
            .await
            .unwrap();
        assert_eq!(store.locale(), Locale::En);
        store.set_locale(Locale::Tr).await.unwrap();
    }

    let store = EmployeeStore::open(backend, prefs).await.unwrap();
    assert_eq!(store.locale(), Locale::Tr);
}

#[tokio::test]
async fn test_subscribers_hear_about_mutations() {
    let mut store = open_store().await;
    let mut rx = store.subscribe();

    let id = store.add(draft(1)).await.unwrap();
    assert_eq!(rx.try_recv(), Some(StoreEvent::EmployeesChanged));

    store.toggle_selected(id, true);
    assert_eq!(rx.try_recv(), Some(StoreEvent::SelectionChanged));

    store.set_locale(Locale::Tr).await.unwrap();
    assert_eq!(rx.try_recv(), Some(StoreEvent::LocaleChanged(Locale::Tr)));
}
