use staffdeck_lib::locale::Locale;
use staffdeck_lib::prefs::{MemoryPrefsBackend, PrefsProvider, ViewMode, keys};

fn provider() -> PrefsProvider {
    PrefsProvider::new(MemoryPrefsBackend::new())
}

#[tokio::test]
async fn test_missing_key_reads_as_none() {
    let prefs = provider();
    let value: Option<Locale> = prefs.get(keys::LOCALE).await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_get_or_falls_back_to_the_default() {
    let prefs = provider();
    let mode = prefs.get_or(keys::VIEW_MODE, ViewMode::Table).await.unwrap();
    assert_eq!(mode, ViewMode::Table);
}

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let prefs = provider();

    prefs.set(keys::LOCALE, &Locale::Tr).await.unwrap();
    prefs.set(keys::VIEW_MODE, &ViewMode::Cards).await.unwrap();

    assert_eq!(prefs.get(keys::LOCALE).await.unwrap(), Some(Locale::Tr));
    assert_eq!(
        prefs.get(keys::VIEW_MODE).await.unwrap(),
        Some(ViewMode::Cards)
    );
}

#[tokio::test]
async fn test_delete_removes_the_key() {
    let prefs = provider();

    prefs.set(keys::LOCALE, &Locale::Tr).await.unwrap();
    prefs.delete(keys::LOCALE).await.unwrap();

    let value: Option<Locale> = prefs.get(keys::LOCALE).await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_view_mode_toggles_between_the_two_layouts() {
    assert_eq!(ViewMode::Table.toggled(), ViewMode::Cards);
    assert_eq!(ViewMode::Cards.toggled(), ViewMode::Table);
}
