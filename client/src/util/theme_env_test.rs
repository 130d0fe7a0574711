use super::*;

#[test]
fn stylesheet_ids_enable_matching_mode() {
    assert_eq!(stylesheet_ids(Theme::Light), (LIGHT_STYLESHEET_ID, DARK_STYLESHEET_ID));
    assert_eq!(stylesheet_ids(Theme::Dark), (DARK_STYLESHEET_ID, LIGHT_STYLESHEET_ID));
}

#[cfg(not(feature = "hydrate"))]
mod outside_browser {
    use super::*;

    #[test]
    fn document_has_no_marker() {
        let doc = BrowserDocument;
        doc.set_marker(true);
        doc.select_stylesheet(Theme::Dark);
        assert!(!doc.has_marker());
    }

    #[test]
    fn storage_reads_nothing_and_accepts_writes() {
        let store = BrowserStorage;
        assert_eq!(store.write("theme", "dark"), Ok(()));
        assert_eq!(store.read("theme"), Ok(None));
    }

    #[test]
    fn color_scheme_reports_light() {
        let scheme = BrowserColorScheme;
        assert!(!scheme.prefers_dark());
        let _subscription = scheme.subscribe(Box::new(|_| {}));
    }
}

#[test]
fn memory_store_reports_failures() {
    let store = testing::MemoryStore::default();
    store.fail_writes.set(true);
    assert_eq!(
        store.write("theme", "dark"),
        Err(ThemeError::StorageRejected { key: "theme".to_owned() })
    );
    store.fail_reads.set(true);
    assert_eq!(store.read("theme"), Err(ThemeError::StorageUnavailable));
}
