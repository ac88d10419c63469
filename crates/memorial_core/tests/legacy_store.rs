use memorial_core::repo::legacy_repo::{migrate_legacy_page, LoadOrigin, LEGACY_KEY};
use memorial_core::{KvStore, LegacyPageStore, MemoryKvStore, PageRepository};

#[test]
fn missing_or_unusable_document_loads_as_none() {
    let mut kv = MemoryKvStore::new();
    assert_eq!(LegacyPageStore::new(&mut kv).load().unwrap(), None);

    kv.set(LEGACY_KEY, "{oops").unwrap();
    assert_eq!(LegacyPageStore::new(&mut kv).load().unwrap(), None);

    kv.set(LEGACY_KEY, r#"{"person":{"name":""}}"#).unwrap();
    assert_eq!(LegacyPageStore::new(&mut kv).load().unwrap(), None);
}

#[test]
fn stored_document_tolerates_nulls_and_legacy_relations() {
    let mut kv = MemoryKvStore::new();
    kv.set(
        LEGACY_KEY,
        r#"{"person":{"name":"Anna","photo":null,"bio":null},
            "relatives":[{"id":"r1","name":"Maria","relation":"мать","photo":""}]}"#,
    )
    .unwrap();

    let (document, origin) = LegacyPageStore::new(&mut kv).load_or_seed().unwrap();
    assert_eq!(origin, LoadOrigin::Stored);
    assert_eq!(document.person.bio, "");
    assert_eq!(document.relatives[0].relation.as_str(), "mother");
    assert_eq!(document.relatives[0].photo, None);
}

#[test]
fn migration_copies_document_into_index_and_keeps_legacy_key() {
    let mut kv = MemoryKvStore::new();
    assert_eq!(migrate_legacy_page(&mut kv).unwrap(), None);

    LegacyPageStore::new(&mut kv).load_or_seed().unwrap();
    let id = migrate_legacy_page(&mut kv).unwrap().unwrap();

    let repo = PageRepository::new(&mut kv);
    let page = repo.get_page(&id).unwrap().unwrap();
    assert!(!page.relatives.is_empty());
    assert_eq!(repo.list_summaries().unwrap().len(), 1);
    assert!(kv.get(LEGACY_KEY).unwrap().is_some());
}
