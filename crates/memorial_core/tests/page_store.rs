use memorial_core::db::open_db_in_memory;
use memorial_core::model::page::{generate_page_id, NEW_PAGE_NAME};
use memorial_core::repo::page_repo::{page_key, INDEX_KEY};
use memorial_core::{
    KvStore, MemoryKvStore, Page, PageRepository, PageSeed, Person, RepoError, SqliteKvStore,
    StorageError, ValidationError,
};
use std::collections::HashSet;

fn sample_page(id: &str, name: &str) -> Page {
    Page::from_seed(
        id,
        PageSeed {
            person: Person::named(name),
            ..PageSeed::default()
        },
    )
}

fn indexed_ids<S: KvStore>(repo: &PageRepository<S>) -> Vec<String> {
    repo.list_summaries()
        .unwrap()
        .into_iter()
        .map(|summary| summary.id)
        .collect()
}

#[test]
fn save_writes_record_and_index_entry() {
    let mut repo = PageRepository::new(MemoryKvStore::new());
    let mut page = sample_page("page_1", "Anna");

    let summary = repo.save_page(&mut page).unwrap();

    assert_eq!(summary.name, "Anna");
    assert!(page.created_at.is_some());
    assert_eq!(page.created_at, page.last_modified);
    assert_eq!(repo.get_page("page_1").unwrap(), Some(page));
    assert_eq!(indexed_ids(&repo), vec!["page_1"]);
}

#[test]
fn saving_again_updates_entry_in_place_and_keeps_created_at() {
    let mut repo = PageRepository::new(MemoryKvStore::new());
    let mut first = sample_page("page_1", "Anna");
    let mut second = sample_page("page_2", "Ivan");
    repo.save_page(&mut first).unwrap();
    repo.save_page(&mut second).unwrap();
    let created_at = first.created_at;

    first.person.name = "Anna Smirnova".to_string();
    repo.save_page(&mut first).unwrap();

    let summaries = repo.list_summaries().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, "page_1");
    assert_eq!(summaries[0].name, "Anna Smirnova");
    assert_eq!(first.created_at, created_at);
    assert!(first.last_modified >= created_at);
}

#[test]
fn last_modified_never_moves_backwards() {
    let mut repo = PageRepository::new(MemoryKvStore::new());
    let mut page = sample_page("page_1", "Anna");
    let future = i64::MAX / 2;
    page.created_at = Some(future);
    page.last_modified = Some(future);

    repo.save_page(&mut page).unwrap();

    assert_eq!(page.last_modified, Some(future));
    assert_eq!(repo.list_summaries().unwrap()[0].last_modified, future);
}

#[test]
fn missing_and_unsafe_ids_read_as_absent() {
    let repo = PageRepository::new(MemoryKvStore::new());
    assert_eq!(repo.get_page("nope").unwrap(), None);
    assert_eq!(repo.get_page("../etc").unwrap(), None);
    assert_eq!(repo.get_page("").unwrap(), None);
}

#[test]
fn corrupt_record_reads_as_absent() {
    let mut kv = MemoryKvStore::new();
    kv.set(&page_key("page_1"), "{not json").unwrap();
    kv.set(&page_key("page_2"), r#"{"id":"other","person":{"name":"X"}}"#)
        .unwrap();
    let repo = PageRepository::new(&mut kv);

    assert_eq!(repo.get_page("page_1").unwrap(), None);
    assert_eq!(repo.get_page("page_2").unwrap(), None);
}

#[test]
fn save_rejects_invalid_ids_without_writing() {
    let mut repo = PageRepository::new(MemoryKvStore::new());
    for bad in ["", "has space", "data", "a/b"] {
        let mut page = sample_page(bad, "Anna");
        let err = repo.save_page(&mut page).unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::InvalidPageId(_))
        ));
    }
    assert!(repo.store().is_empty());
}

#[test]
fn delete_removes_both_halves_and_is_idempotent() {
    let mut repo = PageRepository::new(MemoryKvStore::new());
    let mut keep = sample_page("page_keep", "Keep");
    let mut gone = sample_page("page_gone", "Gone");
    repo.save_page(&mut keep).unwrap();
    repo.save_page(&mut gone).unwrap();

    assert!(repo.delete_page("page_gone").unwrap());
    assert!(!repo.delete_page("page_gone").unwrap());
    assert!(!repo.delete_page("never_existed").unwrap());

    assert_eq!(repo.get_page("page_gone").unwrap(), None);
    assert_eq!(indexed_ids(&repo), vec!["page_keep"]);
    assert_eq!(repo.record_ids().unwrap(), vec!["page_keep"]);
}

#[test]
fn create_page_uses_default_seed_and_fresh_id() {
    let mut repo = PageRepository::new(MemoryKvStore::new());

    let id = repo.create_page(PageSeed::default()).unwrap();

    assert!(id.starts_with("page_"));
    let page = repo.get_page(&id).unwrap().unwrap();
    assert_eq!(page.person.name, NEW_PAGE_NAME);
    assert!(page.relatives.is_empty());
    assert_eq!(indexed_ids(&repo), vec![id]);
}

#[test]
fn generated_ids_are_unique_and_key_safe() {
    let now = 1_700_000_000_000;
    let ids: HashSet<String> = (0..10_000).map(|_| generate_page_id(now)).collect();
    assert_eq!(ids.len(), 10_000);
    for id in &ids {
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }
}

#[test]
fn corrupt_index_is_reported_and_rebuilt_from_records() {
    let mut kv = MemoryKvStore::new();
    {
        let mut repo = PageRepository::new(&mut kv);
        let mut first = sample_page("page_a", "A");
        let mut second = sample_page("page_b", "B");
        repo.save_page(&mut first).unwrap();
        repo.save_page(&mut second).unwrap();
    }
    kv.set(INDEX_KEY, r#"{"broken":true}"#).unwrap();
    kv.set(&page_key("page_junk"), "garbage").unwrap();

    let mut repo = PageRepository::new(&mut kv);
    assert!(matches!(
        repo.list_summaries(),
        Err(RepoError::InvalidData(_))
    ));

    let rebuilt = repo.rebuild_index().unwrap();
    let ids: Vec<_> = rebuilt.iter().map(|summary| summary.id.as_str()).collect();
    assert_eq!(ids, vec!["page_a", "page_b"]);
    assert_eq!(repo.record_ids().unwrap(), vec!["page_a", "page_b"]);
}

#[test]
fn quota_failure_leaves_store_unchanged() {
    let mut repo = PageRepository::new(MemoryKvStore::with_quota(2_000));
    let mut small = sample_page("page_small", "Small");
    repo.save_page(&mut small).unwrap();
    let before = repo.store().snapshot();

    let mut big = sample_page("page_big", "Big");
    big.person.bio = "x".repeat(4_096);
    let err = repo.save_page(&mut big).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Storage(StorageError::QuotaExceeded { .. })
    ));
    assert_eq!(repo.store().snapshot(), before);
}

#[test]
fn legacy_key_is_not_treated_as_a_page_record() {
    let mut kv = MemoryKvStore::new();
    kv.set("memorial_page_data", r#"{"person":{"name":"Legacy"}}"#)
        .unwrap();
    let repo = PageRepository::new(&mut kv);
    assert!(repo.record_ids().unwrap().is_empty());
    assert_eq!(repo.get_page("data").unwrap(), None);
}

#[test]
fn sqlite_backend_keeps_index_and_records_in_step() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = PageRepository::new(SqliteKvStore::new(&mut conn));
    let mut page = sample_page("page_1", "Anna");
    repo.save_page(&mut page).unwrap();
    let id = repo.create_page(PageSeed::default()).unwrap();

    assert_eq!(indexed_ids(&repo), vec!["page_1".to_string(), id.clone()]);
    assert_eq!(repo.record_ids().unwrap().len(), 2);

    repo.delete_page("page_1").unwrap();
    assert_eq!(indexed_ids(&repo), vec![id]);
    assert_eq!(repo.get_page("page_1").unwrap(), None);
}

#[test]
fn index_matches_records_after_mixed_saves_and_deletes() {
    let mut repo = PageRepository::new(MemoryKvStore::new());
    for step in 0..30 {
        let id = format!("page_{}", step % 7);
        if step % 3 == 2 {
            repo.delete_page(&id).unwrap();
        } else {
            let mut page = sample_page(&id, &format!("Name {step}"));
            repo.save_page(&mut page).unwrap();
        }

        let mut indexed = indexed_ids(&repo);
        indexed.sort();
        assert_eq!(indexed, repo.record_ids().unwrap(), "diverged at step {step}");
        let unique: HashSet<_> = indexed.iter().collect();
        assert_eq!(unique.len(), indexed.len());
    }
}
