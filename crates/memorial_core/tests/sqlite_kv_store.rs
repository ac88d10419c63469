use memorial_core::db::open_db_in_memory;
use memorial_core::storage::KvWrite;
use memorial_core::{KvStore, SqliteKvStore};

#[test]
fn set_get_remove_round_trip() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&mut conn);

    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn prefix_scan_treats_wildcards_literally() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&mut conn);
    for key in ["memorial_page_a", "memorial_page_b", "memorialXpageXc", "memorial_pages_list"] {
        store.set(key, "{}").unwrap();
    }

    assert_eq!(
        store.keys_with_prefix("memorial_page_").unwrap(),
        vec!["memorial_page_a", "memorial_page_b"]
    );
}

#[test]
fn batch_applies_sets_and_removes_together() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&mut conn);
    store.set("old", "x").unwrap();

    store
        .apply(&[
            KvWrite::set("a", "1"),
            KvWrite::remove("old"),
            KvWrite::set("b", "2"),
        ])
        .unwrap();

    assert_eq!(store.get("old").unwrap(), None);
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}
