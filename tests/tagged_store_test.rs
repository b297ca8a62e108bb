use tableau_ngin::data_structures::tagged::{DuplicatePolicy, DuplicateTag, Inserted, TaggedStore};

#[test]
fn should_keep_insertion_order() {
    let mut store = TaggedStore::default();
    assert_eq!(store.insert("b", 2), Ok(Inserted::Appended(0)));
    assert_eq!(store.insert("a", 1), Ok(Inserted::Appended(1)));

    let tags: Vec<_> = store.iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, vec!["b", "a"]);
    assert_eq!(store.position("a"), Some(1));
    assert_eq!(store.get("a"), Some(&1));
    assert_eq!(store.get("c"), None);
}

#[test]
fn should_reject_duplicates_without_touching_the_store() {
    let mut store = TaggedStore::new(DuplicatePolicy::Reject);
    store.insert("a", 1).unwrap();

    assert_eq!(store.admits("a"), Err(DuplicateTag("a".to_string())));
    assert_eq!(store.insert("a", 2), Err(DuplicateTag("a".to_string())));
    assert_eq!(store.get("a"), Some(&1));
    assert_eq!(store.len(), 1);
}

#[test]
fn should_replace_in_place() {
    let mut store = TaggedStore::new(DuplicatePolicy::Replace);
    store.insert("a", 1).unwrap();
    store.insert("b", 2).unwrap();

    assert_eq!(store.insert("a", 3), Ok(Inserted::Replaced(0, 1)));
    assert_eq!(store.get("a"), Some(&3));
    assert_eq!(store.position("a"), Some(0));
    assert_eq!(store.len(), 2);
}

#[test]
fn should_resolve_shadowed_tags_to_the_first_entry() {
    let mut store = TaggedStore::new(DuplicatePolicy::Shadow);
    store.insert("a", 1).unwrap();
    store.insert("b", 2).unwrap();
    store.insert("a", 3).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get("a"), Some(&1));

    // the shadowed entry takes over once the first one is gone
    assert_eq!(store.remove("a"), Some(1));
    assert_eq!(store.get("a"), Some(&3));
    assert_eq!(store.position("a"), Some(1));
    assert_eq!(store.position("b"), Some(0));
}

#[test]
fn should_drain_everything() {
    let mut store = TaggedStore::default();
    store.insert("a", 1).unwrap();
    store.insert("b", 2).unwrap();

    let drained: Vec<_> = store.drain().collect();

    assert_eq!(drained, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    assert!(store.is_empty());
    assert_eq!(store.get("a"), None);
    assert_eq!(store.remove("a"), None);
}
