//! Property tests for the registry and filter engine

use keystore::{MemoryStorage, Storage};
use launchpad::registry::DEFAULT_KEY;
use launchpad::{
    Category, CategoryFilter, LoadOutcome, Registry, RegistryError, ToolDraft, ToolId, ToolPatch, filter_by_category,
    search,
};
use proptest::prelude::*;
use proptest::sample::select;

fn category() -> impl Strategy<Value = Category> {
    select(Category::ALL.to_vec())
}

fn category_filter() -> impl Strategy<Value = CategoryFilter> {
    select(CategoryFilter::ALL_FILTERS.to_vec())
}

fn draft() -> impl Strategy<Value = ToolDraft> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,15}",
        "(https?://)?[a-z]{1,10}\\.(com|io|dev)(/[a-z0-9]{0,6})?",
        proptest::option::of("[a-z ]{0,20}"),
        category(),
    )
        .prop_map(|(name, url, description, category)| {
            let mut draft = ToolDraft::new(name, url).with_category(category);
            draft.description = description;
            draft
        })
}

fn registry_with(drafts: Vec<ToolDraft>) -> Registry<MemoryStorage> {
    let (mut registry, _) = Registry::load(MemoryStorage::new());
    for draft in drafts {
        let _ = registry.create(draft).expect("generated drafts are valid");
    }
    registry
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn create_assigns_unique_id_and_scheme(drafts in prop::collection::vec(draft(), 1..20)) {
        let registry = registry_with(drafts.clone());

        prop_assert_eq!(registry.len(), drafts.len());
        let mut ids: Vec<&ToolId> = registry.tools().iter().map(|t| &t.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), drafts.len());
        for tool in registry.tools() {
            prop_assert!(tool.url.starts_with("http://") || tool.url.starts_with("https://"));
        }
    }

    #[test]
    fn blank_name_or_url_rejected(
        existing in prop::collection::vec(draft(), 0..5),
        blank in "[ \t\n]{0,4}",
        valid in draft(),
        blank_name in any::<bool>(),
    ) {
        let mut registry = registry_with(existing);
        let before = registry.tools().to_vec();

        let mut bad = valid;
        if blank_name {
            bad.name = blank;
        } else {
            bad.url = blank;
        }

        let result = registry.create(bad);
        prop_assert!(matches!(result, Err(RegistryError::Validation(_))));
        prop_assert_eq!(registry.tools(), before.as_slice());
    }

    #[test]
    fn update_unknown_id_changes_nothing(existing in prop::collection::vec(draft(), 0..5), name in "[a-z]{1,8}") {
        let mut registry = registry_with(existing);
        let before = registry.tools().to_vec();
        let patch = ToolPatch { name: Some(name), ..Default::default() };

        let result = registry.update(&ToolId::from("not-a-real-id"), patch);
        prop_assert!(matches!(result, Err(RegistryError::NotFound(_))));
        prop_assert_eq!(registry.tools(), before.as_slice());
    }

    #[test]
    fn delete_twice_is_idempotent(existing in prop::collection::vec(draft(), 1..8), pick in any::<prop::sample::Index>()) {
        let mut registry = registry_with(existing);
        let id = registry.tools()[pick.index(registry.len())].id.clone();

        let first = registry.delete(&id);
        prop_assert!(first.value.is_some());
        let after_first = registry.tools().to_vec();

        let second = registry.delete(&id);
        prop_assert!(second.value.is_none());
        prop_assert!(second.is_persisted());
        prop_assert_eq!(registry.tools(), after_first.as_slice());
    }

    #[test]
    fn filter_all_is_identity(drafts in prop::collection::vec(draft(), 0..12)) {
        let registry = registry_with(drafts);
        let all = filter_by_category(registry.tools(), CategoryFilter::All);
        let expected: Vec<_> = registry.tools().iter().collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn empty_search_equals_category_filter(drafts in prop::collection::vec(draft(), 0..12), filter in category_filter()) {
        let registry = registry_with(drafts);
        prop_assert_eq!(
            search(registry.tools(), "", filter),
            filter_by_category(registry.tools(), filter)
        );
    }

    #[test]
    fn search_results_are_ordered_subset(
        drafts in prop::collection::vec(draft(), 0..12),
        query in "[a-z]{0,3}",
        filter in category_filter(),
    ) {
        let registry = registry_with(drafts);
        let found = search(registry.tools(), &query, filter);
        let pool = filter_by_category(registry.tools(), filter);

        // Every hit appears in the category pool, in the same relative order
        let mut cursor = pool.iter();
        for hit in &found {
            prop_assert!(cursor.any(|candidate| std::ptr::eq(*candidate, *hit)));
        }
    }

    #[test]
    fn persist_then_load_round_trips(drafts in prop::collection::vec(draft(), 0..12)) {
        let mut registry = registry_with(drafts);
        prop_assert!(registry.persist().is_ok());

        let stored = registry.storage().clone();
        let (reloaded, outcome) = Registry::load(stored);
        prop_assert!(matches!(outcome, LoadOutcome::Loaded(n) if n == registry.len()));
        prop_assert_eq!(reloaded.tools(), registry.tools());
    }
}

#[test]
fn create_scenario_bare_host() {
    let (mut registry, _) = Registry::load(MemoryStorage::new());
    let tool = registry.create(ToolDraft::new("X", "example.com")).unwrap().into_value();
    assert_eq!(tool.url, "https://example.com");
}

#[test]
fn create_scenario_blank_name() {
    let (mut registry, _) = Registry::load(MemoryStorage::new());
    let result = registry.create(ToolDraft::new("  ", "x.com"));
    assert!(matches!(result, Err(RegistryError::Validation(_))));
    assert!(registry.is_empty());
}

#[test]
fn load_scenario_unknown_category_discards_snapshot() {
    // Fail-open is intended: one bad record drops the whole snapshot.
    let raw = r#"[
        {"id":"1","name":"Figma","url":"https://figma.com","category":"design","createdAt":1},
        {"id":"2","name":"Odd","url":"https://odd.io","category":"nonexistent","createdAt":2}
    ]"#;
    let (registry, outcome) = Registry::load(MemoryStorage::with_value(DEFAULT_KEY, raw));
    assert!(registry.is_empty());
    assert!(matches!(outcome, LoadOutcome::Discarded(_)));
}

#[test]
fn discarded_snapshot_is_replaced_on_next_persist() {
    let mut storage = MemoryStorage::with_value(DEFAULT_KEY, "not json");
    let (mut registry, _) = Registry::load(&mut storage);
    let _ = registry.create(ToolDraft::new("Fresh", "fresh.io")).unwrap();
    drop(registry);

    let raw = storage.read(DEFAULT_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"Fresh\""));
}

#[test]
fn search_scenario_figma_and_notion() {
    let (mut registry, _) = Registry::load(MemoryStorage::new());
    let _ = registry
        .create(
            ToolDraft::new("Figma", "figma.com")
                .with_description("design tool")
                .with_category(Category::Design),
        )
        .unwrap();
    let _ = registry
        .create(
            ToolDraft::new("Notion", "notion.so")
                .with_description("notes")
                .with_category(Category::Production),
        )
        .unwrap();

    let found = search(registry.tools(), "design", CategoryFilter::All);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Figma");
}
