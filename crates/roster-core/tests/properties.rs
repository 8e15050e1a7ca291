//! Property tests for roster cleaning and duplicate detection.

use proptest::prelude::*;

use roster_core::{check, load, UniquenessPolicy};
use roster_model::CollisionField;
use roster_store::MemoryStore;

fn record_row(name: &str, id: &str) -> Vec<String> {
    vec![
        name.to_string(),
        id.to_string(),
        "30".to_string(),
        "Male".to_string(),
        "1A".to_string(),
        "5".to_string(),
        "1".to_string(),
        "Stable".to_string(),
        "2024-01-01 08:00:00".to_string(),
    ]
}

/// Either a populated record row or blank-row debris.
fn row_strategy() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        ("[A-Z]{3,8}", "[0-9]{6}").prop_map(|(name, id)| record_row(&name, &id)),
        Just(vec![String::new(); 9]),
        Just(vec!["  ".to_string(), String::new()]),
        Just(Vec::new()),
    ]
}

proptest! {
    /// Loading is idempotent and never yields a blank-name row, no matter
    /// how much debris the table holds.
    #[test]
    fn blank_filtering_is_idempotent(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let mut all = vec![vec!["Name".to_string(), "IC Number".to_string()]];
        all.extend(rows);
        let store = MemoryStore::with_rows(all);

        let first = load(&store).expect("first load");
        let second = load(&store).expect("second load");
        prop_assert_eq!(&first, &second);
        for index in 0..first.len() {
            let name = first.name_at(index).expect("name cell");
            prop_assert!(!name.is_empty());
        }
    }

    /// Any candidate sharing a name (case-insensitively) or an identifier
    /// (trimmed) with a roster entry collides; any fully disjoint
    /// candidate does not.
    #[test]
    fn uniqueness_is_enforced_both_ways(
        entries in prop::collection::btree_map("[A-Z]{3,8}", "[0-9]{6}", 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let entries: Vec<(String, String)> = entries.into_iter().collect();
        let mut rows = vec![vec!["Name".to_string(), "IC Number".to_string()]];
        for (name, id) in &entries {
            rows.push(record_row(name, id));
        }
        let roster = load(&MemoryStore::with_rows(rows)).expect("load");

        let (name, id) = &entries[pick.index(entries.len())];

        // Same name, different case and padding: must collide on name.
        let hit = check(
            &format!(" {} ", name.to_lowercase()),
            "X-no-such-id",
            &roster,
            None,
            UniquenessPolicy::Both,
        );
        prop_assert!(matches!(hit, Some(CollisionField::Name) | Some(CollisionField::Both)));

        // Same identifier with padding: must collide on identifier.
        let hit = check(
            "NAMEWITH9",
            &format!("  {id}  "),
            &roster,
            None,
            UniquenessPolicy::Both,
        );
        prop_assert!(matches!(hit, Some(CollisionField::Identifier) | Some(CollisionField::Both)));

        // Disjoint by construction: generated names are 3-8 uppercase
        // letters and ids 6 digits; these can match neither.
        let hit = check("NAMEWITH9", "X-no-such-id", &roster, None, UniquenessPolicy::Both);
        prop_assert_eq!(hit, None);
    }
}
