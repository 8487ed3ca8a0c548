//! Property tests: TTL correctness against the store.

use proptest::prelude::*;

use rapport_core::models::NewSnapshot;
use rapport_core::traits::ISnapshotStore;
use rapport_storage::StorageEngine;
use serde_json::json;

proptest! {
    #[test]
    fn prop_snapshot_valid_exactly_before_expiry(
        created in 0i64..4_000_000_000_000,
        ttl in 1u64..10_000_000,
        probe in 0u64..20_000_000,
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let new = NewSnapshot::new("agent", None, "src", "scope", json!({}), json!({}), ttl);
        store.create_at(&new, created).unwrap();

        let now = created + probe as i64;
        let found = store.find_valid_at("agent", "src", None, now).unwrap();
        prop_assert_eq!(found.is_some(), probe < ttl);
    }

    #[test]
    fn prop_zero_ttl_valid_at_any_later_time(
        created in 0i64..4_000_000_000_000,
        probe in 0i64..1_000_000_000_000,
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let new = NewSnapshot::new("agent", Some("op"), "src", "scope", json!({}), json!({}), 0);
        store.create_at(&new, created).unwrap();
        prop_assert!(store.find_valid_at("agent", "src", Some("op"), created + probe).unwrap().is_some());
    }

    #[test]
    fn prop_sweep_removes_exactly_the_expired(
        ttls in proptest::collection::vec(0u64..5_000, 1..12),
        now_offset in 0i64..6_000,
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        for (i, ttl) in ttls.iter().enumerate() {
            let new = NewSnapshot::new("agent", None, format!("src-{i}"), "scope", json!({}), json!({}), *ttl);
            store.create_at(&new, 0).unwrap();
        }
        let expected = ttls
            .iter()
            .filter(|ttl| **ttl > 0 && (**ttl as i64) <= now_offset)
            .count();
        prop_assert_eq!(store.delete_expired_at(now_offset).unwrap(), expected);
        prop_assert_eq!(store.snapshot_count().unwrap(), ttls.len() - expected);
    }
}
