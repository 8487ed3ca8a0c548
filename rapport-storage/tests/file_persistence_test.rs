//! File-backed persistence: restart survival, migrations, pragmas.

use rapport_core::config::StorageConfig;
use rapport_core::hashing::{scope_hash, source_hash};
use rapport_core::models::NewSnapshot;
use rapport_core::traits::ISnapshotStore;
use rapport_storage::migrations::LATEST_VERSION;
use rapport_storage::pool::pragmas::verify_wal_mode;
use rapport_storage::StorageEngine;
use serde_json::json;

fn make_snapshot(user: &str) -> NewSnapshot {
    let input = json!({"userId": user});
    NewSnapshot::new(
        "network_action",
        None,
        source_hash("network_action", None, &input).unwrap(),
        scope_hash(&json!({"userId": user})).unwrap(),
        input,
        json!({"synthesis": "ok", "confidence": 0.7}),
        0,
    )
}

#[test]
fn snapshot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rapport.db");
    let new = make_snapshot("u1");

    {
        let store = StorageEngine::open(&path).unwrap();
        store.create(&new).unwrap();
    }

    let store = StorageEngine::open(&path).unwrap();
    let found = store
        .find_valid("network_action", &new.source_hash, None)
        .unwrap()
        .unwrap();
    assert_eq!(found.output["confidence"], json!(0.7));
}

#[test]
fn reads_go_through_read_pool_and_see_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = StorageEngine::open(&dir.path().join("rapport.db")).unwrap();
    for user in ["u1", "u2", "u3", "u4", "u5"] {
        store.create(&make_snapshot(user)).unwrap();
    }
    // More reads than pool connections exercises the round-robin.
    for user in ["u1", "u2", "u3", "u4", "u5", "u1", "u2", "u3", "u4", "u5"] {
        let new = make_snapshot(user);
        assert!(store
            .find_valid("network_action", &new.source_hash, None)
            .unwrap()
            .is_some());
    }
    assert_eq!(store.snapshot_count().unwrap(), 5);
}

#[test]
fn migrations_reach_latest_and_are_not_reapplied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rapport.db");
    {
        let store = StorageEngine::open(&path).unwrap();
        assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
    }
    let store = StorageEngine::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn wal_mode_follows_config() {
    let dir = tempfile::tempdir().unwrap();

    let wal = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    assert!(wal.pool().writer.with_conn(verify_wal_mode).unwrap());

    let config = StorageConfig {
        wal_mode: false,
        ..StorageConfig::default()
    };
    let rollback = StorageEngine::open_with_config(&dir.path().join("rollback.db"), &config).unwrap();
    assert!(!rollback.pool().writer.with_conn(verify_wal_mode).unwrap());
}

#[test]
fn maintenance_keeps_database_healthy() {
    let dir = tempfile::tempdir().unwrap();
    let store = StorageEngine::open(&dir.path().join("rapport.db")).unwrap();
    store.create(&make_snapshot("u1")).unwrap();
    store.checkpoint().unwrap();
    assert!(store.integrity_check().unwrap());
}
