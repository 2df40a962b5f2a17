use std::fs;

use macdiff_common::error::Error;
use macdiff_common::snapshot::SnapshotKind;
use macdiff_common::storage::SnapshotStore;
use macdiff_core::service::ValidationService;
use macdiff_core::store::FsSnapshotStore;
use macdiff_core::vendors::NoVendors;
use tempfile::TempDir;

use crate::fixtures::{MISSING_MAC, MOVED_MAC, POST_DUMP, PRE_DUMP};

fn service(dir: &TempDir) -> ValidationService {
    let store = FsSnapshotStore::open(dir.path()).unwrap();
    ValidationService::new(
        Box::new(store),
        Box::new(NoVendors),
        dir.path().join("reports"),
    )
}

#[test]
fn full_cutover_validation_flow() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);

    // Capture both sides; the pre dump carries one mangled record.
    let pre = svc
        .import("sw-floor3", SnapshotKind::Pre, PRE_DUMP, false)
        .unwrap();
    assert_eq!(pre.meta.entry_count, 3);
    assert_eq!(pre.rejects.len(), 1);
    assert!(matches!(pre.rejects[0], Error::MalformedEntry { line: 9, .. }));

    let post = svc
        .import("sw-floor3-new", SnapshotKind::Post, POST_DUMP, false)
        .unwrap();
    assert_eq!(post.meta.entry_count, 3);
    assert!(post.rejects.is_empty());

    // Both snapshots are on disk and listed.
    let listing = svc.list().unwrap();
    assert_eq!(listing.len(), 2);

    // The diff finds one of everything.
    let (result, paths) = svc.compare("sw-floor3", "sw-floor3-new").unwrap();
    assert_eq!(result.retained.len(), 2);
    assert_eq!(result.missing.len(), 1);
    assert_eq!(result.added.len(), 1);
    assert_eq!(result.missing[0].mac.to_string(), MISSING_MAC);

    let moved = result
        .retained
        .iter()
        .find(|entry| entry.mac.to_string() == MOVED_MAC)
        .unwrap();
    assert_eq!(moved.moved.as_ref().unwrap().describe(), "Gi1/0/3 -> Gi1/0/7");

    // The artifacts landed and name the failure.
    let body = fs::read_to_string(&paths.text).unwrap();
    assert!(body.contains("missing  : 1"));
    assert!(body.contains(MISSING_MAC));
    assert_eq!(svc.latest_report().unwrap().unwrap(), paths.text);

    // Deleting a snapshot makes later selections fail cleanly.
    svc.delete("sw-floor3").unwrap();
    let err = svc.compare("sw-floor3", "sw-floor3-new").unwrap_err();
    assert!(matches!(err, Error::SnapshotNotFound { name } if name == "sw-floor3"));
}

#[test]
fn failed_cutover_reports_every_endpoint_missing() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);

    svc.import("before", SnapshotKind::Pre, PRE_DUMP, false)
        .unwrap();
    // The new switch came up with an empty table: legitimate input,
    // catastrophic outcome.
    svc.import("after", SnapshotKind::Post, "", false).unwrap();

    let (result, _) = svc.compare("before", "after").unwrap();
    assert!(result.retained.is_empty());
    assert!(result.added.is_empty());
    assert_eq!(result.missing.len(), 3);
    assert!(!result.is_clean());
}

#[test]
fn comparison_is_regenerable_from_the_snapshots() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);

    svc.import("before", SnapshotKind::Pre, PRE_DUMP, false)
        .unwrap();
    svc.import("after", SnapshotKind::Post, POST_DUMP, false)
        .unwrap();

    let (first, first_paths) = svc.compare("before", "after").unwrap();
    let first_body = fs::read_to_string(&first_paths.text).unwrap();

    let (second, second_paths) = svc.compare("before", "after").unwrap();
    let second_body = fs::read_to_string(&second_paths.text).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_body, second_body);
}

#[test]
fn snapshots_survive_reopening_the_store() {
    let dir = TempDir::new().unwrap();

    {
        let svc = service(&dir);
        svc.import("persisted", SnapshotKind::Pre, POST_DUMP, false)
            .unwrap();
    }

    // A fresh store over the same folder sees the same snapshot.
    let store = FsSnapshotStore::open(dir.path()).unwrap();
    let snapshot = store.get("persisted").unwrap();
    assert_eq!(snapshot.meta.entry_count, 3);
    assert_eq!(snapshot.entries[0].mac.to_string(), "aa:bb:cc:dd:ee:01");
}

#[test]
fn wrong_kind_selection_is_refused_end_to_end() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);

    svc.import("a", SnapshotKind::Post, POST_DUMP, false).unwrap();
    svc.import("b", SnapshotKind::Post, POST_DUMP, false).unwrap();

    let err = svc.compare("a", "b").unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: SnapshotKind::Pre,
            actual: SnapshotKind::Post,
            ..
        }
    ));
}
