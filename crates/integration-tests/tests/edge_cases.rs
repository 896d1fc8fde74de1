//! Edge cases: duplicates, idempotent deletes, validation, persistence.

mod common;

use common::{harness, harness_at};
use paywebform_core::domain::PaymentStatus;
use paywebform_core::error::AppError;
use std::path::{Path, PathBuf};

#[tokio::test]
async fn test_duplicate_pairs_are_tolerated() {
    let h = harness().await;
    let pid = h.payments.create(9, PaymentStatus::Success).await.unwrap();

    h.queue.insert(1, pid).await.unwrap();
    h.queue.insert(1, pid).await.unwrap();

    assert_eq!(h.count_pair(1, pid).await, 2);
    assert_eq!(h.queue.load(1, 9).await.unwrap(), Some(pid));
    assert_eq!(h.queue.delete_by_pid(pid).await.unwrap(), 2);
}

#[tokio::test]
async fn test_newest_payment_wins_for_same_user() {
    let h = harness().await;
    let older = h.payments.create(9, PaymentStatus::Success).await.unwrap();
    let newer = h.payments.create(9, PaymentStatus::Success).await.unwrap();

    h.queue.insert(1, older).await.unwrap();
    h.queue.insert(1, newer).await.unwrap();

    assert_eq!(h.queue.load(1, 9).await.unwrap(), Some(newer));
}

#[tokio::test]
async fn test_deletes_are_idempotent() {
    let h = harness().await;

    assert_eq!(h.queue.delete_by_pid(12345).await.unwrap(), 0);
    assert_eq!(h.queue.delete_by_cid(12345).await.unwrap(), 0);
    assert_eq!(h.queue.delete_by_pid(12345).await.unwrap(), 0);
}

#[tokio::test]
async fn test_lookup_on_empty_queue() {
    let h = harness().await;
    assert_eq!(h.queue.load(1, 1).await.unwrap(), None);
    assert_eq!(h.queue.load(-1, 0).await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_ids_are_rejected_on_insert() {
    let h = harness().await;

    let err = h.queue.insert(0, 1).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));
    let err = h.queue.insert(1, -1).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));

    assert_eq!(h.count_by_component(0).await, 0);
}

#[tokio::test]
async fn test_queue_survives_reopen() {
    let db_path = std::env::temp_dir().join(format!(
        "paywebform_test_reopen_{}.db",
        std::process::id()
    ));
    remove_db_files(&db_path);
    let url = format!("sqlite://{}", db_path.display());

    let pid = {
        let h = harness_at(&url).await;
        let pid = h.payments.create(5, PaymentStatus::Success).await.unwrap();
        h.queue.insert(3, pid).await.unwrap();
        h.pool.close().await;
        pid
    };

    {
        let h = harness_at(&url).await;
        assert_eq!(h.queue.load(3, 5).await.unwrap(), Some(pid));
        h.pool.close().await;
    }

    remove_db_files(&db_path);
    for suffix in ["", "-wal", "-shm"] {
        assert!(!sidecar(&db_path, suffix).exists());
    }
}

fn sidecar(db_path: &Path, suffix: &str) -> PathBuf {
    let mut name = db_path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// WAL mode leaves `-wal` and `-shm` files next to the database.
fn remove_db_files(db_path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(sidecar(db_path, suffix));
    }
}
