//! Version Monotonicity Tests
//!
//! The version ledger hands every partition a strictly increasing,
//! gap-free, duplicate-free sequence of versions, under any interleaving
//! of concurrent writers.

use std::thread;

use nimbusdb::client::Account;
use nimbusdb::session::PartitionVersion;
use nimbusdb::store::ItemPayload;
use serde_json::json;

fn payload() -> ItemPayload {
    ItemPayload::new("document", json!({ "field": "value" }))
}

// =============================================================================
// Sequential Versioning
// =============================================================================

/// Successive writes to one partition advance by exactly 1, starting at 1.
#[test]
fn test_sequential_writes_advance_by_one() {
    let account = Account::new();
    let mut client = account.connect();

    for expected in 1..=20u64 {
        let result = client
            .write(&format!("item-{}", expected), "hot", payload())
            .unwrap();
        assert_eq!(result.version, PartitionVersion::new(expected));
        assert_eq!(
            result.session_token.observed_version(),
            PartitionVersion::new(expected)
        );
    }
}

/// Partitions count independently of each other.
#[test]
fn test_partitions_version_independently() {
    let account = Account::new();
    let mut client = account.connect();

    client.write("a", "left", payload()).unwrap();
    client.write("b", "left", payload()).unwrap();
    let right = client.write("c", "right", payload()).unwrap();

    assert_eq!(right.version, PartitionVersion::new(1));
}

// =============================================================================
// Concurrent Writers, One Partition
// =============================================================================

/// Under concurrent writers, one partition's versions are exactly
/// 1..=total: no gaps, no duplicates, no wraparound.
#[test]
fn test_concurrent_writers_produce_gap_free_versions() {
    const WRITERS: usize = 8;
    const WRITES_PER_WRITER: usize = 50;

    let account = Account::new();
    let mut handles = Vec::new();

    for writer in 0..WRITERS {
        let account = account.clone();
        handles.push(thread::spawn(move || {
            let mut client = account.connect();
            let mut versions = Vec::with_capacity(WRITES_PER_WRITER);
            for i in 0..WRITES_PER_WRITER {
                let result = client
                    .write(&format!("w{}-i{}", writer, i), "hot", payload())
                    .unwrap();
                versions.push(result.version.value());
            }
            client.close();
            versions
        }));
    }

    let mut all_versions = Vec::new();
    for handle in handles {
        let versions = handle.join().unwrap();

        // Each writer's own versions are strictly increasing: a later
        // write never observes an older counter.
        for window in versions.windows(2) {
            assert!(window[0] < window[1], "non-monotonic: {:?}", window);
        }
        all_versions.extend(versions);
    }

    all_versions.sort_unstable();
    let expected: Vec<u64> = (1..=(WRITERS * WRITES_PER_WRITER) as u64).collect();
    assert_eq!(all_versions, expected);
}

/// Concurrent writers on disjoint partitions each get 1..=n.
#[test]
fn test_concurrent_writers_on_disjoint_partitions() {
    const WRITERS: usize = 6;
    const WRITES_PER_WRITER: usize = 40;

    let account = Account::new();
    let mut handles = Vec::new();

    for writer in 0..WRITERS {
        let account = account.clone();
        handles.push(thread::spawn(move || {
            let partition = format!("partition-{}", writer);
            let mut client = account.connect();
            let mut versions = Vec::with_capacity(WRITES_PER_WRITER);
            for i in 0..WRITES_PER_WRITER {
                let result = client
                    .write(&format!("item-{}", i), &partition, payload())
                    .unwrap();
                versions.push(result.version.value());
            }
            client.close();
            versions
        }));
    }

    for handle in handles {
        let versions = handle.join().unwrap();
        let expected: Vec<u64> = (1..=WRITES_PER_WRITER as u64).collect();
        assert_eq!(versions, expected);
    }
}

// =============================================================================
// Readers Alongside Writers
// =============================================================================

/// Readers running beside writers only ever observe fully applied writes:
/// every found item carries a version at or below the ledger snapshot the
/// read was served against.
#[test]
fn test_readers_never_observe_partial_writes() {
    const WRITES: usize = 200;

    let account = Account::new();
    let mut seed = account.connect();
    seed.write("item-0", "hot", payload()).unwrap();
    seed.close();

    let writer_account = account.clone();
    let writer = thread::spawn(move || {
        let mut client = writer_account.connect();
        for i in 1..=WRITES {
            client
                .write(&format!("item-{}", i), "hot", payload())
                .unwrap();
        }
        client.close();
    });

    let reader_account = account.clone();
    let reader = thread::spawn(move || {
        let mut client = reader_account.connect();
        for _ in 0..WRITES {
            let outcome = client.read("item-0", "hot", "document").unwrap();
            let item = outcome.item().expect("item-0 is always present");
            let token = outcome.session_token().expect("found reads carry a token");
            assert!(item.version() <= token.observed_version());
        }
        client.close();
    });

    writer.join().unwrap();
    reader.join().unwrap();
}
