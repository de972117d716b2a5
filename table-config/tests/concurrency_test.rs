// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! Scenario 7 / P5: a writer doing repeated `update`s concurrently with a
//! reader doing repeated `load`s must never observe a read failure. The
//! Recovery Protocol's idempotent repair plus the bounded-retry read path are
//! what make this safe without any cross-process locking.

use std::sync::Arc;
use table_config::{create, load, update, TableConfig, TokioFilesystemAdapter};

#[tokio::test]
async fn concurrent_updates_and_reads_never_fail() {
    let _ = tracing_subscriber::fmt::try_init();

    let dir = Arc::new(tempfile::tempdir().unwrap());
    let adapter = Arc::new(TokioFilesystemAdapter::new());

    let mut props = TableConfig::default();
    props.set("name", "test-table");
    props.set("counter", "0");
    create(adapter.as_ref(), dir.path(), props).await.unwrap();

    const ITERATIONS: usize = 100;

    let writer_dir = Arc::clone(&dir);
    let writer_adapter = Arc::clone(&adapter);
    let writer = tokio::spawn(async move {
        for i in 0..ITERATIONS {
            let mut delta = TableConfig::default();
            delta.set("counter", i.to_string());
            update(writer_adapter.as_ref(), writer_dir.path(), &delta)
                .await
                .unwrap();
        }
    });

    let reader_dir = Arc::clone(&dir);
    let reader_adapter = Arc::clone(&adapter);
    let reader = tokio::spawn(async move {
        let mut failures = 0usize;
        for _ in 0..ITERATIONS {
            if load(reader_adapter.as_ref(), reader_dir.path(), None, None)
                .await
                .is_err()
            {
                failures += 1;
            }
        }
        failures
    });

    let (writer_result, reader_failures) = tokio::join!(writer, reader);
    writer_result.unwrap();
    assert_eq!(reader_failures.unwrap(), 0, "reader must never observe a failed load");

    let final_config = load(adapter.as_ref(), dir.path(), None, None).await.unwrap();
    assert_eq!(final_config.name().unwrap(), "test-table");
}
