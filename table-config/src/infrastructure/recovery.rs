// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Recovery Protocol
//!
//! Reconciles `{primary, backup}` into the healthy invariant `{primary
//! valid, no backup}` from any state a crash could have left behind. Run
//! as the first step of every read and every write.
//!
//! The backup file is a write-ahead image: its presence means an update was
//! in flight, and its validity means the new state reached durable storage
//! before the swap completed. A valid backup therefore dominates an invalid
//! or absent primary; a valid primary dominates any backup, valid or not.
//!
//! ## Overview
//!
//! The protocol provides:
//!
//! - **Deterministic reconciliation**: an 8-row decision table over
//!   `{primary, backup} × {valid, invalid, absent}`, with no ambiguous
//!   outcome
//! - **Backup-dominance rule**: a valid backup wins over an invalid or
//!   absent primary, modeling the backup as a write-ahead image rather than
//!   a discardable scratch copy
//! - **No masking**: unrecoverable states (both present and invalid, or
//!   both absent) are left exactly as observed — this module never itself
//!   raises `InvalidConfig`, it only decides and may delete/rename files
//! - **Idempotence**: a second pass over an already-healthy pair is a no-op

use std::path::Path;
use table_config_domain::{ConfigError, FilesystemAdapter, TableConfig};
use tracing::{debug, instrument};

/// A file's observed state for recovery purposes: present-but-unparseable
/// and absent are distinguished because the decision table treats "exists,
/// invalid" and "absent" differently for the primary (both leave backup
/// alone) but the same for the backup (neither dominates a valid primary).
enum FileState {
    Absent,
    Invalid,
    Valid(TableConfig),
}

async fn inspect(adapter: &dyn FilesystemAdapter, path: &Path) -> Result<FileState, ConfigError> {
    if !adapter.exists(path).await? {
        return Ok(FileState::Absent);
    }
    let bytes = adapter.open_read(path).await?;
    match table_config_domain::decode(&bytes) {
        Ok(config) => Ok(FileState::Valid(config)),
        Err(_) => Ok(FileState::Invalid),
    }
}

/// Runs the 8-row decision table against `primary`/`backup` and leaves the
/// pair in the healthy invariant whenever that invariant is reachable.
///
/// Never itself raises `InvalidConfig` — "both present and invalid" and
/// "both absent" are left exactly as observed; it is the caller's
/// subsequent decode (in the read path) that raises that error.
#[instrument(skip(adapter), fields(primary = ?primary, backup = ?backup))]
pub async fn recover_if_needed(
    adapter: &dyn FilesystemAdapter,
    primary: &Path,
    backup: &Path,
) -> Result<(), ConfigError> {
    let primary_state = inspect(adapter, primary).await?;

    match primary_state {
        FileState::Valid(_) => {
            if adapter.exists(backup).await? {
                debug!("primary valid, backup stale; deleting backup");
                adapter.delete(backup).await?;
            }
        }
        FileState::Invalid | FileState::Absent => {
            if let FileState::Valid(_) = inspect(adapter, backup).await? {
                if matches!(primary_state, FileState::Invalid) {
                    debug!("primary invalid, backup valid; discarding primary before restore");
                    adapter.delete(primary).await?;
                } else {
                    debug!("primary absent, backup valid; restoring from backup");
                }
                adapter.rename(backup, primary).await?;
            }
            // Backup absent or also invalid: nothing recoverable here: leave
            // as-is and let the read path's decode raise NotFound/InvalidConfig.
        }
    }

    Ok(())
}
