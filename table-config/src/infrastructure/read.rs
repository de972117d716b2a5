// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Bounded-Retry Read Path
//!
//! The shared "decode primary, fall back to backup, retry under contention"
//! state machine used by both the Config Facade's `load` and the Update
//! Protocol's read-before-write step: a result-returning decode with
//! explicit `{try_primary, try_backup, retry, give_up}` branching.

use std::path::Path;
use std::time::Duration;
use table_config_domain::{ConfigError, FilesystemAdapter, TableConfig};
use tracing::{debug, instrument, warn};

use super::recovery::recover_if_needed;

/// 1 initial attempt + 3 retries.
const MAX_ATTEMPTS: u32 = 4;
/// Doubles each retry: 2ms, 4ms, 8ms.
const INITIAL_BACKOFF: Duration = Duration::from_millis(2);

/// Decodes `path` if present and valid. Distinguishes "absent or fails to
/// decode" (`Ok(None)`, not an error for this protocol) from a genuine
/// adapter failure (`Err`, propagated verbatim — a permission error or
/// disconnected mount is not the same outcome as a missing or corrupt file
/// and must not be swallowed into a retry).
async fn try_decode(adapter: &dyn FilesystemAdapter, path: &Path) -> Result<Option<TableConfig>, ConfigError> {
    if !adapter.exists(path).await? {
        return Ok(None);
    }
    let bytes = adapter.open_read(path).await?;
    Ok(table_config_domain::decode(&bytes).ok())
}

/// Loads the current valid configuration, repairing `{primary, backup}` as
/// needed along the way.
///
/// Tries primary, then backup, re-running the Recovery Protocol before each
/// attempt to tolerate a writer rapidly rewriting the pair. If backup turns
/// out to be the one that decodes, primary is treated as corrupt: it is
/// discarded and backup is renamed into place before returning, so the
/// caller always observes `{primary valid, no backup}` afterward on success.
#[instrument(skip(adapter), fields(primary = ?primary, backup = ?backup))]
pub async fn read_current(
    adapter: &dyn FilesystemAdapter,
    primary: &Path,
    backup: &Path,
) -> Result<TableConfig, ConfigError> {
    let mut backoff = INITIAL_BACKOFF;

    for attempt in 0..MAX_ATTEMPTS {
        recover_if_needed(adapter, primary, backup).await?;

        if let Some(config) = try_decode(adapter, primary).await? {
            return Ok(config);
        }

        if let Some(config) = try_decode(adapter, backup).await? {
            debug!("primary failed to decode, backup valid; promoting backup to primary");
            adapter.delete(primary).await?;
            adapter.rename(backup, primary).await?;
            return Ok(config);
        }

        if attempt + 1 < MAX_ATTEMPTS {
            warn!(attempt, "read attempt failed to decode either file, retrying");
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }

    let primary_exists = adapter.exists(primary).await?;
    let backup_exists = adapter.exists(backup).await?;
    if !primary_exists && !backup_exists {
        Err(ConfigError::not_found("neither primary nor backup config file exists"))
    } else {
        Err(ConfigError::invalid_config(
            "exhausted retries: no valid config in primary or backup",
        ))
    }
}
