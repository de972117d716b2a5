// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Update Protocol
//!
//! `create`, `update`, `delete_keys`, and the swap sequence they share:
//! rename primary→backup, write the new primary, delete backup. The backup
//! is the pre-image, not a discarded scratch file — on a crash mid-sequence,
//! the Recovery Protocol restores it.
//!
//! The swap step stages durable state the way a committing writer stages a
//! temp file and moves it into place with a single `tokio::fs::rename` —
//! except here the "temp file" *is* the prior durable state rather than a
//! scratch buffer, so a left-behind backup is repaired by the next caller's
//! Recovery Protocol pass instead of being cleaned up on drop; it must
//! survive process exit to do its job.
//!
//! ## Overview
//!
//! The protocol provides:
//!
//! - **One-shot create**: writes a brand-new primary directly, failing with
//!   `AlreadyExists` rather than silently upserting
//! - **Merge-set update**: loads the current valid config through the
//!   bounded-retry read path, key-wise overwrites it with a delta, and
//!   rewrites via the swap sequence
//! - **Delete-keys**: the same load-then-rewrite shape, removing named keys
//!   and silently ignoring unknown ones
//! - **Crash-safe swap**: rename primary→backup, write new primary, delete
//!   backup — any crash at any point is reconciled by the Recovery Protocol
//!   on the next call, never left half-applied

use std::path::Path;
use table_config_domain::{ConfigError, FilesystemAdapter, TableConfig};
use tracing::instrument;

use super::read::read_current;

/// Writes `config` directly to `primary`, computing its checksum. Fails with
/// `AlreadyExists` if `primary` is already present — `create` is a one-shot
/// initializer, not upsert.
#[instrument(skip(adapter, config), fields(primary = ?primary))]
pub async fn create(adapter: &dyn FilesystemAdapter, primary: &Path, config: &TableConfig) -> Result<(), ConfigError> {
    if adapter.exists(primary).await? {
        return Err(ConfigError::already_exists(format!("{primary:?} already exists")));
    }
    let bytes = table_config_domain::encode(config);
    adapter.create_write(primary, &bytes).await
}

/// Renames `primary` to `backup` (the pre-image), writes the freshly encoded
/// `new_config` to `primary`, then deletes `backup`. Shared by `update` and
/// `delete_keys`; a crash at any point is reconciled by the Recovery
/// Protocol on the next call.
async fn swap(
    adapter: &dyn FilesystemAdapter,
    primary: &Path,
    backup: &Path,
    new_config: &TableConfig,
) -> Result<(), ConfigError> {
    adapter.rename(primary, backup).await?;
    let bytes = table_config_domain::encode(new_config);
    adapter.create_write(primary, &bytes).await?;
    adapter.delete(backup).await?;
    Ok(())
}

/// Loads the current valid config and key-wise overwrites it with `delta`,
/// then rewrites `primary` via the swap protocol.
#[instrument(skip(adapter, delta), fields(primary = ?primary, backup = ?backup))]
pub async fn update(
    adapter: &dyn FilesystemAdapter,
    primary: &Path,
    backup: &Path,
    delta: &TableConfig,
) -> Result<(), ConfigError> {
    let mut current = read_current(adapter, primary, backup).await?;
    for (key, value) in delta.non_checksum_entries() {
        current.set(key, value);
    }
    swap(adapter, primary, backup, &current).await
}

/// Loads the current valid config and removes `keys` from it (unknown keys
/// are silently ignored), then rewrites `primary` via the swap protocol.
#[instrument(skip(adapter, keys), fields(primary = ?primary, backup = ?backup))]
pub async fn delete_keys(
    adapter: &dyn FilesystemAdapter,
    primary: &Path,
    backup: &Path,
    keys: &[String],
) -> Result<(), ConfigError> {
    let mut current = read_current(adapter, primary, backup).await?;
    for key in keys {
        current.remove(key);
    }
    swap(adapter, primary, backup, &current).await
}
