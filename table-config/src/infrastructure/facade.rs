// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Config Facade
//!
//! The sole public surface of the store: `load`, the typed accessors it
//! returns (via [`Config`]'s `Deref` to `TableConfig`), and the mutators
//! `create`/`update`/`delete_keys`/`recover_if_needed`.
//!
//! Modeled as free async functions (no session object, load-with-fallback
//! semantics) taking a directory path and an injected `FilesystemAdapter` —
//! no shared mutable statics, no session handle.
//!
//! ## Overview
//!
//! The facade provides:
//!
//! - **Recovery-then-decode loads**: `load` runs the Recovery Protocol and
//!   the bounded-retry read path before returning a snapshot
//! - **Default injection**: `create` fills `archivelog_folder`,
//!   `table_type`, `base_file_format`, and `timeline_layout_version` when
//!   the caller's props don't already set them
//! - **Defaults-under, overrides-over merging**: `load`'s `defaults`
//!   parameter fills only absent keys; `overrides` replaces any key it
//!   names, both applied after the stored config is loaded
//! - **Immutable snapshots**: `Config` has no mutation API — callers that
//!   want fresh state call `load` again
//! - **Static mutators**: `create`/`update`/`delete_keys`/
//!   `recover_if_needed`, each a free function over a directory path rather
//!   than a session object with cross-call state

use std::ops::Deref;
use std::path::Path;
use table_config_domain::{
    ConfigError, FilesystemAdapter, TableConfig, BACKUP_FILE_NAME, KEY_ARCHIVELOG_FOLDER, KEY_BASE_FILE_FORMAT,
    KEY_TABLE_TYPE, KEY_TIMELINE_LAYOUT_VERSION, PRIMARY_FILE_NAME,
};
use tracing::instrument;

use super::read::read_current;
use super::recovery;
use super::update;

/// Facade-level defaults injected by `create` when the caller's `props`
/// don't already set them.
const DEFAULTS: &[(&str, &str)] = &[
    (KEY_ARCHIVELOG_FOLDER, "archived"),
    (KEY_TABLE_TYPE, "COPY_ON_WRITE"),
    (KEY_BASE_FILE_FORMAT, "PARQUET"),
    (KEY_TIMELINE_LAYOUT_VERSION, "1"),
];

/// An immutable, consistent view of a table's configuration, returned by
/// [`load`]. Callers that want fresh state call `load` again rather than
/// mutating a `Config` in place — there is no API to do the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    inner: TableConfig,
}

impl Deref for Config {
    type Target = TableConfig;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Config {
    /// Escape hatch to the underlying value object, e.g. to hand it to
    /// `update`'s delta parameter.
    pub fn as_table_config(&self) -> &TableConfig {
        &self.inner
    }
}

fn primary_path(dir: &Path) -> std::path::PathBuf {
    dir.join(PRIMARY_FILE_NAME)
}

fn backup_path(dir: &Path) -> std::path::PathBuf {
    dir.join(BACKUP_FILE_NAME)
}

/// Writes a brand-new primary config file under `dir`, augmenting `props`
/// with the facade's default set wherever the caller hasn't already set a
/// value. Fails with `AlreadyExists` if `dir` already has a primary file.
#[instrument(skip(adapter, props), fields(dir = ?dir))]
pub async fn create(adapter: &dyn FilesystemAdapter, dir: &Path, props: TableConfig) -> Result<(), ConfigError> {
    let mut augmented = props;
    for (key, default) in DEFAULTS {
        if augmented.get(key).is_none() {
            augmented.set(*key, *default);
        }
    }
    update::create(adapter, &primary_path(dir), &augmented).await
}

/// Loads the current valid configuration for `dir`, running the Recovery
/// Protocol and the bounded-retry read path first. `defaults` are merged
/// underneath the loaded map (filling only keys the stored config doesn't
/// have); `overrides` are merged on top (replacing any key they name).
#[instrument(skip(adapter, defaults, overrides), fields(dir = ?dir))]
pub async fn load(
    adapter: &dyn FilesystemAdapter,
    dir: &Path,
    defaults: Option<&TableConfig>,
    overrides: Option<&TableConfig>,
) -> Result<Config, ConfigError> {
    let mut loaded = read_current(adapter, &primary_path(dir), &backup_path(dir)).await?;

    if let Some(defaults) = defaults {
        for (key, value) in defaults.as_map() {
            if loaded.get(key).is_none() {
                loaded.set(key.clone(), value.clone());
            }
        }
    }
    if let Some(overrides) = overrides {
        for (key, value) in overrides.as_map() {
            loaded.set(key.clone(), value.clone());
        }
    }

    Ok(Config { inner: loaded })
}

/// Merge-assigns `delta` onto the current config and rewrites the primary
/// file via the swap protocol.
#[instrument(skip(adapter, delta), fields(dir = ?dir))]
pub async fn update(adapter: &dyn FilesystemAdapter, dir: &Path, delta: &TableConfig) -> Result<(), ConfigError> {
    update::update(adapter, &primary_path(dir), &backup_path(dir), delta).await
}

/// Removes `keys` from the current config (unknown keys ignored) and
/// rewrites the primary file via the swap protocol.
#[instrument(skip(adapter, keys), fields(dir = ?dir))]
pub async fn delete_keys(adapter: &dyn FilesystemAdapter, dir: &Path, keys: &[String]) -> Result<(), ConfigError> {
    update::delete_keys(adapter, &primary_path(dir), &backup_path(dir), keys).await
}

/// Restores the `{primary valid, no backup}` invariant for an explicit
/// primary/backup path pair, without going through a `load`.
pub async fn recover_if_needed(
    adapter: &dyn FilesystemAdapter,
    primary: &Path,
    backup: &Path,
) -> Result<(), ConfigError> {
    recovery::recover_if_needed(adapter, primary, backup).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::filesystem::TokioFilesystemAdapter;

    #[test]
    fn defaults_constant_has_four_entries() {
        assert_eq!(DEFAULTS.len(), 4);
    }

    #[tokio::test]
    async fn create_then_load_injects_four_defaults_plus_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = TokioFilesystemAdapter::new();
        let mut props = TableConfig::default();
        props.set("name", "test-table");
        create(&adapter, dir.path(), props).await.unwrap();

        let loaded = load(&adapter, dir.path(), None, None).await.unwrap();
        assert_eq!(loaded.len(), 6);
        assert_eq!(loaded.name().unwrap(), "test-table");
    }

    #[tokio::test]
    async fn load_merges_defaults_under_and_overrides_over() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = TokioFilesystemAdapter::new();
        let mut props = TableConfig::default();
        props.set("name", "t");
        create(&adapter, dir.path(), props).await.unwrap();

        let mut defaults = TableConfig::default();
        defaults.set("name", "should-not-win");
        defaults.set("passthrough.default", "from-default");
        let mut overrides = TableConfig::default();
        overrides.set("name", "should-win");

        let loaded = load(&adapter, dir.path(), Some(&defaults), Some(&overrides))
            .await
            .unwrap();
        assert_eq!(loaded.name().unwrap(), "should-win");
        assert_eq!(loaded.get("passthrough.default"), Some("from-default"));
    }
}
