// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Table Configuration Value Object
//!
//! `TableConfig` is the ordered string→string mapping at the center of the
//! store. It wraps a `BTreeMap` so ascending-key iteration —
//! required by the Property Codec's checksum digest order — is a property of
//! the type, not something every caller has to remember to sort for.
//!
//! A fixed set of reserved keys participate in protocol logic; everything
//! else is passthrough and reachable only via [`TableConfig::get`] /
//! [`TableConfig::as_map`].
//!
//! ## Overview
//!
//! The value object provides:
//!
//! - **Ordered storage**: `BTreeMap`-backed, ascending-key iteration with no
//!   extra sort step
//! - **Reserved-key constants**: `name`, `precombine_field`,
//!   `archivelog_folder`, `checksum`, `table_type`, `base_file_format`,
//!   `timeline_layout_version` — the protocol-significant keys
//! - **Typed accessors**: `name()`, `table_type()`, and friends, returning
//!   `InvalidConfig` on an unrecognized reserved value rather than the raw
//!   string
//! - **Passthrough escape hatch**: `get`/`as_map` for keys the protocol
//!   itself never interprets

use std::collections::BTreeMap;

use super::table_type::TableType;
use crate::error::ConfigError;

/// File name of the primary (canonical) config file within a metadata
/// directory.
pub const PRIMARY_FILE_NAME: &str = "hoodie.properties";

/// File name of the transient backup/staging file within a metadata
/// directory. Present only while an update is in flight.
pub const BACKUP_FILE_NAME: &str = "hoodie.properties.backup";

/// Table identity. Set by the caller at `create`.
pub const KEY_NAME: &str = "name";
/// Conflict-resolution field name. Set by the caller.
pub const KEY_PRECOMBINE_FIELD: &str = "precombine_field";
/// Subdirectory for archived log files. Defaulted by the facade if absent.
pub const KEY_ARCHIVELOG_FOLDER: &str = "archivelog_folder";
/// Integrity digest over all other keys. Set by the codec, never the caller.
pub const KEY_CHECKSUM: &str = "checksum";
/// Storage layout (copy-on-write / merge-on-read). Defaulted by the facade.
pub const KEY_TABLE_TYPE: &str = "table_type";
/// On-disk base file format for data files. Defaulted by the facade.
pub const KEY_BASE_FILE_FORMAT: &str = "base_file_format";
/// Timeline layout version. Defaulted by the facade.
pub const KEY_TIMELINE_LAYOUT_VERSION: &str = "timeline_layout_version";

/// An ordered key/value mapping recording the identity and schema-adjacent
/// metadata of a managed table.
///
/// Equality and iteration order are attribute-based: two `TableConfig`s with
/// the same entries are equal regardless of insertion order, and iteration
/// always proceeds in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    entries: BTreeMap<String, String>,
}

impl TableConfig {
    /// Builds a `TableConfig` from an already-assembled map. Used by the
    /// codec after a successful decode, and by callers assembling a map to
    /// pass to `create`/`update`.
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Number of entries, including `checksum` once present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw lookup for a key, reserved or passthrough.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Sets or overwrites a key. Used while assembling merge-set deltas and
    /// default injection; not exposed as mutation on a returned snapshot.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a key if present. Silently a no-op for unknown keys, matching
    /// the `delete_keys` contract.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Escape hatch for passthrough keys the typed accessors don't cover.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Ascending-key entries excluding `checksum`, the exact set the
    /// Property Codec digests.
    pub fn non_checksum_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != KEY_CHECKSUM)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Table identity. Absent only on a malformed map that never should have
    /// parsed; `InvalidConfig` rather than panicking.
    pub fn name(&self) -> Result<&str, ConfigError> {
        self.get(KEY_NAME)
            .ok_or_else(|| ConfigError::invalid_config("missing required key 'name'"))
    }

    /// Conflict-resolution field, if the caller set one.
    pub fn precombine_field(&self) -> Option<&str> {
        self.get(KEY_PRECOMBINE_FIELD)
    }

    /// Archived-log subdirectory, if set (defaulted by the facade at create
    /// time but removable via `delete_keys`).
    pub fn archivelog_folder(&self) -> Option<&str> {
        self.get(KEY_ARCHIVELOG_FOLDER)
    }

    /// Base file format, if set.
    pub fn base_file_format(&self) -> Option<&str> {
        self.get(KEY_BASE_FILE_FORMAT)
    }

    /// Timeline layout version, if set.
    pub fn timeline_layout_version(&self) -> Option<&str> {
        self.get(KEY_TIMELINE_LAYOUT_VERSION)
    }

    /// The integrity digest recorded in this config, if present.
    pub fn checksum(&self) -> Option<&str> {
        self.get(KEY_CHECKSUM)
    }

    /// Storage layout, parsed and validated. An unrecognized value is
    /// `InvalidConfig` rather than surfacing the raw string.
    pub fn table_type(&self) -> Result<Option<TableType>, ConfigError> {
        self.get(KEY_TABLE_TYPE).map(str::parse).transpose()
    }
}
