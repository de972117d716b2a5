// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Value Objects
//!
//! Immutable objects representing concepts without identity, self-validating
//! at construction. This store has two: [`TableConfig`], the ordered
//! key/value mapping at the center of the protocol, and [`TableType`], the
//! closed enum backing its `table_type` typed accessor.

pub mod table_config;
pub mod table_type;

pub use table_config::{
    TableConfig, BACKUP_FILE_NAME, KEY_ARCHIVELOG_FOLDER, KEY_BASE_FILE_FORMAT, KEY_CHECKSUM, KEY_NAME,
    KEY_PRECOMBINE_FIELD, KEY_TABLE_TYPE, KEY_TIMELINE_LAYOUT_VERSION, PRIMARY_FILE_NAME,
};
pub use table_type::TableType;
