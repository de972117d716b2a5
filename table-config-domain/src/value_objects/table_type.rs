// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Table Type Value Object
//!
//! `TableType` backs the `table_type` reserved key's typed accessor. It is a
//! closed enum rather than a validated string: the protocol never needs to
//! round-trip unrecognized layouts, and a parse-and-reject-unknown value
//! object catches a corrupted or hand-edited properties file at the
//! accessor rather than deep inside calling code.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Storage layout of a managed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableType {
    CopyOnWrite,
    MergeOnRead,
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableType::CopyOnWrite => "COPY_ON_WRITE",
            TableType::MergeOnRead => "MERGE_ON_READ",
        })
    }
}

impl FromStr for TableType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COPY_ON_WRITE" => Ok(TableType::CopyOnWrite),
            "MERGE_ON_READ" => Ok(TableType::MergeOnRead),
            other => Err(ConfigError::invalid_config(format!(
                "unrecognized table_type value: {other}"
            ))),
        }
    }
}
