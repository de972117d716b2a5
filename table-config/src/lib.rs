// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Table Config
//!
//! Infrastructure layer of the durable table-configuration store: a
//! `tokio::fs`-backed `FilesystemAdapter`, the crash-consistent Recovery and
//! Update Protocols built on top of it, and the `Config` Facade — the
//! crate's sole public entry point.
//!
//! ```no_run
//! use std::path::Path;
//! use table_config::{create, load, TokioFilesystemAdapter};
//! use table_config_domain::TableConfig;
//!
//! # async fn example() -> Result<(), table_config_domain::ConfigError> {
//! let adapter = TokioFilesystemAdapter::new();
//! let dir = Path::new("/tmp/my_table/.hoodie");
//!
//! let mut props = TableConfig::default();
//! props.set("name", "orders");
//! create(&adapter, dir, props).await?;
//!
//! let config = load(&adapter, dir, None, None).await?;
//! assert_eq!(config.name().unwrap(), "orders");
//! # Ok(())
//! # }
//! ```

pub mod infrastructure;

pub use infrastructure::facade::{create, delete_keys, load, recover_if_needed, update, Config};
pub use infrastructure::TokioFilesystemAdapter;

pub use table_config_domain::{
    ConfigError, FilesystemAdapter, TableConfig, TableType, BACKUP_FILE_NAME, PRIMARY_FILE_NAME,
};
