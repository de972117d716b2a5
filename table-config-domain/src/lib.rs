// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Table Config Domain
//!
//! The pure domain layer of the durable table-configuration store: the
//! `TableConfig` value object and its reserved-key typed accessors, the
//! `ConfigError` taxonomy, the Property Codec (encode/decode, no I/O), and
//! the `FilesystemAdapter` port. Nothing here depends on an async runtime or
//! touches a filesystem — those are infrastructure-crate concerns.
//!
//! ## Module Structure
//!
//! - [`error`] — `ConfigError`, the four-variant failure taxonomy.
//! - [`value_objects`] — `TableConfig`, `TableType`, and the reserved-key
//!   constants.
//! - [`codec`] — `encode`/`decode` for the on-disk property-file format.
//! - [`ports`] — `FilesystemAdapter`, the capability the infrastructure
//!   crate's concrete adapter implements.

pub mod codec;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use codec::{decode, encode};
pub use error::ConfigError;
pub use ports::FilesystemAdapter;
pub use value_objects::{TableConfig, TableType, BACKUP_FILE_NAME, PRIMARY_FILE_NAME};
