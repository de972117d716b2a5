// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Filesystem Adapter Port
//!
//! The narrow capability the protocol needs from whatever filesystem or
//! object store backs a metadata directory: existence checks, truncating
//! create, read, rename, and idempotent delete. `rename`
//! is the atomicity primitive the Update and Recovery Protocols are built
//! around, but this trait does not assume it is atomic — only that, after a
//! successful return, `dst` holds `src`'s former content and `src` is gone.
//!
//! This is a domain-layer port: the trait describes a capability, not an
//! executor. The concrete `tokio::fs`-backed implementation lives in the
//! infrastructure crate, matching the domain's "I/O executor choice is not a
//! domain concern" stance.

use async_trait::async_trait;
use std::path::Path;

use crate::error::ConfigError;

/// Capability required from a backing filesystem or object store.
///
/// All failures — including a missing file passed to `open_read` — surface
/// as `ConfigError::IoError`; distinguishing "missing" from "present but
/// unreadable" is the Recovery Protocol's job, not this trait's.
#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// Whether a path currently exists.
    async fn exists(&self, path: &Path) -> Result<bool, ConfigError>;

    /// Reads a path's full contents. Fails with `IoError` if the path does
    /// not exist — callers must `exists` first if they need to distinguish
    /// "absent" from "unreadable".
    async fn open_read(&self, path: &Path) -> Result<Vec<u8>, ConfigError>;

    /// Creates (truncating if present) and writes a path's full contents.
    async fn create_write(&self, path: &Path, contents: &[u8]) -> Result<(), ConfigError>;

    /// Moves `src` to `dst`. Best-effort atomic: the protocol's correctness
    /// rests on the combined `{primary, backup}` state, not on this being a
    /// single atomic syscall.
    async fn rename(&self, src: &Path, dst: &Path) -> Result<(), ConfigError>;

    /// Removes a path. Idempotent: a missing target is not an error.
    async fn delete(&self, path: &Path) -> Result<(), ConfigError>;
}
