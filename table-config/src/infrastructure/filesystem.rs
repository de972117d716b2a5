// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Tokio Filesystem Adapter
//!
//! The concrete, `tokio::fs`-backed implementation of
//! `table_config_domain::FilesystemAdapter`. Config files are small (a
//! handful of key/value lines), so this adapter reads and writes whole
//! files in one shot — no buffering or streaming strategy to select.

use async_trait::async_trait;
use std::path::Path;
use table_config_domain::{ConfigError, FilesystemAdapter};
use tokio::io::AsyncWriteExt;

/// Direct `tokio::fs` adapter with no buffering or caching of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFilesystemAdapter;

impl TokioFilesystemAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FilesystemAdapter for TokioFilesystemAdapter {
    async fn exists(&self, path: &Path) -> Result<bool, ConfigError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| ConfigError::io_error(format!("exists({path:?}): {e}")))
    }

    async fn open_read(&self, path: &Path) -> Result<Vec<u8>, ConfigError> {
        tokio::fs::read(path)
            .await
            .map_err(|e| ConfigError::io_error(format!("open_read({path:?}): {e}")))
    }

    async fn create_write(&self, path: &Path, contents: &[u8]) -> Result<(), ConfigError> {
        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| ConfigError::io_error(format!("create({path:?}): {e}")))?;
        file.write_all(contents)
            .await
            .map_err(|e| ConfigError::io_error(format!("write({path:?}): {e}")))?;
        file.sync_all()
            .await
            .map_err(|e| ConfigError::io_error(format!("sync({path:?}): {e}")))?;
        Ok(())
    }

    async fn rename(&self, src: &Path, dst: &Path) -> Result<(), ConfigError> {
        tokio::fs::rename(src, dst)
            .await
            .map_err(|e| ConfigError::io_error(format!("rename({src:?} -> {dst:?}): {e}")))
    }

    async fn delete(&self, path: &Path) -> Result<(), ConfigError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::io_error(format!("delete({path:?}): {e}"))),
        }
    }
}
