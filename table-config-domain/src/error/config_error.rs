// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Config Store Error System
//!
//! Domain-specific errors for the durable table-configuration store. The
//! taxonomy is deliberately narrow — four variants, each tied to one of the
//! failure modes the protocol actually distinguishes.

use thiserror::Error;

/// Errors raised by the table-configuration store.
///
/// ## Design Principles
///
/// - **Specific**: one variant per protocol-level failure mode, not per
///   underlying cause.
/// - **Actionable**: every variant carries a message with enough context to
///   debug which file, which key, or which operation failed.
/// - **Categorized**: `category()` groups variants for callers that want to
///   branch on failure class rather than match every variant.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Config not found: {0}")]
    NotFound(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config already exists: {0}")]
    AlreadyExists(String),
}

impl ConfigError {
    /// Creates a new IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }

    /// Creates a new not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Creates a new invalid-config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates a new already-exists error.
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Checks if the error is recoverable by retrying the same operation.
    ///
    /// Only `IoError` indicates a possibly-transient condition; the other
    /// three are terminal for the call that raised them.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConfigError::IoError(_))
    }

    /// Gets the error category.
    pub fn category(&self) -> &'static str {
        match self {
            ConfigError::IoError(_) => "io",
            ConfigError::NotFound(_) => "not_found",
            ConfigError::InvalidConfig(_) => "validation",
            ConfigError::AlreadyExists(_) => "conflict",
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}
