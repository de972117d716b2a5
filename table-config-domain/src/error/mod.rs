// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Error Module
//!
//! Defines `ConfigError`, the four-variant taxonomy used across every public
//! operation of the store: `IoError`, `NotFound`, `InvalidConfig`,
//! `AlreadyExists`. See [`ConfigError`] for the full contract.

mod config_error;

pub use config_error::ConfigError;
