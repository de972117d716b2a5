// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Property Codec
//!
//! Serializes a [`TableConfig`] to the line-oriented `key=value` text format
//! and wraps it in an integrity envelope: a trailing `checksum=<hex-digest>`
//! line whose value is a CRC32 digest over the ascending-sorted,
//! newline-joined `key=value` entries (every entry except `checksum`
//! itself).
//!
//! ## Overview
//!
//! The codec provides:
//!
//! - **Canonical encoding**: ascending-key iteration, `\n`-joined lines,
//!   backslash/newline escaping so passthrough values round-trip as a
//!   single line
//! - **Integrity envelope**: a trailing `checksum=<hex-digest>` line whose
//!   value the decoder recomputes and compares on every decode
//! - **Strict parsing**: a malformed line (no `=`, not blank, not a `#`
//!   comment) is `InvalidConfig`, never a silently-dropped entry
//! - **No I/O**: pure byte-level logic — the executor that reads the bytes
//!   off disk is an infrastructure concern, not this module's
//!
//! This module is pure byte-level logic — no filesystem I/O. Serialization
//! format is a domain concern; the executor that reads the bytes is not.

use crate::error::ConfigError;
use crate::value_objects::table_config::KEY_CHECKSUM;
use crate::value_objects::TableConfig;

/// Computes the CRC32 digest over a config's non-checksum entries, in the
/// canonical ascending-key, `\n`-joined, UTF-8 form the protocol specifies.
fn compute_checksum(config: &TableConfig) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for (key, value) in config.non_checksum_entries() {
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(escape(value).as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize()
}

/// Escapes backslash and newline so a value round-trips as a single line.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Reverses [`escape`]. Unknown escape sequences pass the backslash through
/// unchanged rather than erroring — the codec's job is integrity, not being
/// a strict grammar checker for passthrough values it doesn't interpret.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Encodes a config to its on-disk byte representation, computing a fresh
/// checksum over its current entries (any previously-stored `checksum` value
/// is discarded and replaced).
pub fn encode(config: &TableConfig) -> Vec<u8> {
    let digest = compute_checksum(config);
    let mut out = String::new();
    for (key, value) in config.non_checksum_entries() {
        out.push_str(key);
        out.push('=');
        out.push_str(&escape(value));
        out.push('\n');
    }
    out.push_str(KEY_CHECKSUM);
    out.push('=');
    out.push_str(&hex::encode(digest.to_be_bytes()));
    out.push('\n');
    out.into_bytes()
}

/// Parses and validates a byte stream produced by [`encode`].
///
/// Fails with `InvalidConfig` on invalid UTF-8, a line with no `=` that
/// isn't blank or a `#` comment, a missing `checksum` entry, or a checksum
/// mismatch against the recomputed digest.
pub fn decode(bytes: &[u8]) -> Result<TableConfig, ConfigError> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| ConfigError::invalid_config(format!("not valid UTF-8: {e}")))?;

    let mut config = TableConfig::default();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ConfigError::invalid_config(format!("malformed line (no '='): {line:?}")))?;
        config.set(key, unescape(value));
    }

    let recorded = config
        .checksum()
        .ok_or_else(|| ConfigError::invalid_config("missing checksum entry"))?
        .to_string();
    let expected = hex::encode(compute_checksum(&config).to_be_bytes());
    if recorded != expected {
        return Err(ConfigError::invalid_config(format!(
            "checksum mismatch: recorded {recorded}, computed {expected}"
        )));
    }

    Ok(config)
}
