// /////////////////////////////////////////////////////////////////////////////
// Optimized Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Property Codec
//!
//! Pure encode/decode logic for the store's on-disk format. See
//! [`property_codec`] for the implementation.

pub mod property_codec;

pub use property_codec::{decode, encode};
