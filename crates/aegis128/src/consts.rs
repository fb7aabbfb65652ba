// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Public AEGIS-128 sizes and limits.

/// Key size in bytes
pub const KEY_SIZE: usize = 16;

/// Nonce size in bytes
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Maximum plaintext, ciphertext or associated data length in bytes.
///
/// Lengths are encoded as 64-bit bit counts during finalization, so anything
/// above `u64::MAX >> 3` bytes cannot be represented.
pub const MAX_BYTES: u64 = u64::MAX >> 3;

/// AEGIS-128 nonce
pub type Aegis128Nonce = [u8; NONCE_SIZE];

/// AEGIS-128 authentication tag
pub type Aegis128Tag = [u8; TAG_SIZE];
