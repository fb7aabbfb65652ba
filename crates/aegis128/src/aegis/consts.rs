// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Block size in bytes
pub(crate) const BLOCK_SIZE: usize = 16;

/// Fibonacci constant C0
pub(crate) const C0: [u8; BLOCK_SIZE] = [
    0x00, 0x01, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0d, 0x15, 0x22, 0x37, 0x59, 0x90, 0xe9, 0x79, 0x62,
];

/// Fibonacci constant C1
pub(crate) const C1: [u8; BLOCK_SIZE] = [
    0xdb, 0x3d, 0x18, 0x55, 0x6d, 0xc2, 0x2f, 0xf1, 0x20, 0x11, 0x31, 0x42, 0x73, 0xb5, 0x28, 0xdd,
];

/// Initialization runs this many (K, K ^ N) Update pairs.
pub(crate) const INIT_ROUNDS: usize = 5;

/// Finalization Updates with T = S3 ^ lengths.
pub(crate) const FINALIZE_ROUNDS: usize = 7;
