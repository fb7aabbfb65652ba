// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the AEGIS-128 engine and its tests.
//!
//! Length encoders zeroize their source after writing so intermediate values
//! do not linger on the stack.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// The running time depends only on the slice lengths, never on where (or
/// whether) the contents differ. Slices of different length compare unequal.
///
/// # Example
///
/// ```
/// use aegis128_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F). Intended for test fixtures.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use aegis128_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Writes a `u64` as little-endian bytes, zeroizing the source.
///
/// Bytes are extracted with shifts so no temporary array holding the value
/// is created.
///
/// # Example
///
/// ```
/// use aegis128_util::u64_to_le;
///
/// let mut bits = 0x0102_0304_0506_0708u64;
/// let mut out = [0u8; 8];
/// u64_to_le(&mut bits, &mut out);
///
/// assert_eq!(out, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
/// assert_eq!(bits, 0);
/// ```
#[inline(always)]
pub fn u64_to_le(src: &mut u64, bytes: &mut [u8; 8]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (*src >> (8 * i)) as u8;
    }
    *src = 0;
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use aegis128_util::is_slice_zeroized;
///
/// let zeroed = [0u8; 10];
/// assert!(is_slice_zeroized(&zeroed));
///
/// let not_zeroed = [0u8, 1, 0, 0];
/// assert!(!is_slice_zeroized(&not_zeroed));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}
