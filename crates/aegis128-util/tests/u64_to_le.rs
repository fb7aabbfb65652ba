// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aegis128_util::u64_to_le;

#[test]
fn test_u64_to_le_byte_order() {
    let mut value = 0x0807_0605_0403_0201u64;
    let mut out = [0u8; 8];

    u64_to_le(&mut value, &mut out);

    assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_u64_to_le_zeroizes_source() {
    let mut value = u64::MAX;
    let mut out = [0u8; 8];

    u64_to_le(&mut value, &mut out);

    assert_eq!(value, 0);
    assert_eq!(out, [0xff; 8]);
}

#[test]
fn test_u64_to_le_matches_std() {
    for original in [0u64, 1, 8 * 42, 0xdead_beef, u64::MAX >> 3, u64::MAX - 7] {
        let mut value = original;
        let mut out = [0u8; 8];

        u64_to_le(&mut value, &mut out);

        assert_eq!(out, original.to_le_bytes());
    }
}

#[test]
fn test_u64_to_le_overwrites_destination() {
    let mut value = 0u64;
    let mut out = [0xaau8; 8];

    u64_to_le(&mut value, &mut out);

    assert_eq!(out, [0u8; 8]);
}
