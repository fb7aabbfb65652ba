// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic seal/open drivers on the portable block.

use aegis128_util::{hex_to_bytes, is_slice_zeroized};

use crate::aegis;
use crate::backend::portable::PortableBlock;
use crate::consts::TAG_SIZE;
use crate::key::Aegis128Key;

#[test]
fn test_seal_empty_everything() {
    let key = Aegis128Key::new([0u8; 16]);
    let nonce = [0u8; 16];

    let mut out = [0u8; TAG_SIZE];
    aegis::seal::<PortableBlock>(&key, &nonce, &[], &[], &mut out);

    assert_eq!(&out[..], &hex_to_bytes("242d8006b64d87c36cb35714af7121f9")[..]);
}

#[test]
fn test_seal_then_open() {
    let key = Aegis128Key::new([0x42; 16]);
    let nonce = [0x24; 16];
    let plaintext = b"thirty-three bytes of plaintext!!";
    let ad = b"header";

    let mut sealed = vec![0u8; plaintext.len() + TAG_SIZE];
    aegis::seal::<PortableBlock>(&key, &nonce, plaintext, ad, &mut sealed);

    let (body, tag) = sealed
        .split_last_chunk::<TAG_SIZE>()
        .expect("Sealed output shorter than a tag");
    let mut recovered = vec![0u8; body.len()];

    assert!(aegis::open::<PortableBlock>(
        &key,
        &nonce,
        body,
        tag,
        ad,
        &mut recovered
    ));
    assert_eq!(&recovered[..], &plaintext[..]);
}

#[test]
fn test_open_zero_fills_on_mismatch() {
    let key = Aegis128Key::new([0x42; 16]);
    let nonce = [0x24; 16];
    let plaintext = [0xffu8; 40];

    let mut sealed = vec![0u8; plaintext.len() + TAG_SIZE];
    aegis::seal::<PortableBlock>(&key, &nonce, &plaintext, &[], &mut sealed);

    let (body, tag) = sealed
        .split_last_chunk::<TAG_SIZE>()
        .expect("Sealed output shorter than a tag");
    let mut bad_tag = *tag;
    bad_tag[0] ^= 0x80;

    let mut recovered = vec![0xa5u8; body.len()];
    let ok = aegis::open::<PortableBlock>(&key, &nonce, body, &bad_tag, &[], &mut recovered);

    assert!(!ok);
    assert!(is_slice_zeroized(&recovered));
}
