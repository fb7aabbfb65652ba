// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEGIS-128 authenticated encryption.
//!
//! 128-bit key, 128-bit nonce, 5 x 128-bit state blocks, 128-bit tag.
//! Each call runs the four protocol phases (init, AD absorption, message
//! processing, finalization) on a fresh state.

pub(crate) mod block;
pub(crate) mod consts;
mod state;

#[cfg(test)]
mod tests;

use zeroize::Zeroize;

use aegis128_util::constant_time_eq;

use crate::consts::{Aegis128Nonce, Aegis128Tag, TAG_SIZE};
use crate::key::Aegis128Key;

use block::AesBlock;
use consts::BLOCK_SIZE;
pub(crate) use state::State;

#[inline(always)]
fn absorb_ad<B: AesBlock>(state: &mut State<B>, ad: &[u8]) {
    let (blocks, remainder) = ad.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
        state.absorb(block);
    }
    if !remainder.is_empty() {
        state.absorb_partial(remainder);
    }
}

/// Encrypts `plaintext` into `out = ciphertext || tag`.
#[inline(always)]
pub(crate) fn seal<B: AesBlock>(
    key: &Aegis128Key,
    nonce: &Aegis128Nonce,
    plaintext: &[u8],
    ad: &[u8],
    out: &mut [u8],
) {
    debug_assert_eq!(out.len(), plaintext.len() + TAG_SIZE);

    let (ciphertext, tag_out) = out.split_at_mut(plaintext.len());
    let mut state = State::<B>::new(key.expose(), nonce);

    absorb_ad(&mut state, ad);

    let (src_blocks, src_tail) = plaintext.as_chunks::<BLOCK_SIZE>();
    let (dst_blocks, dst_tail) = ciphertext.as_chunks_mut::<BLOCK_SIZE>();
    for (src, dst) in src_blocks.iter().zip(dst_blocks.iter_mut()) {
        state.enc(src, dst);
    }
    if !src_tail.is_empty() {
        state.enc_partial(src_tail, dst_tail);
    }

    let mut tag = state.finalize(ad.len(), plaintext.len());
    tag_out.copy_from_slice(&tag);
    tag.zeroize();
}

/// Decrypts `ciphertext` into `out` and verifies `tag` in constant time.
///
/// On mismatch `out` is zero-filled before returning `false`.
#[inline(always)]
pub(crate) fn open<B: AesBlock>(
    key: &Aegis128Key,
    nonce: &Aegis128Nonce,
    ciphertext: &[u8],
    tag: &Aegis128Tag,
    ad: &[u8],
    out: &mut [u8],
) -> bool {
    debug_assert_eq!(out.len(), ciphertext.len());

    let mut state = State::<B>::new(key.expose(), nonce);

    absorb_ad(&mut state, ad);

    let (src_blocks, src_tail) = ciphertext.as_chunks::<BLOCK_SIZE>();
    let (dst_blocks, dst_tail) = out.as_chunks_mut::<BLOCK_SIZE>();
    for (src, dst) in src_blocks.iter().zip(dst_blocks.iter_mut()) {
        state.dec(src, dst);
    }
    if !src_tail.is_empty() {
        state.dec_partial(src_tail, dst_tail);
    }

    let mut expected_tag = state.finalize(ad.len(), ciphertext.len());
    let tag_ok = constant_time_eq(&expected_tag, tag);
    expected_tag.zeroize();

    if !tag_ok {
        out.zeroize();
    }

    tag_ok
}
