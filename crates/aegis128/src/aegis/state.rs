// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEGIS-128 five-register state with in-place operations for guaranteed zeroization.
//!
//! Generic over [`AesBlock`] so the portable and hardware backends share one
//! bit-exact implementation. All temporaries are zeroized explicitly or via
//! `move_to`; the registers themselves are zeroized on drop.

use zeroize::Zeroize;

use aegis128_util::u64_to_le;

use super::block::AesBlock;
use super::consts::{BLOCK_SIZE, C0, C1, FINALIZE_ROUNDS, INIT_ROUNDS};
use crate::consts::{Aegis128Nonce, Aegis128Tag, KEY_SIZE};

pub(crate) struct State<B: AesBlock> {
    s0: B,
    s1: B,
    s2: B,
    s3: B,
    s4: B,
}

impl<B: AesBlock> State<B> {
    /// Seeds the registers from key and nonce and runs the blank init rounds.
    #[inline(always)]
    pub fn new(key: &[u8; KEY_SIZE], nonce: &Aegis128Nonce) -> Self {
        let mut key_block = B::load(key);
        let mut nonce_block = B::load(nonce);
        let mut key_nonce = key_block.xor(&nonce_block);
        let mut c0 = B::load(&C0);
        let mut c1 = B::load(&C1);

        // s0 = key ^ nonce, s3 = key ^ c0, s4 = key ^ c1
        let mut state = Self {
            s0: key_block.xor(&nonce_block),
            s1: B::load(&C1),
            s2: B::load(&C0),
            s3: key_block.xor(&c0),
            s4: key_block.xor(&c1),
        };

        c0.zeroize();
        c1.zeroize();
        nonce_block.zeroize();

        for _ in 0..INIT_ROUNDS {
            state.update(&key_block);
            state.update(&key_nonce);
        }

        key_block.zeroize();
        key_nonce.zeroize();

        state
    }

    /// Core state update.
    ///
    /// S0' = R(S4, S0 ^ M), then each Si' = R(Si-1, Si) around the ring.
    #[inline(always)]
    fn update(&mut self, m: &B) {
        let mut t0 = self.s0.xor(m);

        let ns0 = self.s4.aes_enc(&t0);
        let ns1 = self.s0.aes_enc(&self.s1);
        let ns2 = self.s1.aes_enc(&self.s2);
        let ns3 = self.s2.aes_enc(&self.s3);
        let ns4 = self.s3.aes_enc(&self.s4);

        t0.zeroize();

        ns0.move_to(&mut self.s0);
        ns1.move_to(&mut self.s1);
        ns2.move_to(&mut self.s2);
        ns3.move_to(&mut self.s3);
        ns4.move_to(&mut self.s4);
    }

    /// z = s1 ^ s4 ^ (s2 & s3)
    #[inline(always)]
    fn keystream(&self) -> B {
        let mut t = self.s2.and(&self.s3);
        let mut z = self.s1.xor(&self.s4);
        z.xor_in_place(&t);
        t.zeroize();
        z
    }

    /// Absorbs one full associated-data block.
    #[inline(always)]
    pub fn absorb(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut m = B::load(block);
        self.update(&m);
        m.zeroize();
    }

    /// Absorbs a trailing associated-data fragment, zero-padded to a block.
    #[inline(always)]
    pub fn absorb_partial(&mut self, fragment: &[u8]) {
        debug_assert!(fragment.len() < BLOCK_SIZE);

        let mut padded = [0u8; BLOCK_SIZE];
        padded[..fragment.len()].copy_from_slice(fragment);
        self.absorb(&padded);
        padded.zeroize();
    }

    /// Encrypts one full block. The state absorbs the plaintext.
    #[inline(always)]
    pub fn enc(&mut self, src: &[u8; BLOCK_SIZE], dst: &mut [u8; BLOCK_SIZE]) {
        let mut z = self.keystream();
        let mut m = B::load(src);
        let mut c = m.xor(&z);
        z.zeroize();

        c.store(dst);
        c.zeroize();

        self.update(&m);
        m.zeroize();
    }

    /// Encrypts a trailing fragment shorter than a block.
    #[inline(always)]
    pub fn enc_partial(&mut self, src: &[u8], dst: &mut [u8]) {
        debug_assert!(src.len() < BLOCK_SIZE);
        debug_assert_eq!(src.len(), dst.len());

        let len = src.len();
        let mut padded = [0u8; BLOCK_SIZE];
        let mut ct_buf = [0u8; BLOCK_SIZE];
        padded[..len].copy_from_slice(src);

        // Zero padding is what gets absorbed, only `len` bytes leave.
        self.enc(&padded, &mut ct_buf);
        dst.copy_from_slice(&ct_buf[..len]);

        padded.zeroize();
        ct_buf.zeroize();
    }

    /// Decrypts one full block. The state absorbs the recovered plaintext.
    #[inline(always)]
    pub fn dec(&mut self, src: &[u8; BLOCK_SIZE], dst: &mut [u8; BLOCK_SIZE]) {
        let mut z = self.keystream();
        let mut c = B::load(src);
        let mut m = c.xor(&z);
        z.zeroize();
        c.zeroize();

        m.store(dst);

        self.update(&m);
        m.zeroize();
    }

    /// Decrypts a trailing fragment shorter than a block.
    #[inline(always)]
    pub fn dec_partial(&mut self, src: &[u8], dst: &mut [u8]) {
        debug_assert!(src.len() < BLOCK_SIZE);
        debug_assert_eq!(src.len(), dst.len());

        let len = src.len();
        let mut pt_buf = [0u8; BLOCK_SIZE];
        pt_buf[..len].copy_from_slice(src);

        let mut z = self.keystream();
        let mut c = B::load(&pt_buf);
        let mut m = c.xor(&z);
        z.zeroize();
        c.zeroize();
        m.store(&mut pt_buf);
        m.zeroize();

        dst.copy_from_slice(&pt_buf[..len]);

        // Keystream bytes past `len` must not reach the state.
        pt_buf[len..].fill(0);
        self.absorb(&pt_buf);
        pt_buf.zeroize();
    }

    /// Absorbs the bit lengths and derives the tag.
    ///
    /// Lengths are bounded by `MAX_BYTES`, so the bit counts fit in a `u64`.
    #[inline(always)]
    pub fn finalize(&mut self, ad_len: usize, msg_len: usize) -> Aegis128Tag {
        let mut ad_bits = (ad_len as u64) << 3;
        let mut msg_bits = (msg_len as u64) << 3;
        let mut ad_le = [0u8; 8];
        let mut msg_le = [0u8; 8];
        u64_to_le(&mut ad_bits, &mut ad_le);
        u64_to_le(&mut msg_bits, &mut msg_le);

        let mut len_block = [0u8; BLOCK_SIZE];
        len_block[..8].copy_from_slice(&ad_le);
        len_block[8..].copy_from_slice(&msg_le);

        let mut lengths = B::load(&len_block);
        let mut t = self.s3.xor(&lengths);
        lengths.zeroize();

        for _ in 0..FINALIZE_ROUNDS {
            self.update(&t);
        }
        t.zeroize();

        // tag = s0 ^ s1 ^ s2 ^ s3 ^ s4
        let mut tag_block = self.s0.xor(&self.s1);
        tag_block.xor_in_place(&self.s2);
        tag_block.xor_in_place(&self.s3);
        tag_block.xor_in_place(&self.s4);

        let mut tag = [0u8; BLOCK_SIZE];
        tag_block.store(&mut tag);
        tag_block.zeroize();

        ad_le.zeroize();
        msg_le.zeroize();
        len_block.zeroize();

        tag
    }

    #[cfg(test)]
    pub(crate) fn registers(&self) -> [[u8; BLOCK_SIZE]; 5] {
        let mut out = [[0u8; BLOCK_SIZE]; 5];
        for (dst, reg) in out
            .iter_mut()
            .zip([&self.s0, &self.s1, &self.s2, &self.s3, &self.s4])
        {
            reg.store(dst);
        }
        out
    }
}

impl<B: AesBlock> Zeroize for State<B> {
    fn zeroize(&mut self) {
        self.s0.zeroize();
        self.s1.zeroize();
        self.s2.zeroize();
        self.s3.zeroize();
        self.s4.zeroize();
    }
}

impl<B: AesBlock> Drop for State<B> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
