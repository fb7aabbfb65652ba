// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable backend on top of the constant-time `aes` round function.

use aes::hazmat::cipher_round;
use zeroize::Zeroize;

use crate::aegis::{self, block::AesBlock};
use crate::consts::{Aegis128Nonce, Aegis128Tag};
use crate::key::Aegis128Key;
use crate::traits::{Factory, Instance};

pub(crate) const NAME: &str = "portable";

/// AES block held as plain bytes.
#[derive(Default, Zeroize)]
pub(crate) struct PortableBlock([u8; 16]);

impl AesBlock for PortableBlock {
    #[inline(always)]
    fn load(bytes: &[u8; 16]) -> Self {
        Self(*bytes)
    }

    #[inline(always)]
    fn store(&self, out: &mut [u8; 16]) {
        out.copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn xor(&self, other: &Self) -> Self {
        let mut out = [0u8; 16];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *o = a ^ b;
        }
        Self(out)
    }

    #[inline(always)]
    fn and(&self, other: &Self) -> Self {
        let mut out = [0u8; 16];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *o = a & b;
        }
        Self(out)
    }

    #[inline(always)]
    fn xor_in_place(&mut self, other: &Self) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a ^= b;
        }
    }

    #[inline(always)]
    fn aes_enc(&self, round_key: &Self) -> Self {
        let mut block = aes::Block::from(self.0);
        let mut key = aes::Block::from(round_key.0);

        cipher_round(&mut block, &key);

        let mut out = [0u8; 16];
        out.copy_from_slice(&block);
        block.as_mut_slice().zeroize();
        key.as_mut_slice().zeroize();
        Self(out)
    }
}

/// Factory for the portable backend. Always available.
#[derive(Debug, Default)]
pub struct PortableFactory;

impl Factory for PortableFactory {
    fn name(&self) -> &'static str {
        NAME
    }

    fn new_instance(&self, key: Aegis128Key) -> Box<dyn Instance> {
        Box::new(PortableInstance { key })
    }
}

struct PortableInstance {
    key: Aegis128Key,
}

impl Instance for PortableInstance {
    fn reset(&mut self) {
        self.key.zeroize();
    }

    fn seal(&self, out: &mut [u8], nonce: &Aegis128Nonce, plaintext: &[u8], ad: &[u8]) {
        aegis::seal::<PortableBlock>(&self.key, nonce, plaintext, ad, out);
    }

    fn open(
        &self,
        out: &mut [u8],
        nonce: &Aegis128Nonce,
        ciphertext: &[u8],
        tag: &Aegis128Tag,
        ad: &[u8],
    ) -> bool {
        aegis::open::<PortableBlock>(&self.key, nonce, ciphertext, tag, ad, out)
    }
}

