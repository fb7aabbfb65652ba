// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ARM Crypto intrinsics for aarch64.

use core::arch::aarch64::{
    uint8x16_t, vaeseq_u8, vaesmcq_u8, vandq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8,
};

use zeroize::Zeroize;

use crate::aegis::block::AesBlock;

/// AES block using ARM Crypto intrinsics.
#[repr(transparent)]
pub(crate) struct Intrinsics(uint8x16_t);

impl AesBlock for Intrinsics {
    #[inline(always)]
    fn load(bytes: &[u8; 16]) -> Self {
        Self(unsafe { vld1q_u8(bytes.as_ptr()) })
    }

    #[inline(always)]
    fn store(&self, out: &mut [u8; 16]) {
        unsafe { vst1q_u8(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn xor(&self, other: &Self) -> Self {
        Self(unsafe { veorq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn and(&self, other: &Self) -> Self {
        Self(unsafe { vandq_u8(self.0, other.0) })
    }

    #[inline(always)]
    fn xor_in_place(&mut self, other: &Self) {
        self.0 = unsafe { veorq_u8(self.0, other.0) };
    }

    /// AESE xors the key before SubBytes, so run it with a zero key and
    /// xor the round key after MixColumns.
    #[inline(always)]
    fn aes_enc(&self, round_key: &Self) -> Self {
        unsafe {
            let zero = vdupq_n_u8(0);
            let after_sub_shift = vaeseq_u8(self.0, zero);
            let after_mix = vaesmcq_u8(after_sub_shift);
            Self(veorq_u8(after_mix, round_key.0))
        }
    }
}

impl Zeroize for Intrinsics {
    #[inline]
    fn zeroize(&mut self) {
        // SAFETY: vdupq_n_u8 only needs NEON, which is baseline on aarch64
        self.0 = unsafe { vdupq_n_u8(0) };
    }
}
