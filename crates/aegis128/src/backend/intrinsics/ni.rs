// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-NI intrinsics for x86_64.
//!
//! `aes_enc` must only run after AES-NI has been detected; the methods are
//! `inline(always)` so they inline into the `target_feature` drivers.

use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_and_si128, _mm_loadu_si128, _mm_setzero_si128,
    _mm_storeu_si128, _mm_xor_si128,
};

use zeroize::Zeroize;

use crate::aegis::block::AesBlock;

/// AES block using AES-NI intrinsics.
#[repr(transparent)]
pub(crate) struct Intrinsics(__m128i);

impl AesBlock for Intrinsics {
    #[inline(always)]
    fn load(bytes: &[u8; 16]) -> Self {
        Self(unsafe { _mm_loadu_si128(bytes.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    fn store(&self, out: &mut [u8; 16]) {
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
    }

    #[inline(always)]
    fn xor(&self, other: &Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, other.0) })
    }

    #[inline(always)]
    fn and(&self, other: &Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, other.0) })
    }

    #[inline(always)]
    fn xor_in_place(&mut self, other: &Self) {
        self.0 = unsafe { _mm_xor_si128(self.0, other.0) };
    }

    #[inline(always)]
    fn aes_enc(&self, round_key: &Self) -> Self {
        Self(unsafe { _mm_aesenc_si128(self.0, round_key.0) })
    }
}

impl Zeroize for Intrinsics {
    #[inline]
    fn zeroize(&mut self) {
        // Overwrite SIMD register with zeros
        self.0 = unsafe { _mm_setzero_si128() };
    }
}
