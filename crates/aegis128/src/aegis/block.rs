// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 128-bit block abstraction over the AES round primitive.

use zeroize::Zeroize;

/// A 128-bit register supporting one AES encryption round.
///
/// Does NOT require Copy: callers zeroize temporaries explicitly.
pub(crate) trait AesBlock: Zeroize + Sized {
    /// Load 16 bytes into a block.
    fn load(bytes: &[u8; 16]) -> Self;

    /// Store block to 16 bytes.
    fn store(&self, out: &mut [u8; 16]);

    /// XOR two blocks.
    fn xor(&self, other: &Self) -> Self;

    /// AND two blocks.
    fn and(&self, other: &Self) -> Self;

    /// XOR in-place: self = self ^ other
    fn xor_in_place(&mut self, other: &Self);

    /// AES encryption round: SubBytes + ShiftRows + MixColumns + XOR round_key
    fn aes_enc(&self, round_key: &Self) -> Self;

    /// Move value to dest, zeroizing the old dest value.
    #[inline(always)]
    fn move_to(mut self, dest: &mut Self) {
        core::mem::swap(&mut self, dest);
        self.zeroize();
    }
}
