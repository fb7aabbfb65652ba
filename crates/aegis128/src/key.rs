// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key material with guaranteed zeroization.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::KEY_SIZE;
use crate::error::AeadError;

/// A 128-bit AEGIS key.
///
/// Zeroized on drop and on [`Instance::reset`](crate::Instance::reset).
/// Moved into the backend instance at construction, never copied.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aegis128Key([u8; KEY_SIZE]);

impl Aegis128Key {
    /// Wraps raw key bytes.
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub(crate) fn expose(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        aegis128_util::is_slice_zeroized(&self.0)
    }
}

impl TryFrom<&[u8]> for Aegis128Key {
    type Error = AeadError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; KEY_SIZE] = key.try_into().map_err(|_| AeadError::InvalidKeySize)?;
        Ok(Self(*bytes))
    }
}

impl core::fmt::Debug for Aegis128Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aegis128Key {{ [protected] }}")
    }
}
