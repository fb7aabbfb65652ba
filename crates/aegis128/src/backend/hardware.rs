// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hardware accelerated backend (AES-NI on x86_64, Crypto Extensions on aarch64).

use zeroize::Zeroize;

use super::intrinsics::Intrinsics;
use crate::aegis;
use crate::consts::{Aegis128Nonce, Aegis128Tag};
use crate::feature_detector::FeatureDetector;
use crate::key::Aegis128Key;
use crate::traits::{Factory, Instance};

#[cfg(target_arch = "x86_64")]
pub(crate) const NAME: &str = "aesni";

#[cfg(target_arch = "aarch64")]
pub(crate) const NAME: &str = "armv8-crypto";

/// Factory for the hardware backend.
///
/// Only obtainable through [`HardwareFactory::detect`], so every instance it
/// builds runs on a CPU with AES support.
#[derive(Debug)]
pub(crate) struct HardwareFactory {
    _detected: (),
}

impl HardwareFactory {
    pub(crate) fn detect(detector: &FeatureDetector) -> Option<Self> {
        detector.has_aes().then_some(Self { _detected: () })
    }
}

impl Factory for HardwareFactory {
    fn name(&self) -> &'static str {
        NAME
    }

    fn new_instance(&self, key: Aegis128Key) -> Box<dyn Instance> {
        Box::new(HardwareInstance { key })
    }
}

struct HardwareInstance {
    key: Aegis128Key,
}

impl Instance for HardwareInstance {
    fn reset(&mut self) {
        self.key.zeroize();
    }

    fn seal(&self, out: &mut [u8], nonce: &Aegis128Nonce, plaintext: &[u8], ad: &[u8]) {
        // SAFETY: HardwareInstance is only built by a detected HardwareFactory.
        unsafe { seal_aes(&self.key, nonce, plaintext, ad, out) }
    }

    fn open(
        &self,
        out: &mut [u8],
        nonce: &Aegis128Nonce,
        ciphertext: &[u8],
        tag: &Aegis128Tag,
        ad: &[u8],
    ) -> bool {
        // SAFETY: HardwareInstance is only built by a detected HardwareFactory.
        unsafe { open_aes(&self.key, nonce, ciphertext, tag, ad, out) }
    }
}

/// # Safety
/// Caller must ensure AES hardware support is available.
#[target_feature(enable = "aes")]
unsafe fn seal_aes(
    key: &Aegis128Key,
    nonce: &Aegis128Nonce,
    plaintext: &[u8],
    ad: &[u8],
    out: &mut [u8],
) {
    aegis::seal::<Intrinsics>(key, nonce, plaintext, ad, out);
}

/// # Safety
/// Caller must ensure AES hardware support is available.
#[target_feature(enable = "aes")]
unsafe fn open_aes(
    key: &Aegis128Key,
    nonce: &Aegis128Nonce,
    ciphertext: &[u8],
    tag: &Aegis128Tag,
    ad: &[u8],
    out: &mut [u8],
) -> bool {
    aegis::open::<Intrinsics>(key, nonce, ciphertext, tag, ad, out)
}
