// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend trait definitions.

use crate::consts::{Aegis128Nonce, Aegis128Tag};
use crate::key::Aegis128Key;

/// Produces keyed [`Instance`]s for one AEGIS-128 backend.
///
/// Factories are collected once into a [`Registry`](crate::Registry) and never
/// mutated afterwards.
pub trait Factory: Send + Sync {
    /// Returns the name of the implementation.
    fn name(&self) -> &'static str;

    /// Constructs a new keyed instance, taking ownership of the key.
    fn new_instance(&self, key: Aegis128Key) -> Box<dyn Instance>;
}

/// A keyed AEGIS-128 instance.
///
/// Instances are stateless between calls: every `seal`/`open` re-initializes
/// the state from the retained key and the per-call nonce. Size and length
/// preconditions are enforced by [`Aegis128`](crate::Aegis128) before an
/// instance is reached.
pub trait Instance: Send + Sync {
    /// Attempts to clear the instance of sensitive data.
    fn reset(&mut self);

    /// Encrypts `plaintext`, authenticating it together with `ad`.
    ///
    /// `out` must be exactly `plaintext.len() + TAG_SIZE` bytes and receives
    /// `ciphertext || tag`.
    fn seal(&self, out: &mut [u8], nonce: &Aegis128Nonce, plaintext: &[u8], ad: &[u8]);

    /// Decrypts `ciphertext` and verifies `tag` over it and `ad`.
    ///
    /// `out` must be exactly `ciphertext.len()` bytes. Returns `false` on tag
    /// mismatch, in which case `out` is zero-filled.
    fn open(
        &self,
        out: &mut [u8],
        nonce: &Aegis128Nonce,
        ciphertext: &[u8],
        tag: &Aegis128Tag,
        ad: &[u8],
    ) -> bool;
}
