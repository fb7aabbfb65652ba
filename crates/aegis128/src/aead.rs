// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed AEGIS-128 instance with runtime backend selection.
//!
//! [`Aegis128`] binds one key to the backend a [`Registry`] prefers and
//! enforces every size and length precondition before the backend runs.
//!
//! ## Error Policy
//!
//! - **Construction**: missing backend and bad key size are returned as errors.
//! - **`seal`**: wrong nonce size or oversized input is a caller bug and panics.
//! - **`open`**: every failure is returned as an error, since ciphertexts are
//!   untrusted input.

use zeroize::Zeroize;

use crate::consts::{Aegis128Nonce, MAX_BYTES, NONCE_SIZE, TAG_SIZE};
use crate::error::AeadError;
use crate::key::Aegis128Key;
use crate::registry::Registry;
use crate::traits::{Factory, Instance};

/// A keyed AEGIS-128 AEAD.
///
/// Stateless between calls, so one instance may seal and open concurrently
/// from several threads.
pub struct Aegis128 {
    inner: Box<dyn Instance>,
    backend: &'static str,
}

impl Aegis128 {
    /// Creates an instance on the process-wide registry's preferred backend.
    ///
    /// # Errors
    ///
    /// [`AeadError::NoImplementation`] if no backend is available, then
    /// [`AeadError::InvalidKeySize`] if `key` is not 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, AeadError> {
        Self::with_registry(Registry::global(), key)
    }

    /// Creates an instance on `registry`'s preferred backend.
    pub fn with_registry(registry: &Registry, key: &[u8]) -> Result<Self, AeadError> {
        let factory = registry.chosen().ok_or(AeadError::NoImplementation)?;
        Self::with_factory(factory, key)
    }

    /// Creates an instance on a specific backend.
    pub fn with_factory(factory: &dyn Factory, key: &[u8]) -> Result<Self, AeadError> {
        let key = Aegis128Key::try_from(key)?;

        Ok(Self {
            inner: factory.new_instance(key),
            backend: factory.name(),
        })
    }

    /// Encrypts and authenticates `plaintext` together with `ad`, appending
    /// `ciphertext || tag` to `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `nonce` is not 16 bytes, or if `plaintext` or `ad` exceed
    /// [`MAX_BYTES`].
    pub fn seal(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], ad: &[u8]) {
        let Ok(nonce) = <&Aegis128Nonce>::try_from(nonce) else {
            panic!("{}", AeadError::InvalidNonceSize);
        };
        if exceeds_limit(plaintext.len()) || exceeds_limit(ad.len()) {
            panic!("{}", AeadError::Oversized);
        }

        let start = dst.len();
        dst.resize(start + plaintext.len() + TAG_SIZE, 0);
        self.inner.seal(&mut dst[start..], nonce, plaintext, ad);
    }

    /// Verifies and decrypts `ciphertext || tag`, appending the plaintext to
    /// `dst`.
    ///
    /// On any error `dst` is left exactly as it was passed in. Bytes written
    /// during a failed attempt are zeroed before the buffer is truncated.
    ///
    /// # Errors
    ///
    /// - [`AeadError::InvalidNonceSize`] if `nonce` is not 16 bytes
    /// - [`AeadError::AuthenticationFailed`] if the input is shorter than a tag
    ///   or the tag does not verify
    /// - [`AeadError::Oversized`] if the ciphertext body or `ad` exceed
    ///   [`MAX_BYTES`]
    pub fn open(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        ad: &[u8],
    ) -> Result<(), AeadError> {
        let nonce =
            <&Aegis128Nonce>::try_from(nonce).map_err(|_| AeadError::InvalidNonceSize)?;
        let (body, tag) = ciphertext
            .split_last_chunk::<TAG_SIZE>()
            .ok_or(AeadError::AuthenticationFailed)?;
        if exceeds_limit(body.len()) || exceeds_limit(ad.len()) {
            return Err(AeadError::Oversized);
        }

        let start = dst.len();
        dst.resize(start + body.len(), 0);

        if self.inner.open(&mut dst[start..], nonce, body, tag, ad) {
            Ok(())
        } else {
            dst[start..].zeroize();
            dst.truncate(start);
            Err(AeadError::AuthenticationFailed)
        }
    }

    /// Zeroizes the retained key.
    ///
    /// The instance stays usable but operates on an all-zero key afterwards.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Name of the backend this instance runs on.
    pub fn backend_name(&self) -> &'static str {
        self.backend
    }

    pub fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    /// Bytes `seal` adds on top of the plaintext length.
    pub fn overhead(&self) -> usize {
        TAG_SIZE
    }
}

impl core::fmt::Debug for Aegis128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aegis128 {{ backend: {}, [protected] }}", self.backend)
    }
}

#[inline(always)]
pub(crate) fn exceeds_limit(len: usize) -> bool {
    len as u64 > MAX_BYTES
}
