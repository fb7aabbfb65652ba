// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD error types.

/// Errors that can occur during AEGIS-128 operations.
///
/// The same messages are used as panic payloads when [`Aegis128::seal`]
/// rejects a caller bug.
///
/// [`Aegis128::seal`]: crate::Aegis128::seal
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    /// No backend is registered for this platform.
    #[error("aegis128: no working implementations")]
    NoImplementation,

    #[error("aegis128: invalid key size")]
    InvalidKeySize,

    #[error("aegis128: invalid nonce size")]
    InvalidNonceSize,

    /// Plaintext, ciphertext or associated data exceed [`MAX_BYTES`](crate::MAX_BYTES).
    #[error("aegis128: data is over limit")]
    Oversized,

    /// Tag mismatch. Corrupted and forged ciphertexts are indistinguishable.
    #[error("aegis128: message authentication failure")]
    AuthenticationFailed,
}
