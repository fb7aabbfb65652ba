// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Interchangeable AEGIS-128 engines.
//!
//! - **hardware**: x86_64 AES-NI / aarch64 Crypto Extensions, registered only
//!   when the CPU reports AES support
//! - **portable**: constant-time software AES round, behind the `portable`
//!   feature

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub(crate) mod hardware;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod intrinsics;
#[cfg(feature = "portable")]
pub(crate) mod portable;

#[cfg(test)]
mod tests;
