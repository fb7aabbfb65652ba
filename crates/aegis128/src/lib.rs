// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEGIS-128 authenticated encryption with runtime backend dispatch.
//!
//! ```
//! use aegis128::Aegis128;
//!
//! let aead = Aegis128::new(&[0x42; 16]).expect("backend available");
//! let nonce = [0x07; 16];
//!
//! let mut sealed = Vec::new();
//! aead.seal(&mut sealed, &nonce, b"attack at dawn", b"header");
//!
//! let mut opened = Vec::new();
//! aead.open(&mut opened, &nonce, &sealed, b"header").expect("authentic");
//! assert_eq!(opened, b"attack at dawn");
//! ```

mod aead;
mod aegis;
mod backend;
mod consts;
mod error;
mod feature_detector;
mod key;
mod registry;
mod traits;

#[cfg(test)]
mod tests;

pub use aead::Aegis128;
pub use consts::{Aegis128Nonce, Aegis128Tag, KEY_SIZE, MAX_BYTES, NONCE_SIZE, TAG_SIZE};
pub use error::AeadError;
pub use key::Aegis128Key;
pub use registry::Registry;
pub use traits::{Factory, Instance};

#[cfg(feature = "portable")]
pub use backend::portable::PortableFactory;
