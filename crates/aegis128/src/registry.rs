// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime backend registry.
//!
//! Backends register in preference order: hardware first, then portable.
//! The first registered factory is the one every new [`Aegis128`] uses.
//!
//! ## Backend Selection
//!
//! - **x86_64 with AES-NI**: `aesni`
//! - **aarch64 with Crypto Extensions**: `armv8-crypto`
//! - **`portable` feature**: `portable`, always registered after any hardware
//!   backend
//!
//! [`Aegis128`]: crate::Aegis128

use std::sync::OnceLock;

use crate::feature_detector::FeatureDetector;
use crate::traits::Factory;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Ordered, immutable list of available backend factories.
pub struct Registry {
    factories: Vec<Box<dyn Factory>>,
}

impl Registry {
    /// Probes the CPU and registers every usable backend.
    pub fn detect() -> Self {
        let feature_detector = FeatureDetector::new();
        Self::detect_with(&feature_detector)
    }

    #[allow(unused_mut, unused_variables)]
    pub(crate) fn detect_with(feature_detector: &FeatureDetector) -> Self {
        let mut factories: Vec<Box<dyn Factory>> = Vec::new();

        #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
        if let Some(factory) = crate::backend::hardware::HardwareFactory::detect(feature_detector)
        {
            factories.push(Box::new(factory));
        }

        #[cfg(feature = "portable")]
        factories.push(Box::new(crate::backend::portable::PortableFactory));

        let registry = Self { factories };
        match registry.chosen() {
            Some(factory) => log::debug!(
                "aegis128: selected backend {} (available: {:?})",
                factory.name(),
                registry.names()
            ),
            None => log::warn!("aegis128: no working implementations for this target"),
        }

        registry
    }

    /// Builds a registry from an explicit, already ordered factory list.
    pub fn from_factories(factories: Vec<Box<dyn Factory>>) -> Self {
        Self { factories }
    }

    /// A registry with no backends. Every construction through it fails.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Process-wide registry, detected on first use.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::detect)
    }

    /// The preferred factory, if any backend is registered.
    pub fn chosen(&self) -> Option<&dyn Factory> {
        self.factories.first().map(|factory| factory.as_ref())
    }

    /// All registered factories in preference order.
    pub fn factories(&self) -> impl Iterator<Item = &dyn Factory> {
        self.factories.iter().map(|factory| factory.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.factories().map(|factory| factory.name()).collect()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("factories", &self.names())
            .finish()
    }
}
