// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
pub enum FeatureDetectorBehaviour {
    None,
    ForceAesFalse,
}

/// Capability predicate consulted once when a [`Registry`](crate::Registry)
/// is built.
pub struct FeatureDetector {
    #[cfg(test)]
    behaviour: FeatureDetectorBehaviour,
}

impl FeatureDetector {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(test)]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    // Platform-level AES detection (no test override)
    #[inline(always)]
    #[cfg(target_arch = "x86_64")]
    pub fn platform_has_aes(&self) -> bool {
        cpufeatures::new!(aes_detection, "aes", "sse2");
        aes_detection::get()
    }

    #[inline(always)]
    #[cfg(target_arch = "aarch64")]
    pub fn platform_has_aes(&self) -> bool {
        cpufeatures::new!(aes_detection, "aes");
        aes_detection::get()
    }

    #[inline(always)]
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn platform_has_aes(&self) -> bool {
        false
    }

    #[inline(always)]
    pub fn has_aes(&self) -> bool {
        #[cfg(test)]
        match self.behaviour {
            FeatureDetectorBehaviour::None => self.platform_has_aes(),
            FeatureDetectorBehaviour::ForceAesFalse => false,
        }

        #[cfg(not(test))]
        self.platform_has_aes()
    }

    #[cfg(test)]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}

impl Default for FeatureDetector {
    fn default() -> Self {
        Self::new()
    }
}
