// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer tests, run against every backend available on this host.

use aegis128_util::hex_to_bytes;

use crate::aead::Aegis128;
use crate::registry::Registry;

struct Vector {
    name: &'static str,
    key: &'static str,
    nonce: &'static str,
    ad: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
    tag: &'static str,
}

const K0: &str = "10010000000000000000000000000000";
const N0: &str = "10000200000000000000000000000000";
const ZERO: &str = "00000000000000000000000000000000";

const VECTORS: &[Vector] = &[
    Vector {
        name: "paper vector 1 (one block, no ad)",
        key: ZERO,
        nonce: ZERO,
        ad: "",
        plaintext: ZERO,
        ciphertext: "951b050fa72b1a2fc16d2e1f01b07d7e",
        tag: "a7d2a99773249542f422217ee888d5f1",
    },
    Vector {
        name: "paper vector 2 (one block, one ad block)",
        key: ZERO,
        nonce: ZERO,
        ad: ZERO,
        plaintext: ZERO,
        ciphertext: "10b0dee65a97d751205c128a992473a1",
        tag: "46dcb9ee93c46cf13731d41b9646c131",
    },
    Vector {
        name: "empty ad and message",
        key: ZERO,
        nonce: ZERO,
        ad: "",
        plaintext: "",
        ciphertext: "",
        tag: "242d8006b64d87c36cb35714af7121f9",
    },
    Vector {
        name: "two blocks, partial ad",
        key: "00010000000000000000000000000000",
        nonce: "00000200000000000000000000000000",
        ad: "00010203",
        plaintext: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        ciphertext: "2b79f7c26588a59df3bb980451a30cbf22111338523b79452b0177a51a964536",
        tag: "9e5039aba8731b5d2235cb40faf8f74e",
    },
    Vector {
        name: "partial message block",
        key: K0,
        nonce: N0,
        ad: "0001020304050607",
        plaintext: "000102030405060708090a0b0c0d",
        ciphertext: "e08ec10685d63c7364eca78ff6e1",
        tag: "51590d186cebc8791052dbaa669180c6",
    },
    Vector {
        name: "multi-block ad and message, both partial",
        key: K0,
        nonce: N0,
        ad: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20212223242526272829",
        plaintext: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f3031323334353637",
        ciphertext: "2ce6c06ce6193e35eabdbcbfda075c1dea3b366e9aff43da44d588333fe211be3ee73a84ecb3a03d",
        tag: "dbb7806d4a031cc15df565f2a303aa40",
    },
    Vector {
        name: "single byte message",
        key: K0,
        nonce: N0,
        ad: "",
        plaintext: "01",
        ciphertext: "ec",
        tag: "c6bae0034f48975c4b7c5cedcde62120",
    },
    Vector {
        name: "ad only",
        key: K0,
        nonce: N0,
        ad: "000102030405060708090a0b0c0d0e0f10",
        plaintext: "",
        ciphertext: "",
        tag: "f64d1fb52518398c13df05e8b76e716d",
    },
    Vector {
        name: "four full message blocks",
        key: K0,
        nonce: N0,
        ad: "000102030405060708090a0b0c0d0e0f",
        plaintext: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f",
        ciphertext: "e08ec10685d63c7364eca78ff6e1a1dd1aa8f3676a744aa76a8c29d49ed89bfe2274228c77093d6fa16cfdecdda7b299200d4b5136a2ec1bfd3d4520d89e1e89",
        tag: "34e143dd228004747ca95fa15acf91b1",
    },
];

#[test]
fn test_seal_known_answers() {
    let registry = Registry::detect();
    assert!(registry.chosen().is_some(), "No backend registered");

    for factory in registry.factories() {
        for vector in VECTORS {
            let aead = Aegis128::with_factory(factory, &hex_to_bytes(vector.key))
                .expect("Failed to construct Aegis128");

            let mut sealed = Vec::new();
            aead.seal(
                &mut sealed,
                &hex_to_bytes(vector.nonce),
                &hex_to_bytes(vector.plaintext),
                &hex_to_bytes(vector.ad),
            );

            let mut expected = hex_to_bytes(vector.ciphertext);
            expected.extend_from_slice(&hex_to_bytes(vector.tag));

            assert_eq!(
                sealed,
                expected,
                "{}: {} mismatch",
                factory.name(),
                vector.name
            );
        }
    }
}

#[test]
fn test_open_known_answers() {
    let registry = Registry::detect();

    for factory in registry.factories() {
        for vector in VECTORS {
            let aead = Aegis128::with_factory(factory, &hex_to_bytes(vector.key))
                .expect("Failed to construct Aegis128");

            let mut sealed = hex_to_bytes(vector.ciphertext);
            sealed.extend_from_slice(&hex_to_bytes(vector.tag));

            let mut opened = Vec::new();
            aead.open(
                &mut opened,
                &hex_to_bytes(vector.nonce),
                &sealed,
                &hex_to_bytes(vector.ad),
            )
            .unwrap_or_else(|e| panic!("{}: {} failed: {e}", factory.name(), vector.name));

            assert_eq!(
                opened,
                hex_to_bytes(vector.plaintext),
                "{}: {} plaintext mismatch",
                factory.name(),
                vector.name
            );
        }
    }
}
