// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! DER builders for unit test fixtures.

extern crate alloc;

use alloc::vec::Vec;

use const_oid::ObjectIdentifier;

/// Install `env_logger` once so `log` output shows up with `--nocapture`.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = alloc::vec![tag];
    let len = value.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.extend_from_slice(&[0x81, len as u8]);
    } else {
        out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(value);
    out
}

pub(crate) fn concat(parts: &[&[u8]]) -> Vec<u8> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

pub(crate) fn seq(parts: &[&[u8]]) -> Vec<u8> {
    tlv(0x30, &concat(parts))
}

pub(crate) fn oid(oid: &ObjectIdentifier) -> Vec<u8> {
    tlv(0x06, oid.as_bytes())
}

pub(crate) fn null() -> Vec<u8> {
    alloc::vec![0x05, 0x00]
}

pub(crate) fn int(bytes: &[u8]) -> Vec<u8> {
    tlv(0x02, bytes)
}

pub(crate) fn boolean(value: bool) -> Vec<u8> {
    tlv(0x01, &[if value { 0xff } else { 0x00 }])
}

pub(crate) fn octets(value: &[u8]) -> Vec<u8> {
    tlv(0x04, value)
}

pub(crate) fn utc_time(s: &str) -> Vec<u8> {
    tlv(0x17, s.as_bytes())
}

pub(crate) fn generalized_time(s: &str) -> Vec<u8> {
    tlv(0x18, s.as_bytes())
}

/// Context-specific constructed `[n]` wrapper.
pub(crate) fn explicit(n: u8, inner: &[u8]) -> Vec<u8> {
    tlv(0xa0 | n, inner)
}

pub(crate) fn algorithm_identifier(algorithm: &ObjectIdentifier, params: Option<&[u8]>) -> Vec<u8> {
    match params {
        Some(params) => seq(&[&oid(algorithm), params]),
        None => seq(&[&oid(algorithm)]),
    }
}

pub(crate) fn extension(id: &ObjectIdentifier, critical: bool, value: &[u8]) -> Vec<u8> {
    if critical {
        seq(&[&oid(id), &boolean(true), &octets(value)])
    } else {
        seq(&[&oid(id), &octets(value)])
    }
}

/// `[6] IA5String` GeneralName
pub(crate) fn uri(value: &str) -> Vec<u8> {
    tlv(0x86, value.as_bytes())
}

/// ECDSA P-256 key pair for end-to-end signature tests.
#[cfg(feature = "ring-backend")]
pub(crate) struct TestSigner {
    key_pair: ring::signature::EcdsaKeyPair,
    rng: ring::rand::SystemRandom,
}

#[cfg(feature = "ring-backend")]
impl TestSigner {
    pub(crate) fn new() -> Self {
        use ring::signature::{EcdsaKeyPair, ECDSA_P256_SHA256_ASN1_SIGNING};

        let rng = ring::rand::SystemRandom::new();
        let pkcs8 = EcdsaKeyPair::generate_pkcs8(&ECDSA_P256_SHA256_ASN1_SIGNING, &rng).unwrap();
        let key_pair =
            EcdsaKeyPair::from_pkcs8(&ECDSA_P256_SHA256_ASN1_SIGNING, pkcs8.as_ref(), &rng)
                .unwrap();
        TestSigner { key_pair, rng }
    }

    /// SubjectPublicKeyInfo for the key
    pub(crate) fn spki(&self) -> Vec<u8> {
        use ring::signature::KeyPair;

        let mut key = alloc::vec![0x00];
        key.extend_from_slice(self.key_pair.public_key().as_ref());
        seq(&[
            &algorithm_identifier(
                &crate::x509::oids::ECPUBLICKEY,
                Some(&oid(&crate::x509::oids::ECDSA_P256)),
            ),
            &tlv(0x03, &key),
        ])
    }

    /// DER ECDSA-Sig-Value over `message` with SHA-256
    pub(crate) fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.key_pair
            .sign(&self.rng, message)
            .unwrap()
            .as_ref()
            .to_vec()
    }
}
