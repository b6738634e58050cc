// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Cryptographic backend abstraction for signature verification.
//!
//! The revocation checker only needs one cryptographic operation: verify
//! that a CRL's TBSCertList was signed by the key in an issuer certificate.
//! Backends implement [`CryptoBackend`]; the `ring-backend` feature provides
//! [`RingBackend`].
//!
//! Backends receive the resolved [`SignatureAlgorithm`] and the issuer's
//! SPKI TLV. [`PublicKeyInfo`] and [`VerificationAlgorithm`] turn those into
//! a concrete primitive (curve and digest fixed) so backends only need a
//! lookup table.

extern crate alloc;

use alloc::vec::Vec;

use const_oid::ObjectIdentifier;
use der::Decode;

use crate::asn1::BitString;
use crate::error::{Error, KeyError, Result, SignatureError};
use crate::x509::{oids, DigestAlgorithm, SignatureAlgorithm};

#[cfg(feature = "ring-backend")]
mod ring;
#[cfg(feature = "ring-backend")]
pub use self::ring::*;

/// Crypto backend trait for signature verification.
pub trait CryptoBackend {
    /// Verify `signature` over `signed_data` with the key in `spki_tlv`.
    ///
    /// `spki_tlv` is the complete DER SubjectPublicKeyInfo of the signer.
    fn verify_signed_data(
        &self,
        algorithm: &SignatureAlgorithm,
        signed_data: &[u8],
        signature: &BitString<'_>,
        spki_tlv: &[u8],
    ) -> Result<()>;
}

impl<B: CryptoBackend + ?Sized> CryptoBackend for &B {
    fn verify_signed_data(
        &self,
        algorithm: &SignatureAlgorithm,
        signed_data: &[u8],
        signature: &BitString<'_>,
        spki_tlv: &[u8],
    ) -> Result<()> {
        (**self).verify_signed_data(algorithm, signed_data, signature, spki_tlv)
    }
}

// ============================================================================
// SubjectPublicKeyInfo
// ============================================================================

/// Key type named by a SubjectPublicKeyInfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyAlgorithm {
    /// rsaEncryption or id-RSASSA-PSS
    Rsa,
    /// id-ecPublicKey on the given named curve
    Ec(ObjectIdentifier),
}

/// A decoded SubjectPublicKeyInfo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    pub algorithm: PublicKeyAlgorithm,
    /// Contents of the `subjectPublicKey` BIT STRING
    pub public_key: Vec<u8>,
}

/// Decode a SubjectPublicKeyInfo TLV.
pub fn parse_public_key_info(spki_tlv: &[u8]) -> Result<PublicKeyInfo> {
    let spki = spki::SubjectPublicKeyInfo::<der::Any, der::asn1::BitString>::from_der(spki_tlv)
        .map_err(|e| {
            Error::KeyError(KeyError::InvalidEncoding(alloc::format!(
                "SubjectPublicKeyInfo: {}",
                e
            )))
        })?;

    let algorithm = if spki.algorithm.oid == oids::RSA || spki.algorithm.oid == oids::RSASSA_PSS
    {
        PublicKeyAlgorithm::Rsa
    } else if spki.algorithm.oid == oids::ECPUBLICKEY {
        let curve = spki
            .algorithm
            .parameters
            .as_ref()
            .and_then(|p| p.decode_as::<ObjectIdentifier>().ok())
            .ok_or_else(|| {
                Error::KeyError(KeyError::InvalidParameters(
                    "EC key without a named curve".into(),
                ))
            })?;
        PublicKeyAlgorithm::Ec(curve)
    } else {
        return Err(Error::KeyError(KeyError::UnsupportedKeyType(
            alloc::format!("{}", spki.algorithm.oid),
        )));
    };

    let public_key = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| {
            Error::KeyError(KeyError::InvalidEncoding(
                "subjectPublicKey has unused bits".into(),
            ))
        })?
        .to_vec();

    Ok(PublicKeyInfo {
        algorithm,
        public_key,
    })
}

// ============================================================================
// Verification primitives
// ============================================================================

/// A signature primitive with curve and digest fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationAlgorithm {
    /// ECDSA with P-256 curve and SHA-256
    EcdsaP256Sha256,
    /// ECDSA with P-256 curve and SHA-384
    EcdsaP256Sha384,
    /// ECDSA with P-384 curve and SHA-256
    EcdsaP384Sha256,
    /// ECDSA with P-384 curve and SHA-384
    EcdsaP384Sha384,
    /// RSA PKCS#1 v1.5 with SHA-1
    RsaPkcs1Sha1,
    /// RSA PKCS#1 v1.5 with SHA-256
    RsaPkcs1Sha256,
    /// RSA PKCS#1 v1.5 with SHA-384
    RsaPkcs1Sha384,
    /// RSA PKCS#1 v1.5 with SHA-512
    RsaPkcs1Sha512,
    /// RSA PSS with SHA-256
    RsaPssSha256,
    /// RSA PSS with SHA-384
    RsaPssSha384,
    /// RSA PSS with SHA-512
    RsaPssSha512,
}

impl VerificationAlgorithm {
    /// Combine a signature algorithm with the signer's key type.
    ///
    /// MD2/MD4/MD5, DSA, ECDSA with SHA-1 or SHA-512 and curves other than
    /// P-256/P-384 are not supported.
    pub fn from_signature_algorithm(
        algorithm: &SignatureAlgorithm,
        key: &PublicKeyAlgorithm,
    ) -> Result<Self> {
        use DigestAlgorithm as D;
        use VerificationAlgorithm as V;

        let unsupported = || {
            Error::SignatureError(SignatureError::UnsupportedSignatureAlgorithm(
                alloc::format!("{:?} with {:?} key", algorithm, key),
            ))
        };

        match (algorithm, key) {
            (SignatureAlgorithm::RsaPkcs1(digest), PublicKeyAlgorithm::Rsa) => match digest {
                D::Sha1 => Ok(V::RsaPkcs1Sha1),
                D::Sha256 => Ok(V::RsaPkcs1Sha256),
                D::Sha384 => Ok(V::RsaPkcs1Sha384),
                D::Sha512 => Ok(V::RsaPkcs1Sha512),
                _ => Err(unsupported()),
            },
            (SignatureAlgorithm::RsaPss(digest, _), PublicKeyAlgorithm::Rsa) => match digest {
                D::Sha256 => Ok(V::RsaPssSha256),
                D::Sha384 => Ok(V::RsaPssSha384),
                D::Sha512 => Ok(V::RsaPssSha512),
                _ => Err(unsupported()),
            },
            (SignatureAlgorithm::Ecdsa(digest), PublicKeyAlgorithm::Ec(curve)) => {
                match (*curve, digest) {
                    (oids::ECDSA_P256, D::Sha256) => Ok(V::EcdsaP256Sha256),
                    (oids::ECDSA_P256, D::Sha384) => Ok(V::EcdsaP256Sha384),
                    (oids::ECDSA_P384, D::Sha256) => Ok(V::EcdsaP384Sha256),
                    (oids::ECDSA_P384, D::Sha384) => Ok(V::EcdsaP384Sha384),
                    _ => Err(unsupported()),
                }
            }
            (SignatureAlgorithm::Dsa(_), _) => Err(unsupported()),
            _ => Err(Error::KeyError(KeyError::UnsupportedKeyType(alloc::format!(
                "{:?} key for {:?}",
                key,
                algorithm
            )))),
        }
    }
}
