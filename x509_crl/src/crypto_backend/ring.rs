// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Ring cryptographic backend implementation.

use super::{parse_public_key_info, CryptoBackend, VerificationAlgorithm};
use crate::asn1::BitString;
use crate::error::{Error, Result, SignatureError};
use crate::x509::SignatureAlgorithm;
use ring::signature::{self, UnparsedPublicKey};

/// Ring-based cryptographic backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingBackend;

impl CryptoBackend for RingBackend {
    fn verify_signed_data(
        &self,
        algorithm: &SignatureAlgorithm,
        signed_data: &[u8],
        signature: &BitString<'_>,
        spki_tlv: &[u8],
    ) -> Result<()> {
        log::trace!("Verifying signature with algorithm {:?}", algorithm);

        if signature.unused_bits() != 0 {
            return Err(Error::SignatureError(SignatureError::InvalidSignatureFormat(
                "signature BIT STRING has unused bits".into(),
            )));
        }

        let key = parse_public_key_info(spki_tlv)?;
        let verification =
            VerificationAlgorithm::from_signature_algorithm(algorithm, &key.algorithm)?;

        let ring_algo: &dyn signature::VerificationAlgorithm = match verification {
            VerificationAlgorithm::EcdsaP256Sha256 => &signature::ECDSA_P256_SHA256_ASN1,
            VerificationAlgorithm::EcdsaP256Sha384 => &signature::ECDSA_P256_SHA384_ASN1,
            VerificationAlgorithm::EcdsaP384Sha256 => &signature::ECDSA_P384_SHA256_ASN1,
            VerificationAlgorithm::EcdsaP384Sha384 => &signature::ECDSA_P384_SHA384_ASN1,
            VerificationAlgorithm::RsaPkcs1Sha1 => {
                &signature::RSA_PKCS1_2048_8192_SHA1_FOR_LEGACY_USE_ONLY
            }
            VerificationAlgorithm::RsaPkcs1Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
            VerificationAlgorithm::RsaPkcs1Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
            VerificationAlgorithm::RsaPkcs1Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
            VerificationAlgorithm::RsaPssSha256 => &signature::RSA_PSS_2048_8192_SHA256,
            VerificationAlgorithm::RsaPssSha384 => &signature::RSA_PSS_2048_8192_SHA384,
            VerificationAlgorithm::RsaPssSha512 => &signature::RSA_PSS_2048_8192_SHA512,
        };

        let pk = UnparsedPublicKey::new(ring_algo, &key.public_key);

        pk.verify(signed_data, signature.bytes().as_bytes())
            .map_err(|_| {
                log::debug!("Signature verification failed ({:?})", verification);
                Error::signature_failed()
            })?;

        log::trace!("Signature verification successful");
        Ok(())
    }
}
