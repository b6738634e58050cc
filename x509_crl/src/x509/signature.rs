// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Signature AlgorithmIdentifier resolution
//!
//! This module maps the DER encoding of an `AlgorithmIdentifier` to a
//! [`SignatureAlgorithm`]: an algorithm family, its digest, and for
//! RSASSA-PSS the mask generation hash and salt length.
//!
//! ```asn1
//! AlgorithmIdentifier ::= SEQUENCE {
//!     algorithm   OBJECT IDENTIFIER,
//!     parameters  ANY DEFINED BY algorithm OPTIONAL
//! }
//! ```
//!
//! # Parameter Rules
//! - RSA PKCS#1 v1.5 and DSA: parameters are NULL or absent
//! - ECDSA: parameters are absent
//! - RSASSA-PSS: parameters are required, and only the three
//!   hash/MGF1/salt combinations used by TLS 1.3 are accepted
//!
//! # References
//! - RFC 3279 Section 2.2 - Signature Algorithms
//! - RFC 4055 Section 3.1 - RSASSA-PSS Public Keys
//! - RFC 5758 Section 3 - ECDSA and DSA with SHA-2

extern crate alloc;

use alloc::format;

use const_oid::ObjectIdentifier;

use super::oids;
use crate::asn1::{context_specific_constructed, parse_uint32, Input, Parser, Tag};
use crate::error::{AlgorithmError, Error, Result};

/// Message digest used by a signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

/// Signature algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithmId {
    /// RSA PKCS#1 v1.5
    RsaPkcs1,
    /// RSASSA-PSS
    RsaPss,
    /// ECDSA
    Ecdsa,
    /// DSA
    Dsa,
}

/// Parameters of an RSASSA-PSS signature beyond the message digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RsaPssParameters {
    mgf1_hash: DigestAlgorithm,
    salt_length: u32,
}

impl RsaPssParameters {
    /// Hash used by MGF1
    pub fn mgf1_hash(&self) -> DigestAlgorithm {
        self.mgf1_hash
    }

    /// Salt length in bytes
    pub fn salt_length(&self) -> u32 {
        self.salt_length
    }
}

/// A resolved signature algorithm.
///
/// Two values compare equal exactly when they describe the same signature
/// scheme, which is what [`SignatureAlgorithm::is_equivalent`] relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    RsaPkcs1(DigestAlgorithm),
    Dsa(DigestAlgorithm),
    Ecdsa(DigestAlgorithm),
    RsaPss(DigestAlgorithm, RsaPssParameters),
}

/// Family of a table entry; PSS digests come from the parameters.
#[derive(Clone, Copy)]
enum Family {
    RsaPkcs1(DigestAlgorithm),
    Dsa(DigestAlgorithm),
    Ecdsa(DigestAlgorithm),
    RsaPss,
}

const SIGNATURE_ALGORITHMS: &[(ObjectIdentifier, Family)] = &[
    (oids::SHA256_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Sha256)),
    (oids::SHA384_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Sha384)),
    (oids::SHA512_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Sha512)),
    (oids::SHA1_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Sha1)),
    (oids::SHA1_WITH_RSA_OIW, Family::RsaPkcs1(DigestAlgorithm::Sha1)),
    (oids::MD5_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Md5)),
    (oids::MD4_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Md4)),
    (oids::MD2_WITH_RSA, Family::RsaPkcs1(DigestAlgorithm::Md2)),
    (oids::ECDSA_WITH_SHA256, Family::Ecdsa(DigestAlgorithm::Sha256)),
    (oids::ECDSA_WITH_SHA384, Family::Ecdsa(DigestAlgorithm::Sha384)),
    (oids::ECDSA_WITH_SHA512, Family::Ecdsa(DigestAlgorithm::Sha512)),
    (oids::ECDSA_WITH_SHA1, Family::Ecdsa(DigestAlgorithm::Sha1)),
    (oids::DSA_WITH_SHA1, Family::Dsa(DigestAlgorithm::Sha1)),
    (oids::DSA_WITH_SHA256, Family::Dsa(DigestAlgorithm::Sha256)),
    (oids::RSASSA_PSS, Family::RsaPss),
];

const DIGEST_ALGORITHMS: &[(ObjectIdentifier, DigestAlgorithm)] = &[
    (oids::SHA1, DigestAlgorithm::Sha1),
    (oids::SHA256, DigestAlgorithm::Sha256),
    (oids::SHA384, DigestAlgorithm::Sha384),
    (oids::SHA512, DigestAlgorithm::Sha512),
];

/// Split an `AlgorithmIdentifier` into its OID value and raw parameters TLV.
///
/// Absent parameters are returned as an empty [`Input`]. Nothing may follow
/// the parameters.
pub fn parse_algorithm_identifier(input: Input<'_>) -> Result<(Input<'_>, Input<'_>)> {
    let mut parser = Parser::new(input);
    let mut algorithm_identifier = parser.read_sequence()?;
    parser.expect_end("AlgorithmIdentifier")?;

    let oid = algorithm_identifier.read_tag(Tag::ObjectIdentifier)?;
    let params = if algorithm_identifier.has_more() {
        algorithm_identifier.read_raw_tlv()?
    } else {
        Input::default()
    };
    algorithm_identifier.expect_end("AlgorithmIdentifier parameters")?;

    Ok((oid, params))
}

fn is_null(params: Input<'_>) -> bool {
    let mut parser = Parser::new(params);
    match parser.read_tag(Tag::Null) {
        Ok(value) => value.is_empty() && !parser.has_more(),
        Err(_) => false,
    }
}

fn require_null_or_empty(params: Input<'_>) -> Result<()> {
    if params.is_empty() || is_null(params) {
        Ok(())
    } else {
        Err(Error::invalid_parameters("expected NULL or absent parameters"))
    }
}

/// Resolve a `HashAlgorithm` (an AlgorithmIdentifier naming a SHA digest).
pub fn parse_hash_algorithm(input: Input<'_>) -> Result<DigestAlgorithm> {
    let (oid, params) = parse_algorithm_identifier(input)?;
    let digest = DIGEST_ALGORITHMS
        .iter()
        .find(|(id, _)| oids::oid_matches(id, oid))
        .map(|(_, digest)| *digest)
        .ok_or_else(|| {
            Error::unsupported_algorithm(format!("hash {}", oids::describe_oid(oid)))
        })?;
    // RFC 4055 2.1: NULL and absent are both accepted.
    require_null_or_empty(params)?;
    Ok(digest)
}

/// Resolve a `MaskGenAlgorithm`, which must be MGF1 over a SHA digest.
fn parse_mask_gen_algorithm(input: Input<'_>) -> Result<DigestAlgorithm> {
    let (oid, params) = parse_algorithm_identifier(input)?;
    if !oids::oid_matches(&oids::MGF1, oid) {
        return Err(Error::unsupported_algorithm(format!(
            "mask generation {}",
            oids::describe_oid(oid)
        )));
    }
    parse_hash_algorithm(params)
}

/// Decode RSASSA-PSS-params.
///
/// ```asn1
/// RSASSA-PSS-params ::= SEQUENCE {
///     hashAlgorithm     [0] HashAlgorithm DEFAULT sha1,
///     maskGenAlgorithm  [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
///     saltLength        [2] INTEGER DEFAULT 20,
///     trailerField      [3] TrailerField DEFAULT trailerFieldBC
/// }
/// ```
///
/// The defaults describe SHA-1, which is never accepted here, so the first
/// three fields are required.
fn parse_rsa_pss_params(params: Input<'_>) -> Result<SignatureAlgorithm> {
    if params.is_empty() {
        return Err(Error::AlgorithmError(AlgorithmError::MissingParameters));
    }
    let mut outer = Parser::new(params);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("RSASSA-PSS-params")?;

    let hash = parse_hash_algorithm(parser.read_tag(context_specific_constructed(0))?)?;
    let mgf1_hash = parse_mask_gen_algorithm(parser.read_tag(context_specific_constructed(1))?)?;

    let mut salt_parser = parser.read_constructed(context_specific_constructed(2))?;
    let salt_length = parse_uint32(salt_parser.read_tag(Tag::Integer)?)?;
    salt_parser.expect_end("saltLength")?;

    if let Some(trailer) = parser.read_optional_tag(context_specific_constructed(3))? {
        let mut trailer_parser = Parser::new(trailer);
        let trailer_field = trailer_parser.read_uint64()?;
        trailer_parser.expect_end("trailerField")?;
        if trailer_field != 1 {
            return Err(Error::invalid_parameters(format!(
                "trailerField {}",
                trailer_field
            )));
        }
    }
    parser.expect_end("RSASSA-PSS-params")?;

    match (hash, mgf1_hash, salt_length) {
        (DigestAlgorithm::Sha256, DigestAlgorithm::Sha256, 32)
        | (DigestAlgorithm::Sha384, DigestAlgorithm::Sha384, 48)
        | (DigestAlgorithm::Sha512, DigestAlgorithm::Sha512, 64) => Ok(SignatureAlgorithm::RsaPss(
            hash,
            RsaPssParameters {
                mgf1_hash,
                salt_length,
            },
        )),
        _ => Err(Error::invalid_parameters(format!(
            "unsupported RSASSA-PSS combination {:?}/{:?}/{}",
            hash, mgf1_hash, salt_length
        ))),
    }
}

impl SignatureAlgorithm {
    /// Resolve the DER encoding of a signature `AlgorithmIdentifier`.
    ///
    /// Unknown OIDs fail with [`AlgorithmError::UnknownOid`], which carries
    /// the OID and raw parameters for diagnostics.
    pub fn create(algorithm_identifier: Input<'_>) -> Result<Self> {
        let (oid, params) = parse_algorithm_identifier(algorithm_identifier)?;

        let family = SIGNATURE_ALGORITHMS
            .iter()
            .find(|(id, _)| oids::oid_matches(id, oid))
            .map(|(_, family)| *family)
            .ok_or_else(|| {
                let oid = oids::describe_oid(oid);
                log::debug!("Unknown signature algorithm {}", oid);
                Error::AlgorithmError(AlgorithmError::UnknownOid {
                    oid,
                    params: format!("{:02x?}", params.as_bytes()),
                })
            })?;

        let algorithm = match family {
            Family::RsaPkcs1(digest) => {
                require_null_or_empty(params)?;
                SignatureAlgorithm::RsaPkcs1(digest)
            }
            Family::Dsa(digest) => {
                require_null_or_empty(params)?;
                SignatureAlgorithm::Dsa(digest)
            }
            Family::Ecdsa(digest) => {
                if !params.is_empty() {
                    return Err(Error::invalid_parameters("ECDSA parameters must be absent"));
                }
                SignatureAlgorithm::Ecdsa(digest)
            }
            Family::RsaPss => parse_rsa_pss_params(params)?,
        };

        log::trace!("Resolved signature algorithm {:?}", algorithm);
        Ok(algorithm)
    }

    /// Algorithm family
    pub fn algorithm(&self) -> SignatureAlgorithmId {
        match self {
            SignatureAlgorithm::RsaPkcs1(_) => SignatureAlgorithmId::RsaPkcs1,
            SignatureAlgorithm::Dsa(_) => SignatureAlgorithmId::Dsa,
            SignatureAlgorithm::Ecdsa(_) => SignatureAlgorithmId::Ecdsa,
            SignatureAlgorithm::RsaPss(..) => SignatureAlgorithmId::RsaPss,
        }
    }

    /// Message digest
    pub fn digest(&self) -> DigestAlgorithm {
        match self {
            SignatureAlgorithm::RsaPkcs1(digest)
            | SignatureAlgorithm::Dsa(digest)
            | SignatureAlgorithm::Ecdsa(digest)
            | SignatureAlgorithm::RsaPss(digest, _) => *digest,
        }
    }

    /// PSS parameters, present only for RSASSA-PSS
    pub fn params_for_rsa_pss(&self) -> Option<&RsaPssParameters> {
        match self {
            SignatureAlgorithm::RsaPss(_, params) => Some(params),
            _ => None,
        }
    }

    /// Whether two encoded AlgorithmIdentifiers name the same signature scheme.
    ///
    /// Identical encodings are always equivalent. Otherwise both must resolve
    /// and agree on family, digest and PSS parameters; this lets
    /// NULL-versus-absent parameters and the OIW SHA-1 OID match.
    pub fn is_equivalent(alg1_tlv: Input<'_>, alg2_tlv: Input<'_>) -> bool {
        if alg1_tlv == alg2_tlv {
            return true;
        }
        match (Self::create(alg1_tlv), Self::create(alg2_tlv)) {
            (Ok(alg1), Ok(alg2)) => alg1 == alg2,
            _ => false,
        }
    }
}
