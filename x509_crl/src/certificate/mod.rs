// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 certificates as seen by the revocation checker.
//!
//! The checker never needs a full certificate model. It reads a handful of
//! fields through the [`CrlCertificate`] trait, so callers can plug in any
//! certificate representation they already have. [`ParsedCertificate`] is a
//! zero-copy implementation over DER input.
//!
//! # Examples
//!
//! ```no_run
//! use x509_crl::certificate::{CrlCertificate, ParsedCertificate};
//!
//! # fn example(der_bytes: &[u8]) -> x509_crl::Result<()> {
//! let cert = ParsedCertificate::from_der(der_bytes)?;
//! println!("Version: {}", cert.version());
//! # Ok(())
//! # }
//! ```

pub mod name;

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

pub use self::name::{DerNameNormalizer, NameNormalizer};

use crate::asn1::{
    context_specific_constructed, context_specific_primitive, is_valid_integer, BitString, Input,
    Parser, Tag,
};
use crate::error::{Error, Result};
use crate::time::GeneralizedTime;
use crate::x509::{
    oids, parse_basic_constraints, parse_crl_distribution_points, parse_extensions,
    parse_key_usage, ExtensionMap, ParsedBasicConstraints, ParsedDistributionPoint,
};

// ============================================================================
// Version - RFC 5280 Section 4.1.2.1
// ============================================================================

/// X.509 certificate version.
///
/// ```asn1
/// Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum CertificateVersion {
    /// Version 1 (value 0)
    V1 = 0,
    /// Version 2 (value 1)
    V2 = 1,
    /// Version 3 (value 2) - Default for modern certificates
    #[default]
    V3 = 2,
}

impl CertificateVersion {
    /// Get the integer value of the version
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Create a version from its encoded integer value
    pub fn from_value(value: u64) -> Result<Self> {
        match value {
            0 => Ok(CertificateVersion::V1),
            1 => Ok(CertificateVersion::V2),
            2 => Ok(CertificateVersion::V3),
            _ => Err(Error::malformed(alloc::format!(
                "certificate version {}",
                value
            ))),
        }
    }
}

impl fmt::Display for CertificateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateVersion::V1 => write!(f, "v1"),
            CertificateVersion::V2 => write!(f, "v2"),
            CertificateVersion::V3 => write!(f, "v3"),
        }
    }
}

// ============================================================================
// Accessor trait
// ============================================================================

/// Certificate fields consulted while checking a CRL.
///
/// Names are returned already normalized; the checker compares them with
/// the CRL issuer normalized by the same [`NameNormalizer`].
pub trait CrlCertificate {
    fn version(&self) -> CertificateVersion;

    /// Value bytes of `serialNumber`
    fn serial_number(&self) -> Input<'_>;

    fn normalized_issuer(&self) -> &[u8];

    fn normalized_subject(&self) -> &[u8];

    /// Decoded BasicConstraints, if the extension is present
    fn basic_constraints(&self) -> Option<ParsedBasicConstraints>;

    /// Decoded KeyUsage, if the extension is present
    fn key_usage(&self) -> Option<BitString<'_>>;

    /// Complete `SubjectPublicKeyInfo` TLV
    fn spki_tlv(&self) -> Input<'_>;
}

// ============================================================================
// Certificate - RFC 5280 Section 4.1
// ============================================================================

/// A DER certificate decoded in place.
///
/// ```asn1
/// Certificate  ::=  SEQUENCE  {
///     tbsCertificate       TBSCertificate,
///     signatureAlgorithm   AlgorithmIdentifier,
///     signatureValue       BIT STRING
/// }
///
/// TBSCertificate  ::=  SEQUENCE  {
///     version         [0]  EXPLICIT Version DEFAULT v1,
///     serialNumber         CertificateSerialNumber,
///     signature            AlgorithmIdentifier,
///     issuer               Name,
///     validity             Validity,
///     subject              Name,
///     subjectPublicKeyInfo SubjectPublicKeyInfo,
///     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
///     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
///     extensions      [3]  EXPLICIT Extensions OPTIONAL
/// }
/// ```
///
/// Signature algorithms and the certificate signature are kept raw; chain
/// validation happens before revocation checking and is out of scope here.
///
/// The TBSCertificate is walked field by field with [`Parser`] rather than
/// through `der` `DecodeValue` impls, so every field stays an [`Input`]
/// borrowed from the caller's buffer and raw TLVs (issuer, SPKI, extension
/// values) can be compared and hashed byte-exactly without re-encoding.
#[derive(Debug, Clone)]
pub struct ParsedCertificate<'a> {
    tbs_certificate_tlv: Input<'a>,
    signature_algorithm_tlv: Input<'a>,
    signature_value: BitString<'a>,
    version: CertificateVersion,
    serial_number: Input<'a>,
    issuer_tlv: Input<'a>,
    not_before: GeneralizedTime,
    not_after: GeneralizedTime,
    subject_tlv: Input<'a>,
    spki_tlv: Input<'a>,
    extensions: ExtensionMap<'a>,
    basic_constraints: Option<ParsedBasicConstraints>,
    key_usage: Option<BitString<'a>>,
    normalized_issuer: Vec<u8>,
    normalized_subject: Vec<u8>,
}

impl<'a> ParsedCertificate<'a> {
    /// Parse a certificate, normalizing names with [`DerNameNormalizer`].
    pub fn from_der(der: &'a [u8]) -> Result<Self> {
        Self::from_der_with_normalizer(der, &DerNameNormalizer)
    }

    /// Parse a certificate, normalizing names with `normalizer`.
    pub fn from_der_with_normalizer<N: NameNormalizer + ?Sized>(
        der: &'a [u8],
        normalizer: &N,
    ) -> Result<Self> {
        let mut outer = Parser::new(Input::new(der));
        let mut certificate = outer.read_sequence()?;
        outer.expect_end("Certificate")?;

        let tbs_certificate_tlv = certificate.read_raw_tlv()?;
        let signature_algorithm_tlv = certificate.read_raw_tlv()?;
        let signature_value = certificate.read_bit_string()?;
        certificate.expect_end("Certificate")?;

        let mut tbs_outer = Parser::new(tbs_certificate_tlv);
        let mut tbs = tbs_outer.read_sequence()?;
        tbs_outer.expect_end("TBSCertificate")?;

        let version = match tbs.read_optional_tag(context_specific_constructed(0))? {
            Some(explicit) => {
                let mut version_parser = Parser::new(explicit);
                let version = CertificateVersion::from_value(version_parser.read_uint64()?)?;
                version_parser.expect_end("version")?;
                // DEFAULT v1 must be omitted in DER.
                if version == CertificateVersion::V1 {
                    return Err(Error::malformed("explicitly encoded v1"));
                }
                version
            }
            None => CertificateVersion::V1,
        };

        let serial_number = tbs.read_tag(Tag::Integer)?;
        is_valid_integer(serial_number)?;

        tbs.read_sequence()?;
        let issuer_tlv = tbs.read_raw_tlv()?;

        let mut validity = tbs.read_sequence()?;
        let not_before = validity.read_utc_or_generalized_time()?;
        let not_after = validity.read_utc_or_generalized_time()?;
        validity.expect_end("Validity")?;

        let subject_tlv = tbs.read_raw_tlv()?;
        let spki_tlv = tbs.read_raw_tlv()?;

        for unique_id in [1, 2] {
            if tbs.skip_optional_tag(context_specific_primitive(unique_id))?
                && version < CertificateVersion::V2
            {
                return Err(Error::malformed("unique identifier in v1 certificate"));
            }
        }

        let mut extensions = ExtensionMap::new();
        if let Some(explicit) = tbs.read_optional_tag(context_specific_constructed(3))? {
            if version != CertificateVersion::V3 {
                return Err(Error::malformed("extensions in pre-v3 certificate"));
            }
            let mut extensions_parser = Parser::new(explicit);
            let extensions_tlv = extensions_parser.read_raw_tlv()?;
            extensions_parser.expect_end("extensions")?;
            extensions = parse_extensions(extensions_tlv)?;
        }
        tbs.expect_end("TBSCertificate")?;

        let basic_constraints = match extensions.get(&Input::new(oids::BASIC_CONSTRAINTS.as_bytes()))
        {
            Some(extension) => Some(parse_basic_constraints(extension.value)?),
            None => None,
        };
        let key_usage = match extensions.get(&Input::new(oids::KEY_USAGE.as_bytes())) {
            Some(extension) => Some(parse_key_usage(extension.value)?),
            None => None,
        };

        let normalized_issuer = normalizer.normalize_name(issuer_tlv)?;
        let normalized_subject = normalizer.normalize_name(subject_tlv)?;

        Ok(ParsedCertificate {
            tbs_certificate_tlv,
            signature_algorithm_tlv,
            signature_value,
            version,
            serial_number,
            issuer_tlv,
            not_before,
            not_after,
            subject_tlv,
            spki_tlv,
            extensions,
            basic_constraints,
            key_usage,
            normalized_issuer,
            normalized_subject,
        })
    }

    pub fn tbs_certificate_tlv(&self) -> Input<'a> {
        self.tbs_certificate_tlv
    }

    pub fn signature_algorithm_tlv(&self) -> Input<'a> {
        self.signature_algorithm_tlv
    }

    pub fn signature_value(&self) -> &BitString<'a> {
        &self.signature_value
    }

    pub fn issuer_tlv(&self) -> Input<'a> {
        self.issuer_tlv
    }

    pub fn subject_tlv(&self) -> Input<'a> {
        self.subject_tlv
    }

    pub fn not_before(&self) -> &GeneralizedTime {
        &self.not_before
    }

    pub fn not_after(&self) -> &GeneralizedTime {
        &self.not_after
    }

    /// All extensions, keyed by OID bytes. Empty for v1/v2 certificates.
    pub fn extensions(&self) -> &ExtensionMap<'a> {
        &self.extensions
    }

    /// Decode the CRL Distribution Points extension.
    ///
    /// Returns an empty list when the extension is absent.
    pub fn crl_distribution_points(&self) -> Result<Vec<ParsedDistributionPoint<'a>>> {
        match self
            .extensions
            .get(&Input::new(oids::CRL_DISTRIBUTION_POINTS.as_bytes()))
        {
            Some(extension) => parse_crl_distribution_points(extension.value),
            None => Ok(Vec::new()),
        }
    }
}

impl CrlCertificate for ParsedCertificate<'_> {
    fn version(&self) -> CertificateVersion {
        self.version
    }

    fn serial_number(&self) -> Input<'_> {
        self.serial_number
    }

    fn normalized_issuer(&self) -> &[u8] {
        &self.normalized_issuer
    }

    fn normalized_subject(&self) -> &[u8] {
        &self.normalized_subject
    }

    fn basic_constraints(&self) -> Option<ParsedBasicConstraints> {
        self.basic_constraints
    }

    fn key_usage(&self) -> Option<BitString<'_>> {
        self.key_usage
    }

    fn spki_tlv(&self) -> Input<'_> {
        self.spki_tlv
    }
}

// ============================================================================
// Tests
// ============================================================================
