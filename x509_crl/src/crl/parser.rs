// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Structural decoding of CRLs (RFC 5280 Section 5).
//!
//! The parsers only enforce DER structure. Fields that are checked later
//! (algorithm identifiers, names, revoked entries, extensions) are kept as
//! raw TLVs borrowing from the CRL buffer.

use crate::asn1::{context_specific_constructed, context_specific_primitive, parse_bool};
use crate::asn1::{BitString, Input, Parser, Tag};
use crate::error::{Error, Result};
use crate::time::GeneralizedTime;
use crate::x509::GeneralNames;

// ============================================================================
// CertificateList - RFC 5280 Section 5.1
// ============================================================================

/// CRL version.
///
/// ```asn1
/// Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }
/// ```
///
/// Only v1 (version absent) and v2 are valid for a CRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrlVersion {
    V1,
    V2,
}

/// The outer `CertificateList` structure.
///
/// ```asn1
/// CertificateList  ::=  SEQUENCE  {
///     tbsCertList          TBSCertList,
///     signatureAlgorithm   AlgorithmIdentifier,
///     signatureValue       BIT STRING
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCrlCertificateList<'a> {
    /// Complete `tbsCertList` TLV; these are the signed bytes
    pub tbs_cert_list_tlv: Input<'a>,
    /// Complete outer `signatureAlgorithm` TLV
    pub signature_algorithm_tlv: Input<'a>,
    pub signature_value: BitString<'a>,
}

/// Decode a `CertificateList`.
///
/// Nothing may follow the SEQUENCE, and nothing may follow `signatureValue`
/// inside it.
pub fn parse_crl_certificate_list(crl_tlv: Input<'_>) -> Result<ParsedCrlCertificateList<'_>> {
    let mut outer = Parser::new(crl_tlv);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("CertificateList")?;

    let tbs_cert_list_tlv = parser.read_raw_tlv()?;
    let signature_algorithm_tlv = parser.read_raw_tlv()?;
    let signature_value = parser.read_bit_string()?;
    parser.expect_end("CertificateList fields")?;

    Ok(ParsedCrlCertificateList {
        tbs_cert_list_tlv,
        signature_algorithm_tlv,
        signature_value,
    })
}

// ============================================================================
// TBSCertList - RFC 5280 Section 5.1.2
// ============================================================================

/// The signed portion of a CRL.
///
/// ```asn1
/// TBSCertList  ::=  SEQUENCE  {
///     version                 Version OPTIONAL,
///                                  -- if present, MUST be v2
///     signature               AlgorithmIdentifier,
///     issuer                  Name,
///     thisUpdate              Time,
///     nextUpdate              Time OPTIONAL,
///     revokedCertificates     SEQUENCE OF SEQUENCE  { ... } OPTIONAL,
///     crlExtensions           [0]  EXPLICIT Extensions OPTIONAL
///                                  -- if present, version MUST be v2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCrlTbsCertList<'a> {
    pub version: CrlVersion,
    /// Complete inner `signature` AlgorithmIdentifier TLV
    pub signature_algorithm_tlv: Input<'a>,
    /// Complete `issuer` Name TLV
    pub issuer_tlv: Input<'a>,
    pub this_update: GeneralizedTime,
    pub next_update: Option<GeneralizedTime>,
    /// Complete `revokedCertificates` SEQUENCE TLV, if present
    pub revoked_certificates_tlv: Option<Input<'a>>,
    /// Complete `Extensions` SEQUENCE TLV inside the `[0]` wrapper, if present
    pub crl_extensions_tlv: Option<Input<'a>>,
}

/// Decode a `TBSCertList`.
///
/// `nextUpdate` and `revokedCertificates` have no tags of their own; their
/// presence is decided by peeking at the next tag.
pub fn parse_crl_tbs_cert_list(tbs_tlv: Input<'_>) -> Result<ParsedCrlTbsCertList<'_>> {
    let mut outer = Parser::new(tbs_tlv);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("TBSCertList")?;

    let version = match parser.read_optional_tag(Tag::Integer)? {
        Some(value) => {
            let version = crate::asn1::parse_uint64(value)?;
            if version != 1 {
                log::debug!("Unsupported CRL version {}", version);
                return Err(Error::malformed("CRL version must be v2 when present"));
            }
            CrlVersion::V2
        }
        None => CrlVersion::V1,
    };

    let signature_algorithm_tlv = parser.read_raw_tlv()?;
    let issuer_tlv = parser.read_raw_tlv()?;
    let this_update = parser.read_utc_or_generalized_time()?;

    let next_update = if next_tag_is(&parser, &[Tag::UtcTime, Tag::GeneralizedTime])? {
        Some(parser.read_utc_or_generalized_time()?)
    } else {
        None
    };

    let revoked_certificates_tlv = if next_tag_is(&parser, &[Tag::Sequence])? {
        Some(parser.read_raw_tlv()?)
    } else {
        None
    };

    let crl_extensions_tlv = match parser.read_optional_tag(context_specific_constructed(0))? {
        Some(explicit) => {
            if version != CrlVersion::V2 {
                return Err(Error::malformed("crlExtensions require a v2 CRL"));
            }
            let mut extensions_parser = Parser::new(explicit);
            let extensions_tlv = extensions_parser.read_raw_tlv()?;
            extensions_parser.expect_end("crlExtensions")?;
            Some(extensions_tlv)
        }
        None => None,
    };

    parser.expect_end("TBSCertList fields")?;

    Ok(ParsedCrlTbsCertList {
        version,
        signature_algorithm_tlv,
        issuer_tlv,
        this_update,
        next_update,
        revoked_certificates_tlv,
        crl_extensions_tlv,
    })
}

fn next_tag_is(parser: &Parser<'_>, tags: &[Tag]) -> Result<bool> {
    for tag in tags {
        if parser.peek_tag_is(*tag)? {
            return Ok(true);
        }
    }
    Ok(false)
}

// ============================================================================
// Issuing Distribution Point - RFC 5280 Section 5.2.5
// ============================================================================

/// Which certificates a CRL claims to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainedCertsType {
    /// Neither `onlyContainsUserCerts` nor `onlyContainsCACerts`
    #[default]
    AnyCerts,
    /// `onlyContainsUserCerts` is TRUE
    UserCerts,
    /// `onlyContainsCACerts` is TRUE
    CaCerts,
}

/// The supported subset of the IssuingDistributionPoint extension.
///
/// ```asn1
/// IssuingDistributionPoint ::= SEQUENCE {
///     distributionPoint          [0] DistributionPointName OPTIONAL,
///     onlyContainsUserCerts      [1] BOOLEAN DEFAULT FALSE,
///     onlyContainsCACerts        [2] BOOLEAN DEFAULT FALSE,
///     onlySomeReasons            [3] ReasonFlags OPTIONAL,
///     indirectCRL                [4] BOOLEAN DEFAULT FALSE,
///     onlyContainsAttributeCerts [5] BOOLEAN DEFAULT FALSE
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIssuingDistributionPoint<'a> {
    /// `distributionPoint.fullName`, if present
    pub distribution_point_fullname: Option<GeneralNames<'a>>,
    pub only_contains_cert_type: ContainedCertsType,
}

/// Decode the `extnValue` of an IssuingDistributionPoint extension.
///
/// Rejected as unsupported: `nameRelativeToCRLIssuer`, `onlySomeReasons`,
/// `indirectCRL` and `onlyContainsAttributeCerts`. An empty SEQUENCE, a
/// boolean explicitly encoded as FALSE, or both `onlyContains*` flags set
/// are encoding errors.
pub fn parse_issuing_distribution_point(
    extension_value: Input<'_>,
) -> Result<ParsedIssuingDistributionPoint<'_>> {
    let mut outer = Parser::new(extension_value);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("IssuingDistributionPoint")?;

    if !parser.has_more() {
        return Err(Error::malformed("empty IssuingDistributionPoint"));
    }

    let mut idp = ParsedIssuingDistributionPoint::default();

    if let Some(dp_name) = parser.read_optional_tag(context_specific_constructed(0))? {
        let mut dp_name_parser = Parser::new(dp_name);
        let full_name = dp_name_parser
            .read_optional_tag(context_specific_constructed(0))?
            .ok_or_else(|| Error::malformed("nameRelativeToCRLIssuer is not supported"))?;
        idp.distribution_point_fullname = Some(GeneralNames::from_value(full_name)?);
        dp_name_parser.expect_end("DistributionPointName")?;
    }

    let only_user = read_true_flag(&mut parser, 1, "onlyContainsUserCerts")?;
    let only_ca = read_true_flag(&mut parser, 2, "onlyContainsCACerts")?;

    idp.only_contains_cert_type = match (only_user, only_ca) {
        (true, true) => {
            return Err(Error::malformed(
                "onlyContainsUserCerts and onlyContainsCACerts both set",
            ))
        }
        (true, false) => ContainedCertsType::UserCerts,
        (false, true) => ContainedCertsType::CaCerts,
        (false, false) => ContainedCertsType::AnyCerts,
    };

    // onlySomeReasons, indirectCRL and onlyContainsAttributeCerts
    if parser.has_more() {
        let (tag, _) = parser.peek_tag_and_value()?;
        log::debug!("Unsupported IssuingDistributionPoint field {}", tag);
        return Err(Error::malformed("unsupported IssuingDistributionPoint field"));
    }

    Ok(idp)
}

/// Read an optional `[number] IMPLICIT BOOLEAN DEFAULT FALSE`.
fn read_true_flag(parser: &mut Parser<'_>, number: u8, field: &'static str) -> Result<bool> {
    match parser.read_optional_tag(context_specific_primitive(number))? {
        Some(value) => {
            if !parse_bool(value)? {
                log::debug!("{} explicitly encoded as FALSE", field);
                return Err(Error::malformed("DEFAULT FALSE boolean encoded as FALSE"));
            }
            Ok(true)
        }
        None => Ok(false),
    }
}
