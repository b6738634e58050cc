// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 Extensions.
//!
//! Generic decoding of the `Extensions` list shared by certificates, CRLs and
//! CRL entries, plus the two certificate extensions the revocation checker
//! looks at on issuer certificates.
//!
//! ```asn1
//! Extensions  ::=  SEQUENCE SIZE (1..MAX) OF Extension
//!
//! Extension  ::=  SEQUENCE  {
//!     extnID      OBJECT IDENTIFIER,
//!     critical    BOOLEAN DEFAULT FALSE,
//!     extnValue   OCTET STRING
//! }
//! ```
//!
//! Values are borrowed from the input; nothing is copied.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use core::fmt;

use const_oid::ObjectIdentifier;

use super::oids;
use crate::asn1::{parse_bit_string, parse_bool, parse_uint8, BitString, Input, Parser, Tag};
use crate::error::{Error, ExtensionError, Result};

// ============================================================================
// Extension - RFC 5280 Section 4.1.2.9
// ============================================================================

/// A single decoded extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedExtension<'a> {
    /// Value bytes of `extnID`
    pub oid: Input<'a>,
    /// Whether the extension is critical
    pub critical: bool,
    /// Contents of the `extnValue` OCTET STRING
    pub value: Input<'a>,
}

/// Extensions keyed by the value bytes of their OID.
pub type ExtensionMap<'a> = BTreeMap<Input<'a>, ParsedExtension<'a>>;

/// Decode one `Extension` TLV.
///
/// DER forbids encoding a DEFAULT value, so an explicit `critical FALSE`
/// is rejected.
pub fn parse_extension(extension_tlv: Input<'_>) -> Result<ParsedExtension<'_>> {
    let mut outer = Parser::new(extension_tlv);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("Extension")?;

    let oid = parser.read_tag(Tag::ObjectIdentifier)?;

    let critical = match parser.read_optional_tag(Tag::Boolean)? {
        Some(value) => {
            if !parse_bool(value)? {
                return Err(Error::ExtensionError(ExtensionError::InvalidEncoding(
                    "critical encoded as FALSE".to_string(),
                )));
            }
            true
        }
        None => false,
    };

    let value = parser.read_tag(Tag::OctetString)?;
    parser.expect_end("Extension")?;

    Ok(ParsedExtension {
        oid,
        critical,
        value,
    })
}

/// Decode an `Extensions` SEQUENCE TLV into a map.
///
/// The list must be non-empty and every OID may appear at most once.
pub fn parse_extensions(extensions_tlv: Input<'_>) -> Result<ExtensionMap<'_>> {
    let mut outer = Parser::new(extensions_tlv);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("Extensions")?;

    // RFC 5280 4.1: SIZE (1..MAX)
    if !parser.has_more() {
        return Err(Error::ExtensionError(ExtensionError::InvalidEncoding(
            "empty Extensions".to_string(),
        )));
    }

    let mut extensions = ExtensionMap::new();
    while parser.has_more() {
        let extension = parse_extension(parser.read_raw_tlv()?)?;
        if extensions.insert(extension.oid, extension).is_some() {
            let oid = oids::describe_oid(extension.oid);
            log::debug!("Duplicate extension {}", oid);
            return Err(Error::ExtensionError(ExtensionError::DuplicateExtension(oid)));
        }
    }

    Ok(extensions)
}

/// Remove and return the extension identified by `oid`, if present.
///
/// Consuming recognised extensions lets callers reject whatever critical
/// extensions remain afterwards.
pub fn consume_extension<'a>(
    oid: &'static ObjectIdentifier,
    extensions: &mut ExtensionMap<'a>,
) -> Option<ParsedExtension<'a>> {
    extensions.remove(&Input::new(oid.as_bytes()))
}

/// Fail on the first critical extension left in `extensions`.
pub fn reject_critical_extensions(extensions: &ExtensionMap<'_>) -> Result<()> {
    match extensions.values().find(|extension| extension.critical) {
        Some(extension) => Err(Error::critical_extension(oids::describe_oid(extension.oid))),
        None => Ok(()),
    }
}

// ============================================================================
// Key Usage - RFC 5280 Section 4.2.1.3
// ============================================================================

/// Named bits of the KeyUsage BIT STRING.
///
/// ```asn1
/// KeyUsage ::= BIT STRING {
///     digitalSignature        (0),
///     nonRepudiation          (1),
///     keyEncipherment         (2),
///     dataEncipherment        (3),
///     keyAgreement            (4),
///     keyCertSign             (5),
///     cRLSign                 (6),
///     encipherOnly            (7),
///     decipherOnly            (8)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum KeyUsageBit {
    DigitalSignature = 0,
    NonRepudiation = 1,
    KeyEncipherment = 2,
    DataEncipherment = 3,
    KeyAgreement = 4,
    KeyCertSign = 5,
    CrlSign = 6,
    EncipherOnly = 7,
    DecipherOnly = 8,
}

impl KeyUsageBit {
    /// Whether this usage is asserted in a decoded KeyUsage value
    pub fn is_asserted_in(self, key_usage: &BitString<'_>) -> bool {
        key_usage.asserts_bit(self as usize)
    }
}

impl fmt::Display for KeyUsageBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyUsageBit::DigitalSignature => "digitalSignature",
            KeyUsageBit::NonRepudiation => "nonRepudiation",
            KeyUsageBit::KeyEncipherment => "keyEncipherment",
            KeyUsageBit::DataEncipherment => "dataEncipherment",
            KeyUsageBit::KeyAgreement => "keyAgreement",
            KeyUsageBit::KeyCertSign => "keyCertSign",
            KeyUsageBit::CrlSign => "cRLSign",
            KeyUsageBit::EncipherOnly => "encipherOnly",
            KeyUsageBit::DecipherOnly => "decipherOnly",
        };
        write!(f, "{}", name)
    }
}

/// Decode the extnValue of a KeyUsage extension.
///
/// RFC 5280 4.2.1.3 requires at least one bit to be set.
pub fn parse_key_usage(extension_value: Input<'_>) -> Result<BitString<'_>> {
    let mut parser = Parser::new(extension_value);
    let key_usage = parse_bit_string(parser.read_tag(Tag::BitString)?)?;
    parser.expect_end("KeyUsage")?;

    if !key_usage.bytes().as_bytes().iter().any(|byte| *byte != 0) {
        return Err(Error::ExtensionError(ExtensionError::InvalidValue(
            "KeyUsage has no bits set".to_string(),
        )));
    }
    Ok(key_usage)
}

// ============================================================================
// Basic Constraints - RFC 5280 Section 4.2.1.9
// ============================================================================

/// Decoded BasicConstraints.
///
/// ```asn1
/// BasicConstraints ::= SEQUENCE {
///     cA                      BOOLEAN DEFAULT FALSE,
///     pathLenConstraint       INTEGER (0..MAX) OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedBasicConstraints {
    /// Whether the subject is a CA
    pub is_ca: bool,
    /// Maximum number of intermediate certificates below this one
    pub path_len: Option<u8>,
}

/// Decode the extnValue of a BasicConstraints extension.
pub fn parse_basic_constraints(extension_value: Input<'_>) -> Result<ParsedBasicConstraints> {
    let mut outer = Parser::new(extension_value);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("BasicConstraints")?;

    let is_ca = match parser.read_optional_tag(Tag::Boolean)? {
        Some(value) => {
            // DEFAULT FALSE must not be encoded.
            if !parse_bool(value)? {
                return Err(Error::ExtensionError(ExtensionError::InvalidEncoding(
                    "cA encoded as FALSE".to_string(),
                )));
            }
            true
        }
        None => false,
    };

    let path_len = match parser.read_optional_tag(Tag::Integer)? {
        Some(value) => Some(parse_uint8(value)?),
        None => None,
    };

    parser.expect_end("BasicConstraints")?;

    Ok(ParsedBasicConstraints { is_ca, path_len })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[test]
    fn test_parse_extension() {
        let der = extension(&oids::CRL_NUMBER, false, &int(&[0x07]));
        let ext = parse_extension(Input::new(&der)).unwrap();
        assert!(oids::oid_matches(&oids::CRL_NUMBER, ext.oid));
        assert!(!ext.critical);
        assert_eq!(ext.value.as_bytes(), &[0x02, 0x01, 0x07]);

        let der = extension(&oids::ISSUING_DISTRIBUTION_POINT, true, &seq(&[]));
        let ext = parse_extension(Input::new(&der)).unwrap();
        assert!(ext.critical);
    }

    #[test]
    fn test_parse_extension_explicit_false() {
        let der = seq(&[&oid(&oids::CRL_NUMBER), &boolean(false), &octets(&[])]);
        assert!(parse_extension(Input::new(&der)).is_err());
    }

    #[test]
    fn test_parse_extension_malformed() {
        // Missing extnValue
        let der = seq(&[&oid(&oids::CRL_NUMBER)]);
        assert!(parse_extension(Input::new(&der)).is_err());

        // Trailing field
        let der = seq(&[&oid(&oids::CRL_NUMBER), &octets(&[]), &null()]);
        assert!(parse_extension(Input::new(&der)).is_err());

        // Non-DER boolean
        let der = seq(&[&oid(&oids::CRL_NUMBER), &tlv(0x01, &[0x01]), &octets(&[])]);
        assert!(parse_extension(Input::new(&der)).is_err());
    }

    #[test]
    fn test_parse_extensions() {
        let der = seq(&[
            &extension(&oids::CRL_NUMBER, false, &int(&[0x01])),
            &extension(&oids::AUTHORITY_KEY_IDENTIFIER, false, &seq(&[])),
        ]);
        let mut map = parse_extensions(Input::new(&der)).unwrap();
        assert_eq!(map.len(), 2);

        let crl_number = consume_extension(&oids::CRL_NUMBER, &mut map).unwrap();
        assert_eq!(crl_number.value.as_bytes(), &[0x02, 0x01, 0x01]);
        assert!(consume_extension(&oids::CRL_NUMBER, &mut map).is_none());
        assert_eq!(map.len(), 1);
        assert!(reject_critical_extensions(&map).is_ok());
    }

    #[test]
    fn test_consume_extension() {
        let der = seq(&[
            &extension(&oids::KEY_USAGE, true, &tlv(0x03, &[0x01, 0x06])),
            &extension(&oids::CRL_NUMBER, false, &int(&[0x05])),
        ]);
        let mut map = parse_extensions(Input::new(&der)).unwrap();
        assert!(reject_critical_extensions(&map).is_err());

        let key_usage = consume_extension(&oids::KEY_USAGE, &mut map).unwrap();
        assert!(key_usage.critical);
        assert!(oids::oid_matches(&oids::KEY_USAGE, key_usage.oid));
        assert!(consume_extension(&oids::KEY_USAGE, &mut map).is_none());
        assert_eq!(map.len(), 1);

        // Only the non-critical cRLNumber is left
        assert!(reject_critical_extensions(&map).is_ok());
        assert!(consume_extension(&oids::CRL_NUMBER, &mut map).is_some());
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_extensions_empty_and_duplicate() {
        assert!(parse_extensions(Input::new(&seq(&[]))).is_err());

        let ext = extension(&oids::CRL_NUMBER, false, &int(&[0x01]));
        let der = seq(&[&ext, &ext]);
        assert_eq!(
            parse_extensions(Input::new(&der)),
            Err(Error::ExtensionError(ExtensionError::DuplicateExtension(
                "2.5.29.20".to_string()
            )))
        );
    }

    #[test]
    fn test_reject_critical_extensions() {
        let der = seq(&[&extension(&oids::DELTA_CRL_INDICATOR, true, &int(&[0x01]))]);
        let map = parse_extensions(Input::new(&der)).unwrap();
        assert_eq!(
            reject_critical_extensions(&map),
            Err(Error::critical_extension("2.5.29.27"))
        );
    }

    #[test]
    fn test_parse_key_usage() {
        // keyCertSign | cRLSign
        let der = tlv(0x03, &[0x01, 0x06]);
        let ku = parse_key_usage(Input::new(&der)).unwrap();
        assert!(KeyUsageBit::CrlSign.is_asserted_in(&ku));
        assert!(KeyUsageBit::KeyCertSign.is_asserted_in(&ku));
        assert!(!KeyUsageBit::DigitalSignature.is_asserted_in(&ku));
        assert!(!KeyUsageBit::DecipherOnly.is_asserted_in(&ku));

        // decipherOnly lives in the second byte
        let der = tlv(0x03, &[0x07, 0x00, 0x80]);
        let ku = parse_key_usage(Input::new(&der)).unwrap();
        assert!(KeyUsageBit::DecipherOnly.is_asserted_in(&ku));
    }

    #[test]
    fn test_parse_key_usage_invalid() {
        assert!(parse_key_usage(Input::new(&tlv(0x03, &[0x00]))).is_err());
        assert!(parse_key_usage(Input::new(&tlv(0x03, &[0x00, 0x00]))).is_err());
        assert!(parse_key_usage(Input::new(&octets(&[0x80]))).is_err());
    }

    #[test]
    fn test_key_usage_bit_display() {
        assert_eq!(alloc::format!("{}", KeyUsageBit::CrlSign), "cRLSign");
    }

    #[test]
    fn test_parse_basic_constraints() {
        let der = seq(&[&boolean(true), &int(&[0x02])]);
        assert_eq!(
            parse_basic_constraints(Input::new(&der)).unwrap(),
            ParsedBasicConstraints {
                is_ca: true,
                path_len: Some(2)
            }
        );

        let der = seq(&[]);
        assert_eq!(
            parse_basic_constraints(Input::new(&der)).unwrap(),
            ParsedBasicConstraints::default()
        );
    }

    #[test]
    fn test_parse_basic_constraints_invalid() {
        let der = seq(&[&boolean(false)]);
        assert!(parse_basic_constraints(Input::new(&der)).is_err());

        let der = seq(&[&boolean(true), &int(&[0x01, 0x00])]);
        assert!(parse_basic_constraints(Input::new(&der)).is_err());

        let der = seq(&[&boolean(true), &null()]);
        assert!(parse_basic_constraints(Input::new(&der)).is_err());
    }
}
