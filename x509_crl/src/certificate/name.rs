// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Distinguished Name normalization.
//!
//! The revocation checker compares the CRL issuer with certificate issuer
//! and subject names after normalization. Normalization is pluggable via
//! [`NameNormalizer`]; the default [`DerNameNormalizer`] checks the
//! RDNSequence structure and compares encodings byte for byte.
//!
//! ```asn1
//! Name ::= CHOICE { rdnSequence  RDNSequence }
//! RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
//! RelativeDistinguishedName ::= SET SIZE (1..MAX) OF AttributeTypeAndValue
//! AttributeTypeAndValue ::= SEQUENCE {
//!     type     AttributeType,
//!     value    AttributeValue
//! }
//! ```

extern crate alloc;

use alloc::vec::Vec;

use crate::asn1::{Input, Parser, Tag};
use crate::error::{Error, NameError, Result};

/// Produces a comparable form of an X.501 `Name`.
///
/// Two names are considered equal when their normalized forms are equal.
pub trait NameNormalizer {
    /// Normalize the complete `Name` TLV
    fn normalize_name(&self, name_tlv: Input<'_>) -> Result<Vec<u8>>;
}

/// Byte-exact normalizer.
///
/// Returns the contents of the RDNSequence after checking that it is a
/// single well-formed SEQUENCE of non-empty SETs of AttributeTypeAndValue.
/// String attributes are not case-folded or whitespace-collapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerNameNormalizer;

fn check_attribute_type_and_value(mut atv: Parser<'_>) -> Result<()> {
    atv.read_tag(Tag::ObjectIdentifier)?;
    atv.read_raw_tlv()?;
    atv.expect_end("AttributeTypeAndValue")
}

fn check_relative_distinguished_name(mut rdn: Parser<'_>) -> Result<()> {
    if !rdn.has_more() {
        return Err(Error::NameError(NameError::InvalidEncoding(
            "empty RelativeDistinguishedName".into(),
        )));
    }
    while rdn.has_more() {
        check_attribute_type_and_value(rdn.read_sequence()?)?;
    }
    Ok(())
}

impl NameNormalizer for DerNameNormalizer {
    fn normalize_name(&self, name_tlv: Input<'_>) -> Result<Vec<u8>> {
        let mut outer = Parser::new(name_tlv);
        let rdn_sequence = outer.read_tag(Tag::Sequence)?;
        outer.expect_end("Name")?;

        let mut parser = Parser::new(rdn_sequence);
        while parser.has_more() {
            check_relative_distinguished_name(parser.read_constructed(Tag::Set)?)?;
        }

        Ok(rdn_sequence.as_bytes().to_vec())
    }
}

impl<N: NameNormalizer + ?Sized> NameNormalizer for &N {
    fn normalize_name(&self, name_tlv: Input<'_>) -> Result<Vec<u8>> {
        (**self).normalize_name(name_tlv)
    }
}
