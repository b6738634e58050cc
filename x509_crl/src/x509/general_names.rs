// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! GeneralNames and CRL Distribution Points.
//!
//! ```asn1
//! GeneralName ::= CHOICE {
//!     otherName                       [0]     OtherName,
//!     rfc822Name                      [1]     IA5String,
//!     dNSName                         [2]     IA5String,
//!     x400Address                     [3]     ORAddress,
//!     directoryName                   [4]     Name,
//!     ediPartyName                    [5]     EDIPartyName,
//!     uniformResourceIdentifier       [6]     IA5String,
//!     iPAddress                       [7]     OCTET STRING,
//!     registeredID                    [8]     OBJECT IDENTIFIER
//! }
//! ```
//!
//! Only the forms the revocation checker compares are kept as values; the
//! rest are validated for tag shape and recorded in
//! [`GeneralNames::present_name_types`].

extern crate alloc;

use alloc::vec::Vec;

use crate::asn1::{
    context_specific_constructed, context_specific_primitive, Input, Parser, Tag,
};
use crate::error::{Error, Result};

// ============================================================================
// GeneralNames - RFC 5280 Section 4.2.1.6
// ============================================================================

/// Decoded `GeneralNames`, borrowing from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralNames<'a> {
    /// Bitmask of `GeneralNames::*` name type flags seen
    pub present_name_types: u16,
    /// `[6]` uniformResourceIdentifier values
    pub uniform_resource_identifiers: Vec<Input<'a>>,
    /// `[4]` directoryName values (each a complete `Name` TLV)
    pub directory_names: Vec<Input<'a>>,
    /// `[2]` dNSName values
    pub dns_names: Vec<Input<'a>>,
    /// `[7]` iPAddress values, 4 or 16 bytes each
    pub ip_addresses: Vec<Input<'a>>,
}

impl<'a> GeneralNames<'a> {
    pub const OTHER_NAME: u16 = 1 << 0;
    pub const RFC822_NAME: u16 = 1 << 1;
    pub const DNS_NAME: u16 = 1 << 2;
    pub const X400_ADDRESS: u16 = 1 << 3;
    pub const DIRECTORY_NAME: u16 = 1 << 4;
    pub const EDI_PARTY_NAME: u16 = 1 << 5;
    pub const UNIFORM_RESOURCE_IDENTIFIER: u16 = 1 << 6;
    pub const IP_ADDRESS: u16 = 1 << 7;
    pub const REGISTERED_ID: u16 = 1 << 8;

    /// Decode a complete `GeneralNames` SEQUENCE TLV.
    pub fn from_der(general_names_tlv: Input<'a>) -> Result<Self> {
        let mut parser = Parser::new(general_names_tlv);
        let value = parser.read_tag(Tag::Sequence)?;
        parser.expect_end("GeneralNames")?;
        Self::from_value(value)
    }

    /// Decode the contents of a `GeneralNames` whose outer tag has already
    /// been stripped, e.g. an IMPLICIT `[0] fullName`.
    ///
    /// At least one GeneralName is required.
    pub fn from_value(general_names_value: Input<'a>) -> Result<Self> {
        let mut parser = Parser::new(general_names_value);
        if !parser.has_more() {
            return Err(Error::malformed("empty GeneralNames"));
        }

        let mut names = GeneralNames::default();
        while parser.has_more() {
            let (tag, value) = parser.read_tag_and_value()?;
            names.add_general_name(tag, value)?;
        }
        Ok(names)
    }

    fn add_general_name(&mut self, tag: Tag, value: Input<'a>) -> Result<()> {
        let (constructed, number) = match tag {
            Tag::ContextSpecific {
                constructed,
                number,
            } => (constructed, number.value()),
            other => {
                return Err(Error::malformed(alloc::format!(
                    "GeneralName with tag {}",
                    other
                )))
            }
        };

        let (flag, expect_constructed) = match number {
            0 => (Self::OTHER_NAME, true),
            1 => (Self::RFC822_NAME, false),
            2 => (Self::DNS_NAME, false),
            3 => (Self::X400_ADDRESS, true),
            4 => (Self::DIRECTORY_NAME, true),
            5 => (Self::EDI_PARTY_NAME, true),
            6 => (Self::UNIFORM_RESOURCE_IDENTIFIER, false),
            7 => (Self::IP_ADDRESS, false),
            8 => (Self::REGISTERED_ID, false),
            _ => {
                return Err(Error::malformed(alloc::format!(
                    "GeneralName [{}]",
                    number
                )))
            }
        };
        if constructed != expect_constructed {
            return Err(Error::malformed(alloc::format!(
                "GeneralName [{}] has wrong constructed bit",
                number
            )));
        }

        match number {
            2 => self.dns_names.push(value),
            4 => {
                // directoryName is an EXPLICIT Name: exactly one SEQUENCE.
                let mut name = Parser::new(value);
                let name_tlv = name.read_raw_tlv()?;
                name.expect_end("directoryName")?;
                Parser::new(name_tlv).read_sequence()?;
                self.directory_names.push(name_tlv);
            }
            6 => self.uniform_resource_identifiers.push(value),
            7 => {
                if value.len() != 4 && value.len() != 16 {
                    return Err(Error::malformed(alloc::format!(
                        "iPAddress of {} bytes",
                        value.len()
                    )));
                }
                self.ip_addresses.push(value);
            }
            _ => {}
        }
        self.present_name_types |= flag;
        Ok(())
    }

    /// Whether a name of the given `GeneralNames::*` type was present
    pub fn has(&self, name_type: u16) -> bool {
        self.present_name_types & name_type != 0
    }
}

// ============================================================================
// CRL Distribution Points - RFC 5280 Section 4.2.1.13
// ============================================================================

/// One entry of a certificate's CRL Distribution Points extension.
///
/// ```asn1
/// DistributionPoint ::= SEQUENCE {
///     distributionPoint       [0]     DistributionPointName OPTIONAL,
///     reasons                 [1]     ReasonFlags OPTIONAL,
///     cRLIssuer               [2]     GeneralNames OPTIONAL
/// }
///
/// DistributionPointName ::= CHOICE {
///     fullName                [0]     GeneralNames,
///     nameRelativeToCRLIssuer [1]     RelativeDistinguishedName
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDistributionPoint<'a> {
    pub distribution_point_fullname: Option<GeneralNames<'a>>,
    /// Value of `nameRelativeToCRLIssuer`
    pub distribution_point_name_relative_to_crl_issuer: Option<Input<'a>>,
    /// Value of the `reasons` BIT STRING
    pub reasons: Option<Input<'a>>,
    /// Value of the `cRLIssuer` GeneralNames
    pub crl_issuer: Option<Input<'a>>,
}

impl ParsedDistributionPoint<'_> {
    /// Whether the CRL for this point is issued by someone other than the
    /// certificate issuer (an indirect CRL)
    pub fn has_crl_issuer(&self) -> bool {
        self.crl_issuer.is_some()
    }
}

fn parse_distribution_point_name<'a>(
    name: Input<'a>,
    distribution_point: &mut ParsedDistributionPoint<'a>,
) -> Result<()> {
    let mut parser = Parser::new(name);
    let (tag, value) = parser.read_tag_and_value()?;
    if tag == context_specific_constructed(0) {
        distribution_point.distribution_point_fullname = Some(GeneralNames::from_value(value)?);
    } else if tag == context_specific_constructed(1) {
        distribution_point.distribution_point_name_relative_to_crl_issuer = Some(value);
    } else {
        return Err(Error::malformed("DistributionPointName"));
    }
    parser.expect_end("DistributionPointName")
}

fn parse_distribution_point(mut parser: Parser<'_>) -> Result<ParsedDistributionPoint<'_>> {
    let mut distribution_point = ParsedDistributionPoint::default();

    if let Some(name) = parser.read_optional_tag(context_specific_constructed(0))? {
        parse_distribution_point_name(name, &mut distribution_point)?;
    }

    distribution_point.reasons = parser.read_optional_tag(context_specific_primitive(1))?;

    if let Some(crl_issuer) = parser.read_optional_tag(context_specific_constructed(2))? {
        GeneralNames::from_value(crl_issuer)?;
        distribution_point.crl_issuer = Some(crl_issuer);
    }

    parser.expect_end("DistributionPoint")?;

    // Either distributionPoint or cRLIssuer MUST be present.
    if distribution_point.distribution_point_fullname.is_none()
        && distribution_point
            .distribution_point_name_relative_to_crl_issuer
            .is_none()
        && distribution_point.crl_issuer.is_none()
    {
        return Err(Error::malformed(
            "DistributionPoint without distributionPoint or cRLIssuer",
        ));
    }

    Ok(distribution_point)
}

/// Decode the extnValue of a CRL Distribution Points extension.
///
/// ```asn1
/// CRLDistributionPoints ::= SEQUENCE SIZE (1..MAX) OF DistributionPoint
/// ```
pub fn parse_crl_distribution_points(
    extension_value: Input<'_>,
) -> Result<Vec<ParsedDistributionPoint<'_>>> {
    let mut outer = Parser::new(extension_value);
    let mut parser = outer.read_sequence()?;
    outer.expect_end("CRLDistributionPoints")?;

    if !parser.has_more() {
        return Err(Error::malformed("empty CRLDistributionPoints"));
    }

    let mut distribution_points = Vec::new();
    while parser.has_more() {
        distribution_points.push(parse_distribution_point(parser.read_sequence()?)?);
    }
    Ok(distribution_points)
}
