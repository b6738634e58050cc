// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Revocation status of one serial number within `revokedCertificates`.

use core::fmt;

use super::parser::CrlVersion;
use crate::asn1::{Input, Parser, Tag};
use crate::error::{CrlError, Error, Result};
use crate::x509::{parse_extensions, reject_critical_extensions};

/// Outcome of a revocation check.
///
/// There is no error variant: anything that prevents a confident answer is
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrlRevocationStatus {
    /// The certificate is not listed
    Good,
    /// The certificate's serial number is listed
    Revoked,
    /// The CRL could not be used to decide
    Unknown,
}

impl fmt::Display for CrlRevocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrlRevocationStatus::Good => write!(f, "good"),
            CrlRevocationStatus::Revoked => write!(f, "revoked"),
            CrlRevocationStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Look up `serial_number` in a CRL's `revokedCertificates`.
///
/// ```asn1
/// revokedCertificates     SEQUENCE OF SEQUENCE  {
///     userCertificate         CertificateSerialNumber,
///     revocationDate          Time,
///     crlEntryExtensions      Extensions OPTIONAL
///                              -- if present, version MUST be v2
/// }  OPTIONAL,
/// ```
///
/// `serial_number` is the value bytes of the certificate's serial INTEGER
/// and is compared byte for byte. An absent list means `Good`; a present
/// but empty list is malformed. Every entry is decoded even after a match,
/// so a malformed entry or a critical entry extension anywhere in the list
/// yields `Unknown`.
pub fn get_crl_status_for_cert(
    serial_number: Input<'_>,
    crl_version: CrlVersion,
    revoked_certificates_tlv: Option<Input<'_>>,
) -> CrlRevocationStatus {
    match crl_status_for_cert(serial_number, crl_version, revoked_certificates_tlv) {
        Ok(status) => status,
        Err(e) => {
            log::debug!("revokedCertificates unusable: {}", e);
            CrlRevocationStatus::Unknown
        }
    }
}

pub(crate) fn crl_status_for_cert(
    serial_number: Input<'_>,
    crl_version: CrlVersion,
    revoked_certificates_tlv: Option<Input<'_>>,
) -> Result<CrlRevocationStatus> {
    let revoked_certificates_tlv = match revoked_certificates_tlv {
        Some(tlv) => tlv,
        None => return Ok(CrlRevocationStatus::Good),
    };

    let mut outer = Parser::new(revoked_certificates_tlv);
    let mut entries = outer.read_sequence()?;
    outer.expect_end("revokedCertificates")?;

    if !entries.has_more() {
        return Err(invalid_revoked("empty SEQUENCE"));
    }

    let mut found = false;
    while entries.has_more() {
        let mut entry = entries.read_sequence()?;
        let revoked_serial = entry.read_tag(Tag::Integer)?;
        let _revocation_date = entry.read_utc_or_generalized_time()?;

        if entry.has_more() {
            if crl_version != CrlVersion::V2 {
                return Err(invalid_revoked("crlEntryExtensions require a v2 CRL"));
            }
            let extensions = parse_extensions(entry.read_raw_tlv()?)?;
            reject_critical_extensions(&extensions)?;
        }
        entry.expect_end("revokedCertificates entry")?;

        if !found && revoked_serial == serial_number {
            log::trace!("Serial {:?} is listed", serial_number);
            found = true;
        }
    }

    Ok(if found {
        CrlRevocationStatus::Revoked
    } else {
        CrlRevocationStatus::Good
    })
}

fn invalid_revoked(msg: &str) -> Error {
    Error::CrlError(CrlError::InvalidRevokedCertificates(msg.into()))
}
