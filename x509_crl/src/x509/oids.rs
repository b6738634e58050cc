// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! OID constants for CRL processing
//!
//! Signature and digest algorithm identifiers (RFC 3279, RFC 4055,
//! RFC 5758), public key and curve identifiers used by the verification
//! backend, and the certificate/CRL extension identifiers of RFC 5280.
//!
//! OIDs decoded from input are compared by their DER value bytes, see
//! [`oid_matches`].

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use const_oid::ObjectIdentifier;

use crate::asn1::Input;

// =============================================================================
// RSA PKCS#1 v1.5 Signature OIDs
// =============================================================================

/// md2WithRSAEncryption - 1.2.840.113549.1.1.2
pub const MD2_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.2");

/// md4WithRSAEncryption - 1.2.840.113549.1.1.3
pub const MD4_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.3");

/// md5WithRSAEncryption - 1.2.840.113549.1.1.4
pub const MD5_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.4");

/// sha1WithRSAEncryption - 1.2.840.113549.1.1.5
pub const SHA1_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.5");

/// sha1WithRSASignature - 1.3.14.3.2.29
/// Deprecated OIW identifier, still found in old certificates and CRLs.
pub const SHA1_WITH_RSA_OIW: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.29");

/// sha256WithRSAEncryption - 1.2.840.113549.1.1.11
pub const SHA256_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");

/// sha384WithRSAEncryption - 1.2.840.113549.1.1.12
pub const SHA384_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12");

/// sha512WithRSAEncryption - 1.2.840.113549.1.1.13
pub const SHA512_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");

// =============================================================================
// RSASSA-PSS (RFC 4055)
// =============================================================================

/// id-RSASSA-PSS - 1.2.840.113549.1.1.10
pub const RSASSA_PSS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10");

/// id-mgf1 - 1.2.840.113549.1.1.8
pub const MGF1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.8");

// =============================================================================
// ECDSA and DSA Signature OIDs
// =============================================================================

/// ecdsa-with-SHA1 - 1.2.840.10045.4.1
pub const ECDSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.1");

/// ecdsa-with-SHA256 - 1.2.840.10045.4.3.2
pub const ECDSA_WITH_SHA256: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");

/// ecdsa-with-SHA384 - 1.2.840.10045.4.3.3
pub const ECDSA_WITH_SHA384: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");

/// ecdsa-with-SHA512 - 1.2.840.10045.4.3.4
pub const ECDSA_WITH_SHA512: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.4");

/// id-dsa-with-sha1 - 1.2.840.10040.4.3
pub const DSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.3");

/// id-dsa-with-sha256 - 2.16.840.1.101.3.4.3.2
pub const DSA_WITH_SHA256: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.2");

// =============================================================================
// Hash Algorithm OIDs
// =============================================================================

/// SHA-1 - 1.3.14.3.2.26
pub const SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.26");

/// SHA-256 - 2.16.840.1.101.3.4.2.1
pub const SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");

/// SHA-384 - 2.16.840.1.101.3.4.2.2
pub const SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.2");

/// SHA-512 - 2.16.840.1.101.3.4.2.3
pub const SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3");

// =============================================================================
// Public Key Algorithm OIDs
// =============================================================================

/// RSA Encryption - 1.2.840.113549.1.1.1
pub const RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// EC Public Key - 1.2.840.10045.2.1
pub const ECPUBLICKEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// ECDSA P-256 (secp256r1) - 1.2.840.10045.3.1.7
pub const ECDSA_P256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// ECDSA P-384 (secp384r1) - 1.3.132.0.34
pub const ECDSA_P384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

// =============================================================================
// Extension OIDs - RFC 5280 Sections 4.2 and 5.2
// =============================================================================

/// Key Usage - 2.5.29.15
pub const KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.15");

/// Basic Constraints - 2.5.29.19
pub const BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.19");

/// CRL Number - 2.5.29.20
pub const CRL_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.20");

/// Reason Code (CRL entry) - 2.5.29.21
pub const CRL_REASON_CODE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.21");

/// Delta CRL Indicator - 2.5.29.27
pub const DELTA_CRL_INDICATOR: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.27");

/// Issuing Distribution Point - 2.5.29.28
pub const ISSUING_DISTRIBUTION_POINT: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("2.5.29.28");

/// Certificate Issuer (CRL entry) - 2.5.29.29
pub const CERTIFICATE_ISSUER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.29");

/// CRL Distribution Points - 2.5.29.31
pub const CRL_DISTRIBUTION_POINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.31");

/// Authority Key Identifier - 2.5.29.35
pub const AUTHORITY_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.35");

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether the value bytes of a decoded OBJECT IDENTIFIER equal `oid`
///
/// # Example
/// ```no_run
/// use x509_crl::asn1::Input;
/// use x509_crl::x509::oids;
/// let value = [0x55, 0x1d, 0x1c];
/// assert!(oids::oid_matches(&oids::ISSUING_DISTRIBUTION_POINT, Input::new(&value)));
/// ```
pub fn oid_matches(oid: &ObjectIdentifier, value: Input<'_>) -> bool {
    oid.as_bytes() == value.as_bytes()
}

/// Render OID value bytes in dotted form for diagnostics.
///
/// Bytes that do not form a valid OID are shown as hex.
pub fn describe_oid(value: Input<'_>) -> String {
    match ObjectIdentifier::from_bytes(value.as_bytes()) {
        Ok(oid) => oid.to_string(),
        Err(_) => format!("{:02x?}", value.as_bytes()),
    }
}
