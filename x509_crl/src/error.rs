// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for DER decoding and CRL revocation checking
//!
//! Parsers return `Err(Error::ParseError(..))` for any structural problem and
//! never expose partially decoded output. Policy failures raised while
//! evaluating a CRL are carried in the other variants; the revocation engine
//! folds all of them into `CrlRevocationStatus::Unknown`.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use der::Tag;

/// Result type alias for decoding and revocation operations
pub type Result<T> = core::result::Result<T, Error>;

/// Crate-wide error type
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Structural DER failures
    ParseError(ParseError),

    /// Errors related to cryptographic signature verification
    SignatureError(SignatureError),

    /// Errors related to time conversion and CRL freshness
    TimeError(TimeError),

    /// Unknown or unsupported signature algorithms
    AlgorithmError(AlgorithmError),

    /// Extension decoding and criticality errors
    ExtensionError(ExtensionError),

    /// CRL scope and issuer policy failures
    CrlError(CrlError),

    /// PEM/DER conversion errors
    EncodingError(EncodingError),

    /// Invalid public key or key parameters
    KeyError(KeyError),

    /// Name normalization errors
    NameError(NameError),
}

/// Errors that occur during DER/ASN.1 parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unexpected end of input
    UnexpectedEof,

    /// Invalid tag encountered
    InvalidTag { expected: Tag, found: u8 },

    /// Invalid length encoding
    InvalidLength(String),

    /// Invalid or non-minimal integer encoding
    InvalidInteger(String),

    /// BOOLEAN not encoded as a single 0x00/0xFF octet
    InvalidBoolean,

    /// Invalid bit string encoding
    InvalidBitString(String),

    /// Invalid UTCTime/GeneralizedTime encoding or calendar value
    InvalidTimeEncoding(String),

    /// Bytes left over after the last expected field
    TrailingData(&'static str),

    /// Well-formed TLVs that do not match the expected structure
    MalformedStructure(String),

    /// Error from der crate
    DerError(String),
}

/// Errors related to cryptographic signature verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature verification failed
    VerificationFailed,

    /// Invalid signature format
    InvalidSignatureFormat(String),

    /// Signature algorithm not supported by the backend
    UnsupportedSignatureAlgorithm(String),

    /// Error from ring cryptographic library
    RingError(String),
}

/// Errors related to time conversion and CRL freshness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// thisUpdate is after the verification time
    NotYetValid,

    /// nextUpdate is at or before the verification time
    Expired,

    /// thisUpdate is older than the permitted maximum age
    TooOld,

    /// Negative maximum age
    InvalidMaxAge(i64),

    /// Epoch time outside the representable calendar range
    OutOfRange(i64),

    /// Time field that cannot be encoded
    InvalidTime,
}

/// Errors related to signature algorithm identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Algorithm not supported
    Unsupported(String),

    /// Algorithm parameters invalid
    InvalidParameters(String),

    /// Algorithm parameters missing
    MissingParameters,

    /// Unknown algorithm OID, with the raw parameters for diagnostics
    UnknownOid { oid: String, params: String },
}

/// Errors related to extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// Invalid extension encoding
    InvalidEncoding(String),

    /// Duplicate extension
    DuplicateExtension(String),

    /// Critical extension this crate does not process
    UnhandledCriticalExtension(String),

    /// Extension value invalid
    InvalidValue(String),
}

/// CRL scope and issuer policy failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrlError {
    /// Target index is not inside the chain
    TargetIndexOutOfRange { index: usize, len: usize },

    /// Outer and TBSCertList signature algorithms differ
    AlgorithmMismatch,

    /// Distribution point names a cRLIssuer
    IndirectCrlUnsupported,

    /// Distribution point restricts reason codes
    ReasonsUnsupported,

    /// CRL issuer does not match the certificate issuer
    IssuerMismatch,

    /// Issuing distribution point names do not cover the certificate
    DistributionPointMismatch,

    /// Issuing distribution point restricts the certificate type
    ContainedCertsMismatch(&'static str),

    /// Issuer candidate at this chain index has KeyUsage without cRLSign
    CrlSignNotAsserted(usize),

    /// No certificate in the chain could have signed the CRL
    IssuerNotFound,

    /// revokedCertificates is unusable
    InvalidRevokedCertificates(String),
}

/// Errors related to PEM encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Invalid PEM format
    InvalidPem(String),

    /// PEM label mismatch
    InvalidPemLabel { expected: String, found: String },
}

/// Errors related to public keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Invalid key encoding
    InvalidEncoding(String),

    /// Unsupported key type
    UnsupportedKeyType(String),

    /// Invalid key parameters
    InvalidParameters(String),
}

/// Errors related to distinguished names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Invalid name encoding
    InvalidEncoding(String),
}

// ============================================================================
// Error Display Implementation (works in both std and no_std)
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::SignatureError(e) => write!(f, "Signature error: {}", e),
            Error::TimeError(e) => write!(f, "Time validation error: {}", e),
            Error::AlgorithmError(e) => write!(f, "Algorithm error: {}", e),
            Error::ExtensionError(e) => write!(f, "Extension error: {}", e),
            Error::CrlError(e) => write!(f, "CRL error: {}", e),
            Error::EncodingError(e) => write!(f, "Encoding error: {}", e),
            Error::KeyError(e) => write!(f, "Public key error: {}", e),
            Error::NameError(e) => write!(f, "Name error: {}", e),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "Unexpected end of input"),
            ParseError::InvalidTag { expected, found } => {
                write!(f, "Invalid tag: expected {}, found {:#04x}", expected, found)
            }
            ParseError::InvalidLength(msg) => write!(f, "Invalid length: {}", msg),
            ParseError::InvalidInteger(msg) => write!(f, "Invalid integer: {}", msg),
            ParseError::InvalidBoolean => write!(f, "Invalid boolean"),
            ParseError::InvalidBitString(msg) => write!(f, "Invalid bit string: {}", msg),
            ParseError::InvalidTimeEncoding(msg) => write!(f, "Invalid time encoding: {}", msg),
            ParseError::TrailingData(what) => write!(f, "Trailing data after {}", what),
            ParseError::MalformedStructure(msg) => write!(f, "Malformed structure: {}", msg),
            ParseError::DerError(msg) => write!(f, "DER error: {}", msg),
        }
    }
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::VerificationFailed => write!(f, "Signature verification failed"),
            SignatureError::InvalidSignatureFormat(msg) => {
                write!(f, "Invalid signature format: {}", msg)
            }
            SignatureError::UnsupportedSignatureAlgorithm(algo) => {
                write!(f, "Unsupported signature algorithm: {}", algo)
            }
            SignatureError::RingError(msg) => write!(f, "Cryptographic error: {}", msg),
        }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::NotYetValid => write!(f, "CRL not yet valid"),
            TimeError::Expired => write!(f, "CRL has expired"),
            TimeError::TooOld => write!(f, "CRL is older than the maximum age"),
            TimeError::InvalidMaxAge(age) => write!(f, "Invalid maximum age: {}", age),
            TimeError::OutOfRange(secs) => write!(f, "Time out of range: {}", secs),
            TimeError::InvalidTime => write!(f, "Invalid time"),
        }
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::Unsupported(algo) => write!(f, "Unsupported algorithm: {}", algo),
            AlgorithmError::InvalidParameters(msg) => {
                write!(f, "Invalid algorithm parameters: {}", msg)
            }
            AlgorithmError::MissingParameters => write!(f, "Missing algorithm parameters"),
            AlgorithmError::UnknownOid { oid, params } => {
                write!(f, "Unknown algorithm OID: {} (params {})", oid, params)
            }
        }
    }
}

impl fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionError::InvalidEncoding(msg) => {
                write!(f, "Invalid extension encoding: {}", msg)
            }
            ExtensionError::DuplicateExtension(oid) => write!(f, "Duplicate extension: {}", oid),
            ExtensionError::UnhandledCriticalExtension(oid) => {
                write!(f, "Unhandled critical extension: {}", oid)
            }
            ExtensionError::InvalidValue(msg) => write!(f, "Invalid extension value: {}", msg),
        }
    }
}

impl fmt::Display for CrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrlError::TargetIndexOutOfRange { index, len } => {
                write!(f, "Target index {} out of range for chain of {}", index, len)
            }
            CrlError::AlgorithmMismatch => write!(f, "Signature algorithm mismatch"),
            CrlError::IndirectCrlUnsupported => write!(f, "Indirect CRLs are not supported"),
            CrlError::ReasonsUnsupported => {
                write!(f, "Reason-partitioned distribution points are not supported")
            }
            CrlError::IssuerMismatch => write!(f, "CRL issuer does not match certificate issuer"),
            CrlError::DistributionPointMismatch => {
                write!(f, "Issuing distribution point does not match certificate")
            }
            CrlError::ContainedCertsMismatch(msg) => {
                write!(f, "CRL scope excludes certificate: {}", msg)
            }
            CrlError::CrlSignNotAsserted(index) => {
                write!(f, "Certificate {} does not assert cRLSign", index)
            }
            CrlError::IssuerNotFound => write!(f, "No valid CRL issuer found in chain"),
            CrlError::InvalidRevokedCertificates(msg) => {
                write!(f, "Invalid revokedCertificates: {}", msg)
            }
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidPem(msg) => write!(f, "Invalid PEM: {}", msg),
            EncodingError::InvalidPemLabel { expected, found } => {
                write!(
                    f,
                    "Invalid PEM label: expected '{}', found '{}'",
                    expected, found
                )
            }
        }
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidEncoding(msg) => write!(f, "Invalid key encoding: {}", msg),
            KeyError::UnsupportedKeyType(typ) => write!(f, "Unsupported key type: {}", typ),
            KeyError::InvalidParameters(msg) => write!(f, "Invalid key parameters: {}", msg),
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::InvalidEncoding(msg) => write!(f, "Invalid name encoding: {}", msg),
        }
    }
}

// ============================================================================
// std::error::Error implementation (when std feature is enabled)
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// ============================================================================
// Conversions from external crate errors
// ============================================================================

/// Convert from der crate errors
impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        match err.kind() {
            der::ErrorKind::Incomplete { .. } => Error::ParseError(ParseError::UnexpectedEof),
            der::ErrorKind::IndefiniteLength | der::ErrorKind::Overlength => {
                Error::ParseError(ParseError::InvalidLength(err.to_string()))
            }
            _ => Error::ParseError(ParseError::DerError(err.to_string())),
        }
    }
}

/// Convert from ring's Unspecified error
#[cfg(feature = "ring-backend")]
impl From<ring::error::Unspecified> for Error {
    fn from(_: ring::error::Unspecified) -> Self {
        Error::SignatureError(SignatureError::RingError(
            "Cryptographic operation failed".to_string(),
        ))
    }
}

/// Convert from PEM decoding errors
impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::EncodingError(EncodingError::InvalidPem(err.to_string()))
    }
}

// ============================================================================
// Helper constructors for common error cases
// ============================================================================

impl Error {
    /// Input ended inside a TLV or primitive value
    pub fn unexpected_eof() -> Self {
        Error::ParseError(ParseError::UnexpectedEof)
    }

    /// Create a tag mismatch error
    pub fn invalid_tag(expected: Tag, found: u8) -> Self {
        Error::ParseError(ParseError::InvalidTag { expected, found })
    }

    /// Unconsumed bytes after `what`
    pub fn trailing_data(what: &'static str) -> Self {
        Error::ParseError(ParseError::TrailingData(what))
    }

    /// Create a structural error with a custom message
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::ParseError(ParseError::MalformedStructure(msg.into()))
    }

    /// Create a signature verification failure
    pub fn signature_failed() -> Self {
        Error::SignatureError(SignatureError::VerificationFailed)
    }

    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm<S: Into<String>>(algo: S) -> Self {
        Error::AlgorithmError(AlgorithmError::Unsupported(algo.into()))
    }

    /// Create an invalid algorithm parameters error
    pub fn invalid_parameters<S: Into<String>>(msg: S) -> Self {
        Error::AlgorithmError(AlgorithmError::InvalidParameters(msg.into()))
    }

    /// Create a CRL expired error
    pub fn expired() -> Self {
        Error::TimeError(TimeError::Expired)
    }

    /// Create a CRL not yet valid error
    pub fn not_yet_valid() -> Self {
        Error::TimeError(TimeError::NotYetValid)
    }

    /// Create an unhandled critical extension error
    pub fn critical_extension<S: Into<String>>(oid: S) -> Self {
        Error::ExtensionError(ExtensionError::UnhandledCriticalExtension(oid.into()))
    }
}

// ============================================================================
// Tests
// ============================================================================
