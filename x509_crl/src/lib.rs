// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 CRL Revocation Checking
//!
//! A no_std-compatible strict DER decoder and RFC 5280 CRL checker.
//! Uses `der` for tags and length decoding and an optional crypto backend
//! for CRL signatures.
//!
//! # Features
//! - Zero-copy DER walker with canonical BOOLEAN/INTEGER/BIT STRING/time codecs
//! - Signature AlgorithmIdentifier resolution, including RSASSA-PSS
//! - CRL, TBSCertList and IssuingDistributionPoint decoding
//! - Revocation decisions that fail closed to [`CrlRevocationStatus::Unknown`]
//!
//! # Example
//! ```no_run
//! use x509_crl::{check_crl, CertificateChain, CrlRevocationStatus, ParsedCertificate};
//!
//! # fn example(crl: &[u8], leaf: &[u8], ca: &[u8], now: i64) -> x509_crl::Result<()> {
//! let leaf = ParsedCertificate::from_der(leaf)?;
//! let points = leaf.crl_distribution_points()?;
//! let chain = CertificateChain::new(vec![leaf, ParsedCertificate::from_der(ca)?]);
//!
//! let revoked = points
//!     .iter()
//!     .any(|point| check_crl(crl, &chain, 0, point, now, None) == CrlRevocationStatus::Revoked);
//! # let _ = revoked;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod asn1;
pub mod certificate;
pub mod chain;
pub mod crl;
pub mod crypto_backend;
pub mod error;
pub mod pem;
pub mod time;
pub mod x509;

#[cfg(test)]
pub(crate) mod test_util;

pub use asn1::{Input, Parser};
pub use certificate::{
    CertificateVersion, CrlCertificate, DerNameNormalizer, NameNormalizer, ParsedCertificate,
};
pub use chain::CertificateChain;
#[cfg(feature = "ring-backend")]
pub use crl::check_crl;
pub use crl::{
    crl_der_from_pem, get_crl_status_for_cert, parse_crl_certificate_list,
    parse_crl_tbs_cert_list, parse_issuing_distribution_point, CrlCheckOptions, CrlChecker,
    CrlRevocationStatus, CrlVersion,
};
#[cfg(feature = "ring-backend")]
pub use crypto_backend::RingBackend;
pub use crypto_backend::CryptoBackend;
pub use error::{Error, Result};
pub use time::GeneralizedTime;
pub use x509::{ParsedDistributionPoint, SignatureAlgorithm};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::certificate::{CrlCertificate, NameNormalizer};
    pub use crate::crl::{CrlCheckOptions, CrlChecker, CrlRevocationStatus};
    pub use crate::crypto_backend::CryptoBackend;
    pub use crate::{CertificateChain, Error, ParsedCertificate, Result};
}
