// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate Revocation Lists (RFC 5280 Section 5 and 6.3).
//!
//! - [`parser`] decodes `CertificateList`, `TBSCertList` and the
//!   IssuingDistributionPoint extension without interpreting them
//! - [`get_crl_status_for_cert`] looks a serial number up in
//!   `revokedCertificates`
//! - [`CrlChecker`] runs the full check of one certificate in a validated
//!   chain and answers [`CrlRevocationStatus`]
//!
//! # Examples
//!
//! ```no_run
//! use x509_crl::crl::{crl_der_from_pem, CrlCheckOptions, CrlChecker};
//! use x509_crl::{CertificateChain, ParsedCertificate};
//!
//! # fn example(pem: &str, leaf: &[u8], ca: &[u8]) -> x509_crl::Result<()> {
//! let crl = crl_der_from_pem(pem)?;
//! let leaf = ParsedCertificate::from_der(leaf)?;
//! let points = leaf.crl_distribution_points()?;
//! let chain = CertificateChain::new(vec![leaf, ParsedCertificate::from_der(ca)?]);
//!
//! let options = CrlCheckOptions::at_current_time()?.with_max_age(7 * 24 * 3600);
//! let checker = CrlChecker::new();
//! for point in &points {
//!     println!("{}", checker.check(&crl, &chain, 0, point, &options));
//! }
//! # Ok(())
//! # }
//! ```

extern crate alloc;

pub mod parser;

mod checker;
mod status;

use alloc::vec::Vec;

use crate::error::Result;

#[cfg(feature = "ring-backend")]
pub use self::checker::check_crl;
pub use self::checker::{CrlCheckOptions, CrlChecker};
pub use self::parser::{
    parse_crl_certificate_list, parse_crl_tbs_cert_list, parse_issuing_distribution_point,
    ContainedCertsType, CrlVersion, ParsedCrlCertificateList, ParsedCrlTbsCertList,
    ParsedIssuingDistributionPoint,
};
pub use self::status::{get_crl_status_for_cert, CrlRevocationStatus};

/// PEM label of a CRL
pub const CRL_PEM_LABEL: &str = "X509 CRL";

/// Unwrap a PEM `X509 CRL` block into DER.
pub fn crl_der_from_pem(pem: &str) -> Result<Vec<u8>> {
    crate::pem::decode_pem(pem, CRL_PEM_LABEL)
}
