// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! CRL checking against a validated certificate chain (RFC 5280 Section 6.3.3).
//!
//! [`CrlChecker::check`] runs the steps below and stops at the first one
//! that fails, answering [`CrlRevocationStatus::Unknown`]:
//!
//! 1. decode `CertificateList` and `TBSCertList`
//! 2. the outer and inner signature algorithms must be equivalent and known
//! 3. `thisUpdate`/`nextUpdate` must cover the verification time
//! 4. the distribution point must not be indirect or reason-partitioned
//! 5. the CRL issuer must equal the target's issuer
//! 6. the IssuingDistributionPoint must cover the target and no other
//!    critical CRL extension may be present
//! 7. a later certificate in the chain must have signed the CRL
//!
//! Only then is `revokedCertificates` consulted.

extern crate alloc;

use alloc::vec::Vec;

use super::parser::{
    parse_crl_certificate_list, parse_crl_tbs_cert_list, parse_issuing_distribution_point,
    ContainedCertsType, ParsedCrlCertificateList,
};
use super::status::{crl_status_for_cert, CrlRevocationStatus};
use crate::asn1::Input;
use crate::certificate::{CertificateVersion, CrlCertificate, DerNameNormalizer, NameNormalizer};
use crate::chain::CertificateChain;
#[cfg(feature = "ring-backend")]
use crate::crypto_backend::RingBackend;
use crate::crypto_backend::CryptoBackend;
use crate::error::{CrlError, Error, Result};
use crate::time::check_revocation_date_valid;
use crate::x509::{
    consume_extension, oids, parse_extensions, reject_critical_extensions, KeyUsageBit,
    ParsedDistributionPoint, SignatureAlgorithm,
};

// ============================================================================
// Check Options
// ============================================================================

/// Options for a CRL check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrlCheckOptions {
    /// Verification time, in seconds since the Unix epoch
    pub verify_time_epoch_seconds: i64,

    /// Maximum accepted age of `thisUpdate`, in seconds
    pub max_age_seconds: Option<i64>,
}

impl CrlCheckOptions {
    /// Check at `verify_time_epoch_seconds` without an age limit
    pub fn new(verify_time_epoch_seconds: i64) -> Self {
        Self {
            verify_time_epoch_seconds,
            max_age_seconds: None,
        }
    }

    /// Check at the current system time
    #[cfg(feature = "std")]
    pub fn at_current_time() -> Result<Self> {
        Ok(Self::new(crate::time::current_epoch_seconds()?))
    }

    /// Reject CRLs whose `thisUpdate` is more than `max_age_seconds` old
    pub fn with_max_age(mut self, max_age_seconds: i64) -> Self {
        self.max_age_seconds = Some(max_age_seconds);
        self
    }
}

// ============================================================================
// Checker
// ============================================================================

/// Decides revocation status from a CRL.
///
/// The checker owns the two collaborators it cannot implement itself: a
/// [`CryptoBackend`] for the CRL signature and a [`NameNormalizer`] for the
/// CRL issuer name.
#[derive(Debug, Clone)]
pub struct CrlChecker<B, N> {
    backend: B,
    normalizer: N,
}

#[cfg(feature = "ring-backend")]
impl CrlChecker<RingBackend, DerNameNormalizer> {
    /// Create a checker using `ring` and byte-exact name comparison
    pub fn new() -> Self {
        Self::from_parts(RingBackend, DerNameNormalizer)
    }
}

#[cfg(feature = "ring-backend")]
impl Default for CrlChecker<RingBackend, DerNameNormalizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CryptoBackend> CrlChecker<B, DerNameNormalizer> {
    /// Create a checker with a specific backend and byte-exact name comparison
    pub fn with_backend(backend: B) -> Self {
        Self::from_parts(backend, DerNameNormalizer)
    }
}

impl<B: CryptoBackend, N: NameNormalizer> CrlChecker<B, N> {
    pub fn from_parts(backend: B, normalizer: N) -> Self {
        Self {
            backend,
            normalizer,
        }
    }

    /// Replace the name normalizer
    pub fn with_normalizer<M: NameNormalizer>(self, normalizer: M) -> CrlChecker<B, M> {
        CrlChecker {
            backend: self.backend,
            normalizer,
        }
    }

    /// Check the certificate at `target_index` in `chain` against `raw_crl`.
    ///
    /// `distribution_point` is the certificate's CRL distribution point the
    /// CRL was fetched from. The chain must already be validated; the CRL
    /// issuer is searched for only among the certificates after the target.
    pub fn check<C: CrlCertificate>(
        &self,
        raw_crl: &[u8],
        chain: &CertificateChain<C>,
        target_index: usize,
        distribution_point: &ParsedDistributionPoint<'_>,
        options: &CrlCheckOptions,
    ) -> CrlRevocationStatus {
        let mut diagnostics = Vec::new();
        self.check_with_diagnostics(
            raw_crl,
            chain,
            target_index,
            distribution_point,
            options,
            &mut diagnostics,
        )
    }

    /// Like [`check`](Self::check), also recording why the answer is not
    /// `Good`/`Revoked`.
    ///
    /// `diagnostics` receives every rejected issuer candidate and, when
    /// the result is `Unknown`, the error that ended the check.
    pub fn check_with_diagnostics<C: CrlCertificate>(
        &self,
        raw_crl: &[u8],
        chain: &CertificateChain<C>,
        target_index: usize,
        distribution_point: &ParsedDistributionPoint<'_>,
        options: &CrlCheckOptions,
        diagnostics: &mut Vec<Error>,
    ) -> CrlRevocationStatus {
        match self.evaluate(
            raw_crl,
            chain,
            target_index,
            distribution_point,
            options,
            diagnostics,
        ) {
            Ok(status) => {
                log::debug!("CRL status for certificate {}: {}", target_index, status);
                status
            }
            Err(e) => {
                log::debug!("CRL unusable for certificate {}: {}", target_index, e);
                diagnostics.push(e);
                CrlRevocationStatus::Unknown
            }
        }
    }

    fn evaluate<C: CrlCertificate>(
        &self,
        raw_crl: &[u8],
        chain: &CertificateChain<C>,
        target_index: usize,
        distribution_point: &ParsedDistributionPoint<'_>,
        options: &CrlCheckOptions,
        diagnostics: &mut Vec<Error>,
    ) -> Result<CrlRevocationStatus> {
        let target = chain.get(target_index).ok_or_else(|| {
            Error::CrlError(CrlError::TargetIndexOutOfRange {
                index: target_index,
                len: chain.len(),
            })
        })?;

        let crl = parse_crl_certificate_list(Input::new(raw_crl))?;
        let tbs = parse_crl_tbs_cert_list(crl.tbs_cert_list_tlv)?;

        // RFC 5280 5.1.1.2: signatureAlgorithm must match TBSCertList.signature
        if !SignatureAlgorithm::is_equivalent(
            crl.signature_algorithm_tlv,
            tbs.signature_algorithm_tlv,
        ) {
            return Err(Error::CrlError(CrlError::AlgorithmMismatch));
        }
        let algorithm = SignatureAlgorithm::create(crl.signature_algorithm_tlv)?;

        check_revocation_date_valid(
            &tbs.this_update,
            tbs.next_update.as_ref(),
            options.verify_time_epoch_seconds,
            options.max_age_seconds,
        )?;

        if distribution_point.has_crl_issuer() {
            return Err(Error::CrlError(CrlError::IndirectCrlUnsupported));
        }
        if distribution_point.reasons.is_some() {
            return Err(Error::CrlError(CrlError::ReasonsUnsupported));
        }

        // 6.3.3 (b): the CRL issuer must be the certificate issuer
        let normalized_crl_issuer = self.normalizer.normalize_name(tbs.issuer_tlv)?;
        if normalized_crl_issuer.as_slice() != target.normalized_issuer() {
            return Err(Error::CrlError(CrlError::IssuerMismatch));
        }

        if let Some(extensions_tlv) = tbs.crl_extensions_tlv {
            check_crl_extensions(extensions_tlv, target, distribution_point)?;
        }

        // 6.3.3 (f), (g)
        self.find_crl_issuer(
            chain,
            target_index,
            &normalized_crl_issuer,
            &algorithm,
            &crl,
            diagnostics,
        )?;

        crl_status_for_cert(
            target.serial_number(),
            tbs.version,
            tbs.revoked_certificates_tlv,
        )
    }

    /// Find the first certificate after `target_index` that could have
    /// signed the CRL and whose key verifies its signature.
    fn find_crl_issuer<'c, C: CrlCertificate>(
        &self,
        chain: &'c CertificateChain<C>,
        target_index: usize,
        normalized_crl_issuer: &[u8],
        algorithm: &SignatureAlgorithm,
        crl: &ParsedCrlCertificateList<'_>,
        diagnostics: &mut Vec<Error>,
    ) -> Result<&'c C> {
        let first_index = target_index.saturating_add(1);

        for (index, candidate) in (first_index..).zip(chain.issuers_of(target_index)) {
            if candidate.normalized_subject() != normalized_crl_issuer {
                log::trace!("Certificate {} subject is not the CRL issuer", index);
                continue;
            }

            if let Some(key_usage) = candidate.key_usage() {
                if !KeyUsageBit::CrlSign.is_asserted_in(&key_usage) {
                    log::trace!("Certificate {} lacks {}", index, KeyUsageBit::CrlSign);
                    diagnostics.push(Error::CrlError(CrlError::CrlSignNotAsserted(index)));
                    continue;
                }
            }

            match self.backend.verify_signed_data(
                algorithm,
                crl.tbs_cert_list_tlv.as_bytes(),
                &crl.signature_value,
                candidate.spki_tlv().as_bytes(),
            ) {
                Ok(()) => {
                    log::trace!("CRL signed by certificate {}", index);
                    return Ok(candidate);
                }
                Err(e) => {
                    log::trace!("Certificate {} did not sign the CRL: {}", index, e);
                    diagnostics.push(e);
                }
            }
        }

        Err(Error::CrlError(CrlError::IssuerNotFound))
    }
}

/// Apply the CRL extensions to the target certificate.
///
/// The IssuingDistributionPoint, if present, must cover both the
/// distribution point the CRL came from and the kind of certificate being
/// checked. Any other critical extension is not understood.
fn check_crl_extensions<C: CrlCertificate>(
    extensions_tlv: Input<'_>,
    target: &C,
    distribution_point: &ParsedDistributionPoint<'_>,
) -> Result<()> {
    let mut extensions = parse_extensions(extensions_tlv)?;

    if let Some(extension) = consume_extension(&oids::ISSUING_DISTRIBUTION_POINT, &mut extensions)
    {
        let idp = parse_issuing_distribution_point(extension.value)?;

        // 6.3.3 (b)(2)(i)
        if let Some(idp_names) = &idp.distribution_point_fullname {
            let cert_names = distribution_point
                .distribution_point_fullname
                .as_ref()
                .ok_or(Error::CrlError(CrlError::DistributionPointMismatch))?;

            let matched = idp_names
                .uniform_resource_identifiers
                .iter()
                .any(|uri| cert_names.uniform_resource_identifiers.contains(uri));
            if !matched {
                return Err(Error::CrlError(CrlError::DistributionPointMismatch));
            }
        }

        // 6.3.3 (b)(2)(iii), (iv)
        let is_ca = target
            .basic_constraints()
            .map_or(false, |constraints| constraints.is_ca);
        match idp.only_contains_cert_type {
            ContainedCertsType::AnyCerts => {}
            ContainedCertsType::UserCerts => {
                if is_ca {
                    return Err(Error::CrlError(CrlError::ContainedCertsMismatch(
                        "user certificates only, target is a CA",
                    )));
                }
                // Without basicConstraints a v1/v2 certificate may still be a CA.
                if target.version() < CertificateVersion::V3 {
                    return Err(Error::CrlError(CrlError::ContainedCertsMismatch(
                        "user certificates only, target is pre-v3",
                    )));
                }
            }
            ContainedCertsType::CaCerts => {
                if !is_ca {
                    return Err(Error::CrlError(CrlError::ContainedCertsMismatch(
                        "CA certificates only, target is not a CA",
                    )));
                }
            }
        }
    }

    reject_critical_extensions(&extensions)
}

/// Check one certificate against a CRL with [`RingBackend`] and
/// [`DerNameNormalizer`].
///
/// # Examples
///
/// ```no_run
/// use x509_crl::{check_crl, CertificateChain, CrlRevocationStatus, ParsedCertificate};
///
/// # fn example(leaf: &[u8], ca: &[u8], crl: &[u8], now: i64) -> x509_crl::Result<()> {
/// let leaf = ParsedCertificate::from_der(leaf)?;
/// let points = leaf.crl_distribution_points()?;
/// let chain = CertificateChain::new(vec![leaf, ParsedCertificate::from_der(ca)?]);
///
/// for point in &points {
///     if check_crl(crl, &chain, 0, point, now, Some(7 * 24 * 3600)) == CrlRevocationStatus::Revoked {
///         println!("revoked");
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "ring-backend")]
pub fn check_crl<C: CrlCertificate>(
    raw_crl: &[u8],
    chain: &CertificateChain<C>,
    target_index: usize,
    distribution_point: &ParsedDistributionPoint<'_>,
    verify_time_epoch_seconds: i64,
    max_age_seconds: Option<i64>,
) -> CrlRevocationStatus {
    let options = CrlCheckOptions {
        verify_time_epoch_seconds,
        max_age_seconds,
    };
    CrlChecker::new().check(raw_crl, chain, target_index, distribution_point, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asn1::BitString;
    use crate::certificate::tests::{build_certificate, name};
    use crate::certificate::ParsedCertificate;
    use crate::error::{NameError, SignatureError, TimeError};
    use crate::test_util::*;
    use crate::x509::GeneralNames;

    /// 2024-01-15T00:00:00Z
    const VERIFY_TIME: i64 = 1_705_276_800;
    const LEAF_SERIAL: &[u8] = &[0x10];

    /// Accepts a signature whose bytes equal the signer's SPKI.
    struct StubBackend;

    impl CryptoBackend for StubBackend {
        fn verify_signed_data(
            &self,
            _algorithm: &SignatureAlgorithm,
            _signed_data: &[u8],
            signature: &BitString<'_>,
            spki_tlv: &[u8],
        ) -> Result<()> {
            if signature.bytes().as_bytes() == spki_tlv {
                Ok(())
            } else {
                Err(Error::signature_failed())
            }
        }
    }

    struct FailingNormalizer;

    impl NameNormalizer for FailingNormalizer {
        fn normalize_name(&self, _name_tlv: Input<'_>) -> Result<Vec<u8>> {
            Err(Error::NameError(NameError::InvalidEncoding("test".into())))
        }
    }

    fn spki(marker: u8) -> Vec<u8> {
        seq(&[
            &algorithm_identifier(&oids::ECPUBLICKEY, Some(&oid(&oids::ECDSA_P256))),
            &tlv(0x03, &[0x00, 0x04, marker]),
        ])
    }

    fn ca_constraints() -> Vec<u8> {
        extension(&oids::BASIC_CONSTRAINTS, true, &seq(&[&boolean(true)]))
    }

    fn leaf() -> Vec<u8> {
        build_certificate(Some(2), LEAF_SERIAL, b"Test CA", b"Leaf", &spki(1), &[])
    }

    fn ca(marker: u8, extensions: &[Vec<u8>]) -> Vec<u8> {
        build_certificate(Some(2), &[0x02], b"Root", b"Test CA", &spki(marker), extensions)
    }

    fn parse_chain(ders: &[Vec<u8>]) -> CertificateChain<ParsedCertificate<'_>> {
        ders.iter()
            .map(|der| ParsedCertificate::from_der(der).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    fn revoked_entry(serial: &[u8]) -> Vec<u8> {
        seq(&[&int(serial), &utc_time("240110000000Z")])
    }

    struct TestCrl {
        version: Option<u8>,
        inner_algorithm: Vec<u8>,
        outer_algorithm: Vec<u8>,
        issuer: Vec<u8>,
        this_update: Vec<u8>,
        next_update: Option<Vec<u8>>,
        revoked: Option<Vec<u8>>,
        extensions: Vec<Vec<u8>>,
    }

    impl TestCrl {
        fn new() -> Self {
            let algorithm = algorithm_identifier(&oids::ECDSA_WITH_SHA256, None);
            TestCrl {
                version: Some(1),
                inner_algorithm: algorithm.clone(),
                outer_algorithm: algorithm,
                issuer: name(b"Test CA"),
                this_update: utc_time("240101000000Z"),
                next_update: Some(utc_time("240201000000Z")),
                revoked: Some(seq(&[&revoked_entry(&[0x20])])),
                extensions: Vec::new(),
            }
        }

        fn revoking(mut self, serials: &[&[u8]]) -> Self {
            let entries: Vec<Vec<u8>> = serials.iter().map(|s| revoked_entry(s)).collect();
            let parts: Vec<&[u8]> = entries.iter().map(|e| e.as_slice()).collect();
            self.revoked = Some(seq(&parts));
            self
        }

        fn with_extension(mut self, extension: Vec<u8>) -> Self {
            self.extensions.push(extension);
            self
        }

        fn tbs(&self) -> Vec<u8> {
            let mut fields = Vec::new();
            if let Some(version) = self.version {
                fields.extend_from_slice(&int(&[version]));
            }
            fields.extend_from_slice(&self.inner_algorithm);
            fields.extend_from_slice(&self.issuer);
            fields.extend_from_slice(&self.this_update);
            if let Some(next_update) = &self.next_update {
                fields.extend_from_slice(next_update);
            }
            if let Some(revoked) = &self.revoked {
                fields.extend_from_slice(revoked);
            }
            if !self.extensions.is_empty() {
                let parts: Vec<&[u8]> = self.extensions.iter().map(|e| e.as_slice()).collect();
                fields.extend_from_slice(&explicit(0, &seq(&parts)));
            }
            tlv(0x30, &fields)
        }

        fn signed(&self, signature: &[u8]) -> Vec<u8> {
            let mut bits = alloc::vec![0x00];
            bits.extend_from_slice(signature);
            seq(&[&self.tbs(), &self.outer_algorithm, &tlv(0x03, &bits)])
        }
    }

    fn check(
        crl: &[u8],
        chain: &CertificateChain<ParsedCertificate<'_>>,
        target_index: usize,
        distribution_point: &ParsedDistributionPoint<'_>,
    ) -> (CrlRevocationStatus, Vec<Error>) {
        init_logging();
        let mut diagnostics = Vec::new();
        let status = CrlChecker::with_backend(StubBackend).check_with_diagnostics(
            crl,
            chain,
            target_index,
            distribution_point,
            &CrlCheckOptions::new(VERIFY_TIME),
            &mut diagnostics,
        );
        (status, diagnostics)
    }

    fn no_dp() -> ParsedDistributionPoint<'static> {
        ParsedDistributionPoint::default()
    }

    #[test]
    fn test_check_good() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));

        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Good);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_check_revoked() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new()
            .revoking(&[&[0x20], LEAF_SERIAL])
            .signed(&spki(2));

        assert_eq!(check(&crl, &chain, 0, &no_dp()).0, CrlRevocationStatus::Revoked);
    }

    #[test]
    fn test_check_without_revoked_certificates() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let mut crl = TestCrl::new();
        crl.revoked = None;
        crl.version = None;

        assert_eq!(
            check(&crl.signed(&spki(2)), &chain, 0, &no_dp()).0,
            CrlRevocationStatus::Good
        );
    }

    #[test]
    fn test_check_unverifiable_signature() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(9));

        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(
            diagnostics,
            [
                Error::SignatureError(SignatureError::VerificationFailed),
                Error::CrlError(CrlError::IssuerNotFound),
            ]
        );
    }

    #[test]
    fn test_check_later_candidate_verifies() {
        let ders = [leaf(), ca(3, &[]), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));

        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Good);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_check_candidate_subject_mismatch() {
        let other = build_certificate(Some(2), &[0x02], b"Root", b"Other CA", &spki(2), &[]);
        let ders = [leaf(), other];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));

        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::IssuerNotFound)]);
    }

    #[test]
    fn test_check_issuer_search_starts_after_target() {
        // The target itself carries the CRL issuer name and key.
        let target = build_certificate(Some(2), LEAF_SERIAL, b"Test CA", b"Test CA", &spki(2), &[]);
        let ders = [target];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));

        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::IssuerNotFound)]);
    }

    #[test]
    fn test_check_key_usage() {
        let crl = TestCrl::new().signed(&spki(2));

        let crl_sign = extension(&oids::KEY_USAGE, true, &tlv(0x03, &[0x01, 0x06]));
        let ders = [leaf(), ca(2, &[crl_sign])];
        assert_eq!(
            check(&crl, &parse_chain(&ders), 0, &no_dp()).0,
            CrlRevocationStatus::Good
        );

        let cert_sign_only = extension(&oids::KEY_USAGE, true, &tlv(0x03, &[0x02, 0x04]));
        let ders = [leaf(), ca(2, &[cert_sign_only])];
        let (status, diagnostics) = check(&crl, &parse_chain(&ders), 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(
            diagnostics,
            [
                Error::CrlError(CrlError::CrlSignNotAsserted(1)),
                Error::CrlError(CrlError::IssuerNotFound),
            ]
        );
    }

    #[test]
    fn test_check_issuer_mismatch() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let mut crl = TestCrl::new();
        crl.issuer = name(b"Another CA");

        let (status, diagnostics) = check(&crl.signed(&spki(2)), &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::IssuerMismatch)]);
    }

    #[test]
    fn test_check_algorithms() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);

        let mut crl = TestCrl::new();
        crl.outer_algorithm = algorithm_identifier(&oids::ECDSA_WITH_SHA384, None);
        let (status, diagnostics) = check(&crl.signed(&spki(2)), &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::AlgorithmMismatch)]);

        // Equivalent but unknown
        let mut crl = TestCrl::new();
        crl.outer_algorithm = algorithm_identifier(&oids::SHA256, None);
        crl.inner_algorithm = crl.outer_algorithm.clone();
        let (status, diagnostics) = check(&crl.signed(&spki(2)), &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert!(matches!(diagnostics[..], [Error::AlgorithmError(_)]));

        // sha1WithRSA and its OIW alias are equivalent
        let mut crl = TestCrl::new();
        crl.outer_algorithm = algorithm_identifier(&oids::SHA1_WITH_RSA, Some(&null()));
        crl.inner_algorithm = algorithm_identifier(&oids::SHA1_WITH_RSA_OIW, Some(&null()));
        assert_eq!(
            check(&crl.signed(&spki(2)), &chain, 0, &no_dp()).0,
            CrlRevocationStatus::Good
        );
    }

    #[test]
    fn test_check_dates() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));
        let checker = CrlChecker::with_backend(StubBackend);

        let at = |options: CrlCheckOptions| {
            let mut diagnostics = Vec::new();
            let status =
                checker.check_with_diagnostics(&crl, &chain, 0, &no_dp(), &options, &mut diagnostics);
            (status, diagnostics)
        };

        // 2023-12-31
        let (status, diagnostics) = at(CrlCheckOptions::new(1_703_980_800));
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::TimeError(TimeError::NotYetValid)]);

        // 2024-02-01, exactly nextUpdate
        let (status, diagnostics) = at(CrlCheckOptions::new(1_706_745_600));
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::TimeError(TimeError::Expired)]);

        let (status, diagnostics) = at(CrlCheckOptions::new(VERIFY_TIME).with_max_age(86_400));
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::TimeError(TimeError::TooOld)]);

        let (status, _) = at(CrlCheckOptions::new(VERIFY_TIME).with_max_age(30 * 86_400));
        assert_eq!(status, CrlRevocationStatus::Good);
    }

    #[test]
    fn test_check_unsupported_distribution_points() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));
        let crl_issuer = name(b"Test CA");
        let reasons = [0x07, 0x80];

        let indirect = ParsedDistributionPoint {
            crl_issuer: Some(Input::new(&crl_issuer)),
            ..Default::default()
        };
        let (status, diagnostics) = check(&crl, &chain, 0, &indirect);
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::IndirectCrlUnsupported)]);

        let partitioned = ParsedDistributionPoint {
            reasons: Some(Input::new(&reasons)),
            ..Default::default()
        };
        let (status, diagnostics) = check(&crl, &chain, 0, &partitioned);
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::ReasonsUnsupported)]);
    }

    fn idp(fields: &[&[u8]]) -> Vec<u8> {
        extension(&oids::ISSUING_DISTRIBUTION_POINT, true, &seq(fields))
    }

    fn idp_full_name(uri_value: &str) -> Vec<u8> {
        explicit(0, &explicit(0, &uri(uri_value)))
    }

    #[test]
    fn test_check_idp_full_name() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new()
            .with_extension(idp(&[&idp_full_name("http://crl.test/ca.crl")]))
            .signed(&spki(2));

        let names = concat(&[&uri("ldap://crl.test/ca"), &uri("http://crl.test/ca.crl")]);
        let matching = ParsedDistributionPoint {
            distribution_point_fullname: Some(GeneralNames::from_value(Input::new(&names)).unwrap()),
            ..Default::default()
        };
        assert_eq!(check(&crl, &chain, 0, &matching).0, CrlRevocationStatus::Good);

        let other_names = uri("http://crl.test/other.crl");
        let other = ParsedDistributionPoint {
            distribution_point_fullname: Some(
                GeneralNames::from_value(Input::new(&other_names)).unwrap(),
            ),
            ..Default::default()
        };
        let (status, diagnostics) = check(&crl, &chain, 0, &other);
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::DistributionPointMismatch)]);

        // Certificate distribution point without a fullName
        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(diagnostics, [Error::CrlError(CrlError::DistributionPointMismatch)]);
    }

    #[test]
    fn test_check_idp_user_certs() {
        let crl = TestCrl::new()
            .with_extension(idp(&[&tlv(0x81, &[0xff])]))
            .signed(&spki(2));

        let ders = [leaf(), ca(2, &[])];
        assert_eq!(
            check(&crl, &parse_chain(&ders), 0, &no_dp()).0,
            CrlRevocationStatus::Good
        );

        // CA target
        let sub_ca = build_certificate(
            Some(2),
            LEAF_SERIAL,
            b"Test CA",
            b"Sub CA",
            &spki(1),
            &[ca_constraints()],
        );
        let ders = [sub_ca, ca(2, &[])];
        let (status, diagnostics) = check(&crl, &parse_chain(&ders), 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert!(matches!(
            diagnostics[..],
            [Error::CrlError(CrlError::ContainedCertsMismatch(_))]
        ));

        // v1 target
        let v1_leaf = build_certificate(None, LEAF_SERIAL, b"Test CA", b"Leaf", &spki(1), &[]);
        let ders = [v1_leaf, ca(2, &[])];
        let (status, diagnostics) = check(&crl, &parse_chain(&ders), 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert!(matches!(
            diagnostics[..],
            [Error::CrlError(CrlError::ContainedCertsMismatch(_))]
        ));
    }

    #[test]
    fn test_check_idp_ca_certs() {
        let crl = TestCrl::new()
            .with_extension(idp(&[&tlv(0x82, &[0xff])]))
            .signed(&spki(2));

        let ders = [leaf(), ca(2, &[])];
        let (status, diagnostics) = check(&crl, &parse_chain(&ders), 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert!(matches!(
            diagnostics[..],
            [Error::CrlError(CrlError::ContainedCertsMismatch(_))]
        ));

        // Intermediate checked against a CRL from the root
        let root = build_certificate(Some(2), &[0x01], b"Root", b"Root", &spki(3), &[ca_constraints()]);
        let ders = [leaf(), ca(2, &[ca_constraints()]), root];
        let mut root_crl = TestCrl::new().with_extension(idp(&[&tlv(0x82, &[0xff])]));
        root_crl.issuer = name(b"Root");
        let root_crl = root_crl.revoking(&[&[0x02]]).signed(&spki(3));
        assert_eq!(
            check(&root_crl, &parse_chain(&ders), 1, &no_dp()).0,
            CrlRevocationStatus::Revoked
        );
    }

    #[test]
    fn test_check_malformed_idp() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new()
            .with_extension(idp(&[&tlv(0x84, &[0xff])]))
            .signed(&spki(2));

        assert_eq!(check(&crl, &chain, 0, &no_dp()).0, CrlRevocationStatus::Unknown);
    }

    #[test]
    fn test_check_crl_extensions() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);

        let crl = TestCrl::new()
            .with_extension(extension(&oids::CRL_NUMBER, false, &int(&[0x2a])))
            .signed(&spki(2));
        assert_eq!(check(&crl, &chain, 0, &no_dp()).0, CrlRevocationStatus::Good);

        // Delta CRLs are not supported
        let crl = TestCrl::new()
            .with_extension(extension(&oids::DELTA_CRL_INDICATOR, true, &int(&[0x29])))
            .signed(&spki(2));
        let (status, diagnostics) = check(&crl, &chain, 0, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert!(matches!(diagnostics[..], [Error::ExtensionError(_)]));
    }

    #[test]
    fn test_check_critical_entry_extension() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let critical = seq(&[&extension(
            &oids::CERTIFICATE_ISSUER,
            true,
            &seq(&[&uri("http://ca.test")]),
        )]);
        let mut crl = TestCrl::new();
        crl.revoked = Some(seq(&[
            &revoked_entry(LEAF_SERIAL),
            &seq(&[&int(&[0x30]), &utc_time("240110000000Z"), &critical]),
        ]));

        assert_eq!(
            check(&crl.signed(&spki(2)), &chain, 0, &no_dp()).0,
            CrlRevocationStatus::Unknown
        );
    }

    #[test]
    fn test_check_malformed_crl() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);

        let mut crl = TestCrl::new().signed(&spki(2));
        crl.push(0x00);
        assert_eq!(check(&crl, &chain, 0, &no_dp()).0, CrlRevocationStatus::Unknown);

        assert_eq!(check(&[], &chain, 0, &no_dp()).0, CrlRevocationStatus::Unknown);

        // Extensions without a version
        let mut crl = TestCrl::new().with_extension(extension(&oids::CRL_NUMBER, false, &int(&[1])));
        crl.version = None;
        assert_eq!(
            check(&crl.signed(&spki(2)), &chain, 0, &no_dp()).0,
            CrlRevocationStatus::Unknown
        );
    }

    #[test]
    fn test_check_target_index_out_of_range() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));

        let (status, diagnostics) = check(&crl, &chain, 2, &no_dp());
        assert_eq!(status, CrlRevocationStatus::Unknown);
        assert_eq!(
            diagnostics,
            [Error::CrlError(CrlError::TargetIndexOutOfRange { index: 2, len: 2 })]
        );
    }

    #[test]
    fn test_check_with_normalizer() {
        let ders = [leaf(), ca(2, &[])];
        let chain = parse_chain(&ders);
        let crl = TestCrl::new().signed(&spki(2));
        let checker = CrlChecker::with_backend(StubBackend).with_normalizer(FailingNormalizer);

        assert_eq!(
            checker.check(&crl, &chain, 0, &no_dp(), &CrlCheckOptions::new(VERIFY_TIME)),
            CrlRevocationStatus::Unknown
        );
    }

    #[test]
    fn test_check_options() {
        let options = CrlCheckOptions::new(42).with_max_age(7);
        assert_eq!(options.verify_time_epoch_seconds, 42);
        assert_eq!(options.max_age_seconds, Some(7));
        assert_eq!(CrlCheckOptions::new(42).max_age_seconds, None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_check_options_current_time() {
        let options = CrlCheckOptions::at_current_time().unwrap();
        assert!(options.verify_time_epoch_seconds > VERIFY_TIME);
    }

    #[cfg(feature = "ring-backend")]
    #[test]
    fn test_check_crl_ecdsa() {
        init_logging();
        let signer = TestSigner::new();
        let other = TestSigner::new();
        let crl_sign = extension(&oids::KEY_USAGE, true, &tlv(0x03, &[0x01, 0x06]));
        let issuer = build_certificate(
            Some(2),
            &[0x02],
            b"Root",
            b"Test CA",
            &signer.spki(),
            &[ca_constraints(), crl_sign],
        );
        let ders = [leaf(), issuer];
        let chain = parse_chain(&ders);

        let test_crl = TestCrl::new().revoking(&[LEAF_SERIAL]);
        let tbs = test_crl.tbs();
        let crl = test_crl.signed(&signer.sign(&tbs));
        assert_eq!(
            check_crl(&crl, &chain, 0, &no_dp(), VERIFY_TIME, None),
            CrlRevocationStatus::Revoked
        );
        assert_eq!(
            CrlChecker::new().check(&crl, &chain, 0, &no_dp(), &CrlCheckOptions::new(VERIFY_TIME)),
            CrlRevocationStatus::Revoked
        );

        let forged = test_crl.signed(&other.sign(&tbs));
        assert_eq!(
            check_crl(&forged, &chain, 0, &no_dp(), VERIFY_TIME, None),
            CrlRevocationStatus::Unknown
        );

        // Signature over a different TBSCertList
        let good_tbs = TestCrl::new().tbs();
        let swapped = test_crl.signed(&signer.sign(&good_tbs));
        assert_eq!(
            check_crl(&swapped, &chain, 0, &no_dp(), VERIFY_TIME, None),
            CrlRevocationStatus::Unknown
        );

        let good = TestCrl::new().signed(&signer.sign(&good_tbs));
        assert_eq!(
            check_crl(&good, &chain, 0, &no_dp(), VERIFY_TIME, Some(30 * 86_400)),
            CrlRevocationStatus::Good
        );
    }
}
