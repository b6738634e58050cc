// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate chain types.
//!
//! This module provides the `CertificateChain` type for representing an
//! already validated path, ordered from the target certificate towards the
//! trust anchor. Each certificate's issuer appears after it.

extern crate alloc;

use alloc::vec::Vec;

use crate::certificate::CrlCertificate;

// ============================================================================
// Certificate Chain
// ============================================================================

/// A certificate chain, ordered from leaf (end-entity) to root (trust anchor).
#[derive(Debug, Clone)]
pub struct CertificateChain<C> {
    certificates: Vec<C>,
}

impl<C: CrlCertificate> CertificateChain<C> {
    /// Create a new certificate chain
    pub fn new(certificates: Vec<C>) -> Self {
        Self { certificates }
    }

    /// Add a certificate at the trust anchor end
    pub fn push(&mut self, cert: C) {
        self.certificates.push(cert);
    }

    /// Get the leaf (end-entity) certificate
    pub fn leaf(&self) -> Option<&C> {
        self.certificates.first()
    }

    /// Get the root (trust anchor) certificate
    pub fn root(&self) -> Option<&C> {
        self.certificates.last()
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        self.certificates.get(index)
    }

    /// Get the chain length
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Get an iterator over the certificates
    pub fn iter(&self) -> core::slice::Iter<'_, C> {
        self.certificates.iter()
    }

    /// Certificates after `index`, i.e. the candidates for its issuer
    pub fn issuers_of(&self, index: usize) -> &[C] {
        self.certificates
            .get(index.saturating_add(1)..)
            .unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[C] {
        &self.certificates
    }
}

impl<C: CrlCertificate> From<Vec<C>> for CertificateChain<C> {
    fn from(certificates: Vec<C>) -> Self {
        Self::new(certificates)
    }
}
