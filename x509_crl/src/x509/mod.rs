// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 building blocks used by CRL processing.
//!
//! This module provides the pieces of RFC 5280 that the revocation checker
//! needs from certificates and CRLs: signature AlgorithmIdentifier
//! resolution, the generic extensions decoder, GeneralNames and CRL
//! Distribution Points, and the OIDs they are keyed on.

pub mod extensions;
pub mod general_names;
pub mod oids;
pub mod signature;

pub use extensions::{
    consume_extension, parse_basic_constraints, parse_extension, parse_extensions,
    parse_key_usage, reject_critical_extensions, ExtensionMap, KeyUsageBit,
    ParsedBasicConstraints, ParsedExtension,
};
pub use general_names::{parse_crl_distribution_points, GeneralNames, ParsedDistributionPoint};
pub use signature::{
    parse_algorithm_identifier, parse_hash_algorithm, DigestAlgorithm, RsaPssParameters,
    SignatureAlgorithm, SignatureAlgorithmId,
};
