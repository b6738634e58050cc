// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! PEM (RFC 7468) unwrapping.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::{EncodingError, Error, Result};

/// Decode a single PEM block and return its DER contents.
///
/// The block label must equal `expected_label`, e.g. `"X509 CRL"`.
pub fn decode_pem(pem: &str, expected_label: &str) -> Result<Vec<u8>> {
    let mut decoder = pem_rfc7468::Decoder::new(pem.as_bytes())?;

    let label = decoder.type_label();
    if label != expected_label {
        log::debug!("PEM label {:?}, expected {:?}", label, expected_label);
        return Err(Error::EncodingError(EncodingError::InvalidPemLabel {
            expected: expected_label.to_string(),
            found: label.to_string(),
        }));
    }

    let mut der = alloc::vec![0u8; decoder.remaining_len()];
    let decoded_len = decoder.decode(&mut der)?.len();
    der.truncate(decoded_len);
    Ok(der)
}
