// Copyright (c) 2024, 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use x509_crl::asn1::{parse_bit_string, parse_bool, parse_uint64, Input};
use x509_crl::crl::{
    get_crl_status_for_cert, parse_crl_certificate_list, parse_crl_tbs_cert_list,
    parse_issuing_distribution_point, CrlVersion,
};
use x509_crl::time::{parse_generalized_time, parse_utc_time};
use x509_crl::x509::{parse_crl_distribution_points, parse_extensions, SignatureAlgorithm};
use x509_crl::ParsedCertificate;

fuzz_target!(|data: &[u8]| {
    let input = Input::new(data);

    // Primitive codecs
    let _ = parse_bool(input);
    let _ = parse_uint64(input);
    let _ = parse_bit_string(input);
    let _ = parse_utc_time(input);
    let _ = parse_generalized_time(input);

    // Structures
    let _ = SignatureAlgorithm::create(input);
    let _ = SignatureAlgorithm::is_equivalent(input, input);
    let _ = parse_extensions(input);
    let _ = parse_issuing_distribution_point(input);
    let _ = parse_crl_distribution_points(input);
    let _ = ParsedCertificate::from_der(data);

    // Revoked certificate lists with both versions
    for version in [CrlVersion::V1, CrlVersion::V2] {
        let _ = get_crl_status_for_cert(Input::new(&[0x01]), version, Some(input));
    }

    // Full CRL, feeding each parsed part onwards
    if let Ok(crl) = parse_crl_certificate_list(input) {
        let _ = SignatureAlgorithm::create(crl.signature_algorithm_tlv);
        if let Ok(tbs) = parse_crl_tbs_cert_list(crl.tbs_cert_list_tlv) {
            let _ = SignatureAlgorithm::is_equivalent(
                crl.signature_algorithm_tlv,
                tbs.signature_algorithm_tlv,
            );
            let _ = get_crl_status_for_cert(
                Input::new(&[0x01]),
                tbs.version,
                tbs.revoked_certificates_tlv,
            );
            if let Some(extensions_tlv) = tbs.crl_extensions_tlv {
                if let Ok(extensions) = parse_extensions(extensions_tlv) {
                    for extension in extensions.values() {
                        let _ = parse_issuing_distribution_point(extension.value);
                    }
                }
            }
        }
    }
});
